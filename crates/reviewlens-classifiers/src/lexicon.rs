//! Lexical feature extraction
//!
//! Turns free-text review content into the boolean/numeric signals the
//! authenticity rules and the sentiment analyzer consume. All word-set
//! membership tests are case-insensitive substring matches over curated
//! lexicons; nothing here is learned or statistical.

use aho_corasick::AhoCorasick;
use reviewlens_core::Result;

/// Lexical signals extracted from one review text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureSet {
    /// Character count of the raw text
    pub length: usize,

    /// Matches against the positive-affect word list
    pub positive_hits: usize,

    /// Matches against the negative-affect word list
    pub negative_hits: usize,

    /// Matches against the neutral/hedging word list
    pub hedging_hits: usize,

    /// Text contains a promotional phrase
    pub has_promotional_phrase: bool,

    /// Text steers the reader toward a competitor
    pub has_competitor_steering: bool,

    /// Text contains scam-accusation language
    pub has_scam_indicator: bool,

    /// Text contains "but"/"however"/"although"
    pub has_contrast_marker: bool,

    /// The whole text is a single one-word superlative
    pub is_generic_praise: bool,

    /// Text contains strong-enthusiasm vocabulary
    pub has_strong_enthusiasm: bool,

    /// Emotion trigger hits; independent of each other
    pub joy_triggered: bool,
    pub anger_triggered: bool,
    pub sadness_triggered: bool,
    pub surprise_triggered: bool,
}

/// One-word superlatives that, standing alone, read as automated praise
const GENERIC_PRAISE_WORDS: &[&str] = &["good", "great", "amazing", "excellent", "perfect"];

/// Case-insensitive lexicon matcher over the curated word lists
pub struct FeatureExtractor {
    positive: AhoCorasick,
    negative: AhoCorasick,
    hedging: AhoCorasick,
    promotional: AhoCorasick,
    competitor: AhoCorasick,
    scam: AhoCorasick,
    contrast: AhoCorasick,
    enthusiasm: AhoCorasick,
    joy: AhoCorasick,
    anger: AhoCorasick,
    sadness: AhoCorasick,
    surprise: AhoCorasick,
}

impl FeatureExtractor {
    /// Build the matchers for all word lists
    pub fn new() -> Result<Self> {
        let positive = [
            "good",
            "great",
            "excellent",
            "love",
            "amazing",
            "wonderful",
            "happy",
            "fantastic",
            "awesome",
            "best",
            "perfect",
            "comfortable",
        ];
        let negative = [
            "bad",
            "terrible",
            "awful",
            "hate",
            "horrible",
            "worst",
            "sad",
            "angry",
            "disappointed",
            "poor",
            "broken",
            "useless",
        ];
        let hedging = [
            "okay",
            "decent",
            "average",
            "somewhat",
            "fairly",
            "mostly",
            "adequate",
            "reasonable",
        ];
        let promotional = [
            "best product ever",
            "buy now",
            "must buy",
            "must have",
            "life changing",
            "received this for free",
            "received a discount",
            "don't miss out",
        ];
        let competitor = [
            "competitor",
            "look elsewhere",
            "another brand",
            "other brands",
        ];
        let scam = [
            "waste of money",
            "scam",
            "fake",
            "fraud",
            "counterfeit",
            "rip off",
            "rip-off",
        ];
        let contrast = ["but", "however", "although"];
        let enthusiasm = ["amazing", "incredible", "outstanding", "phenomenal"];
        let joy = ["love", "happy", "thrilled", "delighted", "excited", "enjoy"];
        let anger = ["angry", "furious", "infuriating", "outraged", "fed up"];
        let sadness = ["disappointed", "sad", "regret", "let down", "unhappy"];
        let surprise = [
            "surprised",
            "unexpected",
            "can't believe",
            "cant believe",
            "wow",
            "shocked",
        ];

        Ok(Self {
            positive: Self::build_matcher(&positive)?,
            negative: Self::build_matcher(&negative)?,
            hedging: Self::build_matcher(&hedging)?,
            promotional: Self::build_matcher(&promotional)?,
            competitor: Self::build_matcher(&competitor)?,
            scam: Self::build_matcher(&scam)?,
            contrast: Self::build_matcher(&contrast)?,
            enthusiasm: Self::build_matcher(&enthusiasm)?,
            joy: Self::build_matcher(&joy)?,
            anger: Self::build_matcher(&anger)?,
            sadness: Self::build_matcher(&sadness)?,
            surprise: Self::build_matcher(&surprise)?,
        })
    }

    /// Build an Aho-Corasick matcher from a word list
    fn build_matcher(patterns: &[&str]) -> Result<AhoCorasick> {
        AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(patterns)
            .map_err(|e| {
                reviewlens_core::Error::classifier(format!(
                    "failed to build lexicon matcher: {e}"
                ))
            })
    }

    /// Extract all lexical signals from a review text. Empty text yields
    /// zeroed features.
    pub fn extract(&self, text: &str) -> FeatureSet {
        if text.is_empty() {
            return FeatureSet::default();
        }

        let lowered = text.to_lowercase();

        // "highly recommend" is promotional only alongside superlative
        // enthusiasm; on its own it is ordinary reviewer language.
        let promotional = self.promotional.is_match(text)
            || (lowered.contains("highly recommend") && lowered.contains("amazing"));

        // "buy X instead" steering shows up as the word pair rather than a
        // fixed phrase.
        let competitor =
            self.competitor.is_match(text) || (lowered.contains("buy") && lowered.contains("instead"));

        FeatureSet {
            length: text.chars().count(),
            positive_hits: self.positive.find_iter(text).count(),
            negative_hits: self.negative.find_iter(text).count(),
            hedging_hits: self.hedging.find_iter(text).count(),
            has_promotional_phrase: promotional,
            has_competitor_steering: competitor,
            has_scam_indicator: self.scam.is_match(text),
            has_contrast_marker: self.contrast.is_match(text),
            is_generic_praise: is_generic_praise(text),
            has_strong_enthusiasm: self.enthusiasm.is_match(text),
            joy_triggered: self.joy.is_match(text),
            anger_triggered: self.anger.is_match(text),
            sadness_triggered: self.sadness.is_match(text),
            surprise_triggered: self.surprise.is_match(text),
        }
    }
}

/// True when the whole trimmed text is one superlative word, optionally
/// followed by punctuation ("Amazing!!!", "great.").
fn is_generic_praise(text: &str) -> bool {
    let stripped = text
        .trim()
        .trim_end_matches(['.', '!', '?'])
        .to_lowercase();
    GENERIC_PRAISE_WORDS.contains(&stripped.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_yields_zeroed_features() {
        let extractor = FeatureExtractor::new().unwrap();
        let features = extractor.extract("");
        assert_eq!(features, FeatureSet::default());
        assert_eq!(features.length, 0);
    }

    #[test]
    fn test_length_is_character_count() {
        let extractor = FeatureExtractor::new().unwrap();
        assert_eq!(extractor.extract("12345").length, 5);
    }

    #[test]
    fn test_contrast_marker() {
        let extractor = FeatureExtractor::new().unwrap();
        assert!(extractor.extract("Nice fit, but the color faded").has_contrast_marker);
        assert!(extractor.extract("Works fine. However, shipping was slow").has_contrast_marker);
        assert!(!extractor.extract("Nice fit and color").has_contrast_marker);
    }

    #[test]
    fn test_generic_praise() {
        let extractor = FeatureExtractor::new().unwrap();
        assert!(extractor.extract("Amazing!!!").is_generic_praise);
        assert!(extractor.extract("great.").is_generic_praise);
        assert!(!extractor.extract("Amazing value for the price").is_generic_praise);
    }

    #[test]
    fn test_promotional_phrase() {
        let extractor = FeatureExtractor::new().unwrap();
        assert!(extractor.extract("Best product ever! Buy now!").has_promotional_phrase);
        assert!(
            extractor
                .extract("Highly recommend, amazing quality")
                .has_promotional_phrase
        );
        assert!(!extractor.extract("Highly recommend for small kitchens").has_promotional_phrase);
    }

    #[test]
    fn test_competitor_steering() {
        let extractor = FeatureExtractor::new().unwrap();
        assert!(
            extractor
                .extract("Terrible, buy from competitor XYZ instead")
                .has_competitor_steering
        );
        assert!(!extractor.extract("Went with this instead of renting").has_competitor_steering);
        assert!(!extractor.extract("Terrible product").has_competitor_steering);
    }

    #[test]
    fn test_scam_indicator() {
        let extractor = FeatureExtractor::new().unwrap();
        assert!(extractor.extract("Total waste of money, this is a SCAM").has_scam_indicator);
        assert!(!extractor.extract("Worth every penny").has_scam_indicator);
    }

    #[test]
    fn test_affect_counts() {
        let extractor = FeatureExtractor::new().unwrap();
        let features = extractor.extract("Great sound, love the fit, battery is poor");
        assert_eq!(features.positive_hits, 2);
        assert_eq!(features.negative_hits, 1);
    }

    #[test]
    fn test_emotion_triggers_are_independent() {
        let extractor = FeatureExtractor::new().unwrap();
        let features = extractor.extract("I was surprised how much I love it");
        assert!(features.joy_triggered);
        assert!(features.surprise_triggered);
        assert!(!features.anger_triggered);
        assert!(!features.sadness_triggered);
    }
}
