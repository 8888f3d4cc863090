//! Sentiment and emotion analysis
//!
//! Per-review scoring is pure arithmetic over the rating and the lexical
//! features: a piecewise-linear base from the star rating, nudged by
//! affect keywords and dampened by hedging language. Batch aggregation
//! reduces a classified batch to a label distribution and emotion means.

use reviewlens_core::{ClassifiedReview, EmotionScores, Sentiment, SentimentDistribution};

use crate::lexicon::FeatureSet;

/// Keyword nudge applied per positive/negative affect hit
const KEYWORD_ADJUST: f32 = 0.1;

/// Multiplicative dampening applied per hedging hit
const HEDGING_DAMPEN: f32 = 0.8;

/// Scores above this are positive, below its negation negative
const LABEL_THRESHOLD: f32 = 0.2;

/// Sentiment verdict for one review
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentOutcome {
    /// Single-label polarity
    pub sentiment: Sentiment,

    /// Score in [-1, 1]
    pub score: f32,

    /// Independent emotion signals
    pub emotions: EmotionScores,
}

/// Batch-level sentiment aggregates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchSentiment {
    /// Percentage per label, each rounded independently. The sum may be
    /// 99 or 101; consumers must not assume exactly 100.
    pub distribution: SentimentDistribution,

    /// Arithmetic mean of each emotion across the batch
    pub emotion_means: EmotionScores,
}

/// Deterministic rating+lexicon sentiment scorer
pub struct SentimentAnalyzer;

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Score one review from its rating and lexical features.
    pub fn score(&self, rating: u8, features: &FeatureSet) -> SentimentOutcome {
        let base = rating_base(rating);

        let adjusted = base + KEYWORD_ADJUST * features.positive_hits as f32
            - KEYWORD_ADJUST * features.negative_hits as f32;

        // Hedging language pulls the score toward neutral without
        // flipping its sign.
        let dampened = adjusted * HEDGING_DAMPEN.powi(features.hedging_hits as i32);

        let score = dampened.clamp(-1.0, 1.0);

        let sentiment = if score > LABEL_THRESHOLD {
            Sentiment::Positive
        } else if score < -LABEL_THRESHOLD {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        };

        SentimentOutcome {
            sentiment,
            score,
            emotions: emotion_scores(features),
        }
    }

    /// Reduce a classified batch to its sentiment distribution and
    /// emotion means. An empty batch yields all zeros; the engine rejects
    /// empty input before aggregation runs.
    pub fn aggregate(&self, reviews: &[ClassifiedReview]) -> BatchSentiment {
        if reviews.is_empty() {
            return BatchSentiment {
                distribution: SentimentDistribution::default(),
                emotion_means: EmotionScores::default(),
            };
        }

        let total = reviews.len() as f32;

        let count_of = |label: Sentiment| {
            reviews.iter().filter(|r| r.sentiment == label).count() as f32
        };

        // Independent per-bucket rounding; the sum is allowed to miss 100.
        let percent = |count: f32| (count / total * 100.0).round() as u8;

        let distribution = SentimentDistribution {
            positive: percent(count_of(Sentiment::Positive)),
            neutral: percent(count_of(Sentiment::Neutral)),
            negative: percent(count_of(Sentiment::Negative)),
        };

        let emotion_means = EmotionScores {
            joy: reviews.iter().map(|r| r.emotion_scores.joy).sum::<f32>() / total,
            anger: reviews.iter().map(|r| r.emotion_scores.anger).sum::<f32>() / total,
            sadness: reviews.iter().map(|r| r.emotion_scores.sadness).sum::<f32>() / total,
            surprise: reviews.iter().map(|r| r.emotion_scores.surprise).sum::<f32>() / total,
        };

        BatchSentiment {
            distribution,
            emotion_means,
        }
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Piecewise-linear map from star rating to the base score:
/// 5 -> 1.0, 4 -> 0.6, 3 -> 0.0, 2 -> -0.6, 1 -> -1.0.
fn rating_base(rating: u8) -> f32 {
    match rating {
        r if r >= 4 => 0.6 + (r - 4) as f32 * 0.4,
        r if r <= 2 => -0.6 - (2 - r) as f32 * 0.4,
        _ => 0.0,
    }
}

/// Keyword-triggered emotion values: a low baseline per emotion, raised
/// to the triggered value when its keyword set matches. Emotions fire
/// independently.
fn emotion_scores(features: &FeatureSet) -> EmotionScores {
    EmotionScores {
        joy: if features.joy_triggered { 0.8 } else { 0.2 },
        anger: if features.anger_triggered { 0.7 } else { 0.1 },
        sadness: if features.sadness_triggered { 0.6 } else { 0.1 },
        surprise: if features.surprise_triggered { 0.6 } else { 0.1 },
    }
}
