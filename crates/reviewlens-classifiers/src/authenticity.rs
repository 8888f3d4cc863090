//! Review authenticity classifier
//!
//! A deterministic rule engine over lexical and metadata signals. The
//! ruleset is one ordered table evaluated first-match-wins; the categories
//! are not mutually exclusive on raw signals, so the order is part of the
//! contract: bot, then paid, then malicious, then genuine.
//!
//! Every input maps to exactly one classification; the final table entry
//! matches unconditionally. New rules are table additions, not branches.

use serde::{Deserialize, Serialize};
use tracing::debug;

use reviewlens_core::{Classification, FraudContext, FraudRiskTier, Review};

use crate::lexicon::FeatureSet;

/// Length and adjustment thresholds for the authenticity rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Texts shorter than this read as automated
    #[serde(default = "default_bot_max_length")]
    pub bot_max_length: usize,

    /// Unverified texts shorter than this read as automated
    #[serde(default = "default_unverified_bot_max_length")]
    pub unverified_bot_max_length: usize,

    /// Five-star unverified texts shorter than this read as incentivized
    #[serde(default = "default_paid_short_max_length")]
    pub paid_short_max_length: usize,

    /// Balanced-length window for the high-confidence genuine rule
    #[serde(default = "default_genuine_min_length")]
    pub genuine_min_length: usize,
    #[serde(default = "default_genuine_max_length")]
    pub genuine_max_length: usize,

    /// Confidence subtracted on a High fraud-risk product
    #[serde(default = "default_high_tier_penalty")]
    pub high_tier_penalty: u8,

    /// Confidence added on a Low fraud-risk product
    #[serde(default = "default_low_tier_bonus")]
    pub low_tier_bonus: u8,
}

fn default_bot_max_length() -> usize {
    20
}

fn default_unverified_bot_max_length() -> usize {
    30
}

fn default_paid_short_max_length() -> usize {
    50
}

fn default_genuine_min_length() -> usize {
    50
}

fn default_genuine_max_length() -> usize {
    500
}

fn default_high_tier_penalty() -> u8 {
    15
}

fn default_low_tier_bonus() -> u8 {
    5
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            bot_max_length: default_bot_max_length(),
            unverified_bot_max_length: default_unverified_bot_max_length(),
            paid_short_max_length: default_paid_short_max_length(),
            genuine_min_length: default_genuine_min_length(),
            genuine_max_length: default_genuine_max_length(),
            high_tier_penalty: default_high_tier_penalty(),
            low_tier_bonus: default_low_tier_bonus(),
        }
    }
}

/// Everything one rule sees when it evaluates
pub struct RuleContext<'a> {
    pub review: &'a Review,
    pub features: &'a FeatureSet,
    pub config: &'a ClassifierConfig,
}

/// One entry in the ordered rule table
struct Rule {
    name: &'static str,
    classification: Classification,
    predicate: fn(&RuleContext) -> bool,
    confidence: fn(&RuleContext) -> u8,
    explanation: &'static str,
}

/// Verdict for one review
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationOutcome {
    /// Authenticity label
    pub classification: Classification,

    /// Confidence 0-100, already adjusted for product-level context
    pub confidence: u8,

    /// Names the signal(s) that drove the verdict
    pub explanation: String,

    /// Which table entry fired
    pub rule_name: &'static str,
}

/// The canonical authenticity ruleset
pub struct ReviewClassifier {
    config: ClassifierConfig,
    rules: Vec<Rule>,
}

impl ReviewClassifier {
    /// Create a classifier with default thresholds
    pub fn new() -> Self {
        Self::with_config(ClassifierConfig::default())
    }

    /// Create a classifier with custom thresholds
    pub fn with_config(config: ClassifierConfig) -> Self {
        Self {
            config,
            rules: build_rule_table(),
        }
    }

    /// Classify one review. Total: every input maps to exactly one label
    /// with confidence in 0..=100 and a non-empty explanation.
    ///
    /// When product-level `fraud_context` is supplied, the confidence of
    /// whichever rule fires shifts with the product's risk tier: the same
    /// review text is weaker evidence on a high-risk product.
    pub fn classify(
        &self,
        review: &Review,
        features: &FeatureSet,
        fraud_context: Option<&FraudContext>,
    ) -> ClassificationOutcome {
        let ctx = RuleContext {
            review,
            features,
            config: &self.config,
        };

        // The last rule matches unconditionally, so this loop always fires.
        for rule in &self.rules {
            if !(rule.predicate)(&ctx) {
                continue;
            }

            let base = (rule.confidence)(&ctx);
            let confidence = self.adjust_for_context(base, fraud_context);

            debug!(
                review = %review.id,
                rule = rule.name,
                label = rule.classification.label(),
                confidence,
                "classification rule fired"
            );

            return ClassificationOutcome {
                classification: rule.classification,
                confidence,
                explanation: rule.explanation.to_string(),
                rule_name: rule.name,
            };
        }

        unreachable!("rule table ends with an unconditional fallback");
    }

    fn adjust_for_context(&self, base: u8, fraud_context: Option<&FraudContext>) -> u8 {
        let shift: i16 = match fraud_context.map(|ctx| ctx.fraud_risk_tier) {
            Some(FraudRiskTier::High) => -(self.config.high_tier_penalty as i16),
            Some(FraudRiskTier::Low) => self.config.low_tier_bonus as i16,
            Some(FraudRiskTier::Medium) | None => 0,
        };
        (base as i16 + shift).clamp(0, 100) as u8
    }
}

impl Default for ReviewClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// The ordered rule table. First match wins.
fn build_rule_table() -> Vec<Rule> {
    vec![
        // Bot rules
        Rule {
            name: "bot_short_text",
            classification: Classification::Bot,
            predicate: |ctx| ctx.features.length < ctx.config.bot_max_length,
            confidence: |ctx| {
                // Unverified plus short is the strongest automation signal.
                if !ctx.review.is_verified_purchase
                    && ctx.features.length < ctx.config.unverified_bot_max_length
                {
                    92
                } else {
                    85
                }
            },
            explanation: "Very short or generic content typical of automated reviews.",
        },
        Rule {
            name: "bot_generic_praise",
            classification: Classification::Bot,
            predicate: |ctx| ctx.features.is_generic_praise,
            confidence: |_| 88,
            explanation: "Single-word superlative with no product detail, typical of automated reviews.",
        },
        Rule {
            name: "bot_unverified_short",
            classification: Classification::Bot,
            predicate: |ctx| {
                !ctx.review.is_verified_purchase
                    && ctx.features.length < ctx.config.unverified_bot_max_length
            },
            confidence: |_| 92,
            explanation: "Unverified purchase with suspiciously short review text.",
        },
        // Paid rules
        Rule {
            name: "paid_promotional_language",
            classification: Classification::Paid,
            predicate: |ctx| ctx.features.has_promotional_phrase,
            confidence: |_| 90,
            explanation: "Contains promotional language patterns typical of sponsored reviews.",
        },
        Rule {
            name: "paid_five_star_enthusiasm",
            classification: Classification::Paid,
            predicate: |ctx| ctx.features.has_strong_enthusiasm && ctx.review.rating == 5,
            confidence: |_| 82,
            explanation:
                "Contains language patterns and enthusiasm levels typical of incentivized reviews.",
        },
        Rule {
            name: "paid_unverified_five_star",
            classification: Classification::Paid,
            predicate: |ctx| {
                ctx.review.rating == 5
                    && !ctx.review.is_verified_purchase
                    && ctx.features.length < ctx.config.paid_short_max_length
            },
            confidence: |_| 78,
            explanation:
                "Short five-star praise from an unverified purchase, consistent with incentivized reviews.",
        },
        // Malicious rules
        Rule {
            name: "malicious_competitor_steering",
            classification: Classification::Malicious,
            predicate: |ctx| ctx.review.rating == 1 && ctx.features.has_competitor_steering,
            confidence: |_| 88,
            explanation: "Competitor promotion in a one-star review suggests malicious intent.",
        },
        Rule {
            name: "malicious_scam_language",
            classification: Classification::Malicious,
            predicate: |ctx| ctx.review.rating == 1 && ctx.features.has_scam_indicator,
            confidence: |_| 80,
            explanation:
                "Excessively negative scam accusations in a one-star review suggest malicious intent.",
        },
        // Genuine rules
        Rule {
            name: "genuine_balanced",
            classification: Classification::Genuine,
            predicate: |ctx| {
                ctx.features.length >= ctx.config.genuine_min_length
                    && ctx.features.length <= ctx.config.genuine_max_length
                    && ctx.features.has_contrast_marker
            },
            confidence: |ctx| {
                let mut confidence: u8 = 88;
                if ctx.review.is_verified_purchase {
                    confidence += 4;
                }
                if ctx.review.has_image || ctx.review.has_video {
                    confidence += 3;
                }
                confidence.min(95)
            },
            explanation:
                "Balanced language with specific details and nuanced opinions typical of authentic reviews.",
        },
        Rule {
            name: "genuine_by_elimination",
            classification: Classification::Genuine,
            predicate: |_| true,
            confidence: |_| 65,
            explanation: "Review appears authentic based on length and content patterns.",
        },
    ]
}
