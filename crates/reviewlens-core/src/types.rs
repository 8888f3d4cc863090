//! Core types for ReviewLens

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single customer review, normalized by the caller.
///
/// Field names serialize in camelCase to match the normalized JSON the
/// upstream acquisition layer produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Opaque id, unique within a batch
    pub id: String,

    /// Free-form review text; may be empty
    #[serde(default)]
    pub text: String,

    /// Star rating 1-5. An absent rating normalizes to the neutral
    /// midpoint (3), never the maximum.
    #[serde(default = "default_rating")]
    pub rating: u8,

    /// Calendar date string, passed through untouched
    #[serde(default)]
    pub date: String,

    /// Reviewer display name
    #[serde(default)]
    pub author: String,

    /// Reviewer-confirmed transactional provenance flag
    #[serde(default)]
    pub is_verified_purchase: bool,

    /// Review includes an image attachment
    #[serde(default)]
    pub has_image: bool,

    /// Review includes a video attachment
    #[serde(default)]
    pub has_video: bool,
}

fn default_rating() -> u8 {
    3
}

impl Review {
    /// Create a new review with the fields that drive classification
    pub fn new(id: impl Into<String>, text: impl Into<String>, rating: u8) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            rating,
            date: String::new(),
            author: String::new(),
            is_verified_purchase: false,
            has_image: false,
            has_video: false,
        }
    }

    /// Set the verified-purchase flag
    pub fn verified(mut self, verified: bool) -> Self {
        self.is_verified_purchase = verified;
        self
    }

    /// Set the media flags
    pub fn with_media(mut self, has_image: bool, has_video: bool) -> Self {
        self.has_image = has_image;
        self.has_video = has_video;
        self
    }

    /// Reject ratings outside 1..=5. Out-of-range values are an upstream
    /// data-quality bug and must not be silently clamped.
    pub fn validate_rating(&self) -> Result<()> {
        if (1..=5).contains(&self.rating) {
            Ok(())
        } else {
            Err(Error::invalid_rating(self.id.clone(), self.rating))
        }
    }
}

/// The four mutually exclusive review authenticity labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Genuine,
    Paid,
    Bot,
    Malicious,
}

impl Classification {
    /// Get a human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Genuine => "genuine",
            Self::Paid => "paid",
            Self::Bot => "bot",
            Self::Malicious => "malicious",
        }
    }
}

/// Single-label sentiment polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Get a human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

/// Per-review emotion score vector in [0, 1]. Emotions are independent
/// signals, not mutually exclusive like the sentiment label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionScores {
    pub joy: f32,
    pub anger: f32,
    pub sadness: f32,
    pub surprise: f32,
}

/// A review plus everything the classification pass derived from it.
/// Created once per input review; immutable afterward. Presentation-layer
/// confidence adjustments are display values, never written back here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedReview {
    /// The input review, passed through
    #[serde(flatten)]
    pub review: Review,

    /// Authenticity verdict
    pub classification: Classification,

    /// Confidence in the verdict (0-100)
    pub confidence: u8,

    /// Names the specific signal(s) that drove the verdict
    pub explanation: String,

    /// Sentiment polarity label
    pub sentiment: Sentiment,

    /// Sentiment score in [-1, 1]
    pub sentiment_score: f32,

    /// Independent emotion signals
    pub emotion_scores: EmotionScores,
}

/// Label counts over one classified batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationCounts {
    pub genuine: usize,
    pub paid: usize,
    pub bot: usize,
    pub malicious: usize,
}

impl ClassificationCounts {
    /// Tally labels from a classified batch
    pub fn tally<'a>(labels: impl IntoIterator<Item = &'a Classification>) -> Self {
        let mut counts = Self::default();
        for label in labels {
            match label {
                Classification::Genuine => counts.genuine += 1,
                Classification::Paid => counts.paid += 1,
                Classification::Bot => counts.bot += 1,
                Classification::Malicious => counts.malicious += 1,
            }
        }
        counts
    }

    /// Total reviews counted
    pub fn total(&self) -> usize {
        self.genuine + self.paid + self.bot + self.malicious
    }

    /// Reviews with a non-genuine label
    pub fn suspicious(&self) -> usize {
        self.paid + self.bot + self.malicious
    }

    /// Fraction of genuine reviews, 0.0 for an empty tally
    pub fn genuine_rate(&self) -> f64 {
        if self.total() == 0 {
            0.0
        } else {
            self.genuine as f64 / self.total() as f64
        }
    }

    /// Fraction of paid reviews, 0.0 for an empty tally
    pub fn paid_rate(&self) -> f64 {
        if self.total() == 0 {
            0.0
        } else {
            self.paid as f64 / self.total() as f64
        }
    }
}

/// One marketplace price check. Immutable, one per marketplace.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    /// Marketplace display name, e.g. "Amazon US"
    pub marketplace_name: String,

    /// Listed price; meaningful only when `success` is true
    #[serde(default)]
    pub price: f64,

    /// Whether this marketplace is an Amazon storefront
    #[serde(default)]
    pub is_amazon: bool,

    /// Where the quote was taken from
    #[serde(default)]
    pub source_url: String,

    /// Whether the marketplace check succeeded
    #[serde(default = "default_true")]
    pub success: bool,
}

fn default_true() -> bool {
    true
}

impl PriceQuote {
    /// Create a successful quote
    pub fn new(marketplace_name: impl Into<String>, price: f64) -> Self {
        Self {
            marketplace_name: marketplace_name.into(),
            price,
            is_amazon: false,
            source_url: String::new(),
            success: true,
        }
    }

    /// Mark this quote as coming from an Amazon storefront
    pub fn amazon(mut self) -> Self {
        self.is_amazon = true;
        self
    }

    /// Create a failed marketplace check
    pub fn failed(marketplace_name: impl Into<String>) -> Self {
        Self {
            marketplace_name: marketplace_name.into(),
            price: 0.0,
            is_amazon: false,
            source_url: String::new(),
            success: false,
        }
    }
}

/// Coarse Low/Medium/High product trustworthiness tier.
///
/// Ordering is by increasing risk: `Low < Medium < High`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FraudRiskTier {
    Low,
    Medium,
    High,
}

impl FraudRiskTier {
    /// Get a human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Which suspicious-pricing threshold tripped. The thresholds are
/// cumulative: any one sets the flag, and the analysis records every one
/// that fired so the verdict stays explainable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingSignal {
    /// Cross-marketplace price variation above the comprehensive threshold
    CrossMarketVariation,
    /// Variation across Amazon storefronts alone above its threshold
    AmazonVariation,
    /// Minimum price far below the marketplace average
    BelowMarketPrice,
}

impl PricingSignal {
    /// Get a human-readable description
    pub fn describe(&self) -> &'static str {
        match self {
            Self::CrossMarketVariation => "large price variation across marketplaces",
            Self::AmazonVariation => "inconsistent pricing across Amazon storefronts",
            Self::BelowMarketPrice => "a listing far below the average market price",
        }
    }
}

/// Product-level fraud-risk context derived once per analysis run from the
/// full set of price quotes. Read-only thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FraudContext {
    /// Combined pricing + review-quality risk tier
    pub fraud_risk_tier: FraudRiskTier,

    /// Mean price over successful quotes; 0.0 with no successful quotes
    pub average_price: f64,

    /// Lowest successful quote
    pub min_price: f64,

    /// Highest successful quote
    pub max_price: f64,

    /// (max - min) / average * 100 over successful quotes
    pub price_variation_pct: f64,

    /// Whether any suspicious-pricing threshold tripped
    pub suspicious_pricing: bool,

    /// Which thresholds tripped, in check order
    pub pricing_signals: Vec<PricingSignal>,

    /// Count of successful marketplace checks
    pub marketplaces_checked: usize,

    /// Whether cross-marketplace comparison actually ran (at least two
    /// successful quotes)
    pub cross_marketplace_analysis: bool,
}

/// Percentage breakdown of a batch across sentiment labels.
///
/// Buckets are rounded independently, so the sum may land at 99 or 101.
/// Preserved behavior; consumers must not assume an exact 100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentDistribution {
    pub positive: u8,
    pub neutral: u8,
    pub negative: u8,
}

/// Identity of the product under analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductMetadata {
    /// Amazon Standard Identification Number, the batch key. May arrive
    /// empty when the caller only knows the product URL; normalization
    /// derives it before analysis.
    #[serde(default)]
    pub asin: String,

    /// Product display name
    #[serde(default)]
    pub product_name: String,

    /// Product page URL, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

impl ProductMetadata {
    /// Create metadata for a product
    pub fn new(asin: impl Into<String>, product_name: impl Into<String>) -> Self {
        Self {
            asin: asin.into(),
            product_name: product_name.into(),
            source_url: None,
        }
    }
}

/// Normalized analysis input. The caller fetches and normalizes raw
/// provider data into this shape before invoking the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    /// Product identity, passed through to the result
    pub product: ProductMetadata,

    /// The review batch to classify
    pub reviews: Vec<Review>,

    /// Marketplace price checks for the same product
    #[serde(default)]
    pub price_quotes: Vec<PriceQuote>,
}

/// Free-text summaries attached by the optional enrichment seam
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummaries {
    /// What customers love most
    pub summary_positive: String,

    /// Main complaints and issues
    pub summary_negative: String,

    /// Balanced overall impression
    pub summary_overall: String,

    /// Buying recommendation
    pub recommendation: String,
}

impl ReviewSummaries {
    /// Fixed generic text substituted when summary generation fails or no
    /// generator is configured.
    pub fn fallback() -> Self {
        Self {
            summary_positive: "Most customers appreciate the product's quality and value."
                .to_string(),
            summary_negative: "Some users reported minor issues with delivery or packaging."
                .to_string(),
            summary_overall:
                "Overall, this product receives mixed to positive feedback from customers."
                    .to_string(),
            recommendation:
                "Consider your specific needs and read recent reviews before purchasing."
                    .to_string(),
        }
    }
}

impl Default for ReviewSummaries {
    fn default() -> Self {
        Self::fallback()
    }
}

/// Top-level analysis snapshot. Created once per analysis invocation and
/// never merged with earlier snapshots; a re-run produces a new one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Product identity, passed through from the request
    pub product: ProductMetadata,

    /// Number of reviews analyzed; always equals `classified_reviews.len()`
    pub total_reviews: usize,

    /// Overall trust score (0-100)
    pub overall_trust: u8,

    /// Per-review verdicts, in input order
    pub classified_reviews: Vec<ClassifiedReview>,

    /// Batch sentiment percentages
    pub sentiment_distribution: SentimentDistribution,

    /// Batch emotion means
    pub emotion_scores: EmotionScores,

    /// Ordered, threshold-gated findings; never empty
    pub insights: Vec<String>,

    /// Pricing-derived fraud context
    pub fraud_context: FraudContext,

    /// Free-text summaries (generated or fallback)
    pub summaries: ReviewSummaries,
}
