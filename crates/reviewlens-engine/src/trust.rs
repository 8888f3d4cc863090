//! Overall trust score
//!
//! One canonical formula: the genuine-review ratio scaled to 0-100, then
//! penalized by the product's fraud-risk tier. An alternative
//! verified-purchase/rating-weighted formula exists in the wild for this
//! problem; it is deliberately not implemented here so there is a single
//! authoritative number (see DESIGN.md).

use serde::{Deserialize, Serialize};

use reviewlens_core::{ClassificationCounts, FraudRiskTier};

/// Tier penalties applied to the genuine-ratio score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrustConfig {
    /// Points subtracted on a High-tier product
    #[serde(default = "default_high_tier_penalty")]
    pub high_tier_penalty: u8,

    /// Points subtracted on a Medium-tier product
    #[serde(default = "default_medium_tier_penalty")]
    pub medium_tier_penalty: u8,
}

fn default_high_tier_penalty() -> u8 {
    25
}

fn default_medium_tier_penalty() -> u8 {
    10
}

impl Default for TrustConfig {
    fn default() -> Self {
        Self {
            high_tier_penalty: default_high_tier_penalty(),
            medium_tier_penalty: default_medium_tier_penalty(),
        }
    }
}

/// Computes the 0-100 trust score for a classified batch
pub struct TrustScorer {
    config: TrustConfig,
}

impl TrustScorer {
    /// Create a scorer with default penalties
    pub fn new() -> Self {
        Self::with_config(TrustConfig::default())
    }

    /// Create a scorer with custom penalties
    pub fn with_config(config: TrustConfig) -> Self {
        Self { config }
    }

    /// `round(genuine_ratio * 100)`, minus the tier penalty, clamped to
    /// [0, 100].
    pub fn score(&self, counts: &ClassificationCounts, tier: FraudRiskTier) -> u8 {
        let base = (counts.genuine_rate() * 100.0).round() as i16;
        let penalty = match tier {
            FraudRiskTier::High => self.config.high_tier_penalty as i16,
            FraudRiskTier::Medium => self.config.medium_tier_penalty as i16,
            FraudRiskTier::Low => 0,
        };
        (base - penalty).clamp(0, 100) as u8
    }
}

impl Default for TrustScorer {
    fn default() -> Self {
        Self::new()
    }
}
