//! Engine configuration
//!
//! Every rule threshold lives here as data so tuning is a config change,
//! not a code branch. Loadable from YAML with all fields optional;
//! omitted sections fall back to the canonical defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use reviewlens_classifiers::ClassifierConfig;
use reviewlens_core::{Error, Result};
use reviewlens_pricing::PricingConfig;

use crate::insights::InsightConfig;
use crate::trust::TrustConfig;

/// Complete engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Authenticity rule thresholds
    pub classifier: ClassifierConfig,

    /// Pricing analysis thresholds
    pub pricing: PricingConfig,

    /// Trust score tier penalties
    pub trust: TrustConfig,

    /// Insight gating thresholds
    pub insights: InsightConfig,
}

impl EngineConfig {
    /// Parse a configuration from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("failed to parse engine config: {e}")))
    }

    /// Load a configuration from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_gives_defaults() {
        let config = EngineConfig::from_yaml("{}").unwrap();
        assert_eq!(config.classifier.bot_max_length, 20);
        assert_eq!(config.pricing.min_marketplaces, 3);
        assert_eq!(config.trust.high_tier_penalty, 25);
        assert_eq!(config.insights.suspicious_ratio_pct, 30);
    }

    #[test]
    fn test_partial_override() {
        let yaml = r#"
pricing:
  cross_market_variation_pct: 60.0
trust:
  high_tier_penalty: 30
"#;
        let config = EngineConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.pricing.cross_market_variation_pct, 60.0);
        assert_eq!(config.trust.high_tier_penalty, 30);
        // Untouched sections keep their defaults.
        assert_eq!(config.pricing.min_marketplaces, 3);
        assert_eq!(config.classifier.bot_max_length, 20);
    }

    #[test]
    fn test_invalid_yaml_is_a_config_error() {
        let err = EngineConfig::from_yaml("pricing: [1, 2").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
