//! ReviewLens Pricing
//!
//! Cross-marketplace price analysis for fraud detection: pricing
//! statistics over marketplace checks, cumulative suspicious-pricing
//! thresholds, and the Low/Medium/High fraud-risk tier that combines
//! pricing with review-quality rates.

pub mod analyzer;

pub use analyzer::{PriceAnalyzer, PricingAnalysis, PricingConfig};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::analyzer::{PriceAnalyzer, PricingAnalysis, PricingConfig};
}
