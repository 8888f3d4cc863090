//! ReviewLens Core
//!
//! Core types and utilities shared across ReviewLens components.
//!
//! This crate provides:
//! - The normalized input types (reviews, price quotes, analysis requests)
//! - The derived output types (classified reviews, fraud context, results)
//! - Error types and result handling
//! - ASIN extraction from product URLs

pub mod asin;
pub mod error;
pub mod types;

pub use asin::AsinParser;
pub use error::{Error, Result};
pub use types::{
    AnalysisRequest, AnalysisResult, Classification, ClassificationCounts, ClassifiedReview,
    EmotionScores, FraudContext, FraudRiskTier, PriceQuote, PricingSignal, ProductMetadata,
    Review, ReviewSummaries, Sentiment, SentimentDistribution,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{
        AnalysisRequest, AnalysisResult, Classification, ClassifiedReview, FraudContext,
        FraudRiskTier, PriceQuote, Review, Sentiment,
    };
}
