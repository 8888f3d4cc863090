//! Summary enrichment seam
//!
//! The analysis result can carry free-text summaries produced by an
//! external generative text provider. Generation is non-deterministic and
//! best-effort by design: the engine substitutes fixed fallback text on
//! any failure and never lets this seam break an analysis, in contrast to
//! the deterministic classification core.

use async_trait::async_trait;

use reviewlens_core::{Result, ReviewSummaries};

/// External summary provider. Implementations wrap whatever text service
/// the deployment uses; tests use canned generators.
#[async_trait]
pub trait SummaryGenerator: Send + Sync {
    /// Produce the four summary fields from the batch's review texts.
    async fn generate(&self, review_texts: &[String], product_name: &str)
        -> Result<ReviewSummaries>;

    /// Get the generator name, for logging
    fn name(&self) -> &str;
}
