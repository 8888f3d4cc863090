//! The analysis pipeline
//!
//! One synchronous, deterministic pass from a normalized request to an
//! immutable result snapshot. The per-review steps share nothing, so the
//! pass is a plain map followed by batch reductions; the only async
//! boundary is the optional summary enrichment, which recovers to fixed
//! fallback text and never fails the run.

use std::sync::Arc;

use tracing::{debug, info, warn};

use reviewlens_classifiers::{FeatureExtractor, FeatureSet, ReviewClassifier, SentimentAnalyzer};
use reviewlens_core::{
    AnalysisRequest, AnalysisResult, Classification, ClassificationCounts, ClassifiedReview,
    Error, Result, ReviewSummaries,
};
use reviewlens_pricing::PriceAnalyzer;

use crate::config::EngineConfig;
use crate::insights::InsightGenerator;
use crate::summary::SummaryGenerator;
use crate::trust::TrustScorer;

/// The assembled analysis pipeline. Holds no per-run state; concurrent
/// analyses for different products share one engine freely.
pub struct AnalysisEngine {
    extractor: FeatureExtractor,
    classifier: ReviewClassifier,
    sentiment: SentimentAnalyzer,
    pricing: PriceAnalyzer,
    trust: TrustScorer,
    insights: InsightGenerator,
    summary_generator: Option<Arc<dyn SummaryGenerator>>,
}

impl AnalysisEngine {
    /// Create an engine with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine from a configuration
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        Ok(Self {
            extractor: FeatureExtractor::new()?,
            classifier: ReviewClassifier::with_config(config.classifier),
            sentiment: SentimentAnalyzer::new(),
            pricing: PriceAnalyzer::with_config(config.pricing),
            trust: TrustScorer::with_config(config.trust),
            insights: InsightGenerator::with_config(config.insights),
            summary_generator: None,
        })
    }

    /// Attach an external summary generator
    pub fn with_summary_generator(mut self, generator: Arc<dyn SummaryGenerator>) -> Self {
        self.summary_generator = Some(generator);
        self
    }

    /// Run the deterministic core: same request, byte-identical result.
    ///
    /// The classifier and the fraud tier reference each other (the tier
    /// uses label counts; per-review confidence uses the tier), so the
    /// pass runs twice: a provisional pass without product context fixes
    /// the labels, the fraud context is derived from those labels plus
    /// pricing, and the stored pass re-classifies with the context.
    /// Labels are context-independent; only confidence shifts, so the
    /// counts the tier saw stay valid.
    pub fn evaluate(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        if request.reviews.is_empty() {
            return Err(Error::EmptyInput);
        }
        for review in &request.reviews {
            review.validate_rating()?;
        }

        let features: Vec<FeatureSet> = request
            .reviews
            .iter()
            .map(|r| self.extractor.extract(&r.text))
            .collect();

        let provisional: Vec<Classification> = request
            .reviews
            .iter()
            .zip(&features)
            .map(|(review, features)| {
                self.classifier.classify(review, features, None).classification
            })
            .collect();
        let provisional_counts = ClassificationCounts::tally(provisional.iter());

        let fraud_context = self
            .pricing
            .fraud_context(&request.price_quotes, &provisional_counts);
        debug!(
            asin = %request.product.asin,
            tier = fraud_context.fraud_risk_tier.label(),
            marketplaces = fraud_context.marketplaces_checked,
            "fraud context derived"
        );

        let classified_reviews: Vec<ClassifiedReview> = request
            .reviews
            .iter()
            .zip(&features)
            .map(|(review, features)| {
                let outcome = self
                    .classifier
                    .classify(review, features, Some(&fraud_context));
                let sentiment = self.sentiment.score(review.rating, features);

                ClassifiedReview {
                    review: review.clone(),
                    classification: outcome.classification,
                    confidence: outcome.confidence,
                    explanation: outcome.explanation,
                    sentiment: sentiment.sentiment,
                    sentiment_score: sentiment.score,
                    emotion_scores: sentiment.emotions,
                }
            })
            .collect();

        let counts =
            ClassificationCounts::tally(classified_reviews.iter().map(|r| &r.classification));
        let batch = self.sentiment.aggregate(&classified_reviews);
        let overall_trust = self.trust.score(&counts, fraud_context.fraud_risk_tier);
        let insights = self
            .insights
            .generate(&counts, &classified_reviews, &fraud_context);

        info!(
            asin = %request.product.asin,
            reviews = classified_reviews.len(),
            trust = overall_trust,
            tier = fraud_context.fraud_risk_tier.label(),
            "analysis complete"
        );

        Ok(AnalysisResult {
            product: request.product.clone(),
            total_reviews: classified_reviews.len(),
            overall_trust,
            classified_reviews,
            sentiment_distribution: batch.distribution,
            emotion_scores: batch.emotion_means,
            insights,
            fraud_context,
            summaries: ReviewSummaries::fallback(),
        })
    }

    /// Run the core, then attach generated summaries when a generator is
    /// configured. Generation failures are recovered with the fixed
    /// fallback text; they never propagate.
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        let mut result = self.evaluate(request)?;

        if let Some(generator) = &self.summary_generator {
            let texts: Vec<String> = result
                .classified_reviews
                .iter()
                .map(|r| r.review.text.clone())
                .collect();

            match generator
                .generate(&texts, &request.product.product_name)
                .await
            {
                Ok(summaries) => result.summaries = summaries,
                Err(e) => {
                    warn!(
                        generator = generator.name(),
                        error = %e,
                        "summary generation failed; keeping fallback text"
                    );
                }
            }
        }

        Ok(result)
    }
}
