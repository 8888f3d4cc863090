//! Insight generation
//!
//! Deterministic, threshold-gated findings rendered as short
//! human-readable strings. The list order is the check order and is part
//! of the contract: consumers rely on it for display priority. When no
//! check trips, a single fixed fallback line is emitted so the list is
//! never empty.

use serde::{Deserialize, Serialize};

use reviewlens_core::{ClassificationCounts, ClassifiedReview, FraudContext, FraudRiskTier};

/// Thresholds gating the insight checks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightConfig {
    /// Suspicious-review percentage that triggers the headline warning
    #[serde(default = "default_suspicious_ratio_pct")]
    pub suspicious_ratio_pct: u8,

    /// Five-star share (percent) that reads as rating concentration
    #[serde(default = "default_five_star_concentration_pct")]
    pub five_star_concentration_pct: u8,

    /// Marketplace count cited by the coverage insight; keep in step with
    /// the pricing analyzer's `min_marketplaces`
    #[serde(default = "default_required_marketplaces")]
    pub required_marketplaces: usize,
}

fn default_suspicious_ratio_pct() -> u8 {
    30
}

fn default_five_star_concentration_pct() -> u8 {
    70
}

fn default_required_marketplaces() -> usize {
    3
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            suspicious_ratio_pct: default_suspicious_ratio_pct(),
            five_star_concentration_pct: default_five_star_concentration_pct(),
            required_marketplaces: default_required_marketplaces(),
        }
    }
}

/// Fallback line when no check trips
pub const NO_FINDINGS: &str = "No suspicious patterns detected in the analyzed reviews.";

/// Renders the ordered insight list for one analysis run
pub struct InsightGenerator {
    config: InsightConfig,
}

impl InsightGenerator {
    /// Create a generator with default thresholds
    pub fn new() -> Self {
        Self::with_config(InsightConfig::default())
    }

    /// Create a generator with custom thresholds
    pub fn with_config(config: InsightConfig) -> Self {
        Self { config }
    }

    /// Run every check in display-priority order.
    pub fn generate(
        &self,
        counts: &ClassificationCounts,
        reviews: &[ClassifiedReview],
        fraud: &FraudContext,
    ) -> Vec<String> {
        let mut insights = Vec::new();
        let total = counts.total();

        if total > 0 {
            let suspicious_pct =
                (counts.suspicious() as f64 / total as f64 * 100.0).round() as u8;
            if suspicious_pct > self.config.suspicious_ratio_pct {
                insights.push(format!(
                    "{suspicious_pct}% of reviews show suspicious patterns"
                ));
            }
        }

        if counts.paid > 0 {
            insights.push(format!(
                "{} potentially paid reviews detected",
                counts.paid
            ));
        }
        if counts.bot > 0 {
            insights.push(format!("{} bot-generated reviews identified", counts.bot));
        }
        if counts.malicious > 0 {
            insights.push(format!("{} malicious reviews flagged", counts.malicious));
        }

        if total > 0 {
            let five_star = reviews.iter().filter(|r| r.review.rating == 5).count();
            let five_star_pct = five_star as f64 / total as f64 * 100.0;
            if five_star_pct > self.config.five_star_concentration_pct as f64 {
                insights.push("High concentration of 5-star ratings detected".to_string());
            }
        }

        match fraud.fraud_risk_tier {
            FraudRiskTier::High => {
                insights.push("High fraud risk detected for this product".to_string());
            }
            FraudRiskTier::Medium => {
                insights.push("Medium fraud risk detected for this product".to_string());
            }
            FraudRiskTier::Low => {}
        }

        if fraud.suspicious_pricing {
            insights.push(format!(
                "Suspicious pricing: {:.1}% variation across marketplaces (${:.2} - ${:.2})",
                fraud.price_variation_pct, fraud.min_price, fraud.max_price
            ));
        }

        if fraud.marketplaces_checked < self.config.required_marketplaces {
            insights.push(format!(
                "Only {} of {} required marketplaces could be checked",
                fraud.marketplaces_checked, self.config.required_marketplaces
            ));
        }

        if insights.is_empty() {
            insights.push(NO_FINDINGS.to_string());
        }

        insights
    }
}

impl Default for InsightGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reviewlens_core::{
        Classification, EmotionScores, Review, Sentiment,
    };

    fn classified(rating: u8, classification: Classification) -> ClassifiedReview {
        ClassifiedReview {
            review: Review::new("r", "text", rating),
            classification,
            confidence: 80,
            explanation: "test".to_string(),
            sentiment: Sentiment::Neutral,
            sentiment_score: 0.0,
            emotion_scores: EmotionScores::default(),
        }
    }

    fn clean_fraud_context() -> FraudContext {
        FraudContext {
            fraud_risk_tier: FraudRiskTier::Low,
            average_price: 29.0,
            min_price: 28.0,
            max_price: 30.0,
            price_variation_pct: 6.9,
            suspicious_pricing: false,
            pricing_signals: Vec::new(),
            marketplaces_checked: 4,
            cross_marketplace_analysis: true,
        }
    }

    #[test]
    fn test_clean_batch_gets_fallback_line() {
        let reviews = vec![
            classified(4, Classification::Genuine),
            classified(3, Classification::Genuine),
        ];
        let counts = ClassificationCounts::tally(reviews.iter().map(|r| &r.classification));

        let insights = InsightGenerator::new().generate(&counts, &reviews, &clean_fraud_context());
        assert_eq!(insights, vec![NO_FINDINGS.to_string()]);
    }

    #[test]
    fn test_suspicious_ratio_headline() {
        let reviews = vec![
            classified(5, Classification::Bot),
            classified(5, Classification::Paid),
            classified(4, Classification::Genuine),
            classified(3, Classification::Genuine),
        ];
        let counts = ClassificationCounts::tally(reviews.iter().map(|r| &r.classification));

        let insights = InsightGenerator::new().generate(&counts, &reviews, &clean_fraud_context());
        assert_eq!(insights[0], "50% of reviews show suspicious patterns");
        assert!(insights.contains(&"1 potentially paid reviews detected".to_string()));
        assert!(insights.contains(&"1 bot-generated reviews identified".to_string()));
    }

    #[test]
    fn test_insight_order_is_check_order() {
        let reviews = vec![
            classified(5, Classification::Bot),
            classified(5, Classification::Paid),
            classified(5, Classification::Malicious),
        ];
        let counts = ClassificationCounts::tally(reviews.iter().map(|r| &r.classification));

        let mut fraud = clean_fraud_context();
        fraud.fraud_risk_tier = FraudRiskTier::High;
        fraud.suspicious_pricing = true;
        fraud.price_variation_pct = 55.0;
        fraud.marketplaces_checked = 2;

        let insights = InsightGenerator::new().generate(&counts, &reviews, &fraud);
        assert_eq!(
            insights,
            vec![
                "100% of reviews show suspicious patterns".to_string(),
                "1 potentially paid reviews detected".to_string(),
                "1 bot-generated reviews identified".to_string(),
                "1 malicious reviews flagged".to_string(),
                "High concentration of 5-star ratings detected".to_string(),
                "High fraud risk detected for this product".to_string(),
                "Suspicious pricing: 55.0% variation across marketplaces ($28.00 - $30.00)"
                    .to_string(),
                "Only 2 of 3 required marketplaces could be checked".to_string(),
            ]
        );
    }

    #[test]
    fn test_five_star_concentration() {
        let reviews: Vec<_> = (0..8)
            .map(|_| classified(5, Classification::Genuine))
            .chain((0..2).map(|_| classified(4, Classification::Genuine)))
            .collect();
        let counts = ClassificationCounts::tally(reviews.iter().map(|r| &r.classification));

        let insights = InsightGenerator::new().generate(&counts, &reviews, &clean_fraud_context());
        assert!(insights.contains(&"High concentration of 5-star ratings detected".to_string()));
    }

    #[test]
    fn test_medium_tier_warning() {
        let reviews = vec![classified(4, Classification::Genuine)];
        let counts = ClassificationCounts::tally(reviews.iter().map(|r| &r.classification));

        let mut fraud = clean_fraud_context();
        fraud.fraud_risk_tier = FraudRiskTier::Medium;

        let insights = InsightGenerator::new().generate(&counts, &reviews, &fraud);
        assert!(insights.contains(&"Medium fraud risk detected for this product".to_string()));
    }
}
