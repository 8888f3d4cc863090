//! Price/marketplace fraud analyzer
//!
//! Reduces a set of marketplace price checks to pricing statistics, a
//! suspicious-pricing verdict with per-threshold signals, and the
//! product's fraud-risk tier. The thresholds are cumulative: any one
//! tripping marks the pricing suspicious, and every tripped threshold is
//! recorded so the verdict stays explainable.
//!
//! Missing data is treated as risk, not as unknown: zero successful
//! quotes or thin marketplace coverage forces the High tier instead of
//! erroring out.

use serde::{Deserialize, Serialize};
use tracing::debug;

use reviewlens_core::{
    ClassificationCounts, FraudContext, FraudRiskTier, PriceQuote, PricingSignal,
};

/// Thresholds for pricing analysis and tier assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Cross-marketplace variation above this percentage is suspicious
    #[serde(default = "default_cross_market_variation_pct")]
    pub cross_market_variation_pct: f64,

    /// Amazon-storefront-only variation above this percentage is
    /// suspicious (requires at least two Amazon quotes)
    #[serde(default = "default_amazon_variation_pct")]
    pub amazon_variation_pct: f64,

    /// A minimum price below this fraction of the average is suspicious
    #[serde(default = "default_below_market_ratio")]
    pub below_market_ratio: f64,

    /// Fewer successful checks than this forces the High tier
    #[serde(default = "default_min_marketplaces")]
    pub min_marketplaces: usize,

    /// Genuine-review rate below this forces the High tier
    #[serde(default = "default_genuine_rate_high")]
    pub genuine_rate_high: f64,

    /// Genuine-review rate below this raises at least the Medium tier
    #[serde(default = "default_genuine_rate_medium")]
    pub genuine_rate_medium: f64,

    /// Paid-review rate above this raises at least the Medium tier
    #[serde(default = "default_paid_rate_medium")]
    pub paid_rate_medium: f64,
}

fn default_cross_market_variation_pct() -> f64 {
    40.0
}

fn default_amazon_variation_pct() -> f64 {
    30.0
}

fn default_below_market_ratio() -> f64 {
    0.3
}

fn default_min_marketplaces() -> usize {
    3
}

fn default_genuine_rate_high() -> f64 {
    0.5
}

fn default_genuine_rate_medium() -> f64 {
    0.7
}

fn default_paid_rate_medium() -> f64 {
    0.3
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            cross_market_variation_pct: default_cross_market_variation_pct(),
            amazon_variation_pct: default_amazon_variation_pct(),
            below_market_ratio: default_below_market_ratio(),
            min_marketplaces: default_min_marketplaces(),
            genuine_rate_high: default_genuine_rate_high(),
            genuine_rate_medium: default_genuine_rate_medium(),
            paid_rate_medium: default_paid_rate_medium(),
        }
    }
}

/// Pricing statistics over one product's marketplace checks
#[derive(Debug, Clone, PartialEq)]
pub struct PricingAnalysis {
    /// Mean over successful quotes; 0.0 with none
    pub average_price: f64,

    /// Lowest successful quote; 0.0 with none
    pub min_price: f64,

    /// Highest successful quote; 0.0 with none
    pub max_price: f64,

    /// (max - min) / average * 100; 0.0 with fewer than two quotes
    pub price_variation_pct: f64,

    /// Whether any threshold tripped
    pub suspicious_pricing: bool,

    /// Every threshold that tripped, in check order
    pub pricing_signals: Vec<PricingSignal>,

    /// Count of successful checks
    pub marketplaces_checked: usize,

    /// Whether cross-marketplace comparison actually ran
    pub cross_marketplace_analysis: bool,
}

/// Deterministic pricing analyzer
pub struct PriceAnalyzer {
    config: PricingConfig,
}

impl PriceAnalyzer {
    /// Create an analyzer with default thresholds
    pub fn new() -> Self {
        Self::with_config(PricingConfig::default())
    }

    /// Create an analyzer with custom thresholds
    pub fn with_config(config: PricingConfig) -> Self {
        Self { config }
    }

    /// Compute pricing statistics and the suspicious-pricing verdict.
    pub fn analyze(&self, quotes: &[PriceQuote]) -> PricingAnalysis {
        let successful: Vec<&PriceQuote> = quotes.iter().filter(|q| q.success).collect();
        let marketplaces_checked = successful.len();

        if successful.is_empty() {
            return PricingAnalysis {
                average_price: 0.0,
                min_price: 0.0,
                max_price: 0.0,
                price_variation_pct: 0.0,
                suspicious_pricing: false,
                pricing_signals: Vec::new(),
                marketplaces_checked: 0,
                cross_marketplace_analysis: false,
            };
        }

        let prices: Vec<f64> = successful.iter().map(|q| q.price).collect();
        let average_price = prices.iter().sum::<f64>() / prices.len() as f64;
        let min_price = prices.iter().copied().fold(f64::INFINITY, f64::min);
        let max_price = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let price_variation_pct = variation_pct(min_price, max_price, average_price, prices.len());

        let mut pricing_signals = Vec::new();

        if price_variation_pct > self.config.cross_market_variation_pct {
            pricing_signals.push(PricingSignal::CrossMarketVariation);
        }

        let amazon_prices: Vec<f64> = successful
            .iter()
            .filter(|q| q.is_amazon)
            .map(|q| q.price)
            .collect();
        if amazon_prices.len() >= 2 {
            let amazon_avg = amazon_prices.iter().sum::<f64>() / amazon_prices.len() as f64;
            let amazon_min = amazon_prices.iter().copied().fold(f64::INFINITY, f64::min);
            let amazon_max = amazon_prices
                .iter()
                .copied()
                .fold(f64::NEG_INFINITY, f64::max);
            let amazon_variation =
                variation_pct(amazon_min, amazon_max, amazon_avg, amazon_prices.len());
            if amazon_variation > self.config.amazon_variation_pct {
                pricing_signals.push(PricingSignal::AmazonVariation);
            }
        }

        if marketplaces_checked >= 2 && min_price < average_price * self.config.below_market_ratio {
            pricing_signals.push(PricingSignal::BelowMarketPrice);
        }

        for signal in &pricing_signals {
            debug!(
                signal = signal.describe(),
                price_variation_pct, "pricing threshold tripped"
            );
        }

        PricingAnalysis {
            average_price,
            min_price,
            max_price,
            price_variation_pct,
            suspicious_pricing: !pricing_signals.is_empty(),
            pricing_signals,
            marketplaces_checked,
            cross_marketplace_analysis: marketplaces_checked >= 2,
        }
    }

    /// Combine pricing statistics with review-quality rates into the
    /// product's fraud-risk tier.
    ///
    /// Coverage comes first: fewer than `min_marketplaces` successful
    /// checks is High regardless of every other signal; insufficient data
    /// is itself a risk signal, not an unknown.
    pub fn assess_risk_tier(
        &self,
        analysis: &PricingAnalysis,
        counts: &ClassificationCounts,
    ) -> FraudRiskTier {
        if analysis.marketplaces_checked < self.config.min_marketplaces {
            return FraudRiskTier::High;
        }
        if analysis.suspicious_pricing {
            return FraudRiskTier::High;
        }
        if counts.genuine_rate() < self.config.genuine_rate_high {
            return FraudRiskTier::High;
        }
        if counts.genuine_rate() < self.config.genuine_rate_medium
            || counts.paid_rate() > self.config.paid_rate_medium
        {
            return FraudRiskTier::Medium;
        }
        FraudRiskTier::Low
    }

    /// Derive the full read-only fraud context for one analysis run.
    pub fn fraud_context(
        &self,
        quotes: &[PriceQuote],
        counts: &ClassificationCounts,
    ) -> FraudContext {
        let analysis = self.analyze(quotes);
        let fraud_risk_tier = self.assess_risk_tier(&analysis, counts);

        FraudContext {
            fraud_risk_tier,
            average_price: analysis.average_price,
            min_price: analysis.min_price,
            max_price: analysis.max_price,
            price_variation_pct: analysis.price_variation_pct,
            suspicious_pricing: analysis.suspicious_pricing,
            pricing_signals: analysis.pricing_signals,
            marketplaces_checked: analysis.marketplaces_checked,
            cross_marketplace_analysis: analysis.cross_marketplace_analysis,
        }
    }
}

impl Default for PriceAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn variation_pct(min: f64, max: f64, average: f64, quote_count: usize) -> f64 {
    if quote_count < 2 || average <= 0.0 {
        0.0
    } else {
        (max - min) / average * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn healthy_counts() -> ClassificationCounts {
        ClassificationCounts {
            genuine: 9,
            paid: 0,
            bot: 1,
            malicious: 0,
        }
    }

    fn quotes(prices: &[f64]) -> Vec<PriceQuote> {
        prices
            .iter()
            .enumerate()
            .map(|(i, p)| PriceQuote::new(format!("Marketplace {i}"), *p))
            .collect()
    }

    #[test]
    fn test_average_min_max() {
        let analysis = PriceAnalyzer::new().analyze(&quotes(&[10.0, 20.0, 30.0]));
        assert_eq!(analysis.average_price, 20.0);
        assert_eq!(analysis.min_price, 10.0);
        assert_eq!(analysis.max_price, 30.0);
        assert_eq!(analysis.price_variation_pct, 100.0);
        assert_eq!(analysis.marketplaces_checked, 3);
        assert!(analysis.cross_marketplace_analysis);
    }

    #[test]
    fn test_single_quote_has_zero_variation() {
        let analysis = PriceAnalyzer::new().analyze(&quotes(&[25.0]));
        assert_eq!(analysis.price_variation_pct, 0.0);
        assert!(!analysis.cross_marketplace_analysis);
    }

    #[test]
    fn test_failed_quotes_are_excluded() {
        let mut all = quotes(&[20.0, 22.0]);
        all.push(PriceQuote::failed("Marketplace down"));

        let analysis = PriceAnalyzer::new().analyze(&all);
        assert_eq!(analysis.marketplaces_checked, 2);
        assert_eq!(analysis.average_price, 21.0);
    }

    #[test]
    fn test_no_successful_quotes_is_high_tier_not_an_error() {
        let analyzer = PriceAnalyzer::new();
        let context = analyzer.fraud_context(&[PriceQuote::failed("A")], &healthy_counts());

        assert_eq!(context.marketplaces_checked, 0);
        assert_eq!(context.fraud_risk_tier, FraudRiskTier::High);
        assert!(!context.suspicious_pricing);
    }

    #[test]
    fn test_cross_market_variation_signal() {
        let analysis = PriceAnalyzer::new().analyze(&quotes(&[10.0, 20.0, 30.0]));
        assert!(analysis.suspicious_pricing);
        assert!(analysis
            .pricing_signals
            .contains(&PricingSignal::CrossMarketVariation));
    }

    #[test]
    fn test_stable_prices_are_not_suspicious() {
        let analysis = PriceAnalyzer::new().analyze(&quotes(&[28.0, 29.0, 30.0]));
        assert!(!analysis.suspicious_pricing);
        assert!(analysis.pricing_signals.is_empty());
    }

    #[test]
    fn test_amazon_variation_signal() {
        let mut all = vec![
            PriceQuote::new("Amazon US", 29.99).amazon(),
            PriceQuote::new("Amazon UK", 19.99).amazon(),
        ];
        all.extend(quotes(&[27.0, 28.0]));

        let analysis = PriceAnalyzer::new().analyze(&all);
        assert!(analysis
            .pricing_signals
            .contains(&PricingSignal::AmazonVariation));
    }

    #[test]
    fn test_single_amazon_quote_never_trips_amazon_signal() {
        let mut all = vec![PriceQuote::new("Amazon US", 29.99).amazon()];
        all.extend(quotes(&[27.0, 28.0, 29.0]));

        let analysis = PriceAnalyzer::new().analyze(&all);
        assert!(!analysis
            .pricing_signals
            .contains(&PricingSignal::AmazonVariation));
    }

    #[test]
    fn test_below_market_price_signal() {
        let analysis = PriceAnalyzer::new().analyze(&quotes(&[5.0, 95.0, 100.0, 100.0]));
        assert!(analysis
            .pricing_signals
            .contains(&PricingSignal::BelowMarketPrice));
    }

    #[test]
    fn test_coverage_floor_forces_high_tier() {
        let analyzer = PriceAnalyzer::new();
        // Two stable quotes, healthy reviews: still High because only two
        // marketplaces could be checked.
        let context = analyzer.fraud_context(
            &[
                PriceQuote::new("Amazon US", 29.99).amazon(),
                PriceQuote::new("Amazon UK", 24.99).amazon(),
            ],
            &healthy_counts(),
        );
        assert_eq!(context.fraud_risk_tier, FraudRiskTier::High);
    }

    #[test]
    fn test_low_genuine_rate_forces_high_tier() {
        let analyzer = PriceAnalyzer::new();
        let analysis = analyzer.analyze(&quotes(&[28.0, 29.0, 30.0]));
        let counts = ClassificationCounts {
            genuine: 4,
            paid: 3,
            bot: 2,
            malicious: 1,
        };
        assert_eq!(
            analyzer.assess_risk_tier(&analysis, &counts),
            FraudRiskTier::High
        );
    }

    #[test]
    fn test_moderate_genuine_rate_is_medium_tier() {
        let analyzer = PriceAnalyzer::new();
        let analysis = analyzer.analyze(&quotes(&[28.0, 29.0, 30.0]));
        let counts = ClassificationCounts {
            genuine: 6,
            paid: 2,
            bot: 2,
            malicious: 0,
        };
        assert_eq!(
            analyzer.assess_risk_tier(&analysis, &counts),
            FraudRiskTier::Medium
        );
    }

    #[test]
    fn test_high_paid_rate_is_medium_tier() {
        let analyzer = PriceAnalyzer::new();
        let analysis = analyzer.analyze(&quotes(&[28.0, 29.0, 30.0]));
        let counts = ClassificationCounts {
            genuine: 6,
            paid: 4,
            bot: 0,
            malicious: 0,
        };
        // Genuine rate 0.6 already lands Medium; paid rate 0.4 over the
        // threshold keeps it there rather than Low.
        assert_eq!(
            analyzer.assess_risk_tier(&analysis, &counts),
            FraudRiskTier::Medium
        );
    }

    #[test]
    fn test_healthy_product_is_low_tier() {
        let analyzer = PriceAnalyzer::new();
        let analysis = analyzer.analyze(&quotes(&[28.0, 29.0, 30.0]));
        assert_eq!(
            analyzer.assess_risk_tier(&analysis, &healthy_counts()),
            FraudRiskTier::Low
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        // Widening the price spread while everything else stays fixed
        // never lowers the risk tier.
        proptest! {
            #[test]
            fn tier_is_monotonic_in_variation(
                base in 10.0f64..100.0,
                spread_a in 0.0f64..200.0,
                spread_b in 0.0f64..200.0,
            ) {
                let analyzer = PriceAnalyzer::new();
                let counts = healthy_counts();

                let (narrow, wide) = if spread_a <= spread_b {
                    (spread_a, spread_b)
                } else {
                    (spread_b, spread_a)
                };

                let tier_of = |spread: f64| {
                    let analysis = analyzer.analyze(&quotes(&[
                        base,
                        base + spread / 2.0,
                        base + spread,
                    ]));
                    analyzer.assess_risk_tier(&analysis, &counts)
                };

                prop_assert!(tier_of(narrow) <= tier_of(wide));
            }

            #[test]
            fn fewer_than_three_marketplaces_is_always_high(
                prices in proptest::collection::vec(1.0f64..1000.0, 0..=2),
            ) {
                let analyzer = PriceAnalyzer::new();
                let context = analyzer.fraud_context(&quotes(&prices), &healthy_counts());
                prop_assert_eq!(context.fraud_risk_tier, FraudRiskTier::High);
            }
        }
    }
}
