//! Aggregate normalizer producing the full sub-score set.

use credence_core::{FactorScores, FinancialStatement, Metric, Result};
use serde::{Deserialize, Serialize};

use crate::efficiency::{Efficiency, EfficiencyConfig};
use crate::growth::{Growth, GrowthConfig};
use crate::leverage::{Leverage, LeverageConfig};
use crate::liquidity::{Liquidity, LiquidityConfig};
use crate::profitability::{Profitability, ProfitabilityConfig};

/// Configuration for all five metrics.
///
/// Defaults reproduce the standard scaling policy; override individual fields
/// to tune a single factor without restating the rest.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Profitability scaling.
    pub profitability: ProfitabilityConfig,
    /// Liquidity scaling.
    pub liquidity: LiquidityConfig,
    /// Leverage scaling.
    pub leverage: LeverageConfig,
    /// Efficiency scaling.
    pub efficiency: EfficiencyConfig,
    /// Growth scaling.
    pub growth: GrowthConfig,
}

/// Runs every metric against a statement and collects the sub-scores.
///
/// The normalizer is pure: it holds scaling configuration only, so a single
/// instance can score any number of statements, concurrently if desired.
#[derive(Debug, Clone, Default)]
pub struct MetricNormalizer {
    profitability: Profitability,
    liquidity: Liquidity,
    leverage: Leverage,
    efficiency: Efficiency,
    growth: Growth,
}

impl MetricNormalizer {
    /// Create a normalizer with the given scaling configuration.
    #[must_use]
    pub const fn new(config: NormalizerConfig) -> Self {
        Self {
            profitability: Profitability::new(config.profitability),
            liquidity: Liquidity::new(config.liquidity),
            leverage: Leverage::new(config.leverage),
            efficiency: Efficiency::new(config.efficiency),
            growth: Growth::new(config.growth),
        }
    }

    /// Normalize every factor of a statement into a bounded sub-score set.
    ///
    /// The statement is expected to be validated; metrics still refuse
    /// undefined ratios (zero revenue, missing history) so an unvalidated
    /// statement fails here rather than producing NaN.
    ///
    /// # Errors
    ///
    /// Propagates the first metric failure. No partial sub-score set is
    /// returned.
    pub fn sub_scores(&self, statement: &FinancialStatement) -> Result<FactorScores> {
        Ok(FactorScores {
            profitability: self.profitability.score(statement)?,
            liquidity: self.liquidity.score(statement)?,
            leverage: self.leverage.score(statement)?,
            efficiency: self.efficiency.score(statement)?,
            growth: self.growth.score(statement)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use credence_core::RevenueObservation;

    fn apple() -> FinancialStatement {
        FinancialStatement {
            revenue: 394_328_000_000.0,
            net_income: 99_803_000_000.0,
            total_assets: 352_755_000_000.0,
            total_debt: 123_930_000_000.0,
            current_ratio: 1.07,
            debt_ratio: 0.351,
            roa: 0.283,
            history: vec![
                RevenueObservation {
                    year: "2023".to_string(),
                    revenue: 383_285_000_000.0,
                },
                RevenueObservation {
                    year: "2024".to_string(),
                    revenue: 394_328_000_000.0,
                },
            ],
        }
    }

    #[test]
    fn test_sub_scores() {
        let normalizer = MetricNormalizer::default();
        let scores = normalizer.sub_scores(&apple()).unwrap();

        assert_relative_eq!(scores.profitability, 100.0);
        assert_relative_eq!(scores.liquidity, 28.5, epsilon = 1e-10);
        assert_relative_eq!(scores.leverage, 64.9, epsilon = 1e-10);
        assert_relative_eq!(scores.efficiency, 100.0);
        assert_relative_eq!(scores.growth, 55.762, epsilon = 1e-3);
    }

    #[test]
    fn test_all_scores_in_band() {
        let normalizer = MetricNormalizer::default();
        let mut extreme = apple();
        extreme.net_income = -1.0e12;
        extreme.debt_ratio = 3.0;
        extreme.current_ratio = 40.0;
        extreme.roa = 9.9;
        extreme.history = vec![
            RevenueObservation {
                year: "2023".to_string(),
                revenue: 1.0,
            },
            RevenueObservation {
                year: "2024".to_string(),
                revenue: 1.0e12,
            },
        ];

        let scores = normalizer.sub_scores(&extreme).unwrap();
        for (_, score) in scores.iter() {
            assert!((0.0..=100.0).contains(&score));
        }
    }

    #[test]
    fn test_deterministic() {
        let normalizer = MetricNormalizer::default();
        let first = normalizer.sub_scores(&apple()).unwrap();
        let second = normalizer.sub_scores(&apple()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_failure_yields_no_scores() {
        let normalizer = MetricNormalizer::default();
        let mut bad = apple();
        bad.history.truncate(1);
        assert!(normalizer.sub_scores(&bad).is_err());
    }

    #[test]
    fn test_config_round_trip_defaults() {
        let config = NormalizerConfig::default();
        assert_relative_eq!(config.profitability.margin_scale, 400.0);
        assert_relative_eq!(config.liquidity.baseline, 0.5);
        assert_relative_eq!(config.liquidity.scale, 50.0);
        assert_relative_eq!(config.leverage.scale, 100.0);
        assert_relative_eq!(config.efficiency.roa_scale, 500.0);
        assert_relative_eq!(config.growth.midpoint, 50.0);
        assert_relative_eq!(config.growth.scale, 200.0);
    }
}
