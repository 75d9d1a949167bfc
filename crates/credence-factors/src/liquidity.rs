//! Liquidity metric: scaled current ratio.

use credence_core::{Factor, FinancialStatement, Metric, Result, clamp_score};
use serde::{Deserialize, Serialize};

/// Configuration for the liquidity metric.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LiquidityConfig {
    /// Current ratio at which the score bottoms out.
    ///
    /// Below this ratio a company cannot cover near-term obligations; the
    /// default of 0.5 scores such balance sheets at 0.
    pub baseline: f64,

    /// Points awarded per unit of current ratio above the baseline.
    ///
    /// The default of 50 saturates the band at a current ratio of 2.5.
    pub scale: f64,
}

impl Default for LiquidityConfig {
    fn default() -> Self {
        Self {
            baseline: 0.5,
            scale: 50.0,
        }
    }
}

/// Liquidity metric.
///
/// Computes `(current_ratio - baseline) * scale`, clamped to the score band.
#[derive(Debug, Clone, Default)]
pub struct Liquidity {
    config: LiquidityConfig,
}

impl Liquidity {
    /// Create a liquidity metric with the given configuration.
    #[must_use]
    pub const fn new(config: LiquidityConfig) -> Self {
        Self { config }
    }
}

impl Metric for Liquidity {
    fn factor(&self) -> Factor {
        Factor::Liquidity
    }

    fn score(&self, statement: &FinancialStatement) -> Result<f64> {
        Ok(clamp_score(
            (statement.current_ratio - self.config.baseline) * self.config.scale,
        ))
    }

    fn required_fields(&self) -> &[&'static str] {
        &["currentRatio"]
    }
}
