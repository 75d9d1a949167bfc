//! Leverage metric: inverse debt ratio.

use credence_core::{Factor, FinancialStatement, Metric, Result, clamp_score};
use serde::{Deserialize, Serialize};

/// Configuration for the leverage metric.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LeverageConfig {
    /// Points awarded per unit of unleveraged balance sheet.
    ///
    /// With the default of 100, a debt-free company scores 100 and a company
    /// whose debt equals its assets scores 0.
    pub scale: f64,
}

impl Default for LeverageConfig {
    fn default() -> Self {
        Self { scale: 100.0 }
    }
}

/// Leverage metric.
///
/// Computes `(1 - debt_ratio) * scale`, clamped to the score band. Higher
/// score means less leveraged; a debt ratio above 1 floors at 0 rather than
/// going negative.
#[derive(Debug, Clone, Default)]
pub struct Leverage {
    config: LeverageConfig,
}

impl Leverage {
    /// Create a leverage metric with the given configuration.
    #[must_use]
    pub const fn new(config: LeverageConfig) -> Self {
        Self { config }
    }
}

impl Metric for Leverage {
    fn factor(&self) -> Factor {
        Factor::Leverage
    }

    fn score(&self, statement: &FinancialStatement) -> Result<f64> {
        Ok(clamp_score((1.0 - statement.debt_ratio) * self.config.scale))
    }

    fn required_fields(&self) -> &[&'static str] {
        &["debtRatio"]
    }
}
