//! Efficiency metric: scaled return on assets.

use credence_core::{Factor, FinancialStatement, Metric, Result, clamp_score};
use serde::{Deserialize, Serialize};

/// Configuration for the efficiency metric.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EfficiencyConfig {
    /// Multiplier applied to return on assets before clamping.
    ///
    /// The default of 500 saturates the band at 20% ROA, a level few
    /// non-financial companies sustain.
    pub roa_scale: f64,
}

impl Default for EfficiencyConfig {
    fn default() -> Self {
        Self { roa_scale: 500.0 }
    }
}

/// Efficiency metric.
///
/// Computes `roa * roa_scale`, clamped to the score band.
#[derive(Debug, Clone, Default)]
pub struct Efficiency {
    config: EfficiencyConfig,
}

impl Efficiency {
    /// Create an efficiency metric with the given configuration.
    #[must_use]
    pub const fn new(config: EfficiencyConfig) -> Self {
        Self { config }
    }
}

impl Metric for Efficiency {
    fn factor(&self) -> Factor {
        Factor::Efficiency
    }

    fn score(&self, statement: &FinancialStatement) -> Result<f64> {
        Ok(clamp_score(statement.roa * self.config.roa_scale))
    }

    fn required_fields(&self) -> &[&'static str] {
        &["roa"]
    }
}
