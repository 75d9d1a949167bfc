//! Profitability metric: scaled net margin.

use credence_core::{Factor, FinancialStatement, Metric, Result, clamp_score};
use serde::{Deserialize, Serialize};

/// Configuration for the profitability metric.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProfitabilityConfig {
    /// Multiplier applied to net margin before clamping.
    ///
    /// The default of 400 places a healthy ~12% net margin near the middle of
    /// the score band and saturates at a 25% margin.
    pub margin_scale: f64,
}

impl Default for ProfitabilityConfig {
    fn default() -> Self {
        Self { margin_scale: 400.0 }
    }
}

/// Profitability metric.
///
/// Computes `net_margin * margin_scale`, clamped to the score band. Net
/// margin is net income over revenue; a loss-making company floors at 0.
#[derive(Debug, Clone, Default)]
pub struct Profitability {
    config: ProfitabilityConfig,
}

impl Profitability {
    /// Create a profitability metric with the given configuration.
    #[must_use]
    pub const fn new(config: ProfitabilityConfig) -> Self {
        Self { config }
    }

    /// Get the configured margin multiplier.
    #[must_use]
    pub const fn margin_scale(&self) -> f64 {
        self.config.margin_scale
    }
}

impl Metric for Profitability {
    fn factor(&self) -> Factor {
        Factor::Profitability
    }

    fn score(&self, statement: &FinancialStatement) -> Result<f64> {
        let margin = statement.net_margin()?;
        Ok(clamp_score(margin * self.config.margin_scale))
    }

    fn required_fields(&self) -> &[&'static str] {
        &["netIncome", "revenue"]
    }
}
