//! Growth metric: year-over-year revenue change.

use credence_core::{Factor, FinancialStatement, Metric, Result, clamp_score};
use serde::{Deserialize, Serialize};

/// Configuration for the growth metric.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GrowthConfig {
    /// Score awarded for flat revenue.
    ///
    /// Growth is the only two-sided factor: shrinking revenue should pull the
    /// score below the midpoint, so flat sits in the middle of the band.
    pub midpoint: f64,

    /// Points per unit of fractional growth.
    ///
    /// The default of 200 saturates the band at +25% growth and floors it at
    /// -25%.
    pub scale: f64,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            midpoint: 50.0,
            scale: 200.0,
        }
    }
}

/// Growth metric.
///
/// Computes `midpoint + revenue_growth * scale`, clamped to the score band.
/// The growth rate is the fractional change between the two latest
/// chronological revenue observations.
#[derive(Debug, Clone, Default)]
pub struct Growth {
    config: GrowthConfig,
}

impl Growth {
    /// Create a growth metric with the given configuration.
    #[must_use]
    pub const fn new(config: GrowthConfig) -> Self {
        Self { config }
    }
}

impl Metric for Growth {
    fn factor(&self) -> Factor {
        Factor::Growth
    }

    fn score(&self, statement: &FinancialStatement) -> Result<f64> {
        let growth = statement.revenue_growth()?;
        Ok(clamp_score(self.config.midpoint + growth * self.config.scale))
    }

    fn required_fields(&self) -> &[&'static str] {
        &["historicalData"]
    }
}
