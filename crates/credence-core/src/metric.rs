//! Metric trait for normalizing statement ratios into sub-scores.

use crate::error::Result;
use crate::factor::Factor;
use crate::statement::FinancialStatement;

/// A metric that scores one factor of a financial statement.
///
/// Implementations read a single raw ratio from the statement and map it onto
/// the bounded score band (see [`clamp_score`](crate::scores::clamp_score)).
/// Implementations must be pure and thread-safe (`Send + Sync`); a metric
/// holds configuration, never per-call state.
pub trait Metric: Send + Sync {
    /// The factor this metric scores.
    fn factor(&self) -> Factor;

    /// Compute the bounded sub-score for a statement.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying ratio is undefined for the given
    /// statement (e.g. a zero denominator or missing history). Implementations
    /// must fail rather than emit NaN or an out-of-band value.
    fn score(&self, statement: &FinancialStatement) -> Result<f64>;

    /// Statement fields this metric reads, for diagnostics and listings.
    fn required_fields(&self) -> &[&'static str];
}
