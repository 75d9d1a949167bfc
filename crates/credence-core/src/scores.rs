//! Sub-score container produced by metric normalization.

use serde::{Deserialize, Serialize};

use crate::factor::Factor;

/// Lower bound of every sub-score and of the composite score.
pub const SCORE_FLOOR: f64 = 0.0;

/// Upper bound of every sub-score and of the composite score.
pub const SCORE_CEILING: f64 = 100.0;

/// Clamp a raw scaled value onto the score band.
#[must_use]
pub fn clamp_score(value: f64) -> f64 {
    value.clamp(SCORE_FLOOR, SCORE_CEILING)
}

/// The five normalized sub-scores for a single statement.
///
/// Each field holds the bounded `[0, 100]` contribution of one [`Factor`]
/// before weighting. The container is transient: it is built fresh per
/// scoring request and returned to the caller alongside the composite score
/// so breakdown views can render it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorScores {
    /// Sub-score for [`Factor::Profitability`].
    pub profitability: f64,
    /// Sub-score for [`Factor::Liquidity`].
    pub liquidity: f64,
    /// Sub-score for [`Factor::Leverage`].
    pub leverage: f64,
    /// Sub-score for [`Factor::Efficiency`].
    pub efficiency: f64,
    /// Sub-score for [`Factor::Growth`].
    pub growth: f64,
}

impl FactorScores {
    /// Get the sub-score for a factor.
    #[must_use]
    pub const fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::Profitability => self.profitability,
            Factor::Liquidity => self.liquidity,
            Factor::Leverage => self.leverage,
            Factor::Efficiency => self.efficiency,
            Factor::Growth => self.growth,
        }
    }

    /// Iterate over `(factor, sub-score)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Factor, f64)> + '_ {
        Factor::ALL.into_iter().map(|f| (f, self.get(f)))
    }
}
