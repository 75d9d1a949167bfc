//! Weighted composite scorer.

use credence_core::{CredenceError, FactorScores, Result, SCORE_CEILING, SCORE_FLOOR};

use crate::weights::FactorWeights;

/// Reduces a sub-score set to a single integer credit score.
///
/// Construction validates the weight table, so a live scorer can never
/// combine under malformed weights.
#[derive(Debug, Clone)]
pub struct CompositeScorer {
    weights: FactorWeights,
}

impl CompositeScorer {
    /// Create a scorer over a validated weight table.
    ///
    /// # Errors
    ///
    /// Returns [`CredenceError::InvalidConfiguration`] when the table has a
    /// negative weight or does not sum to 1.
    pub fn new(weights: FactorWeights) -> Result<Self> {
        weights.validate()?;
        Ok(Self { weights })
    }

    /// The weight table in force.
    #[must_use]
    pub const fn weights(&self) -> &FactorWeights {
        &self.weights
    }

    /// Combine sub-scores into the composite credit score.
    ///
    /// The weighted sum is rounded half-away-from-zero (`f64::round`) and
    /// clamped to `[0, 100]`; with bounded sub-scores and unit weights the
    /// clamp is a no-op, but the bound holds regardless of what the caller
    /// supplies.
    ///
    /// # Errors
    ///
    /// Returns [`CredenceError::InvalidInput`] when a sub-score is not a
    /// finite number. A non-finite value must surface as an error, never as a
    /// score.
    pub fn score(&self, scores: &FactorScores) -> Result<u8> {
        for (factor, score) in scores.iter() {
            if !score.is_finite() {
                return Err(CredenceError::invalid_input(
                    "subScores",
                    format!("sub-score for {factor} is not a finite number"),
                ));
            }
        }

        let weighted: f64 = scores
            .iter()
            .map(|(factor, score)| score * self.weights.get(factor))
            .sum();

        let bounded = weighted.round().clamp(SCORE_FLOOR, SCORE_CEILING);
        Ok(bounded as u8)
    }
}

impl Default for CompositeScorer {
    fn default() -> Self {
        // The default table always validates.
        Self {
            weights: FactorWeights::default(),
        }
    }
}
