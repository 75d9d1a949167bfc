//! Factor weight table.

use credence_core::{CredenceError, Factor, Result};
use serde::{Deserialize, Serialize};

/// Tolerance for the unit-sum check on weight tables.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Weights assigned to each factor in the composite score.
///
/// A valid table has a non-negative weight for every factor and the weights
/// sum to 1 within [`WEIGHT_SUM_TOLERANCE`]. The struct form makes a missing
/// factor unrepresentable; [`FactorWeights::validate`] enforces the numeric
/// invariants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorWeights {
    /// Weight for [`Factor::Profitability`].
    pub profitability: f64,
    /// Weight for [`Factor::Liquidity`].
    pub liquidity: f64,
    /// Weight for [`Factor::Leverage`].
    pub leverage: f64,
    /// Weight for [`Factor::Efficiency`].
    pub efficiency: f64,
    /// Weight for [`Factor::Growth`].
    pub growth: f64,
}

impl Default for FactorWeights {
    /// The standard policy: profitability and leverage carry the most weight,
    /// efficiency and growth the least.
    fn default() -> Self {
        Self {
            profitability: 0.25,
            liquidity: 0.20,
            leverage: 0.25,
            efficiency: 0.15,
            growth: 0.15,
        }
    }
}

impl FactorWeights {
    /// Get the weight for a factor.
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

    /// Sum of all weights.
    #[must_use]
    pub fn sum(&self) -> f64 {
        Factor::ALL.into_iter().map(|f| self.get(f)).sum()
    }

    /// Check the weight-table invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CredenceError::InvalidConfiguration`] naming the offending
    /// factor when a weight is negative or non-finite, or reporting the
    /// actual sum when the weights do not sum to 1 within
    /// [`WEIGHT_SUM_TOLERANCE`].
    pub fn validate(&self) -> Result<()> {
        for factor in Factor::ALL {
            let weight = self.get(factor);
            if !weight.is_finite() || weight < 0.0 {
                return Err(CredenceError::invalid_configuration(format!(
                    "weight for {factor} must be a non-negative number, got {weight}"
                )));
            }
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(CredenceError::invalid_configuration(format!(
                "weights must sum to 1.0, got {sum}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_weights_are_valid() {
        let weights = FactorWeights::default();
        assert!(weights.validate().is_ok());
        assert_relative_eq!(weights.sum(), 1.0);
    }

    #[test]
    fn test_get_by_factor() {
        let weights = FactorWeights::default();
        assert_relative_eq!(weights.get(Factor::Profitability), 0.25);
        assert_relative_eq!(weights.get(Factor::Liquidity), 0.20);
        assert_relative_eq!(weights.get(Factor::Growth), 0.15);
    }

    #[test]
    fn test_bad_sum_rejected() {
        let weights = FactorWeights {
            profitability: 0.5,
            ..Default::default()
        };
        let err = weights.validate().unwrap_err();
        assert!(matches!(err, CredenceError::InvalidConfiguration { .. }));
        assert!(err.to_string().contains("sum"));
    }

    #[test]
    fn test_sum_within_tolerance_accepted() {
        let weights = FactorWeights {
            profitability: 0.25 + 5e-7,
            ..Default::default()
        };
        assert!(weights.validate().is_ok());
    }

    #[test]
    fn test_negative_weight_rejected() {
        let weights = FactorWeights {
            profitability: -0.1,
            liquidity: 0.55,
            ..Default::default()
        };
        let err = weights.validate().unwrap_err();
        assert!(err.to_string().contains("profitability"));
    }

    #[test]
    fn test_nan_weight_rejected() {
        let weights = FactorWeights {
            growth: f64::NAN,
            ..Default::default()
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let weights = FactorWeights::default();
        let json = serde_json::to_string(&weights).unwrap();
        let back: FactorWeights = serde_json::from_str(&json).unwrap();
        assert_eq!(weights, back);
    }
}
