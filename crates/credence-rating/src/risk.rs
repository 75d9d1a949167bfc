//! Risk tiers and the score bands that assign them.

use credence_core::{CredenceError, Result};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Coarse qualitative risk bucket derived from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display)]
pub enum RiskTier {
    /// Scores in the top band.
    #[display("Low Risk")]
    Low,
    /// Scores in the middle band.
    #[display("Medium Risk")]
    Medium,
    /// Everything below the middle band.
    #[display("High Risk")]
    High,
}

/// Minimum scores for the low and medium tiers; anything below `medium_min`
/// is high risk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskBands {
    /// Minimum score for [`RiskTier::Low`].
    pub low_min: u8,
    /// Minimum score for [`RiskTier::Medium`].
    pub medium_min: u8,
}

impl Default for RiskBands {
    fn default() -> Self {
        Self {
            low_min: 80,
            medium_min: 60,
        }
    }
}

impl RiskBands {
    /// Check that the cut points are strictly descending and within the
    /// score band.
    ///
    /// # Errors
    ///
    /// Returns [`CredenceError::InvalidConfiguration`] for overlapping or
    /// out-of-range cut points.
    pub fn validate(&self) -> Result<()> {
        if self.low_min > 100 {
            return Err(CredenceError::invalid_configuration(format!(
                "risk cut point low_min={} exceeds the score ceiling",
                self.low_min
            )));
        }
        if self.low_min <= self.medium_min {
            return Err(CredenceError::invalid_configuration(format!(
                "risk cut points must be strictly descending, got {} / {}",
                self.low_min, self.medium_min
            )));
        }
        if self.medium_min == 0 {
            return Err(CredenceError::invalid_configuration(
                "risk cut point medium_min=0 leaves no scores in the high-risk band",
            ));
        }
        Ok(())
    }

    /// Assign the risk tier for a score. Total over `0..=100`.
    #[must_use]
    pub const fn classify(&self, score: u8) -> RiskTier {
        if score >= self.low_min {
            RiskTier::Low
        } else if score >= self.medium_min {
            RiskTier::Medium
        } else {
            RiskTier::High
        }
    }
}
