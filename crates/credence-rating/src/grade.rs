//! Letter grades and the score bands that assign them.

use credence_core::{CredenceError, Result};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Letter grade derived from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display)]
pub enum Grade {
    /// Top band.
    #[display("A")]
    A,
    /// Strong.
    #[display("B")]
    B,
    /// Adequate.
    #[display("C")]
    C,
    /// Weak.
    #[display("D")]
    D,
    /// Failing.
    #[display("F")]
    F,
}

/// Minimum scores for each passing grade; anything below `d_min` is an F.
///
/// Cut points are fixed configuration, validated at construction, never
/// inferred per call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradeBands {
    /// Minimum score for an A.
    pub a_min: u8,
    /// Minimum score for a B.
    pub b_min: u8,
    /// Minimum score for a C.
    pub c_min: u8,
    /// Minimum score for a D.
    pub d_min: u8,
}

impl Default for GradeBands {
    fn default() -> Self {
        Self {
            a_min: 90,
            b_min: 80,
            c_min: 70,
            d_min: 60,
        }
    }
}

impl GradeBands {
    /// Check that the cut points are strictly descending and within the
    /// score band.
    ///
    /// # Errors
    ///
    /// Returns [`CredenceError::InvalidConfiguration`] for overlapping or
    /// out-of-range cut points.
    pub fn validate(&self) -> Result<()> {
        if self.a_min > 100 {
            return Err(CredenceError::invalid_configuration(format!(
                "grade cut point a_min={} exceeds the score ceiling",
                self.a_min
            )));
        }
        if !(self.a_min > self.b_min && self.b_min > self.c_min && self.c_min > self.d_min) {
            return Err(CredenceError::invalid_configuration(format!(
                "grade cut points must be strictly descending, got {} / {} / {} / {}",
                self.a_min, self.b_min, self.c_min, self.d_min
            )));
        }
        if self.d_min == 0 {
            return Err(CredenceError::invalid_configuration(
                "grade cut point d_min=0 leaves no scores in the F band",
            ));
        }
        Ok(())
    }

    /// Assign the letter grade for a score. Total over `0..=100`.
    #[must_use]
    pub const fn classify(&self, score: u8) -> Grade {
        if score >= self.a_min {
            Grade::A
        } else if score >= self.b_min {
            Grade::B
        } else if score >= self.c_min {
            Grade::C
        } else if score >= self.d_min {
            Grade::D
        } else {
            Grade::F
        }
    }
}
