//! Error types for the Credence scoring engine.
//!
//! Every failure the engine can produce is a variant of [`CredenceError`],
//! carrying the offending field or configuration detail so callers can report
//! it without parsing message strings. A failed computation never yields a
//! numeric score.

use thiserror::Error;

/// The main error type for Credence operations.
#[derive(Debug, Error)]
pub enum CredenceError {
    /// A required numeric field is missing, non-finite, or makes a
    /// computation undefined (e.g. a zero revenue denominator).
    #[error("invalid input for `{field}`: {reason}")]
    InvalidInput {
        /// Name of the offending statement field.
        field: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// Too few revenue observations to derive a growth rate.
    #[error("insufficient revenue history: need at least {needed} observations, got {got}")]
    InsufficientHistory {
        /// Minimum number of observations required.
        needed: usize,
        /// Number of observations supplied.
        got: usize,
    },

    /// Revenue history violates the ascending chronological-order contract.
    #[error("revenue history out of chronological order at year `{year}`")]
    UnorderedHistory {
        /// The first year label found out of order.
        year: String,
    },

    /// A supplied weight table or threshold table is malformed.
    #[error("invalid scoring configuration: {reason}")]
    InvalidConfiguration {
        /// What was wrong with the configuration.
        reason: String,
    },
}

impl CredenceError {
    /// Shorthand for a [`CredenceError::InvalidInput`] on a named field.
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Shorthand for a [`CredenceError::InvalidConfiguration`].
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

/// A specialized Result type for Credence operations.
///
/// This is a convenience type that uses [`CredenceError`] as the error type.
pub type Result<T> = std::result::Result<T, CredenceError>;
