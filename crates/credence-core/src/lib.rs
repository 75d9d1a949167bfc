#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/credence-risk/credence/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Shared foundation for the Credence credit scoring engine.
//!
//! This crate holds the statement input contract, the five scoring factors,
//! the sub-score container, and the error taxonomy used across the Credence
//! workspace.

/// The version of the credence-core crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod factor;
pub mod metric;
pub mod scores;
pub mod statement;

// Re-exports
pub use error::{CredenceError, Result};
pub use factor::Factor;
pub use metric::Metric;
pub use scores::{FactorScores, SCORE_CEILING, SCORE_FLOOR, clamp_score};
pub use statement::{FinancialStatement, MIN_HISTORY, RevenueObservation, StatementRecord};
