#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/credence-risk/credence/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # credence
//!
//! Credit risk scoring engine for company financial statements.
//!
//! credence is an umbrella crate that re-exports all credence sub-crates and
//! hosts the [`ScoringEngine`] facade.
//!
//! ## Architecture
//!
//! The pipeline has four stages, each a crate:
//!
//! 1. **Contract** ([`credence_core`]): validated statement input, factor
//!    and sub-score types, error taxonomy.
//! 2. **Normalize** ([`factors`]): each raw ratio becomes a bounded
//!    sub-score in `[0, 100]` via a configurable linear scale.
//! 3. **Combine** ([`combine`]): a validated weight table reduces the
//!    sub-scores to one integer score.
//! 4. **Classify** ([`rating`]): explicit band tables annotate the score
//!    with a letter grade and a risk tier.
//!
//! The whole pipeline is pure and synchronous. There is no I/O, no shared
//! mutable state, and no per-call allocation beyond the report itself, so an
//! engine can be shared freely across threads.

/// Version information for the credence crate.
///
/// This constant contains the current version of credence as specified in
/// Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Sub-crate namespaces
// ============================================================================

/// Metric normalizers.
///
/// Re-exports [`credence_factors`]: the five per-factor metrics, their
/// configuration, the [`MetricNormalizer`] aggregate, and the factor
/// registry.
pub mod factors {
    pub use credence_factors::*;
}

/// Composite scoring.
///
/// Re-exports [`credence_combine`]: the [`FactorWeights`] table and the
/// [`CompositeScorer`](credence_combine::CompositeScorer).
pub mod combine {
    pub use credence_combine::*;
}

/// Score classification.
///
/// Re-exports [`credence_rating`]: [`Grade`]/[`RiskTier`] and their band
/// tables.
pub mod rating {
    pub use credence_rating::*;
}

// Engine facade
mod engine;
mod report;

pub use engine::{EnginePolicy, ScoringEngine};
pub use report::ScoreReport;

// Re-export the contract types at top level for convenience
pub use credence_combine::FactorWeights;
pub use credence_core::{
    CredenceError, Factor, FactorScores, FinancialStatement, Metric, Result, RevenueObservation,
    StatementRecord,
};
pub use credence_factors::{MetricNormalizer, NormalizerConfig};
pub use credence_rating::{Grade, GradeBands, RiskBands, RiskTier};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert!(VERSION.contains('.'));
    }
}
