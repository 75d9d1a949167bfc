#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/credence-risk/credence/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Composite scoring for the Credence engine.
//!
//! [`FactorWeights`] is the validated weight table; [`CompositeScorer`]
//! reduces a sub-score set to one bounded integer score under it.

mod composite;
mod weights;

// Re-export main types
pub use composite::CompositeScorer;
pub use weights::{FactorWeights, WEIGHT_SUM_TOLERANCE};
