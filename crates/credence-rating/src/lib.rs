#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/credence-risk/credence/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Score classification for the Credence engine.
//!
//! [`GradeBands`] and [`RiskBands`] are explicit threshold tables mapping the
//! composite score onto a letter [`Grade`] and a [`RiskTier`].

mod grade;
mod risk;

// Re-export main types
pub use grade::{Grade, GradeBands};
pub use risk::{RiskBands, RiskTier};
