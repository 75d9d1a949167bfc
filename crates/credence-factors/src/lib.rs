#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/credence-risk/credence/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Metric normalizers for the Credence scoring engine.
//!
//! Each module converts one raw statement ratio into a bounded sub-score:
//! - [`profitability`]: net margin
//! - [`liquidity`]: current ratio
//! - [`leverage`]: inverse debt ratio
//! - [`efficiency`]: return on assets
//! - [`growth`]: year-over-year revenue change
//!
//! [`MetricNormalizer`] runs all five; [`registry`] exposes factor metadata.

pub mod efficiency;
pub mod growth;
pub mod leverage;
pub mod liquidity;
pub mod normalizer;
pub mod profitability;
pub mod registry;

// Re-export key types
pub use efficiency::{Efficiency, EfficiencyConfig};
pub use growth::{Growth, GrowthConfig};
pub use leverage::{Leverage, LeverageConfig};
pub use liquidity::{Liquidity, LiquidityConfig};
pub use normalizer::{MetricNormalizer, NormalizerConfig};
pub use profitability::{Profitability, ProfitabilityConfig};
pub use registry::{FactorInfo, available_factors, factor_info};
