//! Factor registry for discovering and describing available metrics.

use credence_core::Factor;
use serde::Serialize;

/// Metadata about a scoring metric.
#[derive(Debug, Clone, Serialize)]
pub struct FactorInfo {
    /// The factor this metric scores.
    pub factor: Factor,

    /// The raw ratio the metric reads.
    pub ratio: &'static str,

    /// Human-readable description of the transform.
    pub description: &'static str,

    /// Statement fields the metric reads.
    pub required_fields: &'static [&'static str],

    /// Whether the metric needs the revenue history.
    pub requires_history: bool,
}

/// Get information about a specific factor.
#[must_use]
pub const fn factor_info(factor: Factor) -> FactorInfo {
    match factor {
        Factor::Profitability => FactorInfo {
            factor,
            ratio: "net margin",
            description: "Net margin scaled onto the score band; saturates at a 25% margin",
            required_fields: &["netIncome", "revenue"],
            requires_history: false,
        },
        Factor::Liquidity => FactorInfo {
            factor,
            ratio: "current ratio",
            description: "Current ratio above a 0.5 floor; saturates at 2.5",
            required_fields: &["currentRatio"],
            requires_history: false,
        },
        Factor::Leverage => FactorInfo {
            factor,
            ratio: "debt ratio",
            description: "Inverse debt ratio; a debt-free balance sheet scores full marks",
            required_fields: &["debtRatio"],
            requires_history: false,
        },
        Factor::Efficiency => FactorInfo {
            factor,
            ratio: "return on assets",
            description: "Return on assets scaled onto the score band; saturates at 20%",
            required_fields: &["roa"],
            requires_history: false,
        },
        Factor::Growth => FactorInfo {
            factor,
            ratio: "revenue growth",
            description: "Year-over-year revenue change around a flat-revenue midpoint of 50",
            required_fields: &["historicalData"],
            requires_history: true,
        },
    }
}

/// Get information about all available metrics, in canonical order.
#[must_use]
pub fn available_factors() -> Vec<FactorInfo> {
    Factor::ALL.into_iter().map(factor_info).collect()
}
