//! The five scoring factors and their metadata.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A scoring factor: one dimension of credit quality derived from a
/// financial statement.
///
/// Each factor reads one raw ratio from the statement and is normalized to a
/// sub-score in `[0, 100]` before weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    /// Net margin (net income / revenue).
    #[display("profitability")]
    Profitability,
    /// Current ratio (current assets / current liabilities).
    #[display("liquidity")]
    Liquidity,
    /// Inverse debt ratio; higher score means less leveraged.
    #[display("leverage")]
    Leverage,
    /// Return on assets.
    #[display("efficiency")]
    Efficiency,
    /// Year-over-year revenue growth.
    #[display("growth")]
    Growth,
}

impl Factor {
    /// All factors, in the canonical reporting order.
    pub const ALL: [Self; 5] = [
        Self::Profitability,
        Self::Liquidity,
        Self::Leverage,
        Self::Efficiency,
        Self::Growth,
    ];

    /// Get a human-readable description of the underlying ratio.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Profitability => "Net margin: net income relative to revenue",
            Self::Liquidity => "Current ratio: short-term assets covering short-term debt",
            Self::Leverage => "Inverse debt ratio: balance sheet headroom",
            Self::Efficiency => "Return on assets: income generated per unit of assets",
            Self::Growth => "Revenue growth: change between the two latest fiscal years",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_factors() {
        assert_eq!(Factor::ALL.len(), 5);
        assert_eq!(Factor::ALL[0], Factor::Profitability);
        assert_eq!(Factor::ALL[4], Factor::Growth);
    }

    #[test]
    fn test_display() {
        assert_eq!(Factor::Profitability.to_string(), "profitability");
        assert_eq!(Factor::Leverage.to_string(), "leverage");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Factor::Efficiency).unwrap();
        assert_eq!(json, "\"efficiency\"");

        let back: Factor = serde_json::from_str("\"growth\"").unwrap();
        assert_eq!(back, Factor::Growth);
    }

    #[test]
    fn test_descriptions() {
        for factor in Factor::ALL {
            assert!(!factor.description().is_empty());
        }
    }
}
