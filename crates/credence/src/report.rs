//! The scoring result returned to callers.

use credence_core::FactorScores;
use credence_rating::{Grade, RiskTier};
use serde::{Deserialize, Serialize};

/// Complete result of scoring one statement.
///
/// Serializes with camelCase keys so the presentation layer can consume it
/// directly. The report carries only what this engine computes; sibling
/// fields produced by external statistical services are merged by the caller,
/// never fabricated here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    /// Composite credit score in `[0, 100]`.
    pub score: u8,
    /// Letter grade for the score.
    pub grade: Grade,
    /// Risk tier for the score.
    pub risk_tier: RiskTier,
    /// Per-factor sub-scores, for breakdown views.
    pub breakdown: FactorScores,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_json_shape() {
        let report = ScoreReport {
            score: 70,
            grade: Grade::C,
            risk_tier: RiskTier::Medium,
            breakdown: FactorScores {
                profitability: 100.0,
                liquidity: 28.5,
                leverage: 64.9,
                efficiency: 100.0,
                growth: 55.76,
            },
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["score"], 70);
        assert_eq!(json["grade"], "C");
        assert_eq!(json["riskTier"], "Medium");
        assert_eq!(json["breakdown"]["leverage"], 64.9);

        // No fields from the external statistical service
        assert!(json.get("altman_z").is_none());
        assert!(json.get("baseScore").is_none());
    }

    #[test]
    fn test_report_round_trip() {
        let report = ScoreReport {
            score: 55,
            grade: Grade::F,
            risk_tier: RiskTier::High,
            breakdown: FactorScores {
                profitability: 10.0,
                liquidity: 55.0,
                leverage: 80.0,
                efficiency: 45.0,
                growth: 62.0,
            },
        };
        let json = serde_json::to_string(&report).unwrap();
        let back: ScoreReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, back);
    }
}
