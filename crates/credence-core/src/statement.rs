//! The financial statement input contract.
//!
//! [`StatementRecord`] is the raw boundary shape: every field optional, so a
//! missing field surfaces as a structured [`CredenceError::InvalidInput`]
//! naming the field instead of a deserialization error. [`FinancialStatement`]
//! is the validated form the scoring pipeline consumes.

use serde::{Deserialize, Serialize};

use crate::error::{CredenceError, Result};

/// One annual revenue observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueObservation {
    /// Fiscal year label, e.g. `"2024"`. Labels are opaque but must be
    /// supplied in ascending order.
    pub year: String,
    /// Total revenue for that year.
    pub revenue: f64,
}

/// Raw statement record as supplied by a caller.
///
/// This mirrors the upstream JSON contract (camelCase keys). Convert to a
/// [`FinancialStatement`] with [`TryFrom`] to validate it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatementRecord {
    /// Total revenue, most recent fiscal year.
    pub revenue: Option<f64>,
    /// Net income, most recent fiscal year.
    pub net_income: Option<f64>,
    /// Total assets.
    pub total_assets: Option<f64>,
    /// Total debt.
    pub total_debt: Option<f64>,
    /// Current assets over current liabilities.
    pub current_ratio: Option<f64>,
    /// Total debt over total assets, expected in `[0, 1]`.
    pub debt_ratio: Option<f64>,
    /// Return on assets.
    pub roa: Option<f64>,
    /// Annual revenue history, ascending by year.
    pub historical_data: Vec<RevenueObservation>,
}

/// A validated financial statement, immutable per scoring call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialStatement {
    /// Total revenue, most recent fiscal year. Always positive.
    pub revenue: f64,
    /// Net income, most recent fiscal year. May be negative.
    pub net_income: f64,
    /// Total assets. Non-negative.
    pub total_assets: f64,
    /// Total debt. Non-negative.
    pub total_debt: f64,
    /// Current assets over current liabilities. Non-negative.
    pub current_ratio: f64,
    /// Total debt over total assets. Non-negative, expected in `[0, 1]`.
    pub debt_ratio: f64,
    /// Return on assets. Non-negative.
    pub roa: f64,
    /// Annual revenue history, ascending by year, at least two entries.
    #[serde(rename = "historicalData")]
    pub history: Vec<RevenueObservation>,
}

/// Minimum number of revenue observations needed to derive growth.
pub const MIN_HISTORY: usize = 2;

impl FinancialStatement {
    /// Check the full input contract.
    ///
    /// # Errors
    ///
    /// Returns [`CredenceError::InvalidInput`] for a non-finite or
    /// out-of-domain field, [`CredenceError::InsufficientHistory`] when fewer
    /// than [`MIN_HISTORY`] observations are supplied, and
    /// [`CredenceError::UnorderedHistory`] when year labels are not strictly
    /// ascending.
    pub fn validate(&self) -> Result<()> {
        require_finite("revenue", self.revenue)?;
        if self.revenue <= 0.0 {
            return Err(CredenceError::invalid_input("revenue", "must be positive"));
        }
        require_finite("netIncome", self.net_income)?;
        require_non_negative("totalAssets", self.total_assets)?;
        require_non_negative("totalDebt", self.total_debt)?;
        require_non_negative("currentRatio", self.current_ratio)?;
        require_non_negative("debtRatio", self.debt_ratio)?;
        require_non_negative("roa", self.roa)?;

        if self.history.len() < MIN_HISTORY {
            return Err(CredenceError::InsufficientHistory {
                needed: MIN_HISTORY,
                got: self.history.len(),
            });
        }
        for obs in &self.history {
            require_non_negative("historicalData.revenue", obs.revenue)?;
        }
        for pair in self.history.windows(2) {
            if pair[1].year <= pair[0].year {
                return Err(CredenceError::UnorderedHistory {
                    year: pair[1].year.clone(),
                });
            }
        }
        Ok(())
    }

    /// Net margin: net income relative to revenue.
    ///
    /// # Errors
    ///
    /// Returns [`CredenceError::InvalidInput`] when revenue is not positive,
    /// since the ratio is undefined there.
    pub fn net_margin(&self) -> Result<f64> {
        if self.revenue <= 0.0 {
            return Err(CredenceError::invalid_input(
                "revenue",
                "must be positive to derive net margin",
            ));
        }
        Ok(self.net_income / self.revenue)
    }

    /// Fractional revenue change between the two latest observations.
    ///
    /// # Errors
    ///
    /// Returns [`CredenceError::InsufficientHistory`] with fewer than two
    /// observations and [`CredenceError::InvalidInput`] when the prior
    /// year's revenue is zero (the growth rate is undefined).
    pub fn revenue_growth(&self) -> Result<f64> {
        if self.history.len() < MIN_HISTORY {
            return Err(CredenceError::InsufficientHistory {
                needed: MIN_HISTORY,
                got: self.history.len(),
            });
        }
        let latest = &self.history[self.history.len() - 1];
        let prior = &self.history[self.history.len() - 2];
        if prior.revenue <= 0.0 {
            return Err(CredenceError::invalid_input(
                "historicalData.revenue",
                format!("revenue for {} must be positive to derive growth", prior.year),
            ));
        }
        Ok((latest.revenue - prior.revenue) / prior.revenue)
    }
}

impl TryFrom<StatementRecord> for FinancialStatement {
    type Error = CredenceError;

    fn try_from(record: StatementRecord) -> Result<Self> {
        let statement = Self {
            revenue: require_present("revenue", record.revenue)?,
            net_income: require_present("netIncome", record.net_income)?,
            total_assets: require_present("totalAssets", record.total_assets)?,
            total_debt: require_present("totalDebt", record.total_debt)?,
            current_ratio: require_present("currentRatio", record.current_ratio)?,
            debt_ratio: require_present("debtRatio", record.debt_ratio)?,
            roa: require_present("roa", record.roa)?,
            history: record.historical_data,
        };
        statement.validate()?;
        Ok(statement)
    }
}

fn require_present(field: &'static str, value: Option<f64>) -> Result<f64> {
    value.ok_or_else(|| CredenceError::invalid_input(field, "missing"))
}

fn require_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CredenceError::invalid_input(field, "must be a finite number"))
    }
}

fn require_non_negative(field: &'static str, value: f64) -> Result<()> {
    require_finite(field, value)?;
    if value < 0.0 {
        return Err(CredenceError::invalid_input(field, "must be non-negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn observations(revenues: &[(&str, f64)]) -> Vec<RevenueObservation> {
        revenues
            .iter()
            .map(|(year, revenue)| RevenueObservation {
                year: (*year).to_string(),
                revenue: *revenue,
            })
            .collect()
    }

    fn apple() -> FinancialStatement {
        FinancialStatement {
            revenue: 394_328_000_000.0,
            net_income: 99_803_000_000.0,
            total_assets: 352_755_000_000.0,
            total_debt: 123_930_000_000.0,
            current_ratio: 1.07,
            debt_ratio: 0.351,
            roa: 0.283,
            history: observations(&[
                ("2023", 383_285_000_000.0),
                ("2024", 394_328_000_000.0),
            ]),
        }
    }

    #[test]
    fn test_valid_statement() {
        assert!(apple().validate().is_ok());
    }

    #[test]
    fn test_net_margin() {
        let margin = apple().net_margin().unwrap();
        assert_relative_eq!(margin, 99_803.0 / 394_328.0, epsilon = 1e-12);
    }

    #[test]
    fn test_revenue_growth() {
        let growth = apple().revenue_growth().unwrap();
        assert_relative_eq!(growth, 11_043.0 / 383_285.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_revenue_rejected() {
        let mut statement = apple();
        statement.revenue = 0.0;
        let err = statement.validate().unwrap_err();
        assert!(matches!(
            err,
            CredenceError::InvalidInput { field: "revenue", .. }
        ));
        assert!(statement.net_margin().is_err());
    }

    #[test]
    fn test_non_finite_field_rejected() {
        let mut statement = apple();
        statement.roa = f64::NAN;
        assert!(statement.validate().is_err());

        let mut statement = apple();
        statement.net_income = f64::INFINITY;
        assert!(statement.validate().is_err());
    }

    #[test]
    fn test_negative_net_income_allowed() {
        let mut statement = apple();
        statement.net_income = -5_000_000_000.0;
        assert!(statement.validate().is_ok());
    }

    #[test]
    fn test_short_history_rejected() {
        let mut statement = apple();
        statement.history = observations(&[("2024", 394_328_000_000.0)]);
        let err = statement.validate().unwrap_err();
        assert!(matches!(
            err,
            CredenceError::InsufficientHistory { needed: 2, got: 1 }
        ));

        statement.history.clear();
        let err = statement.validate().unwrap_err();
        assert!(matches!(
            err,
            CredenceError::InsufficientHistory { needed: 2, got: 0 }
        ));
    }

    #[test]
    fn test_exactly_two_observations_accepted() {
        let statement = apple();
        assert_eq!(statement.history.len(), 2);
        assert!(statement.validate().is_ok());
    }

    #[test]
    fn test_unordered_history_rejected() {
        let mut statement = apple();
        statement.history = observations(&[
            ("2024", 394_328_000_000.0),
            ("2023", 383_285_000_000.0),
        ]);
        let err = statement.validate().unwrap_err();
        match err {
            CredenceError::UnorderedHistory { year } => assert_eq!(year, "2023"),
            other => panic!("expected UnorderedHistory, got {other}"),
        }
    }

    #[test]
    fn test_duplicate_year_rejected() {
        let mut statement = apple();
        statement.history = observations(&[
            ("2024", 383_285_000_000.0),
            ("2024", 394_328_000_000.0),
        ]);
        assert!(matches!(
            statement.validate(),
            Err(CredenceError::UnorderedHistory { .. })
        ));
    }

    #[test]
    fn test_zero_prior_revenue_growth_undefined() {
        let mut statement = apple();
        statement.history = observations(&[("2023", 0.0), ("2024", 100.0)]);
        assert!(statement.validate().is_ok());
        assert!(matches!(
            statement.revenue_growth(),
            Err(CredenceError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_record_missing_field_names_it() {
        let record = StatementRecord {
            revenue: Some(100.0),
            ..Default::default()
        };
        let err = FinancialStatement::try_from(record).unwrap_err();
        assert!(matches!(
            err,
            CredenceError::InvalidInput { field: "netIncome", .. }
        ));
    }

    #[test]
    fn test_record_from_json() {
        let json = r#"{
            "revenue": 394328000000,
            "netIncome": 99803000000,
            "totalAssets": 352755000000,
            "totalDebt": 123930000000,
            "currentRatio": 1.07,
            "debtRatio": 0.351,
            "roa": 0.283,
            "historicalData": [
                {"year": "2023", "revenue": 383285000000},
                {"year": "2024", "revenue": 394328000000}
            ]
        }"#;
        let record: StatementRecord = serde_json::from_str(json).unwrap();
        let statement = FinancialStatement::try_from(record).unwrap();
        assert_relative_eq!(statement.current_ratio, 1.07);
        assert_eq!(statement.history.len(), 2);
        assert_eq!(statement.history[1].year, "2024");
    }
}
