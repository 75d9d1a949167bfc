//! The scoring engine facade.
//!
//! Validates input at the system boundary, then runs normalize -> combine ->
//! classify. No sub-score is computed for invalid input and no partial result
//! ever leaves the engine.

use credence_combine::{CompositeScorer, FactorWeights};
use credence_core::{FinancialStatement, Result, StatementRecord};
use credence_factors::{MetricNormalizer, NormalizerConfig};
use credence_rating::{GradeBands, RiskBands};
use serde::{Deserialize, Serialize};

use crate::report::ScoreReport;

/// Full scoring policy: metric scaling, factor weights, classification bands.
///
/// Every number the engine uses lives here, so an alternative policy is a
/// config value, not a code change. The default reproduces the standard
/// policy.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnginePolicy {
    /// Per-factor scaling configuration.
    pub normalizer: NormalizerConfig,
    /// Factor weight table.
    pub weights: FactorWeights,
    /// Letter grade cut points.
    pub grades: GradeBands,
    /// Risk tier cut points.
    pub risk: RiskBands,
}

/// Scores financial statements under a fixed, validated policy.
///
/// The engine is pure and stateless: nothing persists between calls and a
/// single instance may score concurrently from multiple threads.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    normalizer: MetricNormalizer,
    scorer: CompositeScorer,
    grades: GradeBands,
    risk: RiskBands,
}

impl ScoringEngine {
    /// Create an engine from a policy.
    ///
    /// # Errors
    ///
    /// Returns [`CredenceError::InvalidConfiguration`] when the weight table
    /// or either band table is malformed. A live engine can therefore never
    /// score under a bad policy.
    ///
    /// [`CredenceError::InvalidConfiguration`]: credence_core::CredenceError::InvalidConfiguration
    pub fn new(policy: EnginePolicy) -> Result<Self> {
        policy.grades.validate()?;
        policy.risk.validate()?;
        Ok(Self {
            normalizer: MetricNormalizer::new(policy.normalizer),
            scorer: CompositeScorer::new(policy.weights)?,
            grades: policy.grades,
            risk: policy.risk,
        })
    }

    /// Score a validated statement.
    ///
    /// The statement is re-validated at this boundary; callers holding a
    /// `FinancialStatement` they built by hand get the same contract checks
    /// as callers coming through [`ScoringEngine::score_record`].
    ///
    /// # Errors
    ///
    /// Any contract violation or undefined ratio surfaces as the structured
    /// error taxonomy of [`credence_core::CredenceError`].
    pub fn score_statement(&self, statement: &FinancialStatement) -> Result<ScoreReport> {
        statement.validate()?;
        let breakdown = self.normalizer.sub_scores(statement)?;
        let score = self.scorer.score(&breakdown)?;
        Ok(ScoreReport {
            score,
            grade: self.grades.classify(score),
            risk_tier: self.risk.classify(score),
            breakdown,
        })
    }

    /// Validate a raw record and score it.
    ///
    /// This is the boundary entry point: a missing or malformed field fails
    /// here with the offending field named, before any sub-score is computed.
    ///
    /// # Errors
    ///
    /// See [`ScoringEngine::score_statement`].
    pub fn score_record(&self, record: StatementRecord) -> Result<ScoreReport> {
        let statement = FinancialStatement::try_from(record)?;
        self.score_statement(&statement)
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        // The default policy always validates.
        Self {
            normalizer: MetricNormalizer::default(),
            scorer: CompositeScorer::default(),
            grades: GradeBands::default(),
            risk: RiskBands::default(),
        }
    }
}
