//! Statement scoring command implementation.

use anyhow::{Context, Result, bail};
use credence::{ScoreReport, ScoringEngine, StatementRecord};
use serde::Deserialize;
use serde_json::json;
use std::fs;
use std::path::Path;

use crate::policy::load_policy;

/// A statement record with optional identity, as found in portfolio files.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompanyRecord {
    ticker: Option<String>,
    name: Option<String>,
    #[serde(flatten)]
    statement: StatementRecord,
}

impl CompanyRecord {
    fn label(&self, index: usize) -> String {
        self.ticker
            .clone()
            .or_else(|| self.name.clone())
            .unwrap_or_else(|| format!("#{}", index + 1))
    }
}

/// Input file shape: a single record or an array of company records.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ScoreInput {
    Many(Vec<CompanyRecord>),
    One(CompanyRecord),
}

/// Score every statement in the input file.
///
/// Follows batch semantics: a company that fails to score is reported and
/// skipped, and the command only fails when nothing scored at all.
pub(crate) fn run(input: &Path, policy_path: Option<&Path>, format: &str) -> Result<()> {
    let policy = load_policy(policy_path)?;
    let engine = ScoringEngine::new(policy)?;

    let text = fs::read_to_string(input)
        .with_context(|| format!("failed to read statement file {}", input.display()))?;
    let parsed: ScoreInput = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse statement file {}", input.display()))?;
    let companies = match parsed {
        ScoreInput::Many(companies) => companies,
        ScoreInput::One(company) => vec![company],
    };
    if companies.is_empty() {
        bail!("statement file {} holds no records", input.display());
    }

    let mut scored: Vec<(String, ScoreReport)> = Vec::with_capacity(companies.len());
    let mut failed: Vec<(String, String)> = Vec::new();

    for (index, company) in companies.into_iter().enumerate() {
        let label = company.label(index);
        match engine.score_record(company.statement) {
            Ok(report) => scored.push((label, report)),
            Err(e) => failed.push((label, e.to_string())),
        }
    }

    match format {
        "json" => print_json(&scored, &failed)?,
        "text" => print_text(&scored, &failed),
        other => bail!("unknown output format '{other}' (expected text or json)"),
    }

    if scored.is_empty() {
        bail!("no statement could be scored");
    }
    Ok(())
}

fn print_text(scored: &[(String, ScoreReport)], failed: &[(String, String)]) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Credit Score Report                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    for (label, report) in scored {
        println!(
            "{:10} score {:>3}   grade {}   {}",
            label, report.score, report.grade, report.risk_tier
        );
        for (factor, sub_score) in report.breakdown.iter() {
            let name = factor.to_string();
            println!("    {name:15} {sub_score:>6.1}");
        }
        println!();
    }

    if !failed.is_empty() {
        println!("Not scored:");
        for (label, reason) in failed {
            println!("  {label}: {reason}");
        }
        println!();
    }
}

fn print_json(scored: &[(String, ScoreReport)], failed: &[(String, String)]) -> Result<()> {
    let output = json!({
        "results": scored
            .iter()
            .map(|(label, report)| json!({ "company": label, "report": report }))
            .collect::<Vec<_>>(),
        "failed": failed
            .iter()
            .map(|(label, reason)| json!({ "company": label, "error": reason }))
            .collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
