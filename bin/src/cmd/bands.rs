//! Band table display command implementation.

use anyhow::Result;
use credence::ScoringEngine;
use std::path::Path;

use crate::policy::load_policy;

/// Show the grade and risk-tier band tables in force.
pub(crate) fn run(policy_path: Option<&Path>) -> Result<()> {
    let policy = load_policy(policy_path)?;

    // Reject a malformed policy the same way scoring would
    ScoringEngine::new(policy)?;

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Classification Bands                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let g = policy.grades;
    println!("Grades:");
    println!("{}", "-".repeat(60));
    println!("  A   {:>3} - 100", g.a_min);
    println!("  B   {:>3} - {}", g.b_min, g.a_min - 1);
    println!("  C   {:>3} - {}", g.c_min, g.b_min - 1);
    println!("  D   {:>3} - {}", g.d_min, g.c_min - 1);
    println!("  F     0 - {}", g.d_min - 1);
    println!();

    let r = policy.risk;
    println!("Risk tiers:");
    println!("{}", "-".repeat(60));
    println!("  Low Risk     {:>3} - 100", r.low_min);
    println!("  Medium Risk  {:>3} - {}", r.medium_min, r.low_min - 1);
    println!("  High Risk      0 - {}", r.medium_min - 1);
    println!();

    Ok(())
}
