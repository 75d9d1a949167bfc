//! Credence CLI binary.
//!
//! Provides a command-line interface for the Credence scoring engine.

mod cmd;
mod policy;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "credence")]
#[command(about = "Credit risk scoring for company financial statements", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score financial statements from a JSON file
    Score {
        /// Statement file: one record, or an array of company records
        input: PathBuf,

        /// Scoring policy file overriding weights, scaling, and bands
        #[arg(short, long)]
        policy: Option<PathBuf>,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// List available scoring factors
    Factors {
        /// Show detailed information
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show the grade and risk-tier band tables
    Bands {
        /// Scoring policy file overriding weights, scaling, and bands
        #[arg(short, long)]
        policy: Option<PathBuf>,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            input,
            policy,
            format,
        } => cmd::score::run(&input, policy.as_deref(), &format),
        Commands::Factors { verbose } => cmd::factors::run(verbose),
        Commands::Bands { policy } => cmd::bands::run(policy.as_deref()),
    }
}
