//! Factor listing command implementation.

use anyhow::Result;
use credence::factors::available_factors;

/// List available scoring factors.
pub(crate) fn run(verbose: bool) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Available Scoring Factors                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    for info in available_factors() {
        if verbose {
            println!("{} ({}):", info.factor, info.ratio);
            println!("{}", "-".repeat(60));
            println!("  {}", info.description);
            println!("  reads: {}", info.required_fields.join(", "));
            if info.requires_history {
                println!("  requires at least two years of revenue history");
            }
            println!();
        } else {
            let name = info.factor.to_string();
            println!("  {name:15} - {}", info.ratio);
        }
    }

    if !verbose {
        println!("\nUse --verbose for detailed factor descriptions.\n");
    }

    Ok(())
}
