//! Scenarios command implementation.
//!
//! Lists the named teaching presets and the parameters they seed.

use tracing::info;

use crate::scenarios::SCENARIOS;
use crate::Result;

/// Run the scenarios command.
pub fn run() -> Result<()> {
    info!("Listing {} scenarios", SCENARIOS.len());

    println!("\n┌──────────────────────┬────────────┬──────┬──────┬──────┐");
    println!("│ Name                 │ Target     │ Ed   │ Es   │ Tax  │");
    println!("├──────────────────────┼────────────┼──────┼──────┼──────┤");
    for s in &SCENARIOS {
        println!(
            "│ {:<20} │ {:<10} │ {:>4.1} │ {:>4.1} │ {:>4.0} │",
            s.name, s.target.to_string(), s.ed, s.es, s.tax_amount
        );
    }
    println!("└──────────────────────┴────────────┴──────┴──────┴──────┘");

    for s in &SCENARIOS {
        println!("{:<22} {}", s.name, s.description);
    }

    Ok(())
}
