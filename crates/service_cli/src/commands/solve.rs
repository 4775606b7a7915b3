//! Solve command implementation.
//!
//! Resolves parameters (flags or a named scenario), validates them, runs
//! the equilibrium solver, and prints the result with the elasticity
//! classification.

use serde::Serialize;
use tracing::info;

use incidence_core::classify::{compare, ElasticityComparison};
use incidence_core::equilibrium::{solve, Equilibrium};
use incidence_core::market::MarketParameters;

use crate::config::AppConfig;
use crate::scenarios;
use crate::{CliError, Result};

/// JSON payload for a solved equilibrium.
#[derive(Serialize)]
struct SolveReport {
    parameters: MarketParameters<f64>,
    equilibrium: Equilibrium<f64>,
    comparison: ElasticityComparison,
    tax_revenue: f64,
}

/// Run the solve command.
pub fn run(
    config: &AppConfig,
    scenario: Option<&str>,
    tax: f64,
    ed: f64,
    es: f64,
    format: &str,
) -> Result<()> {
    let params = match scenario {
        Some(name) => {
            let preset = scenarios::find(name)
                .ok_or_else(|| CliError::UnknownScenario(name.to_string()))?;
            info!("Using scenario: {} ({})", preset.title, preset.name);
            preset.parameters()
        }
        None => {
            // Target only affects which curve shifts visually; default to
            // the custom scenario's producer target.
            let custom = scenarios::find("custom").expect("custom scenario exists");
            MarketParameters::new(tax, ed, es, custom.target)
        }
    };
    params.validate()?;

    info!("Solving equilibrium...");
    info!("  Tax: {}", params.tax_amount);
    info!("  Ed:  {}", params.demand_elasticity);
    info!("  Es:  {}", params.supply_elasticity);

    let eq = solve(
        &config.market,
        params.tax_amount,
        params.demand_elasticity,
        params.supply_elasticity,
    );
    let comparison = compare(params.demand_elasticity, params.supply_elasticity);
    let revenue = eq.tax_revenue(&config.market);

    match format {
        "json" => {
            let report = SolveReport {
                parameters: params,
                equilibrium: eq,
                comparison,
                tax_revenue: revenue,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "table" => {
            println!("\n┌──────────────────────────┬────────────┐");
            println!("│ New quantity             │ {:>10.2} │", eq.new_quantity);
            println!("│ Consumer price           │ {:>10.2} │", eq.consumer_price);
            println!("│ Producer price           │ {:>10.2} │", eq.producer_price);
            println!("│ Consumer share (%)       │ {:>10.1} │", eq.consumer_share_pct);
            println!("│ Producer share (%)       │ {:>10.1} │", eq.producer_share_pct);
            println!("│ Tax revenue              │ {:>10.2} │", revenue);
            println!("└──────────────────────────┴────────────┘");
            println!("{}", describe(comparison));
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, table",
                other
            )));
        }
    }

    info!("Solve complete");
    Ok(())
}

/// Narrative line for the elasticity classification.
fn describe(comparison: ElasticityComparison) -> &'static str {
    match comparison {
        ElasticityComparison::Equal => "Elasticities are equal: the burden splits evenly.",
        ElasticityComparison::DemandLessElastic => {
            "Demand is less elastic: consumers bear the larger share."
        }
        ElasticityComparison::SupplyLessElastic => {
            "Supply is less elastic: producers bear the larger share."
        }
    }
}
