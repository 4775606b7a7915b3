//! Incidence CLI - Command Line Operations for the Tax-Incidence Model
//!
//! This is the operational entry point for the incidence-rust workspace.
//!
//! # Commands
//!
//! - `incidence solve` - Solve the post-tax equilibrium for given parameters
//! - `incidence curve` - Sample a demand or supply curve, optionally in pixels
//! - `incidence scenarios` - List the named teaching scenarios
//!
//! # Architecture
//!
//! As the service layer of the workspace, this crate validates user input,
//! drives the kernel and chart layers, and formats their results; it holds
//! the parameter state the kernel itself never owns.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod scenarios;

pub use error::{CliError, Result};

/// Tax incidence model CLI
#[derive(Parser)]
#[command(name = "incidence")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "incidence.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the post-tax market equilibrium
    Solve {
        /// Named teaching scenario to take parameters from
        #[arg(short, long)]
        scenario: Option<String>,

        /// Per-unit tax amount
        #[arg(short, long, default_value = "20")]
        tax: f64,

        /// Price-elasticity of demand
        #[arg(long, default_value = "1.0")]
        ed: f64,

        /// Price-elasticity of supply
        #[arg(long, default_value = "1.0")]
        es: f64,

        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Sample a demand or supply curve
    Curve {
        /// Curve side (demand, supply)
        #[arg(short, long)]
        side: String,

        /// Elasticity of the sampled curve
        #[arg(short, long, default_value = "1.0")]
        elasticity: f64,

        /// Side of the market the tax is levied on (consumer, producer)
        #[arg(long, default_value = "producer")]
        target: String,

        /// Vertical tax shift (0 for the pre-tax curve)
        #[arg(long, default_value = "0")]
        shift: f64,

        /// Project points into pixel coordinates
        #[arg(short, long)]
        pixels: bool,

        /// Output format (json, csv, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// List the named teaching scenarios
    Scenarios,
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let app_config = config::load(&cli.config)?;

    match cli.command {
        Commands::Solve {
            scenario,
            tax,
            ed,
            es,
            format,
        } => commands::solve::run(&app_config, scenario.as_deref(), tax, ed, es, &format),
        Commands::Curve {
            side,
            elasticity,
            target,
            shift,
            pixels,
            format,
        } => commands::curve::run(
            &app_config,
            &side,
            elasticity,
            &target,
            shift,
            pixels,
            &format,
        ),
        Commands::Scenarios => commands::scenarios::run(),
    }
}
