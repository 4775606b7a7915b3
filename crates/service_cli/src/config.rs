//! CLI configuration.
//!
//! The market constants and chart geometry are fixed at startup: read once
//! from an optional TOML file, then passed by reference into every command.
//! The kernel never owns or mutates them.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use incidence_chart::ChartGeometry;
use incidence_core::market::MarketConstants;

use crate::{CliError, Result};

/// Immutable application configuration.
#[derive(Debug, Clone, Copy, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Baseline market table
    pub market: MarketConstants<f64>,
    /// Plot rectangle geometry
    pub chart: ChartGeometry<f64>,
}

/// Load configuration from `path`, falling back to defaults.
///
/// A missing file is not an error: the built-in defaults (the (50, 50)
/// baseline on a 600x400 canvas) are the common case, and the file only
/// exists to override them.
pub fn load(path: &str) -> Result<AppConfig> {
    if !Path::new(path).exists() {
        debug!("No configuration file at {}, using defaults", path);
        return Ok(AppConfig::default());
    }

    let raw = std::fs::read_to_string(path)?;
    let config = toml::from_str(&raw)?;
    validate(&config)?;
    debug!("Loaded configuration from {}", path);
    Ok(config)
}

/// Check the invariants the typed constructors enforce.
///
/// Deserialisation builds `MarketConstants` and `ChartGeometry` field by
/// field, so a config file can describe a geometry the constructors would
/// reject: padding swallowing the plot rectangle (negative extent, flipped
/// price axis) or a non-positive baseline. Reject those here instead of
/// computing with them.
fn validate(config: &AppConfig) -> Result<()> {
    let m = &config.market;
    if !(m.p0 > 0.0) || !(m.q0 > 0.0) {
        return Err(CliError::InvalidConfig(format!(
            "market baseline must be positive, got p0 = {}, q0 = {}",
            m.p0, m.q0
        )));
    }
    if !(m.domain_min < m.domain_max) {
        return Err(CliError::InvalidConfig(format!(
            "market domain is empty: [{}, {}]",
            m.domain_min, m.domain_max
        )));
    }

    let g = &config.chart;
    if !(g.padding >= 0.0) {
        return Err(CliError::InvalidConfig(format!(
            "chart padding must be non-negative, got {}",
            g.padding
        )));
    }
    if !(2.0 * g.padding < g.width && 2.0 * g.padding < g.height) {
        return Err(CliError::InvalidConfig(format!(
            "chart padding {} leaves no plot area on a {}x{} canvas",
            g.padding, g.width, g.height
        )));
    }

    Ok(())
}
