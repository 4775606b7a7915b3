//! Curve command implementation.
//!
//! Samples one demand or supply curve and prints the points in the
//! economic domain or, with `--pixels`, projected through the chart
//! geometry.

use serde::Serialize;
use tracing::info;

use incidence_chart::{project, to_svg_points, PixelPoint};
use incidence_core::curve::{sample, CurvePoint, CurveSide};
use incidence_core::market::{MarketParameters, TaxTarget};

use crate::config::AppConfig;
use crate::{CliError, Result};

/// JSON payload for a sampled curve.
#[derive(Serialize)]
struct CurveReport {
    side: CurveSide,
    elasticity: f64,
    target: TaxTarget,
    shift: f64,
    points: Vec<CurvePoint<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pixels: Option<Vec<PixelPoint<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    svg_points: Option<String>,
}

/// Run the curve command.
pub fn run(
    config: &AppConfig,
    side: &str,
    elasticity: f64,
    target: &str,
    shift: f64,
    pixels: bool,
    format: &str,
) -> Result<()> {
    let side = parse_side(side)?;
    let target: TaxTarget = target.parse().map_err(CliError::InvalidArgument)?;
    if shift < 0.0 {
        return Err(CliError::InvalidArgument(format!(
            "Shift must be non-negative, got {}",
            shift
        )));
    }

    // The sampler reads only the curve's own elasticity; validate it
    // through the same bounds the solver parameters use.
    let bounds_probe = match side {
        CurveSide::Demand => MarketParameters::new(0.0, elasticity, 1.0, target),
        CurveSide::Supply => MarketParameters::new(0.0, 1.0, elasticity, target),
    };
    bounds_probe.validate()?;

    info!("Sampling {:?} curve, elasticity {}, shift {}", side, elasticity, shift);

    let points = sample(&config.market, side, elasticity, target, shift);
    info!("{} of 51 candidate points within the visible window", points.len());

    let projected = pixels.then(|| project(&config.chart, &points));

    match format {
        "json" => {
            let report = CurveReport {
                side,
                elasticity,
                target,
                shift,
                svg_points: projected.as_deref().map(to_svg_points),
                pixels: projected,
                points,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "csv" => match &projected {
            Some(px) => {
                println!("x,y");
                for p in px {
                    println!("{},{}", p.x, p.y);
                }
            }
            None => {
                println!("quantity,price");
                for p in &points {
                    println!("{},{}", p.quantity, p.price);
                }
            }
        },
        "table" => {
            match &projected {
                Some(px) => {
                    println!("\n┌────────────┬────────────┐");
                    println!("│ x          │ y          │");
                    println!("├────────────┼────────────┤");
                    for p in px {
                        println!("│ {:>10.2} │ {:>10.2} │", p.x, p.y);
                    }
                    println!("└────────────┴────────────┘");
                }
                None => {
                    println!("\n┌────────────┬────────────┐");
                    println!("│ Quantity   │ Price      │");
                    println!("├────────────┼────────────┤");
                    for p in &points {
                        println!("│ {:>10.2} │ {:>10.2} │", p.quantity, p.price);
                    }
                    println!("└────────────┴────────────┘");
                }
            }
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, csv, table",
                other
            )));
        }
    }

    info!("Curve sampling complete");
    Ok(())
}

fn parse_side(s: &str) -> Result<CurveSide> {
    match s {
        "demand" => Ok(CurveSide::Demand),
        "supply" => Ok(CurveSide::Supply),
        other => Err(CliError::InvalidArgument(format!(
            "Unknown curve side: {}. Supported: demand, supply",
            other
        ))),
    }
}
