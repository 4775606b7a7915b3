//! Elasticity comparison classification.
//!
//! The presentation layer picks its narrative text from the tagged variant
//! returned here, which keeps the decision logic testable independent of
//! any formatting concern.

use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Relative tolerance under which two elasticities compare as equal.
///
/// The front-end sliders step in coarse increments, so exact float equality
/// would be fragile without changing any observable behavior.
const EQUALITY_TOLERANCE: f64 = 1e-9;

/// Outcome of comparing the demand and supply elasticities.
///
/// The less elastic side bears the larger share of the tax burden, so this
/// classification names who that is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElasticityComparison {
    /// Elasticities are equal; the burden splits evenly.
    Equal,
    /// Demand is less elastic; consumers bear the larger share.
    DemandLessElastic,
    /// Supply is less elastic; producers bear the larger share.
    SupplyLessElastic,
}

/// Classify the relationship between the two elasticities.
///
/// # Example
///
/// ```
/// use incidence_core::classify::{compare, ElasticityComparison};
///
/// assert_eq!(compare(1.0_f64, 1.0), ElasticityComparison::Equal);
/// assert_eq!(compare(0.5_f64, 1.0), ElasticityComparison::DemandLessElastic);
/// assert_eq!(compare(2.0_f64, 1.0), ElasticityComparison::SupplyLessElastic);
/// ```
pub fn compare<T: Float>(demand_elasticity: T, supply_elasticity: T) -> ElasticityComparison {
    let scale = demand_elasticity.abs().max(supply_elasticity.abs());
    let tolerance = T::from(EQUALITY_TOLERANCE).unwrap() * scale;

    let diff = demand_elasticity - supply_elasticity;
    if diff.abs() <= tolerance {
        ElasticityComparison::Equal
    } else if diff < T::zero() {
        ElasticityComparison::DemandLessElastic
    } else {
        ElasticityComparison::SupplyLessElastic
    }
}
