//! Demand and supply curve sampling.
//!
//! Produces the ordered point sequences a polyline renderer draws. The
//! pixel projection itself lives in the chart layer; this module stays in
//! the economic (quantity, price) domain.

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::market::{MarketConstants, TaxTarget};

/// Quantity step between sample candidates, in domain units.
pub const SAMPLE_STEP: usize = 2;

/// Overscan margin around the visible price range.
///
/// Points up to this far outside `[domain_min, domain_max]` are kept so a
/// polyline crossing the chart edge does not end visibly short of it;
/// anything beyond is dropped rather than clamped.
pub const OVERSCAN: f64 = 10.0;

/// Which curve is being sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveSide {
    /// Downward-sloping demand curve.
    Demand,
    /// Upward-sloping supply curve.
    Supply,
}

/// One (quantity, price) sample on a curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint<T: Float> {
    /// Quantity coordinate
    pub quantity: T,
    /// Price coordinate
    pub price: T,
}

/// Sample one curve as an ordered (quantity, price) sequence.
///
/// Iterates quantity over `[0, 100]` in steps of [`SAMPLE_STEP`] (51
/// candidates) and keeps each point whose price lies within [`OVERSCAN`]
/// of the visible range, so a steep curve may legitimately yield fewer
/// than 51 points. The output is ordered by increasing quantity and the
/// function is stateless: identical inputs always yield an identical
/// sequence.
///
/// Both curve equations anchor their price intercept on `q0`; with the
/// default constants `p0 == q0`, so the two readings coincide.
///
/// # Arguments
///
/// * `constants` - Baseline market table
/// * `side` - Which curve to sample
/// * `elasticity` - Elasticity of that curve (expected strictly positive)
/// * `tax_target` - Side of the market the tax is levied on
/// * `shift` - Vertical curve shift; `0` reproduces the pre-tax curve,
///   the tax amount reproduces the post-tax curve. Only applied when the
///   sampled side matches the legal incidence: demand shifts down under a
///   consumer tax, supply shifts up under a producer tax.
///
/// # Example
///
/// ```
/// use incidence_core::curve::{sample, CurveSide};
/// use incidence_core::market::{MarketConstants, TaxTarget};
///
/// let constants = MarketConstants::default();
///
/// // Unit-elastic pre-tax demand spans the whole domain: 51 points.
/// let demand = sample(&constants, CurveSide::Demand, 1.0_f64, TaxTarget::Consumer, 0.0);
/// assert_eq!(demand.len(), 51);
/// assert_eq!(demand[0].quantity, 0.0);
/// assert_eq!(demand[0].price, 100.0);
///
/// // A steep demand curve exits the overscan window: fewer points survive.
/// let steep = sample(&constants, CurveSide::Demand, 0.1_f64, TaxTarget::Consumer, 0.0);
/// assert!(steep.len() < 51);
/// ```
pub fn sample<T: Float>(
    constants: &MarketConstants<T>,
    side: CurveSide,
    elasticity: T,
    tax_target: TaxTarget,
    shift: T,
) -> Vec<CurvePoint<T>> {
    let q0 = constants.q0;
    let overscan = T::from(OVERSCAN).unwrap();
    let lo = constants.domain_min - overscan;
    let hi = constants.domain_max + overscan;

    let max_q = constants.domain_max.to_usize().unwrap_or(100);
    let mut points = Vec::with_capacity(max_q / SAMPLE_STEP + 1);

    for step in (0..=max_q).step_by(SAMPLE_STEP) {
        let q = T::from(step).unwrap();
        let mut p = match side {
            CurveSide::Demand => q0 + (q0 - q) / elasticity,
            CurveSide::Supply => q0 + (q - q0) / elasticity,
        };

        if shift > T::zero() {
            match (side, tax_target) {
                // Consumer tax: demand shifts down by the tax.
                (CurveSide::Demand, TaxTarget::Consumer) => p = p - shift,
                // Producer tax: supply shifts up by the tax.
                (CurveSide::Supply, TaxTarget::Producer) => p = p + shift,
                _ => {}
            }
        }

        if p >= lo && p <= hi {
            points.push(CurvePoint { quantity: q, price: p });
        }
    }

    points
}
