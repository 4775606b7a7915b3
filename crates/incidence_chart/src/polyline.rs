//! Curve-sample projection into pixel space.

use num_traits::Float;
use serde::{Deserialize, Serialize};

use incidence_core::curve::CurvePoint;

use crate::geometry::ChartGeometry;

/// One point on the rendering surface.
///
/// Ephemeral, derived data: recomputed from a curve sample whenever the
/// geometry or the parameters change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint<T: Float> {
    /// Horizontal pixel coordinate
    pub x: T,
    /// Vertical pixel coordinate (grows downward)
    pub y: T,
}

/// Project a curve sample into pixel space, preserving order.
///
/// # Example
///
/// ```
/// use incidence_chart::{project, ChartGeometry};
/// use incidence_core::curve::{sample, CurveSide};
/// use incidence_core::market::{MarketConstants, TaxTarget};
///
/// let constants = MarketConstants::default();
/// let geometry = ChartGeometry::default();
///
/// let pts = sample(&constants, CurveSide::Supply, 1.0_f64, TaxTarget::Producer, 0.0);
/// let pixels = project(&geometry, &pts);
/// assert_eq!(pixels.len(), pts.len());
/// assert_eq!(pixels[0].x, 60.0);
/// ```
pub fn project<T: Float>(
    geometry: &ChartGeometry<T>,
    points: &[CurvePoint<T>],
) -> Vec<PixelPoint<T>> {
    points
        .iter()
        .map(|p| PixelPoint {
            x: geometry.map_quantity(p.quantity),
            y: geometry.map_price(p.price),
        })
        .collect()
}

/// Render a pixel polyline as an SVG `points` attribute string.
///
/// Produces `"x1,y1 x2,y2 …"` for direct use on a `<polyline>` element.
///
/// # Example
///
/// ```
/// use incidence_chart::{to_svg_points, PixelPoint};
///
/// let pixels = vec![
///     PixelPoint { x: 60.0_f64, y: 340.0 },
///     PixelPoint { x: 540.0, y: 60.0 },
/// ];
/// assert_eq!(to_svg_points(&pixels), "60,340 540,60");
/// ```
pub fn to_svg_points<T: Float + std::fmt::Display>(pixels: &[PixelPoint<T>]) -> String {
    pixels
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}
