//! # incidence_chart: Chart Geometry for the Incidence Model
//!
//! ## Chart Layer Role
//!
//! Maps economic-domain values from [`incidence_core`] onto a fixed-size
//! plotting rectangle:
//! - Linear quantity/price to pixel mapping (`geometry`)
//! - Curve-sample to polyline projection (`polyline`)
//!
//! The mapping is pure arithmetic; actual drawing belongs to an external
//! rendering layer that consumes the pixel coordinates produced here.
//!
//! ## Usage Examples
//!
//! ```rust
//! use incidence_chart::geometry::ChartGeometry;
//!
//! let geometry: ChartGeometry<f64> = ChartGeometry::default();
//!
//! // The domain corners land on the padded plot rectangle.
//! assert_eq!(geometry.map_quantity(0.0), 60.0);
//! assert_eq!(geometry.map_quantity(100.0), 540.0);
//! assert_eq!(geometry.map_price(0.0), 340.0);
//! assert_eq!(geometry.map_price(100.0), 60.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod geometry;
pub mod polyline;

pub use geometry::ChartGeometry;
pub use polyline::{project, to_svg_points, PixelPoint};
