//! Chart geometry and domain-to-pixel mapping.

use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Width of the economic domain mapped onto the plot rectangle.
const DOMAIN_SPAN: f64 = 100.0;

/// Fixed-size plotting rectangle with padded margins.
///
/// Both maps are linear, monotonic, and invertible over the `[0, 100]`
/// domain. No clamping is performed: values outside the domain map to
/// correspondingly out-of-canvas pixels, matching the sampler's overscan
/// behavior.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Example
///
/// ```
/// use incidence_chart::ChartGeometry;
///
/// let g: ChartGeometry<f64> = ChartGeometry::default();
/// assert_eq!(g.width, 600.0);
/// assert_eq!(g.height, 400.0);
/// assert_eq!(g.padding, 60.0);
///
/// // Larger price is higher on screen, so smaller y.
/// assert!(g.map_price(80.0) < g.map_price(20.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometry<T: Float> {
    /// Canvas width in rendering-surface units
    pub width: T,
    /// Canvas height in rendering-surface units
    pub height: T,
    /// Margin on every side between canvas edge and plot rectangle
    pub padding: T,
}

impl<T: Float> ChartGeometry<T> {
    /// Construct a geometry with the given canvas size and padding.
    ///
    /// # Panics
    ///
    /// Panics unless `0 <= 2 * padding < min(width, height)`, i.e., the
    /// plot rectangle has positive extent.
    pub fn new(width: T, height: T, padding: T) -> Self {
        assert!(padding >= T::zero(), "padding must be non-negative");
        let two = T::from(2.0).unwrap();
        assert!(
            two * padding < width && two * padding < height,
            "padding leaves no plot area"
        );
        Self {
            width,
            height,
            padding,
        }
    }

    /// Map a quantity in `[0, 100]` to an x pixel coordinate.
    ///
    /// `x = padding + q * (width - 2 * padding) / 100`
    #[inline]
    pub fn map_quantity(&self, quantity: T) -> T {
        self.padding + quantity * self.plot_width() / Self::span()
    }

    /// Map a price in `[0, 100]` to a y pixel coordinate.
    ///
    /// `y = height - padding - p * (height - 2 * padding) / 100`
    ///
    /// Inverted so that a larger price sits higher on screen.
    #[inline]
    pub fn map_price(&self, price: T) -> T {
        self.height - self.padding - price * self.plot_height() / Self::span()
    }

    /// Invert [`ChartGeometry::map_quantity`].
    #[inline]
    pub fn quantity_at(&self, x: T) -> T {
        (x - self.padding) * Self::span() / self.plot_width()
    }

    /// Invert [`ChartGeometry::map_price`].
    #[inline]
    pub fn price_at(&self, y: T) -> T {
        (self.height - self.padding - y) * Self::span() / self.plot_height()
    }

    /// Width of the plot rectangle (canvas minus both margins).
    #[inline]
    pub fn plot_width(&self) -> T {
        self.width - T::from(2.0).unwrap() * self.padding
    }

    /// Height of the plot rectangle (canvas minus both margins).
    #[inline]
    pub fn plot_height(&self) -> T {
        self.height - T::from(2.0).unwrap() * self.padding
    }

    #[inline]
    fn span() -> T {
        T::from(DOMAIN_SPAN).unwrap()
    }
}

impl<T: Float> Default for ChartGeometry<T> {
    /// Create the default 600x400 canvas with 60-unit padding.
    fn default() -> Self {
        Self::new(
            T::from(600.0).unwrap(),
            T::from(400.0).unwrap(),
            T::from(60.0).unwrap(),
        )
    }
}
