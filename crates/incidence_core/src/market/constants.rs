//! Baseline market constants.

use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Immutable baseline table for the linear market.
///
/// Holds the pre-tax equilibrium `(q0, p0)` and the `[domain_min,
/// domain_max]` bounds shared by the quantity and price axes. Constructed
/// once at startup and passed by reference into every kernel call; the
/// kernel never mutates it.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Example
///
/// ```
/// use incidence_core::market::MarketConstants;
///
/// // The default market clears at (50, 50) on a [0, 100] domain.
/// let constants: MarketConstants<f64> = MarketConstants::default();
/// assert_eq!(constants.p0, 50.0);
/// assert_eq!(constants.q0, 50.0);
/// assert_eq!(constants.domain_max, 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketConstants<T: Float> {
    /// Baseline (pre-tax) equilibrium price
    pub p0: T,
    /// Baseline (pre-tax) equilibrium quantity
    pub q0: T,
    /// Lower bound of both axis domains
    pub domain_min: T,
    /// Upper bound of both axis domains
    pub domain_max: T,
}

impl<T: Float> MarketConstants<T> {
    /// Construct constants with the given baseline equilibrium.
    ///
    /// The axis domain is always `[0, 100]`; only the baseline point is
    /// configurable.
    ///
    /// # Panics
    ///
    /// Panics if `p0` or `q0` is not strictly positive.
    ///
    /// # Example
    ///
    /// ```
    /// use incidence_core::market::MarketConstants;
    ///
    /// let constants = MarketConstants::new(40.0_f64, 60.0);
    /// assert_eq!(constants.p0, 40.0);
    /// assert_eq!(constants.q0, 60.0);
    /// assert_eq!(constants.domain_min, 0.0);
    /// ```
    pub fn new(p0: T, q0: T) -> Self {
        assert!(p0 > T::zero(), "p0 must be positive");
        assert!(q0 > T::zero(), "q0 must be positive");
        Self {
            p0,
            q0,
            domain_min: T::zero(),
            domain_max: T::from(100.0).unwrap(),
        }
    }
}

impl<T: Float> Default for MarketConstants<T> {
    /// Create the default market.
    ///
    /// Default values:
    /// - `p0`: 50
    /// - `q0`: 50
    /// - domain: `[0, 100]`
    fn default() -> Self {
        Self::new(T::from(50.0).unwrap(), T::from(50.0).unwrap())
    }
}
