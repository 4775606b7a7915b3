//! Model error types.
//!
//! The kernel functions themselves never fail: degenerate inputs are
//! recovered locally (see [`crate::equilibrium::solve`]). `ModelError`
//! exists for the caller-side bounds check on
//! [`crate::market::MarketParameters`], which front ends run before
//! invoking the kernel.

use thiserror::Error;

/// Parameter-bounds violations.
///
/// Produced only by [`MarketParameters::validate`], never by the solver or
/// the sampler.
///
/// [`MarketParameters::validate`]: crate::market::MarketParameters::validate
///
/// # Examples
///
/// ```
/// use incidence_core::types::ModelError;
///
/// let err = ModelError::TaxOutOfRange { value: -5.0, min: 0.0, max: 40.0 };
/// assert!(format!("{}", err).contains("-5"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Tax amount outside the accepted range.
    #[error("Tax amount out of range: {value} not in [{min}, {max}]")]
    TaxOutOfRange {
        /// The rejected tax amount
        value: f64,
        /// Minimum accepted value
        min: f64,
        /// Maximum accepted value
        max: f64,
    },

    /// Elasticity outside the accepted range (or non-positive).
    #[error("{name} elasticity out of range: {value} not in [{min}, {max}]")]
    ElasticityOutOfRange {
        /// Which elasticity was rejected ("demand" or "supply")
        name: &'static str,
        /// The rejected elasticity value
        value: f64,
        /// Minimum accepted value
        min: f64,
        /// Maximum accepted value
        max: f64,
    },
}
