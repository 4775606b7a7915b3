//! Market description for the incidence model.
//!
//! # Architecture
//!
//! The market split follows ownership: [`MarketConstants`] is the immutable
//! baseline table, fixed at process start and shared read-only across
//! threads; [`MarketParameters`] is the caller-owned, per-interaction record
//! that the kernel reads but never mutates.
//!
//! # Components
//!
//! - [`constants`]: baseline equilibrium and axis domain ([`MarketConstants`])
//! - [`parameters`]: tax and elasticity inputs ([`MarketParameters`], [`TaxTarget`])
//!
//! # Example
//!
//! ```
//! use incidence_core::market::{MarketConstants, MarketParameters, TaxTarget};
//!
//! let constants = MarketConstants::<f64>::default();
//! assert_eq!(constants.p0, 50.0);
//!
//! let params = MarketParameters::new(20.0_f64, 1.0, 0.5, TaxTarget::Producer);
//! assert!(params.validate().is_ok());
//! ```

pub mod constants;
pub mod parameters;

pub use constants::MarketConstants;
pub use parameters::{MarketParameters, TaxTarget};
