//! # incidence_core: Tax-Incidence Kernel for Linear Markets
//!
//! ## Kernel Layer Role
//!
//! incidence_core is the bottom layer of the workspace, providing:
//! - Market constants and caller-owned parameters (`market`)
//! - The closed-form equilibrium solver (`equilibrium`)
//! - The demand/supply curve sampler (`curve`)
//! - Elasticity comparison classification (`classify`)
//! - Error types: `ModelError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! The kernel has no dependencies on other incidence_* crates, with minimal
//! external dependencies:
//! - num-traits: `Float` bound for generic numerical computation
//! - thiserror: structured parameter-validation errors
//! - serde: serialisation of parameter and result records
//!
//! ## Purity
//!
//! Every operation in this crate is a pure, synchronous function over
//! immutable inputs. Nothing here blocks, allocates shared mutable state,
//! or performs I/O, so concurrent invocation from multiple threads with
//! different parameter sets needs no locking.
//!
//! ## Usage Examples
//!
//! ```rust
//! use incidence_core::equilibrium::solve;
//! use incidence_core::market::MarketConstants;
//!
//! let constants = MarketConstants::default();
//!
//! // A 20-unit tax in a market where supply is half as elastic as demand:
//! let eq = solve(&constants, 20.0_f64, 1.0, 0.5);
//!
//! // Producers bear roughly twice the burden of consumers.
//! assert!((eq.new_quantity - 43.333).abs() < 1e-2);
//! assert!(eq.producer_share_pct > eq.consumer_share_pct);
//! # assert!((eq.consumer_share_pct + eq.producer_share_pct - 100.0).abs() < 1e-9);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod classify;
pub mod curve;
pub mod equilibrium;
pub mod market;
pub mod types;
