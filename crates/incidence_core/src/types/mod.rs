//! Shared kernel types.
//!
//! # Components
//!
//! - [`error`]: structured error types (`ModelError`)

pub mod error;

pub use error::ModelError;
