//! Command implementations.

pub mod curve;
pub mod scenarios;
pub mod solve;
