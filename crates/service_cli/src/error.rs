//! CLI error types.

use incidence_core::types::ModelError;
use thiserror::Error;

/// Convenience result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced to the command-line user.
#[derive(Error, Debug)]
pub enum CliError {
    /// An argument value was not recognised.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The named teaching scenario does not exist.
    #[error("Unknown scenario: {0}. Run `incidence scenarios` to list them")]
    UnknownScenario(String),

    /// Parameters failed the model's bounds check.
    #[error("Parameter validation failed: {0}")]
    Model(#[from] ModelError),

    /// Configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// Configuration values violate a structural invariant.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Result serialisation failed.
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),
}
