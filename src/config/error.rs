//! Configuration error types.

use crate::builder::BuildError;
use thiserror::Error;

/// Errors that can occur while loading or saving a machine configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed
    #[error("Configuration parse failed: {0}")]
    Parse(String),

    /// The configuration could not be written out as JSON
    #[error("Configuration serialization failed: {0}")]
    Serialize(String),

    /// Fault odds lie outside their draw range
    #[error("Invalid fault profile: {0}")]
    InvalidFaultProfile(String),

    /// The catalog was rejected by the builder
    #[error(transparent)]
    Build(#[from] BuildError),
}
