//! Error types
//!
//! Only programmer/configuration mistakes are errors. Anything that comes
//! from the player (bad keys, out-of-phase input) is ignored instead.

use thiserror::Error;

/// Errors raised by the simulation core
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SimError {
    /// A random range was requested with `min > max`
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: i32, max: i32 },
    /// The game cannot be built from the given configuration
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Errors raised while loading a [`crate::GameConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] SimError),
}
