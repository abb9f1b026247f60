//! Error types for navigation and configuration

use thiserror::Error;

/// Errors raised by the navigator
///
/// Boundary navigation (next on the last frame, previous on the first)
/// is a no-op, never an error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigatorError {
    #[error("invalid sequence: a sequence must contain at least one frame")]
    InvalidSequence,
}

/// Errors that can occur while loading player configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parsing error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid duration '{value}': {source}")]
    InvalidDuration {
        value: String,
        #[source]
        source: humantime::DurationError,
    },

    #[error("Autoplay interval must be greater than zero")]
    ZeroInterval,
}
