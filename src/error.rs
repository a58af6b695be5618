//! Error types for the pace calculator
//!
//! Every failure is detected while parsing or validating the arguments, before
//! any report output is written.

use thiserror::Error;

/// Message shown when the distance argument does not match the grammar
pub const DISTANCE_FORMAT_HINT: &str =
    "Distance must be numeric.  eg. 13.1, 10km.  Unit default to miles.";

/// Main error type for the pace calculator
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PaceError {
    /// Missing positional arguments or other command-line misuse
    #[error("{message}")]
    Usage { message: String },

    /// Distance argument is not a number with an optional lowercase unit
    #[error("{DISTANCE_FORMAT_HINT} (got '{input}')")]
    InvalidDistance { input: String },

    /// Malformed time argument
    #[error("Invalid time '{input}': {message}. Time is specified as MM, MM:SS or HH:MM:SS")]
    InvalidTime { input: String, message: String },

    /// Distance or total seconds below the minimum of 1
    #[error("Distance and time must be numeric and >= 1")]
    Range { distance: f64, seconds: i64 },

    /// Invalid run configuration
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl PaceError {
    /// Create a new usage error
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Create a new invalid distance error
    pub fn invalid_distance(input: impl Into<String>) -> Self {
        Self::InvalidDistance {
            input: input.into(),
        }
    }

    /// Create a new invalid time error
    pub fn invalid_time(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidTime {
            input: input.into(),
            message: message.into(),
        }
    }

    /// Create a new range error
    pub const fn range(distance: f64, seconds: i64) -> Self {
        Self::Range { distance, seconds }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, PaceError>;
