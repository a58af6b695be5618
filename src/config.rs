//! Run configuration for the pace calculator
//!
//! Built once from the command line; there is no configuration file.

use crate::{cli::Args, error::PaceError};

/// Unit label used when the distance has no suffix
pub const DEFAULT_UNIT: &str = "mile";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Reject non-numeric time components
    pub strict_time: bool,
    /// Unit label for distances given without a suffix
    pub default_unit: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            strict_time: false,
            default_unit: DEFAULT_UNIT.to_string(),
        }
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, PaceError> {
        let config = Self {
            debug: args.debug,
            strict_time: args.strict,
            default_unit: args.unit.clone(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), PaceError> {
        if self.default_unit.is_empty()
            || !self.default_unit.chars().all(|c| c.is_ascii_lowercase())
        {
            return Err(PaceError::config(format!(
                "unit must be one or more lowercase letters, got '{}'",
                self.default_unit
            )));
        }
        Ok(())
    }
}
