//! Time argument parsing
//!
//! Accepts `MM`, `MM:SS` or `HH:MM:SS`. In lenient mode a component that is
//! not an integer counts as zero; strict mode rejects it.

use crate::error::{PaceError, Result};
use tracing::{debug, instrument};

/// Total elapsed time in whole seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration {
    seconds: i64,
}

impl Duration {
    /// Build a duration from hours, minutes and seconds
    pub fn from_hms(hours: i64, minutes: i64, seconds: i64) -> Option<Self> {
        let total = hours
            .checked_mul(3600)?
            .checked_add(minutes.checked_mul(60)?)?
            .checked_add(seconds)?;
        Some(Self { seconds: total })
    }

    /// Total number of seconds
    pub const fn seconds(self) -> i64 {
        self.seconds
    }
}

/// Parser for time arguments
#[derive(Debug, Clone, Copy, Default)]
pub struct DurationParser {
    strict: bool,
}

impl DurationParser {
    /// Create a new time parser
    #[must_use]
    pub const fn new(strict: bool) -> Self {
        Self { strict }
    }

    /// Parse a time argument
    #[instrument(skip(self))]
    pub fn parse(&self, input: &str) -> Result<Duration> {
        let parts = input
            .split(':')
            .map(|part| self.parse_component(input, part))
            .collect::<Result<Vec<i64>>>()?;

        let (hours, minutes, seconds) = match parts.as_slice() {
            [m] => (0, *m, 0),
            [m, s] => (0, *m, *s),
            [h, m, s] => (*h, *m, *s),
            _ => {
                return Err(PaceError::invalid_time(
                    input,
                    format!("expected at most 3 components, found {}", parts.len()),
                ));
            }
        };

        let duration = Duration::from_hms(hours, minutes, seconds)
            .ok_or_else(|| PaceError::invalid_time(input, "value too large"))?;

        debug!(
            "Parsed time: {}h {}m {}s = {}s",
            hours,
            minutes,
            seconds,
            duration.seconds()
        );
        Ok(duration)
    }

    fn parse_component(&self, input: &str, part: &str) -> Result<i64> {
        match part.trim().parse::<i64>() {
            Ok(value) => Ok(value),
            Err(_) if self.strict => Err(PaceError::invalid_time(
                input,
                format!("'{}' is not a whole number", part),
            )),
            Err(_) => {
                debug!("Treating time component '{}' as 0", part);
                Ok(0)
            }
        }
    }
}
