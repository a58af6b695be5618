//! Distance argument parsing
//!
//! A distance is a decimal number with an optional lowercase unit suffix,
//! eg. `13.1` or `10km`.

use crate::error::{PaceError, Result};
use regex::Regex;
use tracing::{debug, instrument};

/// A race distance and the unit label used in the report
#[derive(Debug, Clone, PartialEq)]
pub struct Distance {
    /// Number of units
    pub value: f64,
    /// Unit label, taken verbatim from the suffix
    pub unit: String,
}

impl Distance {
    /// Number of whole units, ie. the number of split lines
    pub fn whole_units(&self) -> u64 {
        // `as` saturates for values beyond u64::MAX
        self.value.floor() as u64
    }
}

/// Parser for distance arguments
#[derive(Debug)]
pub struct DistanceParser {
    /// Number followed by an optional lowercase unit
    re_distance: Regex,
    /// Longest leading `digits[.digits]` of the number part
    re_number_prefix: Regex,
    /// Unit used when the suffix is absent
    default_unit: String,
}

impl DistanceParser {
    /// Create a new distance parser with the given default unit
    pub fn new(default_unit: impl Into<String>) -> Result<Self> {
        Ok(Self {
            re_distance: Regex::new(r"^([0-9.]+)([a-z]+)?$")
                .map_err(|e| PaceError::config(format!("Failed to compile regex: {}", e)))?,
            re_number_prefix: Regex::new(r"^[0-9]*(?:\.[0-9]+)?")
                .map_err(|e| PaceError::config(format!("Failed to compile regex: {}", e)))?,
            default_unit: default_unit.into(),
        })
    }

    /// Parse a distance argument
    #[instrument(skip(self))]
    pub fn parse(&self, input: &str) -> Result<Distance> {
        let cap = self
            .re_distance
            .captures(input)
            .ok_or_else(|| PaceError::invalid_distance(input))?;

        let number = cap.get(1).map_or("", |m| m.as_str());
        let value = self.leading_number(number);
        if !value.is_finite() {
            return Err(PaceError::invalid_distance(input));
        }

        let unit = cap
            .get(2)
            .map_or_else(|| self.default_unit.clone(), |m| m.as_str().to_string());

        debug!("Parsed distance: {} {}", value, unit);
        Ok(Distance { value, unit })
    }

    /// Value of the leading number, ignoring anything after it
    ///
    /// `13.1.5` reads as 13.1 and a lone `.` as 0, which the range check
    /// then rejects.
    fn leading_number(&self, number: &str) -> f64 {
        self.re_number_prefix
            .find(number)
            .map(|m| m.as_str())
            .filter(|prefix| !prefix.is_empty())
            .and_then(|prefix| prefix.parse::<f64>().ok())
            .unwrap_or(0.0)
    }
}
