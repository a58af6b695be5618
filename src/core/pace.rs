//! Pace and split calculation
//!
//! The pace is the whole number of seconds per unit, rounded up so that
//! running every unit at that pace never finishes ahead of the target time.

use crate::{
    core::{distance::Distance, duration::Duration},
    error::{PaceError, Result},
};
use tracing::{debug, instrument};

/// Check that distance and time are both at least 1
pub fn validate(distance: &Distance, duration: Duration) -> Result<()> {
    if distance.value < 1.0 || duration.seconds() < 1 {
        return Err(PaceError::range(distance.value, duration.seconds()));
    }
    Ok(())
}

/// Cumulative target time at a whole-unit marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split {
    /// 1-based unit index
    pub index: u64,
    /// Elapsed seconds when passing this marker
    pub elapsed: u64,
}

/// Uniform pace for a race
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pace {
    /// Seconds per unit, rounded up
    pub seconds_per_unit: u64,
    /// Unit label
    pub unit: String,
    /// Number of whole units in the race
    pub unit_count: u64,
}

impl Pace {
    /// Validate the inputs and compute the pace
    #[instrument(skip_all, fields(distance = distance.value, seconds = duration.seconds()))]
    pub fn compute(distance: &Distance, duration: Duration) -> Result<Self> {
        validate(distance, duration)?;

        let seconds_per_unit = (duration.seconds() as f64 / distance.value).ceil() as u64;
        let pace = Self {
            seconds_per_unit,
            unit: distance.unit.clone(),
            unit_count: distance.whole_units(),
        };

        debug!(
            "Pace {}s per {}, {} splits",
            pace.seconds_per_unit, pace.unit, pace.unit_count
        );
        Ok(pace)
    }

    /// Splits for every whole unit, in order
    pub fn splits(&self) -> impl Iterator<Item = Split> + '_ {
        (1..=self.unit_count).map(move |index| Split {
            index,
            elapsed: self.seconds_per_unit.saturating_mul(index),
        })
    }
}
