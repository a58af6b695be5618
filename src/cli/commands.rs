//! Command implementation for the CLI

use crate::{
    config::Config,
    core::{DistanceParser, DurationParser, Pace, write_report},
};
use anyhow::Context;
use std::io::Write;
use tracing::{info, instrument};

/// Parse, validate and compute the pace for the given arguments
#[instrument(skip(config))]
pub fn calculate(config: &Config, distance: &str, time: &str) -> anyhow::Result<Pace> {
    let distance = DistanceParser::new(config.default_unit.as_str())?.parse(distance)?;
    let duration = DurationParser::new(config.strict_time).parse(time)?;
    let pace = Pace::compute(&distance, duration)?;

    info!(
        "Pace {}s per {} over {} splits",
        pace.seconds_per_unit, pace.unit, pace.unit_count
    );
    Ok(pace)
}

/// Execute the pace calculation and write the report
///
/// Nothing is written to `out` unless every argument is valid.
#[instrument(skip(config, out))]
pub fn execute_command<W: Write>(
    config: &Config,
    distance: &str,
    time: &str,
    out: &mut W,
) -> anyhow::Result<()> {
    let pace = calculate(config, distance, time)?;
    write_report(&pace, out).context("Failed to write report")?;
    out.flush().context("Failed to flush report")?;
    Ok(())
}
