//! Report output: pace line, blank line, then one line per split

use crate::{
    core::pace::Pace,
    utils::format::{format_split, format_time},
};
use std::io::{self, Write};

/// Write the pace report
pub fn write_report<W: Write>(pace: &Pace, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "Pace: {} min/{}",
        format_time(pace.seconds_per_unit),
        pace.unit
    )?;
    writeln!(out)?;
    writeln!(out, "Splits:")?;
    for split in pace.splits() {
        writeln!(out, "{}", format_split(split.index, split.elapsed))?;
    }
    Ok(())
}
