//! Command-line argument parsing

use crate::{
    config::DEFAULT_UNIT,
    error::{PaceError, Result},
};
use clap::Parser;
use tracing::debug;

/// Message reported when either positional argument is missing
pub const MISSING_ARGS: &str = "Distance and time must be specified";

const AFTER_HELP: &str = "\
Display target times for each mile / KM for a race of <distance> miles or KM
with a target finishing time of <time>.  Time is specified as MM, MM:SS or
HH:MM:SS.  Distance is numeric with an optional lowercase unit suffix, eg.
13.1 or 10km; the unit defaults to miles.";

/// Race pace calculator - prints the required pace and per-unit splits
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, after_help = AFTER_HELP)]
#[command(name = "race-pace")]
pub struct Args {
    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Reject non-numeric time components instead of counting them as zero
    #[arg(long)]
    pub strict: bool,

    /// Unit label for distances given without a suffix
    #[arg(long, default_value = DEFAULT_UNIT)]
    pub unit: String,

    /// Race distance, eg. 13.1 or 10km
    #[arg(allow_negative_numbers = true)]
    pub distance: Option<String>,

    /// Target finishing time: MM, MM:SS or HH:MM:SS
    #[arg(allow_negative_numbers = true)]
    pub time: Option<String>,

    /// Anything after the time is ignored
    #[arg(hide = true, trailing_var_arg = true)]
    pub extra: Vec<String>,
}

impl Args {
    /// Both positional arguments, or a usage error when either is missing
    pub fn positionals(&self) -> Result<(&str, &str)> {
        if !self.extra.is_empty() {
            debug!("Ignoring extra arguments: {:?}", self.extra);
        }
        match (self.distance.as_deref(), self.time.as_deref()) {
            (Some(distance), Some(time)) => Ok((distance, time)),
            _ => Err(PaceError::usage(MISSING_ARGS)),
        }
    }
}

/// Parse command line arguments
///
/// Help and version requests are printed and exit with status 0. Any other
/// command-line problem becomes a [`PaceError::Usage`].
pub fn parse_args() -> Result<Args> {
    try_parse_from(std::env::args_os())
}

/// Parse an explicit argument list, see [`parse_args`]
pub fn try_parse_from<I, T>(itr: I) -> Result<Args>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match Args::try_parse_from(itr) {
        Ok(args) => Ok(args),
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => Err(PaceError::usage(clap_message(&e))),
    }
}

/// Rendered clap error without its leading `error: `
fn clap_message(e: &clap::Error) -> String {
    let rendered = e.render().to_string();
    let trimmed = rendered.trim_end();
    trimmed.strip_prefix("error: ").unwrap_or(trimmed).to_string()
}
