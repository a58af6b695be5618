//! # Race Pace
//!
//! Computes the uniform pace needed to finish a race of a given distance
//! within a target time, and the cumulative split time at every whole mile or
//! kilometer.
//!
//! ## Example
//!
//! ```
//! use race_pace::core::{DistanceParser, DurationParser, Pace};
//!
//! let distance = DistanceParser::new("mile")?.parse("10km")?;
//! let duration = DurationParser::new(false).parse("50:00")?;
//! let pace = Pace::compute(&distance, duration)?;
//! assert_eq!(pace.seconds_per_unit, 300);
//! assert_eq!(pace.splits().count(), 10);
//! # Ok::<(), race_pace::error::PaceError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
///
/// Logs go to stderr so stdout only carries the report. `RUST_LOG` takes
/// precedence over the `debug` flag.
pub fn setup_logging(debug: bool) -> Result<()> {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
