//! Core functionality for pace calculation
//!
//! Contains the argument grammars, the pace and split arithmetic, and the
//! report writer.

pub mod distance;
pub mod duration;
pub mod pace;
pub mod report;

pub use distance::{Distance, DistanceParser};
pub use duration::{Duration, DurationParser};
pub use pace::{Pace, Split};
pub use report::write_report;
