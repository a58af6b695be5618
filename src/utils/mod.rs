//! Utility modules for common functionality

pub mod format;

pub use format::{format_split, format_time};
