//! Clock-style time formatting

/// Format a number of seconds as `M:SS`
///
/// Minutes are not padded and there is never an hours component, so long
/// times render as eg. `125:07`.
pub fn format_time(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Format one split line: the index right-aligned to two columns
pub fn format_split(index: u64, secs: u64) -> String {
    format!("{:>2} : {}", index, format_time(secs))
}
