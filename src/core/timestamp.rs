//! Timestamp formatting for log lines
//!
//! Lines carry a local-time timestamp with millisecond precision, using a
//! comma before the milliseconds: `2025-01-08 10:30:45,123`.

use chrono::{DateTime, Local};

/// strftime pattern for the line timestamp. `%3f` renders exactly three
/// fractional digits.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Format a timestamp the way log lines expect it.
#[must_use]
pub fn format_timestamp(datetime: &DateTime<Local>) -> String {
    datetime.format(TIMESTAMP_FORMAT).to_string()
}

/// The current local time, formatted for a log line.
#[must_use]
pub fn now_formatted() -> String {
    format_timestamp(&Local::now())
}
