//! Record timestamp formatting
//!
//! Every record line starts with a local-time timestamp in the fixed layout
//! `yyyy-MM-dd HH:mm:ss.SSS`. The layout is part of the file format, so it
//! is a constant rather than a configuration knob.

use chrono::{DateTime, Local};

/// strftime layout for record timestamps: `2025-01-08 10:30:45.123`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Format a concrete instant with the record layout.
#[must_use]
pub fn format_timestamp(datetime: &DateTime<Local>) -> String {
    datetime.format(TIMESTAMP_FORMAT).to_string()
}

/// Current local time in the record layout.
#[must_use]
pub fn now_string() -> String {
    format_timestamp(&Local::now())
}
