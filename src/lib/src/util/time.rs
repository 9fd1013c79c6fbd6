//! Timestamps as they are written into entries and filenames
//!

use chrono::{DateTime, SecondsFormat, Utc};
use std::time::SystemTime;

/// ISO-8601 in UTC with millisecond precision, ie `2024-01-01T12:00:00.000Z`
pub fn iso_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Replace the characters that are not filesystem safe (`:` and `.`) with `-`
pub fn sanitize_for_filename(timestamp: &str) -> String {
    timestamp.replace([':', '.'], "-")
}

pub fn to_utc(time: SystemTime) -> DateTime<Utc> {
    DateTime::<Utc>::from(time)
}
