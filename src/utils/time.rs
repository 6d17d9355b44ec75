//! Duration helpers: elapsed seconds and human-facing formatting.

use chrono::{DateTime, Utc};

/// Seconds → "HHh MMm SSs". Negative input is rendered with a leading "-".
pub fn format_duration(secs: i64) -> String {
    let sign = if secs < 0 { "-" } else { "" };
    let s = secs.abs();
    format!(
        "{}{:02}h {:02}m {:02}s",
        sign,
        s / 3600,
        (s % 3600) / 60,
        s % 60
    )
}

/// Whole seconds from `start` to `end`, floored; never negative.
pub fn elapsed_seconds(start: &DateTime<Utc>, end: &DateTime<Utc>) -> i64 {
    (*end - *start).num_seconds().max(0)
}
