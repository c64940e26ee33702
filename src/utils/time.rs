//! Time utilities: epoch parsing, hour truncation, tick label formatting.

use chrono::{DateTime, Duration, TimeZone, Timelike, Utc};

/// Parse a raw `Time` field (seconds since epoch, fractional allowed) into a
/// millisecond-resolution UTC instant. Returns `None` on anything that is
/// not a number.
pub fn parse_epoch_secs(raw: &str) -> Option<DateTime<Utc>> {
    let secs: f64 = raw.trim().parse().ok()?;
    if !secs.is_finite() {
        return None;
    }
    let millis = (secs * 1000.0) as i64;
    Utc.timestamp_millis_opt(millis).single()
}

/// Truncate an instant down to the top of its hour.
pub fn floor_to_hour(t: DateTime<Utc>) -> DateTime<Utc> {
    t.with_minute(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(t)
}

/// Reference origin for the hour grid: the top of the hour preceding `start`.
pub fn band_origin(start: DateTime<Utc>) -> DateTime<Utc> {
    floor_to_hour(start) - Duration::hours(1)
}

/// Label for a time-axis tick.
pub fn format_tick(t: DateTime<Utc>) -> String {
    t.format("%m-%d %H:%M").to_string()
}

/// Human-readable form used in summaries.
pub fn format_instant(t: DateTime<Utc>) -> String {
    t.format("%Y-%m-%d %H:%M:%S").to_string()
}
