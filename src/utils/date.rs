//! Date and timestamp helpers: storage encoding, lenient parsing of
//! caller-supplied strings and local calendar-day bounds.

use crate::errors::{AppError, AppResult};
use chrono::{
    DateTime, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, SubsecRound, Utc,
};

/// Fixed-width UTC encoding used for every timestamp column.
/// Lexicographic order of the text equals chronological order.
pub const DB_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

const DB_TIMESTAMP_PARSE: &str = "%Y-%m-%dT%H:%M:%S%.fZ";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Current instant, truncated to the precision the store keeps.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn to_db(ts: &DateTime<Utc>) -> String {
    ts.format(DB_TIMESTAMP_FORMAT).to_string()
}

/// Decode a stored timestamp. RFC 3339 text written by other tools is
/// accepted as well.
pub fn from_db(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, DB_TIMESTAMP_PARSE) {
        return Some(naive.and_utc());
    }
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// Local midnight of `date`. When midnight is ambiguous the earliest
/// instant wins; when it does not exist (DST gap) the date is rejected.
pub fn local_midnight(date: NaiveDate) -> AppResult<DateTime<Utc>> {
    date.and_time(NaiveTime::MIN)
        .and_local_timezone(Local)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| AppError::InvalidDate(date.format(DATE_FORMAT).to_string()))
}

/// `[start of local day, start of local day + 24h)`
pub fn local_day_bounds(date: NaiveDate) -> AppResult<(DateTime<Utc>, DateTime<Utc>)> {
    let start = local_midnight(date)?;
    Ok((start, start + Duration::hours(24)))
}

/// Parse a caller-supplied instant: full RFC 3339 timestamp first, bare
/// `YYYY-MM-DD` (local midnight) as fallback.
pub fn parse_timestamp_lenient(s: &str) -> AppResult<DateTime<Utc>> {
    let trimmed = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    let date = parse_date(trimmed).ok_or_else(|| AppError::InvalidDate(s.to_string()))?;
    local_midnight(date)
}

/// Parse a caller-supplied calendar day. A full timestamp selects the date
/// it names in its own offset.
pub fn parse_day_lenient(s: &str) -> AppResult<NaiveDate> {
    let trimmed = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.date_naive());
    }
    parse_date(trimmed).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}
