use chrono::{Duration, NaiveDate};
use thinktimer::errors::AppError;
use thinktimer::utils::date::{
    from_db, local_day_bounds, parse_day_lenient, parse_timestamp_lenient, to_db,
};
use thinktimer::utils::format_duration;
use thinktimer::utils::time::elapsed_seconds;

mod common;
use common::{local, memory_app, utc};

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(0), "00h 00m 00s");
    assert_eq!(format_duration(3725), "01h 02m 05s");
    assert_eq!(format_duration(-61), "-00h 01m 01s");
}

#[test]
fn test_elapsed_seconds_floors_and_clamps() {
    let start = utc(2025, 3, 1, 12, 0, 0);
    assert_eq!(elapsed_seconds(&start, &(start + Duration::milliseconds(1999))), 1);
    assert_eq!(elapsed_seconds(&start, &(start - Duration::seconds(5))), 0);
}

#[test]
fn test_db_text_sorts_chronologically() {
    let early = utc(2025, 3, 1, 9, 0, 0);
    let late = early + Duration::microseconds(1);

    assert!(to_db(&early) < to_db(&late));
    assert_eq!(to_db(&early), "2025-03-01T09:00:00.000000Z");
    assert_eq!(from_db(&to_db(&late)), Some(late));
    assert_eq!(from_db("2025-03-01T10:00:00+01:00"), Some(early));
    assert_eq!(from_db("garbage"), None);
}

#[test]
fn test_lenient_parsing() {
    assert_eq!(
        parse_timestamp_lenient("2025-03-01T10:00:00+01:00").expect("rfc3339"),
        utc(2025, 3, 1, 9, 0, 0)
    );
    assert_eq!(
        parse_timestamp_lenient("2025-03-01").expect("date only"),
        local(2025, 3, 1, 0, 0, 0)
    );
    assert!(matches!(
        parse_timestamp_lenient("03/01/2025"),
        Err(AppError::InvalidDate(_))
    ));

    let day = NaiveDate::from_ymd_opt(2025, 3, 1).expect("date");
    assert_eq!(parse_day_lenient("2025-03-01").expect("date"), day);
    assert_eq!(parse_day_lenient("2025-03-01T23:30:00-05:00").expect("ts"), day);
    assert!(parse_day_lenient("").is_err());
}

#[test]
fn test_local_day_bounds() {
    let day = NaiveDate::from_ymd_opt(2025, 8, 10).expect("date");
    let (start, end) = local_day_bounds(day).expect("bounds");

    assert_eq!(start, local(2025, 8, 10, 0, 0, 0));
    assert_eq!(end - start, Duration::hours(24));
}

#[test]
fn test_open_helpers_ignore_empty_input() {
    let app = memory_app();
    assert!(app.open_directory("").is_ok());
    assert!(app.open_url("").is_ok());
}
