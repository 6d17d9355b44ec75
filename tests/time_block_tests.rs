use chrono::Duration;
use thinktimer::errors::AppError;
use thinktimer::models::{CreateTimeBlockRequest, TimerState, UpdateTimeBlockRequest};

mod common;
use common::{local, memory_app, project, utc};

#[test]
fn test_running_block_joins_project_name() {
    let mut app = memory_app();
    let p = project(&mut app, "Research");

    let block = app
        .create_time_block(&CreateTimeBlockRequest::running(p.id, utc(2025, 6, 2, 8, 30, 0)))
        .expect("create");

    assert_eq!(block.project_id, p.id);
    assert_eq!(block.project_name, "Research");
    assert_eq!(block.state(), TimerState::Running);
    assert!(block.end_time.is_none());
    assert_eq!(block.duration, 0);
    assert!(!block.is_manual);
}

#[test]
fn test_duration_derived_from_start_and_end() {
    let mut app = memory_app();
    let p = project(&mut app, "Derived");

    let block = app
        .create_time_block(&CreateTimeBlockRequest {
            project_id: p.id,
            start_time: utc(2025, 6, 2, 9, 0, 0),
            end_time: Some(utc(2025, 6, 2, 10, 0, 30)),
            duration: None,
            is_manual: false,
            description: Some("deep work".into()),
        })
        .expect("create");

    assert_eq!(block.duration, 3630);
    assert_eq!(block.state(), TimerState::Stopped);
    assert_eq!(block.description.as_deref(), Some("deep work"));
}

#[test]
fn test_manual_duration_is_kept() {
    let mut app = memory_app();
    let p = project(&mut app, "Manual");

    let block = app
        .create_time_block(&CreateTimeBlockRequest {
            project_id: p.id,
            start_time: utc(2025, 6, 2, 9, 0, 0),
            end_time: Some(utc(2025, 6, 2, 12, 0, 0)),
            duration: Some(1500),
            is_manual: true,
            description: None,
        })
        .expect("create");

    assert_eq!(block.duration, 1500);
    assert!(block.is_manual);
}

#[test]
fn test_block_for_unknown_project_is_rejected() {
    let mut app = memory_app();
    let err = app
        .create_time_block(&CreateTimeBlockRequest::running(404, utc(2025, 6, 2, 9, 0, 0)))
        .expect_err("foreign key");
    assert!(matches!(err, AppError::Db(_)));
}

#[test]
fn test_get_by_date_uses_local_day_bounds() {
    let mut app = memory_app();
    let p = project(&mut app, "Day");

    let midnight = app
        .create_time_block(&CreateTimeBlockRequest::running(p.id, local(2025, 6, 15, 0, 0, 0)))
        .expect("start of day");
    let noon = app
        .create_time_block(&CreateTimeBlockRequest::running(p.id, local(2025, 6, 15, 12, 0, 0)))
        .expect("noon");
    let last = app
        .create_time_block(&CreateTimeBlockRequest::running(p.id, local(2025, 6, 15, 23, 59, 59)))
        .expect("last second");
    app.create_time_block(&CreateTimeBlockRequest::running(p.id, local(2025, 6, 16, 0, 0, 0)))
        .expect("next day");
    app.create_time_block(&CreateTimeBlockRequest::running(p.id, local(2025, 6, 14, 23, 59, 59)))
        .expect("previous day");

    let day = chrono::NaiveDate::from_ymd_opt(2025, 6, 15).expect("date");
    let ids: Vec<i64> = app
        .get_time_blocks_by_date(day)
        .expect("by date")
        .iter()
        .map(|b| b.id)
        .collect();

    assert_eq!(ids, vec![last.id, noon.id, midnight.id]);
}

#[test]
fn test_get_by_date_string_accepts_both_forms() {
    let mut app = memory_app();
    let p = project(&mut app, "Lenient");
    let b = app
        .create_time_block(&CreateTimeBlockRequest::running(p.id, local(2025, 6, 20, 10, 0, 0)))
        .expect("create");

    let by_date = app.get_time_blocks_by_date_str("2025-06-20").expect("date only");
    assert_eq!(by_date.len(), 1);
    assert_eq!(by_date[0].id, b.id);

    let offset = local(2025, 6, 20, 12, 0, 0)
        .with_timezone(&chrono::Local)
        .to_rfc3339();
    let by_ts = app.get_time_blocks_by_date_str(&offset).expect("timestamp");
    assert_eq!(by_ts.len(), 1);
}

#[test]
fn test_malformed_date_string_fails() {
    let app = memory_app();

    let err = app
        .get_time_blocks_by_date_str("20/06/2025")
        .expect_err("malformed");
    assert!(matches!(err, AppError::InvalidDate(_)));

    let err = app
        .get_time_blocks_by_date_range_str("2025-06-01", "tomorrow")
        .expect_err("malformed end");
    assert!(matches!(err, AppError::InvalidDate(_)));
}

#[test]
fn test_range_is_inclusive_on_both_ends() {
    let mut app = memory_app();
    let p = project(&mut app, "Range");

    let start = utc(2025, 6, 1, 8, 0, 0);
    let end = utc(2025, 6, 3, 8, 0, 0);

    let first = app
        .create_time_block(&CreateTimeBlockRequest::running(p.id, start))
        .expect("at start");
    let middle = app
        .create_time_block(&CreateTimeBlockRequest::running(p.id, utc(2025, 6, 2, 8, 0, 0)))
        .expect("middle");
    let at_end = app
        .create_time_block(&CreateTimeBlockRequest::running(p.id, end))
        .expect("at end");
    app.create_time_block(&CreateTimeBlockRequest::running(p.id, end + Duration::seconds(1)))
        .expect("after end");
    app.create_time_block(&CreateTimeBlockRequest::running(p.id, start - Duration::seconds(1)))
        .expect("before start");

    let ids: Vec<i64> = app
        .get_time_blocks_by_date_range(&start, &end)
        .expect("range")
        .iter()
        .map(|b| b.id)
        .collect();
    assert_eq!(ids, vec![at_end.id, middle.id, first.id]);

    let via_str = app
        .get_time_blocks_by_date_range_str("2025-06-01T08:00:00Z", "2025-06-03T08:00:00+00:00")
        .expect("range strings");
    assert_eq!(via_str.len(), 3);
}

#[test]
fn test_update_time_block_fields() {
    let mut app = memory_app();
    let p = project(&mut app, "Edit");
    let before = app
        .create_time_block(&CreateTimeBlockRequest {
            project_id: p.id,
            start_time: utc(2025, 6, 5, 9, 0, 0),
            end_time: Some(utc(2025, 6, 5, 10, 0, 0)),
            duration: None,
            is_manual: false,
            description: Some("draft".into()),
        })
        .expect("create");

    std::thread::sleep(std::time::Duration::from_millis(2));

    let after = app
        .update_time_block(
            before.id,
            &UpdateTimeBlockRequest {
                duration: Some(4000),
                ..UpdateTimeBlockRequest::default()
            },
        )
        .expect("update");

    assert_eq!(after.duration, 4000);
    assert_eq!(after.start_time, before.start_time);
    assert_eq!(after.end_time, before.end_time);
    assert_eq!(after.description, before.description);
    assert!(after.updated_at > before.updated_at);

    let moved = app
        .update_time_block(
            before.id,
            &UpdateTimeBlockRequest {
                start_time: Some(utc(2025, 6, 5, 8, 0, 0)),
                description: Some("final".into()),
                ..UpdateTimeBlockRequest::default()
            },
        )
        .expect("second update");
    assert_eq!(moved.start_time, utc(2025, 6, 5, 8, 0, 0));
    assert_eq!(moved.description.as_deref(), Some("final"));
    assert_eq!(moved.duration, 4000);
}

#[test]
fn test_update_and_delete_missing_block() {
    let mut app = memory_app();

    let err = app
        .update_time_block(11, &UpdateTimeBlockRequest::default())
        .expect_err("missing");
    assert!(err.is_not_found());

    assert!(!app.delete_time_block(11).expect("idempotent delete"));
}

#[test]
fn test_delete_block() {
    let mut app = memory_app();
    let p = project(&mut app, "Del");
    let b = app
        .create_time_block(&CreateTimeBlockRequest::running(p.id, utc(2025, 6, 6, 9, 0, 0)))
        .expect("create");

    assert!(app.delete_time_block(b.id).expect("delete"));
    assert!(app.get_time_block(b.id).expect_err("gone").is_not_found());
    assert!(app.get_project(p.id).is_ok());
}

#[test]
fn test_total_duration_per_project() {
    let mut app = memory_app();
    let p = project(&mut app, "Sum");
    let empty = project(&mut app, "Empty");

    for (i, secs) in [100, 200, 300].into_iter().enumerate() {
        app.create_time_block(&CreateTimeBlockRequest {
            project_id: p.id,
            start_time: utc(2025, 6, 7, 9 + i as u32, 0, 0),
            end_time: None,
            duration: Some(secs),
            is_manual: true,
            description: None,
        })
        .expect("create");
    }

    assert_eq!(app.get_total_duration_by_project(p.id).expect("sum"), 600);
    assert_eq!(app.get_total_duration_by_project(empty.id).expect("zero"), 0);
    assert_eq!(app.get_total_duration_by_project(12345).expect("unknown"), 0);
}
