//! Time block record store.

use crate::db::db_utils::{get_opt_timestamp, get_timestamp};
use crate::db::update::UpdateBuilder;
use crate::errors::{AppError, AppResult};
use crate::models::{CreateTimeBlockRequest, TimeBlock, UpdateTimeBlockRequest};
use crate::utils::date;
use crate::utils::time::elapsed_seconds;
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{Connection, OptionalExtension, Row, params};

const SELECT_BLOCK: &str = "SELECT tb.id, tb.project_id, p.name AS project_name, tb.start_time,
            tb.end_time, tb.duration, tb.is_manual, tb.description,
            tb.created_at, tb.updated_at
     FROM time_blocks tb
     JOIN projects p ON tb.project_id = p.id";

pub fn map_time_block(row: &Row) -> rusqlite::Result<TimeBlock> {
    Ok(TimeBlock {
        id: row.get(0)?,
        project_id: row.get(1)?,
        project_name: row.get(2)?,
        start_time: get_timestamp(row, 3)?,
        end_time: get_opt_timestamp(row, 4)?,
        duration: row.get(5)?,
        is_manual: row.get(6)?,
        description: row.get(7)?,
        created_at: get_timestamp(row, 8)?,
        updated_at: get_timestamp(row, 9)?,
    })
}

/// Duration to store for a new block: the caller's value, else the span
/// between start and end, else 0 for a running timer.
pub fn initial_duration(req: &CreateTimeBlockRequest) -> i64 {
    match (req.duration, req.end_time.as_ref()) {
        (Some(d), _) => d,
        (None, Some(end)) => elapsed_seconds(&req.start_time, end),
        (None, None) => 0,
    }
}

pub fn insert_time_block(conn: &Connection, req: &CreateTimeBlockRequest) -> AppResult<i64> {
    let now = date::to_db(&date::now());

    conn.execute(
        "INSERT INTO time_blocks (project_id, start_time, end_time, duration, is_manual,
                                  description, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)",
        params![
            req.project_id,
            date::to_db(&req.start_time),
            req.end_time.as_ref().map(date::to_db),
            initial_duration(req),
            req.is_manual,
            req.description,
            now,
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

pub fn create_time_block(conn: &Connection, req: &CreateTimeBlockRequest) -> AppResult<TimeBlock> {
    let id = insert_time_block(conn, req)?;
    get_time_block(conn, id)
}

/// A single block joined with its project name.
pub fn get_time_block(conn: &Connection, id: i64) -> AppResult<TimeBlock> {
    let mut stmt = conn.prepare_cached(&format!("{SELECT_BLOCK} WHERE tb.id = ?1"))?;

    stmt.query_row([id], map_time_block)
        .optional()?
        .ok_or_else(|| AppError::not_found("time block", id))
}

fn query_blocks(conn: &Connection, sql: &str, lo: &str, hi: &str) -> AppResult<Vec<TimeBlock>> {
    let mut stmt = conn.prepare_cached(sql)?;
    let rows = stmt.query_map(params![lo, hi], map_time_block)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Blocks starting within the local calendar day, newest first.
pub fn list_by_day(conn: &Connection, day: NaiveDate) -> AppResult<Vec<TimeBlock>> {
    let (start, end) = date::local_day_bounds(day)?;

    query_blocks(
        conn,
        &format!(
            "{SELECT_BLOCK} WHERE tb.start_time >= ?1 AND tb.start_time < ?2
             ORDER BY tb.start_time DESC"
        ),
        &date::to_db(&start),
        &date::to_db(&end),
    )
}

/// Blocks with `start <= start_time <= end`, newest first.
pub fn list_by_range(
    conn: &Connection,
    start: &DateTime<Utc>,
    end: &DateTime<Utc>,
) -> AppResult<Vec<TimeBlock>> {
    query_blocks(
        conn,
        &format!(
            "{SELECT_BLOCK} WHERE tb.start_time >= ?1 AND tb.start_time <= ?2
             ORDER BY tb.start_time DESC"
        ),
        &date::to_db(start),
        &date::to_db(end),
    )
}

/// Partial update restricted to start/end/duration/description.
pub fn update_time_block(
    conn: &Connection,
    id: i64,
    req: &UpdateTimeBlockRequest,
) -> AppResult<TimeBlock> {
    let mut update = UpdateBuilder::new("time_blocks");
    update
        .set_opt_timestamp("start_time", req.start_time.as_ref())
        .set_opt_timestamp("end_time", req.end_time.as_ref())
        .set_opt("duration", req.duration)
        .set_opt("description", req.description.clone())
        .set_timestamp("updated_at", &date::now());

    if update.execute(conn, id)? == 0 {
        return Err(AppError::not_found("time block", id));
    }

    get_time_block(conn, id)
}

/// Persist the stopped state: end time and final duration.
pub fn mark_stopped(
    conn: &Connection,
    id: i64,
    end_time: &DateTime<Utc>,
    duration: i64,
) -> AppResult<()> {
    let mut update = UpdateBuilder::new("time_blocks");
    update
        .set_timestamp("end_time", end_time)
        .set("duration", duration)
        .set_timestamp("updated_at", &date::now());

    if update.execute(conn, id)? == 0 {
        return Err(AppError::not_found("time block", id));
    }
    Ok(())
}

/// Returns whether a row was removed; a missing id is not an error.
pub fn delete_time_block(conn: &Connection, id: i64) -> AppResult<bool> {
    let removed = conn.execute("DELETE FROM time_blocks WHERE id = ?1", [id])?;
    Ok(removed > 0)
}

/// Sum of stored durations for a project, 0 when it has no blocks.
pub fn total_duration_for_project(conn: &Connection, project_id: i64) -> AppResult<i64> {
    let total: i64 = conn.query_row(
        "SELECT COALESCE(SUM(duration), 0) FROM time_blocks WHERE project_id = ?1",
        [project_id],
        |row| row.get(0),
    )?;
    Ok(total)
}
