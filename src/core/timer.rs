//! Stopping a time block.
//!
//! A block is Running while `end_time` is NULL and Stopped once it is set.
//! Both stop paths overwrite end time and duration whatever the current
//! state; only invoke them on running blocks.

use crate::db::time_blocks::{get_time_block, mark_stopped};
use crate::errors::AppResult;
use crate::models::TimeBlock;
use crate::utils::date;
use crate::utils::time::elapsed_seconds;
use chrono::{DateTime, Utc};
use rusqlite::Connection;

pub struct TimerLogic;

impl TimerLogic {
    /// Stop at the current instant; duration is the wall-clock span since
    /// `start_time`.
    pub fn stop_running(conn: &Connection, id: i64) -> AppResult<TimeBlock> {
        Self::stop_running_at(conn, id, &date::now())
    }

    pub fn stop_running_at(
        conn: &Connection,
        id: i64,
        now: &DateTime<Utc>,
    ) -> AppResult<TimeBlock> {
        let block = get_time_block(conn, id)?;
        let duration = elapsed_seconds(&block.start_time, now);

        mark_stopped(conn, id, now, duration)?;
        get_time_block(conn, id)
    }

    /// Stop with a total accumulated elsewhere (paused/resumed timers).
    /// `duration` is stored as given, not derived from `start_time`.
    pub fn stop_with_duration(conn: &Connection, id: i64, duration: i64) -> AppResult<TimeBlock> {
        Self::stop_with_duration_at(conn, id, duration, &date::now())
    }

    pub fn stop_with_duration_at(
        conn: &Connection,
        id: i64,
        duration: i64,
        now: &DateTime<Utc>,
    ) -> AppResult<TimeBlock> {
        mark_stopped(conn, id, now, duration)?;
        get_time_block(conn, id)
    }
}
