//! Request surface used by the UI shell.
//!
//! `App` owns the single connection. Opening it brings the schema up to
//! date; each write runs in its own transaction together with the re-read
//! of the record it returns.

use crate::core::timer::TimerLogic;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::{projects, settings, time_blocks};
use crate::errors::AppResult;
use crate::models::{
    CreateProjectRequest, CreateTimeBlockRequest, Project, Settings, TimeBlock,
    UpdateProjectRequest, UpdateSettingsRequest, UpdateTimeBlockRequest,
};
use crate::utils::{date, open};
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::Connection;

pub struct App {
    pool: DbPool,
    applied_migrations: Vec<&'static str>,
}

impl App {
    /// Open (or create) the database at `path` and ensure the schema.
    pub fn open(path: &str) -> AppResult<Self> {
        Self::from_pool(DbPool::new(path)?)
    }

    pub fn open_in_memory() -> AppResult<Self> {
        Self::from_pool(DbPool::in_memory()?)
    }

    fn from_pool(pool: DbPool) -> AppResult<Self> {
        let applied_migrations = init_db(&pool.conn)?;
        Ok(Self {
            pool,
            applied_migrations,
        })
    }

    /// Migration steps applied when this handle was opened.
    pub fn applied_migrations(&self) -> &[&'static str] {
        &self.applied_migrations
    }

    /// Re-run the schema manager; returns the steps it applied.
    pub fn ensure_schema(&self) -> AppResult<Vec<&'static str>> {
        init_db(&self.pool.conn)
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    fn in_transaction<T>(&mut self, f: impl FnOnce(&Connection) -> AppResult<T>) -> AppResult<T> {
        let tx = self.pool.conn.transaction()?;
        let out = f(&tx)?;
        tx.commit()?;
        Ok(out)
    }

    // ---------------------------
    // Projects
    // ---------------------------

    pub fn create_project(&mut self, req: &CreateProjectRequest) -> AppResult<Project> {
        self.in_transaction(|conn| projects::create_project(conn, req))
    }

    pub fn get_all_projects(&self) -> AppResult<Vec<Project>> {
        projects::list_projects(self.conn())
    }

    pub fn get_project(&self, id: i64) -> AppResult<Project> {
        projects::get_project(self.conn(), id)
    }

    pub fn update_project(&mut self, id: i64, req: &UpdateProjectRequest) -> AppResult<Project> {
        self.in_transaction(|conn| projects::update_project(conn, id, req))
    }

    /// Idempotent: deleting a missing id succeeds and returns `false`.
    pub fn delete_project(&mut self, id: i64) -> AppResult<bool> {
        projects::delete_project(self.conn(), id)
    }

    // ---------------------------
    // Time blocks
    // ---------------------------

    pub fn create_time_block(&mut self, req: &CreateTimeBlockRequest) -> AppResult<TimeBlock> {
        self.in_transaction(|conn| time_blocks::create_time_block(conn, req))
    }

    pub fn get_time_block(&self, id: i64) -> AppResult<TimeBlock> {
        time_blocks::get_time_block(self.conn(), id)
    }

    pub fn get_time_blocks_by_date(&self, day: NaiveDate) -> AppResult<Vec<TimeBlock>> {
        time_blocks::list_by_day(self.conn(), day)
    }

    /// Accepts an RFC 3339 timestamp or a bare `YYYY-MM-DD`.
    pub fn get_time_blocks_by_date_str(&self, day: &str) -> AppResult<Vec<TimeBlock>> {
        self.get_time_blocks_by_date(date::parse_day_lenient(day)?)
    }

    pub fn get_time_blocks_by_date_range(
        &self,
        start: &DateTime<Utc>,
        end: &DateTime<Utc>,
    ) -> AppResult<Vec<TimeBlock>> {
        time_blocks::list_by_range(self.conn(), start, end)
    }

    pub fn get_time_blocks_by_date_range_str(
        &self,
        start: &str,
        end: &str,
    ) -> AppResult<Vec<TimeBlock>> {
        let start = date::parse_timestamp_lenient(start)?;
        let end = date::parse_timestamp_lenient(end)?;
        self.get_time_blocks_by_date_range(&start, &end)
    }

    pub fn update_time_block(
        &mut self,
        id: i64,
        req: &UpdateTimeBlockRequest,
    ) -> AppResult<TimeBlock> {
        self.in_transaction(|conn| time_blocks::update_time_block(conn, id, req))
    }

    /// Idempotent: deleting a missing id succeeds and returns `false`.
    pub fn delete_time_block(&mut self, id: i64) -> AppResult<bool> {
        time_blocks::delete_time_block(self.conn(), id)
    }

    pub fn stop_running_time_block(&mut self, id: i64) -> AppResult<TimeBlock> {
        self.in_transaction(|conn| TimerLogic::stop_running(conn, id))
    }

    pub fn stop_time_block_with_duration(&mut self, id: i64, duration: i64) -> AppResult<TimeBlock> {
        self.in_transaction(|conn| TimerLogic::stop_with_duration(conn, id, duration))
    }

    pub fn get_total_duration_by_project(&self, project_id: i64) -> AppResult<i64> {
        time_blocks::total_duration_for_project(self.conn(), project_id)
    }

    // ---------------------------
    // Settings
    // ---------------------------

    pub fn get_settings(&self) -> AppResult<Settings> {
        settings::get_settings(self.conn())
    }

    pub fn update_settings(&mut self, req: &UpdateSettingsRequest) -> AppResult<Settings> {
        self.in_transaction(|conn| settings::update_settings(conn, req))
    }

    // ---------------------------
    // OS integration
    // ---------------------------

    pub fn open_directory(&self, path: &str) -> AppResult<()> {
        open::open_directory(path)
    }

    pub fn open_url(&self, url: &str) -> AppResult<()> {
        open::open_url(url)
    }
}
