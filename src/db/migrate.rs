//! Schema manager.
//!
//! Base tables are created in their first-release shape; every column added
//! later is an entry of [`COLUMN_MIGRATIONS`]. Each step inspects the live
//! table before altering it, so the whole run is safe on every startup.

use crate::db::db_utils::table_has_column;
use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::Connection;

/// Id of the only row the `settings` table may hold.
pub const SETTINGS_ID: i64 = 1;

/// Forward-only, additive schema step: add `column` to `table` when missing.
#[derive(Debug, Clone, Copy)]
pub struct ColumnMigration {
    pub id: &'static str,
    pub table: &'static str,
    pub column: &'static str,
    /// Type and default, as written after `ADD COLUMN <name>`.
    pub definition: &'static str,
    /// SQL literal written into rows where the new column is NULL.
    pub backfill: Option<&'static str>,
}

pub const COLUMN_MIGRATIONS: &[ColumnMigration] = &[
    ColumnMigration {
        id: "20240310_settings_timeformat",
        table: "settings",
        column: "timeformat",
        definition: "TEXT DEFAULT '24'",
        backfill: Some("'24'"),
    },
    ColumnMigration {
        id: "20240422_settings_custom_url",
        table: "settings",
        column: "custom_url",
        definition: "TEXT DEFAULT ''",
        backfill: Some("''"),
    },
    ColumnMigration {
        id: "20240605_projects_directory",
        table: "projects",
        column: "directory",
        definition: "TEXT DEFAULT ''",
        backfill: None,
    },
    ColumnMigration {
        id: "20240718_projects_discord",
        table: "projects",
        column: "discord",
        definition: "TEXT",
        backfill: None,
    },
];

impl ColumnMigration {
    /// Apply the step if the column is missing. Returns whether anything
    /// changed.
    pub fn apply(&self, conn: &Connection) -> AppResult<bool> {
        if table_has_column(conn, self.table, self.column)? {
            return Ok(false);
        }

        conn.execute_batch(&format!(
            "ALTER TABLE {} ADD COLUMN {} {};",
            self.table, self.column, self.definition
        ))
        .map_err(|e| {
            AppError::Migration(format!(
                "failed to add '{}' to {}: {}",
                self.column, self.table, e
            ))
        })?;

        if let Some(value) = self.backfill {
            conn.execute(
                &format!(
                    "UPDATE {table} SET {col} = {value} WHERE {col} IS NULL",
                    table = self.table,
                    col = self.column,
                ),
                [],
            )?;
        }

        ttlog(
            conn,
            "migration_applied",
            self.id,
            &format!("Added '{}' to {}", self.column, self.table),
        )?;

        Ok(true)
    }
}

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the domain tables in their baseline shape.
fn create_base_tables(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS projects (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            description TEXT,
            url         TEXT,
            deadline    TEXT,
            status      TEXT NOT NULL DEFAULT 'active'
                        CHECK(status IN ('active','completed','paused')),
            created_at  TEXT NOT NULL,
            updated_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS time_blocks (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            project_id  INTEGER NOT NULL,
            start_time  TEXT NOT NULL,
            end_time    TEXT,
            duration    INTEGER NOT NULL DEFAULT 0,
            is_manual   INTEGER NOT NULL DEFAULT 0,
            description TEXT,
            created_at  TEXT NOT NULL,
            updated_at  TEXT NOT NULL,
            FOREIGN KEY (project_id) REFERENCES projects (id) ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_time_blocks_start ON time_blocks(start_time);
        CREATE INDEX IF NOT EXISTS idx_time_blocks_project ON time_blocks(project_id);

        CREATE TABLE IF NOT EXISTS settings (
            id       INTEGER PRIMARY KEY CHECK(id = 1),
            theme    TEXT NOT NULL DEFAULT 'light',
            language TEXT NOT NULL DEFAULT 'en'
        );
        "#,
    )?;
    Ok(())
}

/// Insert the singleton settings row with defaults if it is missing.
fn ensure_settings_row(conn: &Connection) -> AppResult<()> {
    conn.execute(
        "INSERT OR IGNORE INTO settings (id, theme, language, timeformat, custom_url)
         VALUES (?1, 'light', 'en', '24', '')",
        [SETTINGS_ID],
    )?;
    Ok(())
}

/// Public entry point: bring the schema up to date.
///
/// Runs in one transaction and returns the ids of the column steps applied
/// by this call (empty when the schema was already current).
pub fn run_pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    let tx = conn.unchecked_transaction()?;

    ensure_log_table(&tx)?;
    create_base_tables(&tx)?;

    let mut applied = Vec::new();
    for step in COLUMN_MIGRATIONS {
        if step.apply(&tx)? {
            applied.push(step.id);
        }
    }

    ensure_settings_row(&tx)?;
    tx.commit()?;

    for id in &applied {
        success(format!("Migration applied: {}", id));
    }

    Ok(applied)
}
