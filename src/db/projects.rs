//! Project record store.

use crate::db::db_utils::{conversion_error, get_opt_timestamp, get_timestamp};
use crate::db::update::UpdateBuilder;
use crate::errors::{AppError, AppResult};
use crate::models::{CreateProjectRequest, Project, ProjectStatus, UpdateProjectRequest};
use crate::utils::date;
use rusqlite::{Connection, OptionalExtension, Row, params};

const SELECT_PROJECT: &str = "SELECT id, name, description, url, discord, directory, deadline,
            status, created_at, updated_at
     FROM projects";

pub fn map_project(row: &Row) -> rusqlite::Result<Project> {
    let status_str: String = row.get(7)?;
    let status = ProjectStatus::from_db_str(&status_str)
        .ok_or_else(|| conversion_error(7, AppError::InvalidStatus(status_str.clone())))?;

    Ok(Project {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        url: row.get(3)?,
        discord: row.get(4)?,
        directory: row.get(5)?,
        deadline: get_opt_timestamp(row, 6)?,
        status,
        created_at: get_timestamp(row, 8)?,
        updated_at: get_timestamp(row, 9)?,
    })
}

/// Insert a project with status `active`; returns the new id.
pub fn insert_project(conn: &Connection, req: &CreateProjectRequest) -> AppResult<i64> {
    let now = date::to_db(&date::now());

    conn.execute(
        "INSERT INTO projects (name, description, url, discord, directory, deadline,
                               status, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)",
        params![
            req.name,
            req.description,
            req.url,
            req.discord,
            req.directory,
            req.deadline.as_ref().map(date::to_db),
            ProjectStatus::Active.to_db_str(),
            now,
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

pub fn create_project(conn: &Connection, req: &CreateProjectRequest) -> AppResult<Project> {
    let id = insert_project(conn, req)?;
    get_project(conn, id)
}

/// All projects, newest first.
pub fn list_projects(conn: &Connection) -> AppResult<Vec<Project>> {
    let mut stmt = conn.prepare(&format!(
        "{SELECT_PROJECT} ORDER BY created_at DESC, id DESC"
    ))?;

    let rows = stmt.query_map([], map_project)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get_project(conn: &Connection, id: i64) -> AppResult<Project> {
    let mut stmt = conn.prepare_cached(&format!("{SELECT_PROJECT} WHERE id = ?1"))?;

    stmt.query_row([id], map_project)
        .optional()?
        .ok_or_else(|| AppError::not_found("project", id))
}

/// Partial update. Fields absent from `req` keep their value; `updated_at`
/// is always refreshed.
pub fn update_project(
    conn: &Connection,
    id: i64,
    req: &UpdateProjectRequest,
) -> AppResult<Project> {
    let mut update = UpdateBuilder::new("projects");
    update
        .set_opt("name", req.name.clone())
        .set_opt("description", req.description.clone())
        .set_opt("url", req.url.clone())
        .set_opt("discord", req.discord.clone())
        .set_opt("directory", req.directory.clone())
        .set_opt_timestamp("deadline", req.deadline.as_ref())
        .set_opt("status", req.status.map(|s| s.to_db_str().to_string()))
        .set_timestamp("updated_at", &date::now());

    if update.execute(conn, id)? == 0 {
        return Err(AppError::not_found("project", id));
    }

    get_project(conn, id)
}

/// Delete a project and, through the foreign key, its time blocks.
/// Returns whether a row was removed; a missing id is not an error.
pub fn delete_project(conn: &Connection, id: i64) -> AppResult<bool> {
    let removed = conn.execute("DELETE FROM projects WHERE id = ?1", [id])?;
    Ok(removed > 0)
}
