//! Settings singleton store. Every query targets `SETTINGS_ID`.

use crate::db::db_utils::conversion_error;
use crate::db::migrate::SETTINGS_ID;
use crate::db::update::UpdateBuilder;
use crate::errors::{AppError, AppResult};
use crate::models::{Settings, Theme, TimeFormat, UpdateSettingsRequest};
use rusqlite::{Connection, OptionalExtension, Row};

fn map_settings(row: &Row) -> rusqlite::Result<Settings> {
    let theme_str: String = row.get(1)?;
    let theme = Theme::from_db_str(&theme_str)
        .ok_or_else(|| conversion_error(1, AppError::InvalidTheme(theme_str.clone())))?;

    let format_str: String = row.get(3)?;
    let time_format = TimeFormat::from_db_str(&format_str)
        .ok_or_else(|| conversion_error(3, AppError::InvalidTimeFormat(format_str.clone())))?;

    Ok(Settings {
        id: row.get(0)?,
        theme,
        language: row.get(2)?,
        time_format,
        custom_url: row.get(4)?,
    })
}

/// Rows written before a column existed read back with the column default.
pub fn get_settings(conn: &Connection) -> AppResult<Settings> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, COALESCE(theme, 'light'), COALESCE(language, 'en'),
                COALESCE(timeformat, '24'), COALESCE(custom_url, '')
         FROM settings WHERE id = ?1",
    )?;

    stmt.query_row([SETTINGS_ID], map_settings)
        .optional()?
        .ok_or_else(|| AppError::not_found("settings", SETTINGS_ID))
}

/// Partial update of the singleton. An empty request only re-reads it.
pub fn update_settings(conn: &Connection, req: &UpdateSettingsRequest) -> AppResult<Settings> {
    let mut update = UpdateBuilder::new("settings");
    update
        .set_opt("theme", req.theme.map(|t| t.to_db_str().to_string()))
        .set_opt("language", req.language.clone())
        .set_opt("timeformat", req.time_format.map(|f| f.to_db_str().to_string()))
        .set_opt("custom_url", req.custom_url.clone());

    if !update.is_empty() && update.execute(conn, SETTINGS_ID)? == 0 {
        return Err(AppError::not_found("settings", SETTINGS_ID));
    }

    get_settings(conn)
}
