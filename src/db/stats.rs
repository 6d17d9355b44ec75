use crate::db::db_utils::count_rows;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::Connection;
use std::fs;

/// Row counts per domain table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbCounts {
    pub projects: i64,
    pub time_blocks: i64,
    pub running: i64,
    pub settings: i64,
}

pub fn counts(conn: &Connection) -> AppResult<DbCounts> {
    let running: i64 = conn.query_row(
        "SELECT COUNT(*) FROM time_blocks WHERE end_time IS NULL",
        [],
        |row| row.get(0),
    )?;

    Ok(DbCounts {
        projects: count_rows(conn, "projects")?,
        time_blocks: count_rows(conn, "time_blocks")?,
        running,
        settings: count_rows(conn, "settings")?,
    })
}

pub fn print_db_info(conn: &Connection, db_path: &str) -> AppResult<()> {
    eprintln!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    eprintln!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    eprintln!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROW COUNTS
    //
    let c = counts(conn)?;
    eprintln!("{}• Projects:{} {}{}{}", CYAN, RESET, GREEN, c.projects, RESET);
    eprintln!(
        "{}• Time blocks:{} {}{}{} ({} running)",
        CYAN, RESET, GREEN, c.time_blocks, RESET, c.running
    );
    eprintln!("{}• Settings rows:{} {}", CYAN, RESET, c.settings);

    //
    // 3) BLOCK RANGE
    //
    let (first, last): (Option<String>, Option<String>) = conn.query_row(
        "SELECT MIN(start_time), MAX(start_time) FROM time_blocks",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    eprintln!("{}• Time block range:{}", CYAN, RESET);
    eprintln!(
        "    from: {}",
        first.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );
    eprintln!(
        "    to:   {}",
        last.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    eprintln!();
    Ok(())
}
