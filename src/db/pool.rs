//! SQLite connection wrapper (one connection, one writer).

use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Self::from_connection(conn)
    }

    /// Private in-memory database, mostly useful for tests.
    pub fn in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        // Cascade delete of time blocks depends on this.
        conn.pragma_update(None, "foreign_keys", true)?;
        Ok(Self { conn })
    }
}
