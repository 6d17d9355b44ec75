//! Partial-update builder.
//!
//! Collects `column = ?` assignments for the fields a caller actually
//! supplied, in the order they are added, and runs them as a single
//! `UPDATE ... WHERE id = ?` statement.

use crate::errors::AppResult;
use crate::utils::date;
use chrono::{DateTime, Utc};
use rusqlite::types::Value;
use rusqlite::{Connection, params_from_iter};

#[derive(Debug)]
pub struct UpdateBuilder {
    table: &'static str,
    assignments: Vec<(&'static str, Value)>,
}

impl UpdateBuilder {
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            assignments: Vec::new(),
        }
    }

    /// Always assign `column`.
    pub fn set(&mut self, column: &'static str, value: impl Into<Value>) -> &mut Self {
        self.assignments.push((column, value.into()));
        self
    }

    /// Assign `column` only when a value is present.
    pub fn set_opt<T: Into<Value>>(&mut self, column: &'static str, value: Option<T>) -> &mut Self {
        if let Some(v) = value {
            self.set(column, v);
        }
        self
    }

    pub fn set_timestamp(&mut self, column: &'static str, ts: &DateTime<Utc>) -> &mut Self {
        self.set(column, date::to_db(ts))
    }

    pub fn set_opt_timestamp(
        &mut self,
        column: &'static str,
        ts: Option<&DateTime<Utc>>,
    ) -> &mut Self {
        self.set_opt(column, ts.map(date::to_db))
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn columns(&self) -> Vec<&'static str> {
        self.assignments.iter().map(|(c, _)| *c).collect()
    }

    /// `UPDATE <table> SET a = ?1, b = ?2 WHERE id = ?3`
    pub fn sql(&self) -> String {
        let set_clause = self
            .assignments
            .iter()
            .enumerate()
            .map(|(i, (col, _))| format!("{} = ?{}", col, i + 1))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "UPDATE {} SET {} WHERE id = ?{}",
            self.table,
            set_clause,
            self.assignments.len() + 1
        )
    }

    /// Run the statement against row `id`, returning the number of rows
    /// changed. An empty builder is a no-op.
    pub fn execute(&self, conn: &Connection, id: i64) -> AppResult<usize> {
        if self.is_empty() {
            return Ok(0);
        }

        let id_value = Value::Integer(id);
        let values = self
            .assignments
            .iter()
            .map(|(_, v)| v)
            .chain(std::iter::once(&id_value));

        let changed = conn.execute(&self.sql(), params_from_iter(values))?;
        Ok(changed)
    }
}
