use rusqlite::types::Value;
use rusqlite::{Batch, Connection, Statement};
use tracing::debug;

use crate::bind::{Bind, Slot, bind_lenient, bind_strict};
use crate::database::Database;
use crate::errors::DbError;

/// A prepared statement that returns no rows.
///
/// `execute` runs the first statement of the SQL text; `execute_all` runs
/// every statement, replaying the bindings made so far on each one.
pub struct Command<'db> {
    conn: &'db Connection,
    sql: String,
    stmt: Statement<'db>,
    bound: Vec<(Slot, Value)>,
}

impl<'db> Command<'db> {
    pub fn new(db: &'db Database, sql: &str) -> Result<Self, DbError> {
        let conn = db.connection()?;
        let stmt = Batch::new(conn, sql).next()?.ok_or(DbError::EmptyStatement)?;
        debug!(sql, "command prepared");
        Ok(Command { conn, sql: sql.to_string(), stmt, bound: Vec::new() })
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Runs the first statement and returns the number of changed rows.
    pub fn execute(&mut self) -> Result<usize, DbError> {
        Ok(self.stmt.raw_execute()?)
    }

    /// Runs every statement of the SQL text and returns the total number of
    /// changed rows.
    pub fn execute_all(&mut self) -> Result<usize, DbError> {
        let mut batch = Batch::new(self.conn, &self.sql);
        let mut changed = 0;
        while let Some(mut stmt) = batch.next()? {
            for (slot, value) in &self.bound {
                bind_lenient(&mut stmt, slot, value)?;
            }
            changed += stmt.raw_execute()?;
        }
        Ok(changed)
    }

    /// Sets every parameter back to NULL.
    pub fn reset(&mut self) -> Result<(), DbError> {
        for index in 1..=self.stmt.parameter_count() {
            self.stmt.raw_bind_parameter(index, Value::Null)?;
        }
        self.bound.clear();
        Ok(())
    }
}

impl Bind for Command<'_> {
    fn bind_value(&mut self, slot: Slot, value: Value) -> Result<(), DbError> {
        bind_strict(&mut self.stmt, &slot, &value)?;
        match self.bound.iter_mut().find(|(existing, _)| *existing == slot) {
            Some(entry) => entry.1 = value,
            None => self.bound.push((slot, value)),
        }
        Ok(())
    }
}
