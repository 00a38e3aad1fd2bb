use std::sync::Arc;

use qolor::{Category, Cursor, Iterable};
use rusqlite::types::Value;
use rusqlite::{Rows, Statement};
use tracing::{debug, warn};

use crate::bind::{Bind, Slot, bind_strict};
use crate::database::Database;
use crate::errors::DbError;
use crate::row::Row;

/// A prepared statement that returns rows.
pub struct Query<'db> {
    stmt: Statement<'db>,
    columns: Arc<[String]>,
}

impl<'db> Query<'db> {
    pub fn new(db: &'db Database, sql: &str) -> Result<Self, DbError> {
        let stmt = db.connection()?.prepare(sql)?;
        let columns: Arc<[String]> = stmt.column_names().into_iter().map(String::from).collect();
        debug!(sql, columns = columns.len(), "query prepared");
        Ok(Query { stmt, columns })
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_name(&self, column: usize) -> Option<&str> {
        self.columns.get(column).map(String::as_str)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Steps the statement from its first row. Each call restarts the
    /// query with the current bindings.
    pub fn cursor(&mut self) -> RowCursor<'_> {
        RowCursor::new(self.stmt.raw_query(), Arc::clone(&self.columns))
    }

    pub fn iterable(&mut self) -> Iterable<RowCursor<'_>> {
        Iterable::new(self.cursor())
    }

    /// Collects every row, stopping at the first engine error.
    pub fn rows(&mut self) -> Result<Vec<Row>, DbError> {
        let mut cursor = self.cursor();
        let mut rows = Vec::new();
        while !cursor.done {
            if let Some(row) = cursor.current.take() {
                rows.push(row);
            }
            cursor.fetch();
        }
        match cursor.take_error() {
            Some(err) => Err(err),
            None => Ok(rows),
        }
    }
}

impl Bind for Query<'_> {
    fn bind_value(&mut self, slot: Slot, value: Value) -> Result<(), DbError> {
        bind_strict(&mut self.stmt, &slot, &value)
    }
}

/// Input cursor over the rows of a running query.
///
/// The first row is fetched on construction. An engine error while
/// stepping ends the sequence; it is logged and kept for `take_error`.
/// `take_current` moves the row out; the position stays put until
/// `advance`.
pub struct RowCursor<'q> {
    rows: Rows<'q>,
    columns: Arc<[String]>,
    current: Option<Row>,
    done: bool,
    error: Option<DbError>,
}

impl<'q> RowCursor<'q> {
    fn new(rows: Rows<'q>, columns: Arc<[String]>) -> Self {
        let mut cursor = RowCursor { rows, columns, current: None, done: false, error: None };
        cursor.fetch();
        cursor
    }

    pub fn take_error(&mut self) -> Option<DbError> {
        self.error.take()
    }

    fn fetch(&mut self) {
        self.current = None;
        let step = self.rows.next().and_then(|next| match next {
            Some(row) => (0..self.columns.len())
                .map(|i| row.get::<_, Value>(i))
                .collect::<Result<Vec<_>, _>>()
                .map(Some),
            None => Ok(None),
        });
        match step {
            Ok(Some(values)) => self.current = Some(Row::new(Arc::clone(&self.columns), values)),
            Ok(None) => self.done = true,
            Err(err) => {
                self.done = true;
                warn!(error = %err, "row fetch failed");
                self.error = Some(err.into());
            }
        }
    }
}

impl Cursor for RowCursor<'_> {
    type Item = Row;

    const CATEGORY: Category = Category::Input;

    fn is_exhausted(&mut self) -> bool {
        self.done
    }

    fn current(&mut self) -> Option<&Row> {
        self.current.as_ref()
    }

    fn advance(&mut self) {
        if !self.done {
            self.fetch();
        }
    }

    fn take_current(&mut self) -> Option<Row> {
        self.current.take()
    }
}
