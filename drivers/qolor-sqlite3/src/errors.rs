///
/// SQLite driver error type.
///
/// Every failure reported by the engine funnels through `DbError::Sqlite`
/// and keeps the engine's message. The remaining variants cover misuse the
/// driver detects before reaching the engine.
///

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("{0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Failed to open database '{path}': {source}")]
    Connect {
        path: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Database is not connected")]
    Closed,

    #[error("SQL text contains no statement")]
    EmptyStatement,

    #[error("No parameter named '{0}'")]
    UnknownParameter(String),

    #[error("Value cannot be bound to a parameter")]
    UnsupportedValue,

    #[error("Column {column} out of range (row has {count} columns)")]
    ColumnOutOfRange { column: usize, count: usize },

    #[error("Expected {expected} column indexes, got {found}")]
    ColumnCount { expected: usize, found: usize },

    #[error("Column {column}: {reason}")]
    Conversion { column: usize, reason: String },
}

impl DbError {
    /// Extended SQLite result code, when the engine produced the error.
    pub fn code(&self) -> Option<i32> {
        match self {
            DbError::Sqlite(err) | DbError::Connect { source: err, .. } => {
                err.sqlite_error().map(|failure| failure.extended_code)
            }
            _ => None,
        }
    }
}
