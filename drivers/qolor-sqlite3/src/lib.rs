///
/// qolor SQLite3 Driver
///
/// Wraps rusqlite (bundled SQLite) so query results can feed qolor
/// pipelines:
///
/// ```
/// use qolor_sqlite3::{Bind, Database, Query};
///
/// let db = Database::open_in_memory()?;
/// db.execute("CREATE TABLE t (x INTEGER); INSERT INTO t VALUES (1), (2), (3);")?;
/// let mut query = Query::new(&db, "SELECT x FROM t WHERE x >= ?1")?;
/// query.bind(1, 2)?;
/// let total: i64 = query.iterable().select(|row| row.get::<i64>(0).unwrap_or(0)).sum();
/// assert_eq!(total, 5);
/// # Ok::<(), qolor_sqlite3::DbError>(())
/// ```
///
/// Modules:
/// - database: `Database`, `OpenOptions`, hooks and the `executef!` macro
/// - command: `Command`, statements without result rows
/// - query: `Query` and the lazy `RowCursor`
/// - row: owned `Row` values, tuple extraction and `RowReader`
/// - bind: the `Bind` trait shared by commands and queries
/// - transaction: the RAII `Transaction` guard
/// - errors: `DbError`
///

pub mod bind;
pub mod command;
pub mod database;
pub mod errors;
pub mod query;
pub mod row;
pub mod transaction;

pub use bind::{Bind, Binder, Slot};
pub use command::Command;
pub use database::{Change, Database, OpenOptions};
pub use errors::DbError;
pub use query::{Query, RowCursor};
pub use row::{FromColumns, Row, RowReader};
pub use rusqlite::types::{Type, Value};
pub use transaction::Transaction;
