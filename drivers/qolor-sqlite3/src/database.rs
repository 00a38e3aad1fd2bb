///
/// Database Connections
///
/// `Database` owns at most one rusqlite `Connection`. It starts connected
/// and can be disconnected explicitly; every operation on a disconnected
/// database fails with `DbError::Closed`.
///
/// Hooks registered with `set_commit_handler`, `set_rollback_handler` and
/// `set_update_handler` stay installed until replaced or until the
/// connection closes.
///

use std::fmt;
use std::path::Path;
use std::time::Duration;

use rusqlite::hooks::Action;
use rusqlite::{Connection, OpenFlags};
use tracing::debug;

use crate::errors::DbError;

/// How `Database::open_with` opens its file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenOptions {
    pub readonly: bool,
    pub create_if_missing: bool,
    pub shared_cache: bool,
}

impl Default for OpenOptions {
    fn default() -> Self {
        OpenOptions { readonly: false, create_if_missing: true, shared_cache: false }
    }
}

impl OpenOptions {
    pub fn readonly() -> Self {
        OpenOptions { readonly: true, create_if_missing: false, shared_cache: false }
    }

    fn flags(&self) -> OpenFlags {
        let mut flags = OpenFlags::SQLITE_OPEN_URI | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        if self.readonly {
            flags |= OpenFlags::SQLITE_OPEN_READ_ONLY;
        } else {
            flags |= OpenFlags::SQLITE_OPEN_READ_WRITE;
            if self.create_if_missing {
                flags |= OpenFlags::SQLITE_OPEN_CREATE;
            }
        }
        if self.shared_cache {
            flags |= OpenFlags::SQLITE_OPEN_SHARED_CACHE;
        }
        flags
    }
}

/// Row change reported to an update handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Insert,
    Update,
    Delete,
    Other,
}

impl From<Action> for Change {
    fn from(action: Action) -> Self {
        match action {
            Action::SQLITE_INSERT => Change::Insert,
            Action::SQLITE_UPDATE => Change::Update,
            Action::SQLITE_DELETE => Change::Delete,
            _ => Change::Other,
        }
    }
}

pub struct Database {
    conn: Option<Connection>,
    path: String,
}

impl Database {
    /// Opens (creating if needed) a read-write database at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DbError> {
        Self::open_with(path, OpenOptions::default())
    }

    pub fn open_with(path: impl AsRef<Path>, options: OpenOptions) -> Result<Self, DbError> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        let conn = Connection::open_with_flags(path, options.flags())
            .map_err(|source| DbError::Connect { path: shown.clone(), source })?;
        debug!(path = %shown, readonly = options.readonly, "database opened");
        Ok(Database { conn: Some(conn), path: shown })
    }

    pub fn open_in_memory() -> Result<Self, DbError> {
        let conn = Connection::open_in_memory()
            .map_err(|source| DbError::Connect { path: ":memory:".to_string(), source })?;
        debug!("in-memory database opened");
        Ok(Database { conn: Some(conn), path: ":memory:".to_string() })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    /// Closes the connection. Closing twice is a no-op; a failed close
    /// leaves the database connected.
    pub fn disconnect(&mut self) -> Result<(), DbError> {
        let Some(conn) = self.conn.take() else {
            return Ok(());
        };
        if let Err((conn, err)) = conn.close() {
            self.conn = Some(conn);
            return Err(err.into());
        }
        debug!(path = %self.path, "database closed");
        Ok(())
    }

    pub(crate) fn connection(&self) -> Result<&Connection, DbError> {
        self.conn.as_ref().ok_or(DbError::Closed)
    }

    /// Runs every statement in `sql`.
    pub fn execute(&self, sql: &str) -> Result<(), DbError> {
        self.connection()?.execute_batch(sql)?;
        Ok(())
    }

    /// `execute` over formatted SQL text; see the `executef!` macro.
    pub fn executef(&self, args: fmt::Arguments<'_>) -> Result<(), DbError> {
        match args.as_str() {
            Some(sql) => self.execute(sql),
            None => self.execute(&args.to_string()),
        }
    }

    pub fn attach(&self, path: &str, name: &str) -> Result<(), DbError> {
        self.connection()?.execute("ATTACH DATABASE ?1 AS ?2", [path, name])?;
        Ok(())
    }

    pub fn detach(&self, name: &str) -> Result<(), DbError> {
        self.connection()?.execute("DETACH DATABASE ?1", [name])?;
        Ok(())
    }

    pub fn last_insert_rowid(&self) -> Result<i64, DbError> {
        Ok(self.connection()?.last_insert_rowid())
    }

    /// Rows changed by the most recent statement.
    pub fn changes(&self) -> Result<u64, DbError> {
        Ok(self.connection()?.changes())
    }

    pub fn set_busy_timeout(&self, timeout: Duration) -> Result<(), DbError> {
        self.connection()?.busy_timeout(timeout)?;
        Ok(())
    }

    /// Called before each commit; returning `true` turns the commit into a
    /// rollback.
    pub fn set_commit_handler<F>(&self, handler: F) -> Result<(), DbError>
    where
        F: FnMut() -> bool + Send + 'static,
    {
        self.connection()?.commit_hook(Some(handler));
        Ok(())
    }

    pub fn set_rollback_handler<F>(&self, handler: F) -> Result<(), DbError>
    where
        F: FnMut() + Send + 'static,
    {
        self.connection()?.rollback_hook(Some(handler));
        Ok(())
    }

    /// Called for every inserted, updated or deleted row with the change,
    /// database name, table name and rowid.
    pub fn set_update_handler<F>(&self, mut handler: F) -> Result<(), DbError>
    where
        F: FnMut(Change, &str, &str, i64) + Send + 'static,
    {
        self.connection()?
            .update_hook(Some(move |action: Action, db: &str, table: &str, rowid: i64| {
                handler(Change::from(action), db, table, rowid)
            }));
        Ok(())
    }
}

impl fmt::Debug for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Database")
            .field("path", &self.path)
            .field("connected", &self.is_connected())
            .finish()
    }
}

/// Formats SQL text and runs it on a `Database`.
///
/// ```
/// let db = qolor_sqlite3::Database::open_in_memory()?;
/// qolor_sqlite3::executef!(db, "CREATE TABLE t{} (x INTEGER)", 1)?;
/// # Ok::<(), qolor_sqlite3::DbError>(())
/// ```
#[macro_export]
macro_rules! executef {
    ($db:expr, $($arg:tt)*) => {
        $db.executef(format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_open_flags() {
        let flags = OpenOptions::default().flags();
        assert!(flags.contains(OpenFlags::SQLITE_OPEN_CREATE));
        assert!(flags.contains(OpenFlags::SQLITE_OPEN_READ_WRITE));
        let flags = OpenOptions::readonly().flags();
        assert!(flags.contains(OpenFlags::SQLITE_OPEN_READ_ONLY));
        assert!(!flags.contains(OpenFlags::SQLITE_OPEN_CREATE));
    }

    #[test]
    fn test_disconnect_then_use() {
        let mut db = Database::open_in_memory().unwrap();
        assert!(db.is_connected());
        db.disconnect().unwrap();
        db.disconnect().unwrap();
        assert!(!db.is_connected());
        assert!(matches!(db.execute("SELECT 1"), Err(DbError::Closed)));
    }

    #[test]
    fn test_executef_and_rowid() {
        let db = Database::open_in_memory().unwrap();
        db.execute("CREATE TABLE t (x INTEGER)").unwrap();
        for x in 0..3 {
            executef!(db, "INSERT INTO t (x) VALUES ({})", x * 10).unwrap();
        }
        assert_eq!(db.last_insert_rowid().unwrap(), 3);
        assert_eq!(db.changes().unwrap(), 1);
    }

    #[test]
    fn test_update_handler_sees_inserts() {
        let db = Database::open_in_memory().unwrap();
        db.execute("CREATE TABLE contacts (name TEXT)").unwrap();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        db.set_update_handler(move |change, _db, table, rowid| {
            sink.lock().unwrap().push((change, table.to_string(), rowid));
        })
        .unwrap();
        db.execute("INSERT INTO contacts VALUES ('AAAA'); DELETE FROM contacts WHERE name = 'AAAA'").unwrap();
        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![(Change::Insert, "contacts".to_string(), 1), (Change::Delete, "contacts".to_string(), 1)]
        );
    }

    #[test]
    fn test_commit_handler_can_veto() {
        let db = Database::open_in_memory().unwrap();
        db.execute("CREATE TABLE t (x INTEGER)").unwrap();
        db.set_commit_handler(|| true).unwrap();
        assert!(db.execute("INSERT INTO t VALUES (1)").is_err());
    }

    #[test]
    fn test_attach_and_detach() {
        let db = Database::open_in_memory().unwrap();
        db.attach(":memory:", "aux").unwrap();
        db.execute("CREATE TABLE aux.items (x INTEGER)").unwrap();
        db.detach("aux").unwrap();
        assert!(db.execute("SELECT * FROM aux.items").is_err());
    }
}
