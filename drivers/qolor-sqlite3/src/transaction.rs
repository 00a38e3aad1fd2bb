use tracing::{debug, warn};

use crate::database::Database;
use crate::errors::DbError;

/// RAII transaction guard.
///
/// A guard that is neither committed nor rolled back finishes on drop:
/// it commits when created with `commit_on_drop`, otherwise rolls back.
/// A failed commit leaves the guard open, and dropping it rolls back.
pub struct Transaction<'db> {
    db: &'db Database,
    commit_on_drop: bool,
    finished: bool,
}

impl<'db> Transaction<'db> {
    /// Deferred transaction that rolls back unless committed.
    pub fn begin(db: &'db Database) -> Result<Self, DbError> {
        Self::begin_with(db, false, false)
    }

    pub fn begin_with(db: &'db Database, commit_on_drop: bool, immediate: bool) -> Result<Self, DbError> {
        db.execute(if immediate { "BEGIN IMMEDIATE" } else { "BEGIN" })?;
        debug!(immediate, commit_on_drop, "transaction started");
        Ok(Transaction { db, commit_on_drop, finished: false })
    }

    pub fn commit(mut self) -> Result<(), DbError> {
        self.finish(true)
    }

    pub fn rollback(mut self) -> Result<(), DbError> {
        self.finish(false)
    }

    fn finish(&mut self, commit: bool) -> Result<(), DbError> {
        self.db.execute(if commit { "COMMIT" } else { "ROLLBACK" })?;
        self.finished = true;
        debug!(commit, "transaction finished");
        Ok(())
    }
}

impl Drop for Transaction<'_> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        let commit = self.commit_on_drop;
        if let Err(err) = self.finish(commit) {
            warn!(commit, error = %err, "transaction finalization failed");
            if commit {
                if let Err(err) = self.finish(false) {
                    warn!(error = %err, "rollback after failed commit failed");
                }
            }
        }
    }
}
