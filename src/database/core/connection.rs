//! Database connection management
//!
//! This module provides the SQLite connection wrapper shared by all repositories.

use anyhow::{anyhow, Result};
use rusqlite::{Connection, Transaction, TransactionBehavior};
use std::cmp::Ordering;

/// Collation comparing text after full Unicode lowercasing
///
/// SQLite's built-in `NOCASE` and `LOWER()` only fold ASCII letters, so
/// "Inglês" and "INGLÊS" would otherwise compare as different values.
pub const UNICODE_NOCASE: &str = "UNICODE_NOCASE";

/// Core database connection wrapper
///
/// `DatabaseConn` wraps a SQLite connection, handling both file-based and
/// in-memory databases with the same configuration. Foreign keys are always
/// enabled so that enrollment rows follow their course and student.
pub struct DatabaseConn {
    pub conn: Connection,
}

impl DatabaseConn {
    /// Open a database at the specified path
    ///
    /// If the path is `None`, an in-memory database is created.
    pub fn open(path: Option<&str>) -> Result<Self> {
        let conn = match path {
            Some(p) => Connection::open(p)
                .map_err(|e| anyhow!("Failed to open database at '{}': {}", p, e))?,
            None => Connection::open_in_memory()
                .map_err(|e| anyhow!("Failed to create in-memory database: {}", e))?,
        };

        let db = DatabaseConn { conn };
        db.configure(path.is_some())?;
        Ok(db)
    }

    /// Open a database at the specified path (convenience method)
    pub fn open_path(path: &str) -> Result<Self> {
        Self::open(Some(path))
    }

    /// Create an in-memory database
    pub fn open_in_memory() -> Result<Self> {
        Self::open(None)
    }

    fn configure(&self, on_disk: bool) -> Result<()> {
        // WAL only makes sense for file-backed databases
        if on_disk {
            let _: String = self
                .conn
                .query_row("PRAGMA journal_mode=WAL", [], |row| row.get(0))
                .map_err(|e| anyhow!("Failed to set journal mode: {}", e))?;

            self.conn
                .execute("PRAGMA synchronous=NORMAL", [])
                .map_err(|e| anyhow!("Failed to set synchronous mode: {}", e))?;
        }

        self.conn
            .execute("PRAGMA foreign_keys=ON", [])
            .map_err(|e| anyhow!("Failed to enable foreign keys: {}", e))?;

        self.conn
            .busy_timeout(std::time::Duration::from_secs(5))
            .map_err(|e| anyhow!("Failed to set busy timeout: {}", e))?;

        register_collations(&self.conn)
    }

    /// Begin an immediate transaction
    ///
    /// The write lock is taken up front, so a check-then-insert sequence
    /// run inside it cannot interleave with another writer.
    pub fn transaction(&self) -> Result<Transaction<'_>> {
        immediate_transaction(&self.conn)
    }
}

fn unicode_nocase(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Register the collations the schema refers to
///
/// Must run on every connection before the school tables are touched.
pub(crate) fn register_collations(conn: &Connection) -> Result<()> {
    conn.create_collation(UNICODE_NOCASE, unicode_nocase)
        .map_err(|e| anyhow!("Failed to register {} collation: {}", UNICODE_NOCASE, e))
}

/// Begin an `IMMEDIATE` transaction on a shared connection reference
pub(crate) fn immediate_transaction(conn: &Connection) -> Result<Transaction<'_>> {
    Transaction::new_unchecked(conn, TransactionBehavior::Immediate)
        .map_err(|e| anyhow!("Failed to begin transaction: {}", e))
}

/// Whether an error is a UNIQUE or PRIMARY KEY constraint violation
pub(crate) fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                || e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_in_memory() {
        let db = DatabaseConn::open_in_memory();
        assert!(db.is_ok());
    }

    #[test]
    fn test_foreign_keys_enabled() {
        let db = DatabaseConn::open_in_memory().unwrap();
        let enabled: i32 = db
            .conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 1);
    }

    #[test]
    fn test_unicode_nocase_collation() {
        let db = DatabaseConn::open_in_memory().unwrap();
        let same: bool = db
            .conn
            .query_row(
                "SELECT 'Inglês' = 'INGLÊS' COLLATE UNICODE_NOCASE",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert!(same);

        let ascii_only: bool = db
            .conn
            .query_row("SELECT 'Inglês' = 'INGLÊS' COLLATE NOCASE", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert!(!ascii_only);
    }

    #[test]
    fn test_unique_violation_detection() {
        let db = DatabaseConn::open_in_memory().unwrap();
        db.conn
            .execute("CREATE TABLE t (name TEXT UNIQUE)", [])
            .unwrap();
        db.conn
            .execute("INSERT INTO t (name) VALUES ('a')", [])
            .unwrap();

        let err = db
            .conn
            .execute("INSERT INTO t (name) VALUES ('a')", [])
            .unwrap_err();
        assert!(is_unique_violation(&err));
    }

    #[test]
    fn test_transaction_rollback_on_drop() {
        let db = DatabaseConn::open_in_memory().unwrap();
        db.conn
            .execute("CREATE TABLE t (id INTEGER PRIMARY KEY)", [])
            .unwrap();
        {
            let tx = db.transaction().unwrap();
            tx.execute("INSERT INTO t (id) VALUES (1)", []).unwrap();
        }
        let count: i64 = db
            .conn
            .query_row("SELECT COUNT(*) FROM t", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
