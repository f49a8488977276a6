//! `SQLite` key-value store.
//!
//! The database lives at `~/.habits/habits.db` and holds a single
//! `kv_store` table. Values are opaque strings; callers decide the format.

use rusqlite::{Connection, OptionalExtension};
use tracing::debug;

use crate::error::HabitsError;

use super::migrations;

/// Database connection wrapper.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at a specific path.
    ///
    /// Creates the database file and runs migrations if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_at(path: &std::path::Path) -> Result<Self, HabitsError> {
        let conn = Connection::open(path).map_err(|e| {
            HabitsError::Database(format!("Failed to open database {}: {e}", path.display()))
        })?;
        debug!(path = %path.display(), "opened database");

        let db = Self { conn };
        db.migrate()?;

        Ok(db)
    }

    /// Open an in-memory database (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_in_memory() -> Result<Self, HabitsError> {
        let conn = Connection::open_in_memory().map_err(|e| {
            HabitsError::Database(format!("Failed to open in-memory database: {e}"))
        })?;

        let db = Self { conn };
        db.migrate()?;

        Ok(db)
    }

    fn migrate(&self) -> Result<(), HabitsError> {
        migrations::run(&self.conn)
    }

    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get(&self, key: &str) -> Result<Option<String>, HabitsError> {
        self.conn
            .query_row("SELECT value FROM kv_store WHERE key = ?1", [key], |row| row.get(0))
            .optional()
            .map_err(|e| HabitsError::Database(format!("Failed to read '{key}': {e}")))
    }

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn set(&self, key: &str, value: &str) -> Result<(), HabitsError> {
        self.conn
            .execute(
                "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, datetime('now'))
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                [key, value],
            )
            .map(|_| ())
            .map_err(|e| HabitsError::Database(format!("Failed to write '{key}': {e}")))
    }
}
