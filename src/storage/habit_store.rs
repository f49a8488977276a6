//! Persistence for the habit list.
//!
//! The whole list is kept as one JSON array under a single key and is
//! rewritten after every mutation.

use tracing::debug;

use crate::error::HabitsError;
use crate::habits::HabitList;

use super::Database;

/// Key the habit list is stored under unless configured otherwise.
pub const DEFAULT_KEY: &str = "habitTracker";

/// Loads and saves the habit list.
pub struct HabitStore {
    db: Database,
    key: String,
}

impl HabitStore {
    /// Wrap `db`, storing the list under `key`.
    #[must_use]
    pub fn new(db: Database, key: impl Into<String>) -> Self {
        Self { db, key: key.into() }
    }

    /// Load the habit list.
    ///
    /// A missing entry loads as an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the database read fails or the stored value is
    /// not a JSON list of habit records.
    pub fn load(&self) -> Result<HabitList, HabitsError> {
        let Some(raw) = self.db.get(&self.key)? else {
            debug!(key = %self.key, "no stored habits, starting empty");
            return Ok(HabitList::new());
        };

        let list: HabitList = serde_json::from_str(&raw).map_err(|e| {
            HabitsError::Parse(format!("Stored habits under '{}' are unreadable: {e}", self.key))
        })?;
        debug!(key = %self.key, count = list.len(), "loaded habits");

        Ok(list)
    }

    /// Replace the stored habit list with `list`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the database write fails.
    pub fn save(&self, list: &HabitList) -> Result<(), HabitsError> {
        let raw = serde_json::to_string(list)?;
        self.db.set(&self.key, &raw)?;
        debug!(key = %self.key, count = list.len(), "saved habits");
        Ok(())
    }
}
