//! Path resolution for habits configuration and data files.
//!
//! All habits data is stored in `~/.habits/` (or `$HABITS_HOME`):
//! - `config.yaml` - Main configuration file
//! - `habits.db` - SQLite key-value store holding the habit list

use std::path::PathBuf;

use crate::error::HabitsError;

/// Environment variable that overrides the data directory.
pub const HOME_ENV: &str = "HABITS_HOME";

/// Paths to habits configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.habits/`
    pub root: PathBuf,
    /// Config file: `~/.habits/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.habits/habits.db`
    pub database: PathBuf,
}

impl Paths {
    /// Resolve paths from `$HABITS_HOME`, falling back to `~/.habits`.
    ///
    /// # Errors
    ///
    /// Returns an error if neither variable is set.
    pub fn new() -> Result<Self, HabitsError> {
        if let Some(root) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_root(PathBuf::from(root)));
        }

        let home = std::env::var("HOME").map_err(|_| {
            HabitsError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".habits")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("habits.db"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), HabitsError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                HabitsError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }

        Ok(())
    }
}
