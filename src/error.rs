//! Error types for habits.

use thiserror::Error;

/// Errors produced by the habits library.
#[derive(Debug, Error)]
pub enum HabitsError {
    /// Configuration could not be resolved, read or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The `SQLite` key-value store failed.
    #[error("Database error: {0}")]
    Database(String),

    /// Filesystem or terminal I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored or generated data could not be (de)serialized.
    #[error("Parse error: {0}")]
    Parse(String),

    /// No habit matched the given selector.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The user supplied an unusable value.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<serde_json::Error> for HabitsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
