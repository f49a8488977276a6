//! Habit records.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

use crate::core::{format_day, parse_day};

/// Unique habit identifier: the creation timestamp in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitId(pub i64);

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The set of calendar days on which a habit was completed.
///
/// Kept ordered so streak scans can walk it without re-sorting. Serialized
/// as an ascending array of `YYYY-MM-DD` strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Completions(BTreeSet<NaiveDate>);

impl Completions {
    /// An empty completion set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Build a set from `YYYY-MM-DD` strings, dropping malformed entries.
    pub fn from_iso_strs<'a, I>(dates: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut set = BTreeSet::new();
        for raw in dates {
            match parse_day(raw) {
                Some(day) => {
                    set.insert(day);
                },
                None => warn!(entry = raw, "dropping malformed completion date"),
            }
        }
        Self(set)
    }

    /// Whether `day` is a completion.
    #[must_use]
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.0.contains(&day)
    }

    /// Number of completed days.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no day has been completed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Completed days in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.0.iter().copied()
    }

    /// Most recent completion.
    #[must_use]
    pub fn last(&self) -> Option<NaiveDate> {
        self.0.last().copied()
    }

    /// Add `day` if absent, remove it if present.
    ///
    /// Returns `true` when the day is now completed.
    pub fn toggle(&mut self, day: NaiveDate) -> bool {
        if self.0.remove(&day) {
            false
        } else {
            self.0.insert(day);
            true
        }
    }
}

impl FromIterator<NaiveDate> for Completions {
    fn from_iter<T: IntoIterator<Item = NaiveDate>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for Completions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter().map(|day| format_day(*day)))
    }
}

impl<'de> Deserialize<'de> for Completions {
    /// Missing, `null`, or non-string entries are treated as no completion.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
        let entries = match raw {
            Some(serde_json::Value::Array(entries)) => entries,
            Some(serde_json::Value::Null) | None => Vec::new(),
            Some(other) => {
                warn!(value = %other, "completions is not a list, treating as empty");
                Vec::new()
            },
        };

        let strings: Vec<String> = entries
            .into_iter()
            .filter_map(|entry| match entry {
                serde_json::Value::String(s) => Some(s),
                other => {
                    warn!(entry = %other, "dropping non-string completion entry");
                    None
                },
            })
            .collect();

        Ok(Self::from_iso_strs(strings.iter().map(String::as_str)))
    }
}

/// A named daily-recurring activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Unique, immutable identifier.
    pub id: HabitId,
    /// Display name, never empty.
    pub name: String,
    /// Day the habit was created.
    pub created_date: NaiveDate,
    /// Days on which the habit was completed.
    #[serde(default)]
    pub completions: Completions,
}

impl Habit {
    /// Create a habit with no completions.
    #[must_use]
    pub fn new(id: HabitId, name: impl Into<String>, created_date: NaiveDate) -> Self {
        Self {
            id,
            name: name.into(),
            created_date,
            completions: Completions::new(),
        }
    }

    /// Whether the habit was completed on `day`.
    #[must_use]
    pub fn is_completed_on(&self, day: NaiveDate) -> bool {
        self.completions.contains(day)
    }
}
