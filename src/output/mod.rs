//! Output formatting for habits.
//!
//! This module provides formatters for displaying habits in various formats.

mod json;
mod pretty;

use chrono::NaiveDate;

use crate::cli::args::OutputFormat;
use crate::error::HabitsError;
use crate::features::stats::HabitStats;
use crate::habits::Habit;

pub use json::*;
pub use pretty::*;

/// Format the habit list based on output format
///
/// # Errors
///
/// Returns `HabitsError::Parse` if JSON serialization fails.
pub fn format_habits(
    stats: &[HabitStats],
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String, HabitsError> {
    match format {
        OutputFormat::Pretty => Ok(format_habits_pretty(stats, today)),
        OutputFormat::Json => format_habits_json(stats, today),
    }
}

/// Format detailed statistics for one habit based on output format
///
/// # Errors
///
/// Returns `HabitsError::Parse` if JSON serialization fails.
pub fn format_habit_stats(
    habit: &Habit,
    stats: &HabitStats,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String, HabitsError> {
    match format {
        OutputFormat::Pretty => Ok(format_habit_stats_pretty(habit, stats, today)),
        OutputFormat::Json => to_json(stats),
    }
}
