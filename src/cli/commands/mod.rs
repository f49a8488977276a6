//! Command implementations for habits.
//!
//! Each command loads the habit list, applies at most one mutation, writes
//! the whole list back, and returns the text to print.

mod shell;
mod stats;

pub use shell::completions;
pub use stats::stats;

use std::io::{self, BufRead, Write};

use colored::Colorize;
use serde_json::json;
use tracing::info;

use crate::cli::args::OutputFormat;
use crate::core::Clock;
use crate::error::HabitsError;
use crate::features::stats::HabitStats;
use crate::output::{format_habits, format_toggle_pretty, to_json};
use crate::storage::HabitStore;

/// Execute list command
///
/// # Errors
///
/// Returns an error if the habit list cannot be loaded or formatted.
pub fn list(
    store: &HabitStore,
    clock: &dyn Clock,
    format: OutputFormat,
) -> Result<String, HabitsError> {
    let habits = store.load()?;
    let today = clock.today();
    let stats = HabitStats::calculate_all(habits.habits(), today);
    format_habits(&stats, today, format)
}

/// Execute add command
///
/// # Errors
///
/// Returns an error if the name is blank or the list cannot be saved.
pub fn add(
    store: &HabitStore,
    clock: &dyn Clock,
    name: &str,
    format: OutputFormat,
) -> Result<String, HabitsError> {
    let habits = store.load()?;
    let (habits, id) = habits.add(name, clock.today(), clock.now_millis())?;
    store.save(&habits)?;

    let habit = habits
        .get(id)
        .ok_or_else(|| HabitsError::NotFound(format!("Habit {id}")))?;
    info!(%id, name = %habit.name, "habit created");

    match format {
        OutputFormat::Json => to_json(habit),
        OutputFormat::Pretty => Ok(format!(
            "{} Added habit: {} {}",
            "✓".green(),
            habit.name.bold(),
            format!("#{id}").dimmed()
        )),
    }
}

/// Execute done command: toggle today's completion
///
/// # Errors
///
/// Returns an error if the habit cannot be found or the list cannot be saved.
pub fn done(
    store: &HabitStore,
    clock: &dyn Clock,
    selector: &str,
    format: OutputFormat,
) -> Result<String, HabitsError> {
    let today = clock.today();
    let habits = store.load()?;
    let id = habits.find(selector)?.id;

    let (habits, completed) = habits.toggle(id, today)?;
    store.save(&habits)?;
    info!(%id, %today, completed, "completion toggled");

    let habit = habits
        .get(id)
        .ok_or_else(|| HabitsError::NotFound(format!("Habit {id}")))?;
    let stats = HabitStats::calculate(habit, today);

    match format {
        OutputFormat::Json => to_json(&stats),
        OutputFormat::Pretty => Ok(format_toggle_pretty(&stats)),
    }
}

/// Execute delete command
///
/// Unless `yes` is set, `confirm` is asked first; a negative answer leaves
/// the list untouched.
///
/// # Errors
///
/// Returns an error if the habit cannot be found, the prompt fails, or the
/// list cannot be saved.
pub fn delete(
    store: &HabitStore,
    selector: &str,
    yes: bool,
    confirm: &mut dyn FnMut(&str) -> Result<bool, HabitsError>,
    format: OutputFormat,
) -> Result<String, HabitsError> {
    let habits = store.load()?;
    let habit = habits.find(selector)?;
    let (id, name) = (habit.id, habit.name.clone());

    if !yes && !confirm(&format!("Delete habit '{name}' and all its history?"))? {
        return match format {
            OutputFormat::Json => to_json(&json!({ "deleted": false, "id": id })),
            OutputFormat::Pretty => Ok("Cancelled.".to_string()),
        };
    }

    let habits = habits.delete(id)?;
    store.save(&habits)?;
    info!(%id, %name, "habit deleted");

    match format {
        OutputFormat::Json => to_json(&json!({ "deleted": true, "id": id })),
        OutputFormat::Pretty => Ok(format!("{} Deleted habit: {}", "✓".green(), name.bold())),
    }
}

/// Ask a yes/no question on the terminal. Anything but `y`/`yes` is no.
///
/// # Errors
///
/// Returns an error if stdin or stderr fail.
pub fn confirm_on_terminal(question: &str) -> Result<bool, HabitsError> {
    let stdin = io::stdin();
    confirm_with(question, &mut stdin.lock(), &mut io::stderr())
}

fn confirm_with(
    question: &str,
    input: &mut dyn BufRead,
    prompt: &mut dyn Write,
) -> Result<bool, HabitsError> {
    write!(prompt, "{} {question} [y/N] ", "⚠".yellow())?;
    prompt.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveDate;

    use crate::core::MockClock;
    use crate::storage::{Database, HabitStore, DEFAULT_KEY};

    pub fn store() -> HabitStore {
        HabitStore::new(Database::open_in_memory().unwrap(), DEFAULT_KEY)
    }

    pub fn clock_at(y: i32, m: u32, d: u32, millis: i64) -> MockClock {
        let mut clock = MockClock::new();
        clock
            .expect_today()
            .return_const(NaiveDate::from_ymd_opt(y, m, d).unwrap());
        clock.expect_now_millis().return_const(millis);
        clock
    }
}
