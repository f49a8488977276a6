//! Statistics command implementation.

use crate::cli::args::OutputFormat;
use crate::core::Clock;
use crate::error::HabitsError;
use crate::features::stats::HabitStats;
use crate::output::{format_habit_stats, format_habit_stats_pretty, to_json};
use crate::storage::HabitStore;

/// Execute stats command.
///
/// With a selector, shows one habit; otherwise every habit in list order.
///
/// # Errors
///
/// Returns an error if the habit cannot be found or output formatting fails.
pub fn stats(
    store: &HabitStore,
    clock: &dyn Clock,
    selector: Option<&str>,
    format: OutputFormat,
) -> Result<String, HabitsError> {
    let habits = store.load()?;
    let today = clock.today();

    if let Some(selector) = selector {
        let habit = habits.find(selector)?;
        let stats = HabitStats::calculate(habit, today);
        return format_habit_stats(habit, &stats, today, format);
    }

    match format {
        OutputFormat::Json => to_json(&HabitStats::calculate_all(habits.habits(), today)),
        OutputFormat::Pretty => {
            if habits.is_empty() {
                return Ok("No habits yet. Add one with: habits add <name>".to_string());
            }

            let sections: Vec<String> = habits
                .habits()
                .iter()
                .map(|habit| {
                    let stats = HabitStats::calculate(habit, today);
                    format_habit_stats_pretty(habit, &stats, today)
                })
                .collect();
            Ok(sections.join("\n"))
        },
    }
}
