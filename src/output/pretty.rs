use chrono::NaiveDate;
use colored::Colorize;

use crate::core::format_long;
use crate::features::stats::{render_progress_bar, render_week_strip, HabitStats};
use crate::habits::Habit;

/// `1 day`, `3 days`.
#[must_use]
pub fn day_count(n: u32) -> String {
    if n == 1 {
        "1 day".to_string()
    } else {
        format!("{n} days")
    }
}

fn check_box(done: bool) -> String {
    if done {
        "[x]".green().to_string()
    } else {
        "[ ]".white().to_string()
    }
}

/// Format the habit list with today's header and per-habit stats
pub fn format_habits_pretty(stats: &[HabitStats], today: NaiveDate) -> String {
    let mut output = format!("{}\n{}\n", "Habit Tracker".bold(), format_long(today).dimmed());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    if stats.is_empty() {
        output.push_str(&format!("{}\n", "No habits yet".bold()));
        output.push_str("  Add your first habit to get started: habits add <name>\n");
        return output;
    }

    for habit in stats {
        let name = if habit.completed_today {
            habit.name.green().bold().to_string()
        } else {
            habit.name.bold().to_string()
        };
        output.push_str(&format!(
            "{} {}  {}\n",
            check_box(habit.completed_today),
            name,
            format!("#{}", habit.id).dimmed()
        ));

        let current = if habit.current_streak > 0 {
            day_count(habit.current_streak).green().to_string()
        } else {
            day_count(0).dimmed().to_string()
        };
        output.push_str(&format!(
            "    Current: {}  Best: {}  This week: {}\n",
            current,
            day_count(habit.best_streak),
            format!("{}%", habit.weekly_rate).cyan()
        ));
    }

    output
}

/// Format detailed statistics for one habit
pub fn format_habit_stats_pretty(habit: &Habit, stats: &HabitStats, today: NaiveDate) -> String {
    let mut output = format!("{} {}\n", check_box(stats.completed_today), habit.name.bold());
    output.push_str(&format!("  {}: {}\n", "ID".dimmed(), habit.id));
    output.push_str(&format!("  {}: {}\n", "Created".dimmed(), habit.created_date));
    output.push_str(&format!(
        "  {}: {}\n",
        "Current streak".dimmed(),
        day_count(stats.current_streak)
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        "Best streak".dimmed(),
        day_count(stats.best_streak)
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        "This week".dimmed(),
        render_progress_bar(stats.weekly_rate, 20)
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        "Total".dimmed(),
        stats.total_completions
    ));

    if let Some(last) = stats.last_completion {
        output.push_str(&format!("  {}: {}\n", "Last done".dimmed(), last));
    }

    output.push('\n');
    for line in render_week_strip(&stats.last_seven_days, today).lines() {
        output.push_str(&format!("  {line}\n"));
    }

    output
}

/// Confirmation line after a toggle
pub fn format_toggle_pretty(stats: &HabitStats) -> String {
    if stats.completed_today {
        format!(
            "{} {} done for today ({} streak)",
            "✓".green(),
            stats.name.bold(),
            day_count(stats.current_streak)
        )
    } else {
        format!("{} {} unmarked for today", "○".yellow(), stats.name.bold())
    }
}
