//! Per-habit statistics bundle.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::streak::{best_streak, current_streak, weekly_completion_rate, WEEK_DAYS};
use crate::core::window_ending;
use crate::habits::{Habit, HabitId};

/// Everything the list and stats views show for one habit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitStats {
    /// Habit id
    pub id: HabitId,
    /// Habit name
    pub name: String,
    /// Current streak in days
    pub current_streak: u32,
    /// Longest streak ever
    pub best_streak: u32,
    /// Percentage of the last 7 days completed
    pub weekly_rate: u8,
    /// Whether today is already completed
    pub completed_today: bool,
    /// Total completed days
    pub total_completions: usize,
    /// Most recent completion
    pub last_completion: Option<NaiveDate>,
    /// Completion flags for the last 7 days, oldest first
    pub last_seven_days: Vec<bool>,
}

impl HabitStats {
    /// Calculate statistics for `habit` anchored on `today`.
    #[must_use]
    pub fn calculate(habit: &Habit, today: NaiveDate) -> Self {
        let completions = &habit.completions;

        let last_seven_days = window_ending(today, WEEK_DAYS)
            .into_iter()
            .map(|day| habit.is_completed_on(day))
            .collect();

        Self {
            id: habit.id,
            name: habit.name.clone(),
            current_streak: current_streak(completions, today),
            best_streak: best_streak(completions),
            weekly_rate: weekly_completion_rate(completions, today),
            completed_today: habit.is_completed_on(today),
            total_completions: completions.len(),
            last_completion: completions.last(),
            last_seven_days,
        }
    }

    /// Calculate statistics for every habit, preserving order.
    #[must_use]
    pub fn calculate_all(habits: &[Habit], today: NaiveDate) -> Vec<Self> {
        habits.iter().map(|h| Self::calculate(h, today)).collect()
    }
}
