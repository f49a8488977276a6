//! Habit statistics.
//!
//! Provides the streak engine and what is built on top of it:
//! - Current and best streaks
//! - Rolling 7-day completion rate
//! - Per-habit summaries
//! - Terminal visualizations

pub mod streak;
pub mod summary;
pub mod visualization;

pub use streak::{best_streak, current_streak, weekly_completion_rate, WEEK_DAYS};
pub use summary::HabitStats;
pub use visualization::{render_progress_bar, render_week_strip};
