//! habits - a daily habit tracker
//!
//! This crate provides the streak engine (current streak, best streak and
//! rolling weekly completion rate over a set of calendar-day completions)
//! together with the habit list, its `SQLite`-backed persistence and the
//! command-line interface built on top of them.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod habits;
pub mod logging;
pub mod output;
pub mod storage;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::HabitsError;
pub use features::stats::{best_streak, current_streak, weekly_completion_rate, HabitStats};
pub use habits::{Completions, Habit, HabitId, HabitList};
