//! Habit model and list mutations.

mod list;
mod types;

pub use list::HabitList;
pub use types::{Completions, Habit, HabitId};
