//! Feature implementations for habits.
//!
//! - Statistics (streaks, weekly completion rate)
//! - Shell integration

pub mod shell;
pub mod stats;
