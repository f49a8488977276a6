//! Command-line interface for habits.

pub mod args;
pub mod commands;
