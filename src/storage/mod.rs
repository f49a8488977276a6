//! Storage layer for habits.
//!
//! This module provides SQLite-based persistence for:
//! - A small key-value table
//! - The habit list, stored as one JSON entry in that table

mod database;
mod habit_store;
mod migrations;

pub use database::Database;
pub use habit_store::{HabitStore, DEFAULT_KEY};
