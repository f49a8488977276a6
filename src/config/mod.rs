//! Configuration management for habits.
//!
//! This module handles loading configuration from `~/.habits/`.

mod paths;
mod settings;

pub use paths::{Paths, HOME_ENV};
pub use settings::{ColorSetting, Config, GeneralConfig, StorageConfig};
