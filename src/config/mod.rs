//! Configuration management module
//!
//! This module handles loading, saving, and managing application configuration.
//! Configuration is stored in %APPDATA%\SingularPlural\config.json with atomic
//! writes to prevent corruption. Only preferences and window geometry are
//! stored; game progress is never persisted.

pub mod manager;
pub mod models;

pub use manager::ConfigManager;
pub use models::{AppConfig, GamePreferences, WindowState};
