//! Configuration data models
//!
//! This module defines the data structures used for application configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Shortest celebration the game will show, in milliseconds
pub const MIN_CELEBRATION_MS: u64 = 100;

/// Longest celebration the game will show, in milliseconds
pub const MAX_CELEBRATION_MS: u64 = 5000;

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Game preferences
    pub preferences: GamePreferences,
    /// Window state for persistence
    pub window_state: WindowState,
}

/// User preferences for game play
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GamePreferences {
    /// How long the celebration shows after a correct placement (100-5000)
    pub celebration_duration_ms: u64,
    /// Whether floating words are tinted by their category
    pub show_category_colors: bool,
}

impl GamePreferences {
    /// Celebration duration clamped to the supported range
    pub fn celebration_duration(&self) -> Duration {
        Duration::from_millis(
            self.celebration_duration_ms
                .clamp(MIN_CELEBRATION_MS, MAX_CELEBRATION_MS),
        )
    }
}

/// Window state for position and size persistence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowState {
    /// X position
    pub x: i32,
    /// Y position
    pub y: i32,
    /// Window width
    pub width: u32,
    /// Window height
    pub height: u32,
}

impl Default for GamePreferences {
    fn default() -> Self {
        Self {
            celebration_duration_ms: 500,
            show_category_colors: true,
        }
    }
}

impl Default for WindowState {
    fn default() -> Self {
        Self {
            x: 100,
            y: 100,
            width: 1100,
            height: 850,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.preferences.celebration_duration_ms, 500);
        assert!(config.preferences.show_category_colors);
        assert_eq!(config.window_state.width, 1100);
    }

    #[test]
    fn test_celebration_duration_is_clamped() {
        let mut prefs = GamePreferences::default();
        assert_eq!(prefs.celebration_duration(), Duration::from_millis(500));

        prefs.celebration_duration_ms = 0;
        assert_eq!(
            prefs.celebration_duration(),
            Duration::from_millis(MIN_CELEBRATION_MS)
        );

        prefs.celebration_duration_ms = 60_000;
        assert_eq!(
            prefs.celebration_duration(),
            Duration::from_millis(MAX_CELEBRATION_MS)
        );
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"preferences":{"show_category_colors":false}}"#).unwrap();
        assert!(!config.preferences.show_category_colors);
        assert_eq!(config.preferences.celebration_duration_ms, 500);
        assert_eq!(config.window_state, WindowState::default());
    }
}
