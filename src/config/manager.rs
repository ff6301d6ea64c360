//! Configuration manager for loading and saving application configuration
//!
//! This module provides functionality to load and save configuration to
//! %APPDATA%\SingularPlural\config.json with atomic writes to prevent corruption.

use crate::config::models::AppConfig;
use crate::error::{GameError, Result, StringError};
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

/// Name of the per-user data directory
pub const APP_DIR_NAME: &str = "SingularPlural";

/// Configuration manager
pub struct ConfigManager;

impl ConfigManager {
    /// Get the per-user data directory
    ///
    /// Returns: %APPDATA%\SingularPlural (or ./SingularPlural if APPDATA is unset)
    pub fn get_app_dir() -> PathBuf {
        let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(appdata).join(APP_DIR_NAME)
    }

    /// Get the path to the configuration file
    pub fn get_config_path() -> PathBuf {
        Self::get_app_dir().join("config.json")
    }

    /// Ensure the configuration directory exists
    pub fn ensure_config_dir() -> Result<PathBuf> {
        let config_path = Self::get_config_path();
        let config_dir = config_path
            .parent()
            .ok_or_else(|| GameError::ConfigError(StringError::new("Invalid config path")))?;

        std::fs::create_dir_all(config_dir)?;
        Ok(config_dir.to_path_buf())
    }

    /// Load configuration from disk
    ///
    /// If the configuration file doesn't exist or is corrupt, returns default configuration.
    pub fn load() -> Result<AppConfig> {
        let config_path = Self::get_config_path();

        if !config_path.exists() {
            info!("Configuration file not found, using defaults");
            return Ok(AppConfig::default());
        }

        // Invalid UTF-8 counts as corruption too
        let bytes = std::fs::read(&config_path)?;

        match serde_json::from_slice(&bytes) {
            Ok(config) => {
                info!("Configuration loaded successfully");
                Ok(config)
            }
            Err(e) => {
                warn!("Failed to parse configuration, using defaults: {}", e);
                Ok(AppConfig::default())
            }
        }
    }

    /// Save configuration to disk with atomic write
    ///
    /// Writes to a temporary file in the same directory, then renames it over
    /// the target.
    pub fn save(config: &AppConfig) -> Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = Self::get_config_path();

        let json = serde_json::to_string_pretty(config)?;
        let mut temp = tempfile::NamedTempFile::new_in(&config_dir)?;
        temp.write_all(json.as_bytes())?;
        temp.as_file().sync_all()?;
        temp.persist(&config_path).map_err(|e| e.error)?;

        info!("Configuration saved successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::models::{GamePreferences, WindowState};
    use crate::test_utils::{AppdataGuard, create_test_dir};

    #[test]
    fn test_config_path() {
        let path = ConfigManager::get_config_path();
        assert!(path.to_string_lossy().contains(APP_DIR_NAME));
        assert!(path.to_string_lossy().ends_with("config.json"));
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = create_test_dir();
        let _guard = AppdataGuard::new(&temp_dir);

        let config = ConfigManager::load().unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = create_test_dir();
        let _guard = AppdataGuard::new(&temp_dir);

        let config = AppConfig {
            preferences: GamePreferences {
                celebration_duration_ms: 900,
                show_category_colors: false,
            },
            window_state: WindowState {
                x: 5,
                y: 6,
                width: 800,
                height: 600,
            },
        };
        ConfigManager::save(&config).unwrap();

        assert!(temp_dir.path().join(APP_DIR_NAME).join("config.json").exists());
        assert_eq!(ConfigManager::load().unwrap(), config);
    }

    #[test]
    fn test_load_corrupt_config_uses_defaults() {
        let temp_dir = create_test_dir();
        let _guard = AppdataGuard::new(&temp_dir);

        ConfigManager::ensure_config_dir().unwrap();
        std::fs::write(ConfigManager::get_config_path(), "{ not json").unwrap();

        assert_eq!(ConfigManager::load().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_load_invalid_utf8_config_uses_defaults() {
        let temp_dir = create_test_dir();
        let _guard = AppdataGuard::new(&temp_dir);

        ConfigManager::ensure_config_dir().unwrap();
        std::fs::write(ConfigManager::get_config_path(), [0xff, 0xfe, b'{']).unwrap();

        assert_eq!(ConfigManager::load().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_save_leaves_no_temp_files() {
        let temp_dir = create_test_dir();
        let _guard = AppdataGuard::new(&temp_dir);

        ConfigManager::save(&AppConfig::default()).unwrap();
        ConfigManager::save(&AppConfig::default()).unwrap();

        let entries: Vec<_> = std::fs::read_dir(temp_dir.path().join(APP_DIR_NAME))
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("config.json")]);
    }
}
