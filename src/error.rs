//! Error types for the singular/plural game
//!
//! Game play itself cannot fail: a mismatched drop is simply ignored. These
//! errors cover the ambient concerns around it (configuration, logging
//! setup, the GUI backend).
//!
//! Error variants use `#[source]` to preserve error chains.

use thiserror::Error;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Main error type for the game
#[derive(Debug, Error)]
pub enum GameError {
    /// Configuration or logging setup error
    #[error("Configuration error: {0}")]
    ConfigError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The GUI backend failed to create or run the window
    #[error("GUI error: {0}")]
    GuiError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for game operations
pub type Result<T> = std::result::Result<T, GameError>;

/// Convert an error to a user-friendly message
///
/// Used for the message printed before the application exits on a fatal
/// startup error.
pub fn get_user_friendly_error(error: &GameError) -> String {
    match error {
        GameError::ConfigError(_) => "Failed to load or save settings.\n\n\
             Your settings may not persist.\n\
             Check that you have write permissions to:\n\
             %APPDATA%\\SingularPlural"
            .to_string(),
        GameError::GuiError(e) => {
            format!(
                "The game window could not be opened:\n\n{e}\n\n\
                 Please make sure a graphical display is available."
            )
        }
        GameError::IoError(e) => {
            format!(
                "A file system error occurred:\n\n{e}\n\n\
                 Please check file permissions and disk space."
            )
        }
        GameError::JsonError(e) => {
            format!(
                "Settings file is corrupted:\n\n{e}\n\n\
                 The game will use default settings."
            )
        }
    }
}

/// Message shown to the user when startup step `context` fails
pub fn fatal_error_message(context: &str, error: &GameError) -> String {
    format!("{context}.\n\n{}", get_user_friendly_error(error))
}
