//! Singular/plural - a drag-and-drop game teaching Hebrew noun forms
//!
//! Twelve Hebrew words float on screen, each in its singular or plural form.
//! Children drag each word into the matching bucket ("יחיד" or "רבים") and
//! earn a point for every correct placement.
//!
//! The library holds the game logic, configuration and logging; the Slint
//! window lives in the binary.

// Module declarations
pub mod config;
pub mod controller;
pub mod error;
pub mod game;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use error::{GameError, Result};
