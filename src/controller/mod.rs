//! Game controller module
//!
//! Bridges GUI events and the game session.
//!
//! # Overview
//!
//! The game controller:
//! - **Owns the session** and the random generator used for new rounds
//! - **Translates UI events** (press, release over a bucket, buttons) into
//!   session operations
//! - **Produces snapshots** (`GameView`) the GUI renders from
//!
//! # Event Flow
//!
//! ```text
//! MainWindow callback → GuiController → GameController → Session
//!                                              ↓
//!                                          GameView → MainWindow
//! ```
//!
//! # Celebration
//!
//! A correct placement raises the celebration overlay and returns a token. The
//! GUI schedules a single-shot timer with the preference's duration and hands
//! the token back to `GameController::clear_celebration` when it fires.

pub mod game_controller;

pub use game_controller::{GameController, GameView};
