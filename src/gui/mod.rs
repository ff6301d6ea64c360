//! GUI module
//!
//! Provides the Slint-based game window and binds its callbacks to the
//! game controller.

pub mod gui_controller;

pub use gui_controller::GuiController;
