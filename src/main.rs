//! Singular/plural - drag-and-drop Hebrew noun game
//!
//! Opens the game window. Preferences and window geometry are loaded from
//! %APPDATA%\SingularPlural\config.json and the geometry is saved again on exit.

// Set Windows subsystem to hide console window
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![expect(
    missing_docs,
    reason = "Slint-generated code from include_modules! lacks doc comments"
)]
#![allow(clippy::unwrap_used)] // Slint-generated code from include_modules! uses .unwrap() extensively

// GUI module is only in the binary, not the library
mod gui;

use anyhow::Result;
use gui::GuiController;
use parking_lot::Mutex;
use singular_plural::{
    config::ConfigManager,
    controller::GameController,
    error::{GameError, fatal_error_message},
    utils,
};
use std::sync::Arc;
use tracing::{error, info, warn};

// Include Slint-generated code
slint::include_modules!();

fn main() -> Result<()> {
    utils::init_logging().map_err(|e| fatal(e, "Failed to initialize logging system"))?;

    info!("Singular/plural v{} starting...", env!("CARGO_PKG_VERSION"));

    let mut config = ConfigManager::load()
        .map_err(|e| fatal(e, "Failed to load application configuration"))?;
    info!(
        "Configuration loaded (celebration {}ms, category colors {})",
        config.preferences.celebration_duration_ms, config.preferences.show_category_colors
    );

    let controller = Arc::new(Mutex::new(GameController::new(
        config.preferences.clone(),
    )));

    let gui_controller = GuiController::new(Arc::clone(&controller), &config.window_state)
        .map_err(|e| fatal(e, "Failed to create main window"))?;

    info!("Starting GUI event loop");
    gui_controller
        .run()
        .map_err(|e| fatal(e, "GUI event loop terminated with error"))?;

    config.window_state = gui_controller.window_state();
    if let Err(e) = ConfigManager::save(&config) {
        warn!("Failed to save window state: {}", e);
    }

    info!(
        "Shutting down after {} round(s)",
        controller.lock().session().rounds_played()
    );

    Ok(())
}

/// Log a fatal startup error, tell the user, and wrap it for `main`'s return.
fn fatal(e: GameError, context: &'static str) -> anyhow::Error {
    error!("{}: {}", context, e);
    eprintln!("ERROR: {}", fatal_error_message(context, &e));
    anyhow::Error::new(e).context(context)
}
