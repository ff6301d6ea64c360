//! GUI controller
//!
//! Owns the Slint `MainWindow`, forwards its callbacks to the shared
//! [`GameController`] and pushes the resulting [`GameView`] back into the
//! window's properties.
//!
//! Pressing a word does not re-render: replacing the floating-word model
//! recreates every chip, which would cancel the drag the press just started.
//! For the same reason the celebration timer only touches the `celebrating`
//! property.

use crate::{FloatingWordItem, MainWindow};
use parking_lot::Mutex;
use singular_plural::config::WindowState;
use singular_plural::controller::{GameController, GameView};
use singular_plural::error::{GameError, Result};
use singular_plural::game::{Category, CelebrationToken, DropOutcome, Phase};
use slint::{ComponentHandle, ModelRc, SharedString, VecModel, Weak};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Binds the main window to the game controller
pub struct GuiController {
    main_window: MainWindow,
}

impl GuiController {
    /// Create the main window, restore its geometry and wire all callbacks
    pub fn new(
        controller: Arc<Mutex<GameController>>,
        window_state: &WindowState,
    ) -> Result<Self> {
        info!("Creating main window");
        let main_window = MainWindow::new().map_err(|e| GameError::GuiError(Box::new(e)))?;

        main_window
            .window()
            .set_position(slint::PhysicalPosition::new(window_state.x, window_state.y));
        main_window.window().set_size(slint::PhysicalSize::new(
            window_state.width,
            window_state.height,
        ));

        Self::connect_buttons(&main_window, &controller);
        Self::connect_drag_and_drop(&main_window, &controller);

        render(&main_window, &controller.lock().view());

        Ok(Self { main_window })
    }

    fn connect_buttons(main_window: &MainWindow, controller: &Arc<Mutex<GameController>>) {
        let weak = main_window.as_weak();
        let ctrl = Arc::clone(controller);
        main_window.on_start_game(move || {
            let view = {
                let mut controller = ctrl.lock();
                controller.start_game();
                controller.view()
            };
            if let Some(window) = weak.upgrade() {
                render(&window, &view);
            }
        });

        let weak = main_window.as_weak();
        let ctrl = Arc::clone(controller);
        main_window.on_reset_game(move || {
            let view = {
                let mut controller = ctrl.lock();
                controller.reset_game();
                controller.view()
            };
            if let Some(window) = weak.upgrade() {
                render(&window, &view);
            }
        });
    }

    fn connect_drag_and_drop(main_window: &MainWindow, controller: &Arc<Mutex<GameController>>) {
        let ctrl = Arc::clone(controller);
        main_window.on_word_pressed(move |id| {
            ctrl.lock().begin_drag(&id);
        });

        let weak = main_window.as_weak();
        let ctrl = Arc::clone(controller);
        main_window.on_word_released(move |id, bucket| {
            let target = Category::from_bucket_index(bucket);
            let (outcome, view, duration) = {
                let mut controller = ctrl.lock();
                let outcome = controller.release_word(&id, target);
                (outcome, controller.view(), controller.celebration_duration())
            };

            match outcome {
                Some(DropOutcome::Placed(token)) => {
                    if let Some(window) = weak.upgrade() {
                        render(&window, &view);
                    }
                    schedule_celebration_clear(weak.clone(), Arc::clone(&ctrl), token, duration);
                }
                // Nothing changed; the chip snaps back on its own
                Some(DropOutcome::Mismatch | DropOutcome::NotDragging) | None => {}
            }
        });
    }

    /// Run the Slint event loop until the window is closed
    pub fn run(&self) -> Result<()> {
        info!("Showing main window");
        self.main_window
            .run()
            .map_err(|e| GameError::GuiError(Box::new(e)))
    }

    /// Current window geometry, for persisting on exit
    pub fn window_state(&self) -> WindowState {
        let window = self.main_window.window();
        let position = window.position();
        let size = window.size();
        WindowState {
            x: position.x,
            y: position.y,
            width: size.width,
            height: size.height,
        }
    }
}

/// Push a full snapshot into the window's properties
fn render(window: &MainWindow, view: &GameView) {
    let floating: Vec<FloatingWordItem> = view
        .floating
        .iter()
        .map(|word| FloatingWordItem {
            id: SharedString::from(word.id.to_string()),
            text: SharedString::from(word.text),
            singular: word.category == Category::Singular,
            x: word.position.x,
            y: word.position.y,
        })
        .collect();

    window.set_game_started(view.phase == Phase::Playing);
    window.set_score(i32::try_from(view.score).unwrap_or(i32::MAX));
    window.set_floating_words(ModelRc::new(VecModel::from(floating)));
    window.set_singular_words(texts_model(&view.singular_words));
    window.set_plural_words(texts_model(&view.plural_words));
    window.set_celebrating(view.celebrating);
    window.set_show_category_colors(view.show_category_colors);
}

fn texts_model(texts: &[&'static str]) -> ModelRc<SharedString> {
    let items: Vec<SharedString> = texts.iter().copied().map(SharedString::from).collect();
    ModelRc::new(VecModel::from(items))
}

/// Hide the celebration after `duration`, unless a newer placement took over
fn schedule_celebration_clear(
    weak: Weak<MainWindow>,
    controller: Arc<Mutex<GameController>>,
    token: CelebrationToken,
    duration: Duration,
) {
    slint::Timer::single_shot(duration, move || {
        if !controller.lock().clear_celebration(token) {
            debug!("Celebration already replaced; timer ignored");
            return;
        }
        if let Some(window) = weak.upgrade() {
            window.set_celebrating(false);
        }
    });
}
