//! Game controller implementation
//!
//! This module implements the controller that sits between the GUI callbacks
//! and the game session.

use crate::config::GamePreferences;
use crate::game::{
    CelebrationToken, Category, DragState, DropOutcome, FloatingWord, Phase, Session,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::time::Duration;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Snapshot of everything the GUI needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct GameView {
    /// Current screen
    pub phase: Phase,
    /// Current score
    pub score: u32,
    /// Words still floating, with their positions
    pub floating: Vec<FloatingWord>,
    /// Texts in the singular bucket, in placement order
    pub singular_words: Vec<&'static str>,
    /// Texts in the plural bucket, in placement order
    pub plural_words: Vec<&'static str>,
    /// Whether the celebration overlay is showing
    pub celebrating: bool,
    /// Whether floating words are tinted by category
    pub show_category_colors: bool,
}

/// Game logic controller
pub struct GameController {
    session: Session,
    rng: SmallRng,
    preferences: GamePreferences,
}

impl GameController {
    /// Create a controller seeded from the operating system's entropy source
    pub fn new(preferences: GamePreferences) -> Self {
        Self::with_rng(preferences, SmallRng::from_os_rng())
    }

    /// Create a controller with a caller-supplied random generator
    pub fn with_rng(preferences: GamePreferences, rng: SmallRng) -> Self {
        Self {
            session: Session::new(),
            rng,
            preferences,
        }
    }

    /// The underlying session
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// How long the celebration overlay stays up after a placement
    pub fn celebration_duration(&self) -> Duration {
        self.preferences.celebration_duration()
    }

    /// Handle the start button on the landing screen
    pub fn start_game(&mut self) -> bool {
        let started = self.session.start(&mut self.rng);
        if started {
            info!("Game started");
        }
        started
    }

    /// Handle the "new game" button
    pub fn reset_game(&mut self) {
        self.session.reset(&mut self.rng);
    }

    /// Handle a press on a floating word
    ///
    /// `id` is the word identifier as rendered into the UI. Malformed or
    /// unknown identifiers leave the game idle.
    pub fn begin_drag(&mut self, id: &str) -> bool {
        match Uuid::parse_str(id) {
            Ok(id) => self.session.begin_drag(id),
            Err(e) => {
                warn!("Ignoring drag of word with malformed id {id:?}: {e}");
                self.session.cancel_drag();
                false
            }
        }
    }

    /// Handle the release of a floating word
    ///
    /// `target` is the bucket under the pointer, or `None` when the word was
    /// released outside both buckets, which cancels the drag. Returns the drop
    /// outcome, or `None` for a cancelled drag.
    pub fn release_word(&mut self, id: &str, target: Option<Category>) -> Option<DropOutcome> {
        let Some(target) = target else {
            self.session.cancel_drag();
            return None;
        };

        // A press can be lost (e.g. the pointer grabbed by another element);
        // make sure the released word is the one in flight.
        let in_flight = matches!(
            self.session.board().drag_state(),
            DragState::Dragging(word) if word.id.to_string() == id
        );
        if !in_flight {
            debug!("Released word {id} was not in flight; starting drag on release");
            if !self.begin_drag(id) {
                return Some(DropOutcome::NotDragging);
            }
        }

        let outcome = self.session.drop_on(target);
        match outcome {
            DropOutcome::Placed(_) => info!(
                "Correct placement in {:?} bucket, score {}",
                target,
                self.session.board().score()
            ),
            DropOutcome::Mismatch => debug!("Wrong bucket ({target:?}); drop ignored"),
            DropOutcome::NotDragging => debug!("Drop with nothing in flight"),
        }
        Some(outcome)
    }

    /// Clear the celebration raised by the placement that produced `token`
    pub fn clear_celebration(&mut self, token: CelebrationToken) -> bool {
        self.session.clear_celebration(token)
    }

    /// Build a snapshot of the current game for rendering
    pub fn view(&self) -> GameView {
        let board = self.session.board();
        let texts = |category: Category| -> Vec<&'static str> {
            board.bucket(category).iter().map(|w| w.text).collect()
        };

        GameView {
            phase: self.session.phase(),
            score: board.score(),
            floating: board.floating().to_vec(),
            singular_words: texts(Category::Singular),
            plural_words: texts(Category::Plural),
            celebrating: board.is_celebrating(),
            show_category_colors: self.preferences.show_category_colors,
        }
    }
}
