//! Drag-and-drop classification
//!
//! [`Board`] holds one round's playing field: the floating words, the two
//! buckets, the score and the drag state machine.
//!
//! # Drag state machine
//!
//! ```text
//!            begin_drag(id)
//!   Idle ───────────────────▶ Dragging(word)
//!    ▲                              │
//!    └──── drop_on / cancel_drag ◀──┘
//! ```
//!
//! A drop moves the dragged word into the bucket only when the bucket's
//! category matches the word's own. Mismatched drops are silently ignored and
//! the word stays floating.

use crate::game::round::FloatingWord;
use crate::game::words::Category;
use tracing::debug;
use uuid::Uuid;

/// Current drag state
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    /// Nothing is being dragged
    #[default]
    Idle,
    /// A floating word is in flight
    Dragging(FloatingWord),
}

/// Result of dropping onto a bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The word matched the bucket and was moved into it
    Placed(CelebrationToken),
    /// The word belongs to the other bucket; nothing changed
    Mismatch,
    /// No drag was in progress
    NotDragging,
}

/// Identifies one raise of the celebration flag
///
/// A timer that clears the celebration must present the token returned by the
/// placement that started it, so an older timer cannot cut a newer celebration
/// short.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CelebrationToken(u64);

/// One round's playing field
#[derive(Debug, Clone, Default)]
pub struct Board {
    floating: Vec<FloatingWord>,
    singular_bucket: Vec<FloatingWord>,
    plural_bucket: Vec<FloatingWord>,
    score: u32,
    drag: DragState,
    celebration: Option<CelebrationToken>,
    celebration_counter: u64,
}

impl Board {
    /// Create a board holding the given floating words and empty buckets
    pub fn new(floating: Vec<FloatingWord>) -> Self {
        Self {
            floating,
            ..Self::default()
        }
    }

    /// Replace the playing field with a new round
    ///
    /// Empties both buckets, zeroes the score, and drops any in-flight drag
    /// and celebration. The celebration counter keeps running so tokens from
    /// the previous round stay stale.
    pub fn restart(&mut self, floating: Vec<FloatingWord>) {
        self.floating = floating;
        self.singular_bucket.clear();
        self.plural_bucket.clear();
        self.score = 0;
        self.drag = DragState::Idle;
        self.celebration = None;
    }

    /// Words still waiting to be classified
    pub fn floating(&self) -> &[FloatingWord] {
        &self.floating
    }

    /// Words placed in the bucket for `category`, in placement order
    pub fn bucket(&self, category: Category) -> &[FloatingWord] {
        match category {
            Category::Singular => &self.singular_bucket,
            Category::Plural => &self.plural_bucket,
        }
    }

    /// Number of correct placements this round
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current drag state
    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    /// Whether the celebration indicator is showing
    pub fn is_celebrating(&self) -> bool {
        self.celebration.is_some()
    }

    /// Start dragging the floating word with the given id
    ///
    /// Returns `false` and leaves the board idle when no floating word has that
    /// id. A drag already in flight is replaced.
    pub fn begin_drag(&mut self, id: Uuid) -> bool {
        match self.floating.iter().find(|w| w.id == id) {
            Some(word) => {
                debug!("Drag started: {} ({:?})", word.text, word.category);
                self.drag = DragState::Dragging(word.clone());
                true
            }
            None => {
                debug!("Drag start ignored for unknown word {id}");
                self.drag = DragState::Idle;
                false
            }
        }
    }

    /// Abandon the in-flight drag without touching anything else
    pub fn cancel_drag(&mut self) {
        if let DragState::Dragging(word) = std::mem::take(&mut self.drag) {
            debug!("Drag cancelled: {}", word.text);
        }
    }

    /// Drop the in-flight word onto the bucket for `target`
    ///
    /// The board is idle afterwards regardless of the outcome.
    pub fn drop_on(&mut self, target: Category) -> DropOutcome {
        let DragState::Dragging(word) = std::mem::take(&mut self.drag) else {
            return DropOutcome::NotDragging;
        };

        if word.category != target {
            debug!(
                "Ignored drop of {} ({:?}) on {:?} bucket",
                word.text, word.category, target
            );
            return DropOutcome::Mismatch;
        }

        // The word may have left the floating set since the drag began
        // (e.g. a restart between drag start and drop).
        let Some(index) = self.floating.iter().position(|w| w.id == word.id) else {
            debug!("Ignored drop of {} no longer floating", word.text);
            return DropOutcome::NotDragging;
        };

        let placed = self.floating.remove(index);
        match target {
            Category::Singular => self.singular_bucket.push(placed),
            Category::Plural => self.plural_bucket.push(placed),
        }
        self.score += 1;

        self.celebration_counter += 1;
        let token = CelebrationToken(self.celebration_counter);
        self.celebration = Some(token);

        DropOutcome::Placed(token)
    }

    /// Clear the celebration raised with `token`
    ///
    /// Returns `false` if a newer celebration (or none) is showing.
    pub fn clear_celebration(&mut self, token: CelebrationToken) -> bool {
        if self.celebration == Some(token) {
            self.celebration = None;
            true
        } else {
            false
        }
    }

    /// Total number of words placed in either bucket
    pub fn placed_count(&self) -> usize {
        self.singular_bucket.len() + self.plural_bucket.len()
    }
}
