//! Game logic module
//!
//! Everything the game does apart from drawing: the word list, round
//! generation, the drag-and-drop classifier and the session state machine.
//!
//! # Overview
//!
//! - **Word list**: 15 fixed Hebrew nouns with their singular and plural forms
//! - **Rounds**: 12 floating words sampled with replacement, each shown in a
//!   randomly chosen form at a random position
//! - **Buckets**: one per grammatical category; a word can only be dropped into
//!   the bucket matching its own category
//! - **Score**: one point per correct placement, zeroed on reset
//!
//! # Flow
//!
//! ```text
//! Landing ──start──▶ Playing ──reset──▶ Playing (new round)
//!                       │
//!          begin_drag ─▶ Dragging ─▶ drop_on(bucket) ─▶ Placed | Mismatch
//! ```
//!
//! All state changes happen synchronously on the caller's thread; the only
//! delayed effect is clearing the celebration flag, which the caller schedules
//! with the [`CelebrationToken`] returned from a placement.

pub mod classifier;
pub mod round;
pub mod session;
pub mod words;

pub use classifier::{Board, CelebrationToken, DragState, DropOutcome};
pub use round::{FloatingWord, Position, ROUND_SIZE, generate_round};
pub use session::{Phase, Session};
pub use words::{Category, WORD_PAIRS, WordPair};
