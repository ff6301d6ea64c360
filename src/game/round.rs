//! Round generation
//!
//! A round is a batch of [`ROUND_SIZE`] floating words. Each word is drawn
//! independently: a uniformly random pair from [`WORD_PAIRS`] (with
//! replacement), a fair coin for singular or plural, and a random position
//! inside the floating area. Duplicates within a round are expected.

use crate::game::words::{Category, WORD_PAIRS};
use rand::Rng;
use std::ops::Range;
use uuid::{Builder, Uuid};

/// Number of floating words generated per round
pub const ROUND_SIZE: usize = 12;

/// Horizontal placement range, in percent of the floating area width
pub const X_RANGE: Range<f32> = 10.0..90.0;

/// Vertical placement range, in percent of the floating area height
pub const Y_RANGE: Range<f32> = 10.0..80.0;

/// Position of a floating word as percentages of the floating area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Left offset in percent
    pub x: f32,
    /// Top offset in percent
    pub y: f32,
}

impl Position {
    /// Whether this position lies inside the placement bounds
    pub fn is_within_bounds(&self) -> bool {
        X_RANGE.contains(&self.x) && Y_RANGE.contains(&self.y)
    }
}

/// An unclassified word waiting to be dragged into a bucket
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingWord {
    /// Random v4 identifier, never reused across rounds
    pub id: Uuid,
    /// Displayed Hebrew text
    pub text: &'static str,
    /// Grammatical category; fixed at creation
    pub category: Category,
    /// Placement inside the floating area
    pub position: Position,
}

/// Generate a fresh round of [`ROUND_SIZE`] floating words
pub fn generate_round<R: Rng>(rng: &mut R) -> Vec<FloatingWord> {
    (0..ROUND_SIZE).map(|_| generate_word(rng)).collect()
}

fn generate_word<R: Rng>(rng: &mut R) -> FloatingWord {
    let pair = WORD_PAIRS[rng.random_range(0..WORD_PAIRS.len())];
    let category = if rng.random_bool(0.5) {
        Category::Singular
    } else {
        Category::Plural
    };

    FloatingWord {
        id: Builder::from_random_bytes(rng.random()).into_uuid(),
        text: pair.form(category),
        category,
        position: Position {
            x: rng.random_range(X_RANGE),
            y: rng.random_range(Y_RANGE),
        },
    }
}
