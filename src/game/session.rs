//! Round/session state machine
//!
//! A session starts on the landing screen. `start` enters play and generates
//! the first round; `reset` discards the current round and generates a new one
//! with the score back at zero. There is no win condition: play continues
//! until the next reset.

use crate::game::classifier::{Board, CelebrationToken, DropOutcome};
use crate::game::round::generate_round;
use crate::game::words::Category;
use rand::Rng;
use tracing::{debug, info};
use uuid::Uuid;

/// Which screen the session is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Title screen with the start button
    #[default]
    Landing,
    /// A round is in progress
    Playing,
}

/// A play session: the current phase plus the active round's board
#[derive(Debug, Clone, Default)]
pub struct Session {
    phase: Phase,
    board: Board,
    rounds_played: u32,
}

impl Session {
    /// Create a session on the landing screen
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The active round's board (empty while on the landing screen)
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of rounds generated so far
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Leave the landing screen and generate the first round
    ///
    /// Returns `false` without doing anything if a round is already in play.
    pub fn start<R: Rng>(&mut self, rng: &mut R) -> bool {
        if self.phase == Phase::Playing {
            debug!("Start requested while already playing; ignored");
            return false;
        }
        self.phase = Phase::Playing;
        self.new_round(rng);
        true
    }

    /// Discard the current round and generate a new one with score zero
    ///
    /// Allowed from either phase; the session is playing afterwards.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        info!("Resetting game (score was {})", self.board.score());
        self.phase = Phase::Playing;
        self.new_round(rng);
    }

    fn new_round<R: Rng>(&mut self, rng: &mut R) {
        self.board.restart(generate_round(rng));
        self.rounds_played += 1;
        info!(
            "Round {} generated with {} words",
            self.rounds_played,
            self.board.floating().len()
        );
    }

    /// Begin dragging a floating word; ignored outside of play
    pub fn begin_drag(&mut self, id: Uuid) -> bool {
        self.phase == Phase::Playing && self.board.begin_drag(id)
    }

    /// Abandon the in-flight drag
    pub fn cancel_drag(&mut self) {
        self.board.cancel_drag();
    }

    /// Drop the in-flight word onto a bucket
    pub fn drop_on(&mut self, target: Category) -> DropOutcome {
        if self.phase != Phase::Playing {
            return DropOutcome::NotDragging;
        }
        self.board.drop_on(target)
    }

    /// Clear the celebration raised with `token`
    pub fn clear_celebration(&mut self, token: CelebrationToken) -> bool {
        self.board.clear_celebration(token)
    }
}
