//! Shared game state.

use core::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

const NO_WINNER: usize = usize::MAX;

/// Process-wide outcome of one game run.
///
/// Written only through [`GameCoordinator`](super::GameCoordinator), read
/// lock-free by every player and every deck wait. Once ended it is never
/// reset.
#[derive(Debug)]
pub struct GameState {
    ended: AtomicBool,
    winner: AtomicUsize,
}

impl GameState {
    /// Creates a state for a game that is still running.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ended: AtomicBool::new(false),
            winner: AtomicUsize::new(NO_WINNER),
        }
    }

    /// Returns whether the game has ended, either won or abandoned.
    pub fn is_over(&self) -> bool {
        self.ended.load(Ordering::SeqCst)
    }

    /// Returns whether a player has won.
    pub fn is_won(&self) -> bool {
        self.winner_id().is_some()
    }

    /// Returns the winning player's ID, if any.
    pub fn winner_id(&self) -> Option<usize> {
        match self.winner.load(Ordering::SeqCst) {
            NO_WINNER => None,
            id => Some(id),
        }
    }

    // Winner is stored before the flag so anyone who sees the game over
    // also sees who won.
    pub(crate) fn record_winner(&self, player_id: usize) {
        self.winner.store(player_id, Ordering::SeqCst);
        self.ended.store(true, Ordering::SeqCst);
    }

    pub(crate) fn record_abandoned(&self) {
        self.ended.store(true, Ordering::SeqCst);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
