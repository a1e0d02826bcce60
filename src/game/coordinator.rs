//! Win arbitration and the end-of-game broadcast.

use std::sync::Arc;

use tracing::info;

use crate::deck::Deck;
use crate::sync::Mutex;

use super::GameState;

/// Owns the ring of decks and the single write path to [`GameState`].
///
/// Decks are numbered `1..=n`. Players borrow decks from the coordinator,
/// and every deck observes the coordinator's state while waiting.
#[derive(Debug)]
pub struct GameCoordinator {
    state: Arc<GameState>,
    decks: Vec<Deck>,
    declare: Mutex<()>,
}

impl GameCoordinator {
    /// Creates a coordinator with `deck_count` empty decks.
    #[must_use]
    pub fn new(deck_count: usize) -> Self {
        let state = Arc::new(GameState::new());
        let decks = (1..=deck_count)
            .map(|id| Deck::new(id, Arc::clone(&state)))
            .collect();
        Self {
            state,
            decks,
            declare: Mutex::new(()),
        }
    }

    /// Declares `player_id` the winner unless the game is already over.
    ///
    /// Exactly one call succeeds per game, however many players race for it.
    /// On success every deck is woken so blocked players notice the end.
    pub fn declare_win_if_first(&self, player_id: usize) -> bool {
        let _declare = self.declare.lock();
        if self.state.is_over() {
            return false;
        }
        self.state.record_winner(player_id);
        self.broadcast_ended();
        info!(player = player_id, "winner declared");
        true
    }

    /// Ends the game without a winner unless it is already over.
    ///
    /// Used when a turn limit is reached. Returns whether this call ended the
    /// game.
    pub fn abandon(&self) -> bool {
        let _declare = self.declare.lock();
        if self.state.is_over() {
            return false;
        }
        self.state.record_abandoned();
        self.broadcast_ended();
        info!("game abandoned without a winner");
        true
    }

    fn broadcast_ended(&self) {
        for deck in &self.decks {
            deck.broadcast_ended();
        }
    }

    /// Returns whether a player has won.
    pub fn is_game_won(&self) -> bool {
        self.state.is_won()
    }

    /// Returns whether the game has ended, won or abandoned.
    pub fn is_game_over(&self) -> bool {
        self.state.is_over()
    }

    /// Returns the winning player's ID, if any.
    pub fn winner_id(&self) -> Option<usize> {
        self.state.winner_id()
    }

    /// Returns the shared game state.
    #[must_use]
    pub fn state(&self) -> &Arc<GameState> {
        &self.state
    }

    /// Returns the decks in ID order.
    #[must_use]
    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    /// Returns the deck with the given ID.
    #[must_use]
    pub fn deck(&self, id: usize) -> Option<&Deck> {
        id.checked_sub(1).and_then(|index| self.decks.get(index))
    }
}
