//! Result types for a finished game.

use crate::card::Card;

/// How a single player's thread finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerReport {
    /// The player ID.
    pub player_id: usize,
    /// Hand at exit.
    pub hand: Vec<Card>,
    /// Completed draw/discard steps.
    pub turns: u64,
    /// Whether this player won.
    pub won: bool,
}

/// A deck's contents after every player has exited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckContents {
    /// The deck ID.
    pub deck_id: usize,
    /// Remaining cards, head first.
    pub cards: Vec<Card>,
}

/// Outcome of a whole game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    /// The winning player, or `None` if the game was abandoned.
    pub winner: Option<usize>,
    /// One report per player, in ID order.
    pub players: Vec<PlayerReport>,
    /// One entry per deck, in ID order.
    pub decks: Vec<DeckContents>,
}

impl GameResult {
    /// Returns the report for a player.
    #[must_use]
    pub fn player(&self, player_id: usize) -> Option<&PlayerReport> {
        self.players.iter().find(|p| p.player_id == player_id)
    }

    /// Returns the number of cards across all hands and decks.
    ///
    /// Always equals the size of the pack the game was dealt from.
    #[must_use]
    pub fn card_count(&self) -> usize {
        let in_hands: usize = self.players.iter().map(|p| p.hand.len()).sum();
        let in_decks: usize = self.decks.iter().map(|d| d.cards.len()).sum();
        in_hands + in_decks
    }
}
