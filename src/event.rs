//! Log lines written to the player and deck output files.
//!
//! The `Display` output of these types is the exact line format consumed by
//! anything reading the output files.

use core::fmt;

use crate::card::Card;
use crate::hand::{Hand, fmt_cards};

/// One line of a player's output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent<'a> {
    /// Hand dealt before the game starts.
    InitialHand {
        /// Player ID.
        player: usize,
        /// The dealt hand.
        hand: &'a Hand,
    },
    /// A card was drawn from the player's left deck.
    Draws {
        /// Player ID.
        player: usize,
        /// Card drawn.
        card: Card,
        /// Deck drawn from.
        deck: usize,
    },
    /// A card was discarded to the player's right deck.
    Discards {
        /// Player ID.
        player: usize,
        /// Card discarded.
        card: Card,
        /// Deck discarded to.
        deck: usize,
    },
    /// Hand after a draw/discard step.
    CurrentHand {
        /// Player ID.
        player: usize,
        /// The hand.
        hand: &'a Hand,
    },
    /// The player won.
    Wins {
        /// Player ID.
        player: usize,
    },
    /// Another player won.
    Informed {
        /// Winning player ID.
        winner: usize,
        /// Player being told.
        player: usize,
    },
    /// The player's thread is finishing.
    Exits {
        /// Player ID.
        player: usize,
    },
    /// The winner's closing hand.
    FinalHand {
        /// Player ID.
        player: usize,
        /// The hand.
        hand: &'a Hand,
    },
    /// A non-winner's closing hand.
    Hand {
        /// Player ID.
        player: usize,
        /// The hand.
        hand: &'a Hand,
    },
}

impl fmt::Display for PlayerEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::InitialHand { player, hand } => write!(f, "player {player} initial hand {hand}"),
            Self::Draws { player, card, deck } => {
                write!(f, "player {player} draws a {card} from deck {deck}")
            }
            Self::Discards { player, card, deck } => {
                write!(f, "player {player} discards a {card} to deck {deck}")
            }
            Self::CurrentHand { player, hand } => {
                write!(f, "player {player} current hand is {hand}")
            }
            Self::Wins { player } => write!(f, "player {player} wins"),
            Self::Informed { winner, player } => write!(
                f,
                "player {winner} has informed player {player} that player {winner} has won"
            ),
            Self::Exits { player } => write!(f, "player {player} exits"),
            Self::FinalHand { player, hand } => write!(f, "player {player} final hand: {hand}"),
            Self::Hand { player, hand } => write!(f, "player {player} hand: {hand}"),
        }
    }
}

/// The single line of a deck's output file, e.g. `deck2 contents: 1 3 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckReport<'a> {
    /// Deck ID.
    pub deck: usize,
    /// Remaining cards, head first.
    pub cards: &'a [Card],
}

impl fmt::Display for DeckReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "deck{} contents: ", self.deck)?;
        fmt_cards(self.cards, f)
    }
}
