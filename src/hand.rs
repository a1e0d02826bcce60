//! Player hand representation.

use core::fmt;

use crate::card::Card;

/// Number of cards a player holds between turns.
pub const HAND_SIZE: usize = 4;

/// A player's hand.
///
/// Holds [`HAND_SIZE`] cards except inside a single draw/discard step, where
/// the drawn card is appended before the discard is chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the end of the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns whether the hand is exactly four cards of one value.
    ///
    /// # Example
    ///
    /// ```
    /// use cardring::{Card, Hand};
    ///
    /// let mut hand = Hand::new();
    /// for _ in 0..4 {
    ///     hand.add_card(Card::from(6));
    /// }
    /// assert!(hand.is_winning());
    /// ```
    #[must_use]
    pub fn is_winning(&self) -> bool {
        match self.cards.split_first() {
            Some((first, rest)) if self.cards.len() == HAND_SIZE => {
                rest.iter().all(|card| card == first)
            }
            _ => false,
        }
    }

    /// Removes and returns the card to give away.
    ///
    /// Picks the leftmost card whose value differs from `preferred`. If every
    /// card already matches, the first card is removed instead. Returns
    /// `None` only for an empty hand.
    pub fn choose_discard(&mut self, preferred: u32) -> Option<Card> {
        if self.cards.is_empty() {
            return None;
        }
        let index = self
            .cards
            .iter()
            .position(|card| card.value() != preferred)
            .unwrap_or(0);
        Some(self.cards.remove(index))
    }

    /// Returns the cards in hand order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Formats the hand as space-separated values, e.g. `1 2 1 1`.
impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_cards(&self.cards, f)
    }
}

pub(crate) fn fmt_cards(cards: &[Card], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{card}")?;
    }
    Ok(())
}
