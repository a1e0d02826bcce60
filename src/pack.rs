//! Pack loading, validation, and generation.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::PackError;

/// Number of pack cards per player: four dealt to the hand, four to a deck.
pub const CARDS_PER_PLAYER: usize = 8;

/// A validated pack holding exactly [`CARDS_PER_PLAYER`] cards per player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pack {
    players: usize,
    cards: Vec<Card>,
}

impl Pack {
    /// Validates `cards` as a pack for `players` players.
    ///
    /// # Errors
    ///
    /// Returns an error if `players` is zero or the card count is not
    /// `8 * players`.
    pub fn from_cards(cards: Vec<Card>, players: usize) -> Result<Self, PackError> {
        if players == 0 {
            return Err(PackError::NoPlayers);
        }
        let expected = CARDS_PER_PLAYER * players;
        if cards.len() != expected {
            return Err(PackError::WrongSize {
                expected,
                actual: cards.len(),
            });
        }
        Ok(Self { players, cards })
    }

    /// Reads a pack from a file holding one card value per line.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents are not a
    /// valid pack, see [`Pack::from_reader`].
    pub fn from_path(path: impl AsRef<Path>, players: usize) -> Result<Self, PackError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| PackError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::read(BufReader::new(file), players, path)
    }

    /// Reads a pack holding one card value per line.
    ///
    /// Surrounding whitespace is ignored and blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first line that is not a non-negative
    /// integer, or the size mismatch if every line parsed.
    ///
    /// # Example
    ///
    /// ```
    /// use cardring::Pack;
    ///
    /// let text = "1\n2\n\n3\n4\n5\n6\n7\n8\n";
    /// let pack = Pack::from_reader(text.as_bytes(), 1).unwrap();
    /// assert_eq!(pack.len(), 8);
    /// ```
    pub fn from_reader(reader: impl BufRead, players: usize) -> Result<Self, PackError> {
        Self::read(reader, players, Path::new("<input>"))
    }

    fn read(reader: impl BufRead, players: usize, path: &Path) -> Result<Self, PackError> {
        if players == 0 {
            return Err(PackError::NoPlayers);
        }
        let mut cards = Vec::with_capacity(CARDS_PER_PLAYER * players);
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| PackError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let token = line.trim();
            if token.is_empty() {
                continue;
            }
            let number = index + 1;
            let value: i64 = token.parse().map_err(|_| PackError::NotAnInteger {
                line: number,
                token: token.to_owned(),
            })?;
            let card = Card::new(value).map_err(|source| PackError::InvalidCard {
                line: number,
                source,
            })?;
            cards.push(card);
        }
        Self::from_cards(cards, players)
    }

    /// Generates a shuffled pack with eight cards of each value `1..=players`.
    ///
    /// The same seed always produces the same pack.
    ///
    /// # Panics
    ///
    /// Panics if `players` is zero.
    #[must_use]
    pub fn generate(players: usize, seed: u64) -> Self {
        assert!(players > 0, "a pack needs at least one player");
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut cards: Vec<Card> = (1..=players)
            .flat_map(|value| {
                let card = Card::from(u32::try_from(value).unwrap_or(u32::MAX));
                std::iter::repeat_n(card, CARDS_PER_PLAYER)
            })
            .collect();
        cards.shuffle(&mut rng);
        Self { players, cards }
    }

    /// Returns the number of players this pack was validated for.
    #[must_use]
    pub const fn players(&self) -> usize {
        self.players
    }

    /// Returns the cards in pack order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pack is empty. A validated pack never is.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Consumes the pack, returning its cards.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}
