//! Shared FIFO decks and their locking protocol.
//!
//! Every deck carries its own lock. Single-deck operations lock internally;
//! a player's draw/discard step locks two decks at once through
//! [`DeckPair`], which always acquires the lower-id deck first. Sharing one
//! total order across all threads is what keeps the ring deadlock-free.

use std::collections::VecDeque;
use std::sync::{Arc, MutexGuard};

use crate::card::Card;
use crate::game::GameState;
use crate::sync::{Condvar, Mutex};

/// A FIFO queue of cards shared between two neighbouring players.
///
/// Player `i` draws from deck `i` and player `i - 1` discards into it.
#[derive(Debug)]
pub struct Deck {
    id: usize,
    cards: Mutex<VecDeque<Card>>,
    ready: Condvar,
    state: Arc<GameState>,
}

impl Deck {
    /// Creates an empty deck observing the given game state.
    #[must_use]
    pub fn new(id: usize, state: Arc<GameState>) -> Self {
        Self {
            id,
            cards: Mutex::new(VecDeque::new()),
            ready: Condvar::new(),
            state,
        }
    }

    /// Returns the deck ID.
    #[must_use]
    pub const fn id(&self) -> usize {
        self.id
    }

    /// Appends a card to the tail and wakes anyone waiting for a card.
    pub fn push(&self, card: Card) {
        self.acquire_exclusive().push(card);
    }

    /// Removes and returns the head card, or `None` if the deck is empty.
    pub fn try_take_first(&self) -> Option<Card> {
        self.acquire_exclusive().try_take_first()
    }

    /// Blocks until the deck holds a card or the game is over.
    ///
    /// Returns whether the deck is non-empty. A `false` return means the game
    /// ended while there was nothing to draw.
    pub fn wait_until_ready_or_game_ended(&self) -> bool {
        let mut cards = self.cards.lock();
        while cards.is_empty() && !self.state.is_over() {
            cards = self.ready.wait(cards);
        }
        !cards.is_empty()
    }

    /// Takes this deck's lock for a composite operation.
    ///
    /// The lock is released when the guard is dropped. Not reentrant:
    /// calling any locking method of the same deck while holding the guard
    /// deadlocks, so use the guard's own methods instead.
    pub fn acquire_exclusive(&self) -> DeckGuard<'_> {
        DeckGuard {
            deck: self,
            cards: self.cards.lock(),
        }
    }

    /// Returns a copy of the current contents, head first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Card> {
        self.cards.lock().iter().copied().collect()
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.lock().len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.lock().is_empty()
    }

    /// Wakes every thread blocked in
    /// [`wait_until_ready_or_game_ended`](Self::wait_until_ready_or_game_ended).
    ///
    /// Taking the lock before notifying means a waiter is either already
    /// suspended or has not yet checked the game state, so no wake-up is lost.
    pub fn broadcast_ended(&self) {
        let _cards = self.cards.lock();
        self.ready.notify_all();
    }
}

/// Exclusive access to one deck.
#[derive(Debug)]
pub struct DeckGuard<'a> {
    deck: &'a Deck,
    cards: MutexGuard<'a, VecDeque<Card>>,
}

impl DeckGuard<'_> {
    /// Returns the ID of the locked deck.
    #[must_use]
    pub const fn deck_id(&self) -> usize {
        self.deck.id
    }

    /// Appends a card to the tail and wakes anyone waiting for a card.
    pub fn push(&mut self, card: Card) {
        self.cards.push_back(card);
        self.deck.ready.notify_all();
    }

    /// Removes and returns the head card, or `None` if the deck is empty.
    pub fn try_take_first(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Releases the lock.
    pub fn release(self) {}
}

/// A player's draw deck and discard deck, both locked.
///
/// Locks are taken in ascending deck-id order regardless of which deck is
/// the draw source. In a one-player ring both roles name the same deck and
/// a single lock is held.
#[derive(Debug)]
pub enum DeckPair<'a> {
    /// Draw and discard deck are the same deck.
    Shared(DeckGuard<'a>),
    /// Two distinct decks.
    Split {
        /// Deck drawn from.
        left: DeckGuard<'a>,
        /// Deck discarded to.
        right: DeckGuard<'a>,
    },
}

impl<'a> DeckPair<'a> {
    /// Locks `left` and `right` following the global lock order.
    pub fn acquire(left: &'a Deck, right: &'a Deck) -> Self {
        if core::ptr::eq(left, right) {
            return Self::Shared(left.acquire_exclusive());
        }
        if lock_rank(left) < lock_rank(right) {
            let left = left.acquire_exclusive();
            let right = right.acquire_exclusive();
            Self::Split { left, right }
        } else {
            let right = right.acquire_exclusive();
            let left = left.acquire_exclusive();
            Self::Split { left, right }
        }
    }

    /// Removes and returns the head of the draw deck.
    pub fn take_from_left(&mut self) -> Option<Card> {
        match self {
            Self::Shared(guard) | Self::Split { left: guard, .. } => guard.try_take_first(),
        }
    }

    /// Appends a card to the discard deck.
    pub fn push_to_right(&mut self, card: Card) {
        match self {
            Self::Shared(guard) | Self::Split { right: guard, .. } => guard.push(card),
        }
    }

    /// Releases both locks, the second-acquired first.
    pub fn release(self) {
        if let Self::Split { left, right } = self {
            if lock_rank(left.deck) < lock_rank(right.deck) {
                drop(right);
                drop(left);
            } else {
                drop(left);
                drop(right);
            }
        }
    }
}

// IDs are unique within a ring; the address only breaks ties between decks
// built outside a coordinator.
fn lock_rank(deck: &Deck) -> (usize, usize) {
    (deck.id, core::ptr::from_ref(deck) as usize)
}
