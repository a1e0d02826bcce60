//! Player state and the per-thread draw/discard loop.

use tracing::{debug, info_span, warn};

use crate::card::Card;
use crate::deck::{Deck, DeckPair};
use crate::event::PlayerEvent;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::output::{Channel, OutputSink, record};
use crate::result::PlayerReport;

use super::GameCoordinator;

/// A player in the ring: a hand plus the deck it draws from (left) and the
/// deck it discards to (right).
///
/// A player collects cards whose value equals its own ID.
#[derive(Debug)]
pub struct Player<'a> {
    id: usize,
    hand: Hand,
    left: &'a Deck,
    right: &'a Deck,
}

impl<'a> Player<'a> {
    /// Creates a player with an empty hand.
    #[must_use]
    pub const fn new(id: usize, left: &'a Deck, right: &'a Deck) -> Self {
        Self {
            id,
            hand: Hand::new(),
            left,
            right,
        }
    }

    /// Returns the player ID.
    #[must_use]
    pub const fn id(&self) -> usize {
        self.id
    }

    /// Returns the value this player tries to collect.
    #[must_use]
    pub fn preferred_value(&self) -> u32 {
        u32::try_from(self.id).unwrap_or(u32::MAX)
    }

    /// Returns the current hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the deck this player draws from.
    #[must_use]
    pub const fn left_deck(&self) -> &'a Deck {
        self.left
    }

    /// Returns the deck this player discards to.
    #[must_use]
    pub const fn right_deck(&self) -> &'a Deck {
        self.right
    }

    /// Deals a card into the hand. Only used before the player starts.
    pub fn add_initial_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Returns whether the hand is four cards of one value.
    #[must_use]
    pub fn has_winning_hand(&self) -> bool {
        self.hand.is_winning()
    }

    /// Removes and returns the card to discard, see [`Hand::choose_discard`].
    pub fn choose_discard(&mut self) -> Option<Card> {
        let preferred = self.preferred_value();
        self.hand.choose_discard(preferred)
    }

    /// Runs the player until it wins or sees the game end.
    ///
    /// This is the body of a player thread. Every line the player produces
    /// goes to [`Channel::Player`] on `sink`.
    pub fn run(
        mut self,
        coordinator: &GameCoordinator,
        sink: &dyn OutputSink,
        options: &GameOptions,
    ) -> PlayerReport {
        let id = self.id;
        let _span = info_span!("player", id).entered();
        let channel = Channel::Player(id);

        record(
            sink,
            channel,
            PlayerEvent::InitialHand {
                player: id,
                hand: &self.hand,
            },
        );

        let mut turns = 0;
        let won = if self.has_winning_hand() && coordinator.declare_win_if_first(id) {
            record(sink, channel, PlayerEvent::Wins { player: id });
            true
        } else {
            self.take_turns(coordinator, sink, options.turn_limit, &mut turns)
        };

        if let Some(winner) = coordinator.winner_id().filter(|&winner| winner != id) {
            record(sink, channel, PlayerEvent::Informed { winner, player: id });
        }
        record(sink, channel, PlayerEvent::Exits { player: id });
        let hand = &self.hand;
        if won {
            record(sink, channel, PlayerEvent::FinalHand { player: id, hand });
        } else {
            record(sink, channel, PlayerEvent::Hand { player: id, hand });
        }

        PlayerReport {
            player_id: id,
            hand: self.hand.cards().to_vec(),
            turns,
            won,
        }
    }

    /// Draws and discards until the game is over. Returns whether this
    /// player won.
    fn take_turns(
        &mut self,
        coordinator: &GameCoordinator,
        sink: &dyn OutputSink,
        turn_limit: Option<u64>,
        turns: &mut u64,
    ) -> bool {
        let id = self.id;
        let channel = Channel::Player(id);
        let (left_id, right_id) = (self.left.id(), self.right.id());

        while !coordinator.is_game_over() {
            if turn_limit.is_some_and(|limit| *turns >= limit) {
                if coordinator.abandon() {
                    warn!(turns = *turns, "turn limit reached, abandoning game");
                }
                break;
            }
            if !self.left.wait_until_ready_or_game_ended() {
                break;
            }

            let mut decks = DeckPair::acquire(self.left, self.right);
            if coordinator.is_game_over() {
                break;
            }
            let Some(drawn) = decks.take_from_left() else {
                debug!(deck = left_id, "deck emptied before draw, waiting again");
                continue;
            };
            self.hand.add_card(drawn);
            let discarded = self.choose_discard().unwrap_or(drawn);
            decks.push_to_right(discarded);

            record(
                sink,
                channel,
                PlayerEvent::Draws {
                    player: id,
                    card: drawn,
                    deck: left_id,
                },
            );
            record(
                sink,
                channel,
                PlayerEvent::Discards {
                    player: id,
                    card: discarded,
                    deck: right_id,
                },
            );
            decks.release();
            *turns += 1;

            record(
                sink,
                channel,
                PlayerEvent::CurrentHand {
                    player: id,
                    hand: &self.hand,
                },
            );
            debug!(%drawn, %discarded, hand = %self.hand, "turn complete");

            if self.has_winning_hand() && coordinator.declare_win_if_first(id) {
                record(sink, channel, PlayerEvent::Wins { player: id });
                return true;
            }
        }
        false
    }
}
