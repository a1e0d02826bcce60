//! Game setup and thread orchestration.

use std::thread;

use tracing::{error, info};

use crate::card::Card;
use crate::error::GameError;
use crate::event::DeckReport;
use crate::hand::HAND_SIZE;
use crate::options::GameOptions;
use crate::output::{Channel, OutputSink, record};
use crate::pack::Pack;
use crate::result::{DeckContents, GameResult, PlayerReport};

mod coordinator;
mod player;
pub mod state;

pub use coordinator::GameCoordinator;
pub use player::Player;
pub use state::GameState;

/// A ring of `n` players and `n` decks dealt from one pack.
///
/// Player `i` draws from deck `i` and discards to deck `i % n + 1`. The first
/// `4n` cards of the pack are dealt round-robin into hands and the rest
/// round-robin onto decks.
///
/// # Example
///
/// ```
/// use cardring::{CardGame, GameOptions, MemoryOutput, Pack};
///
/// let pack = Pack::generate(3, 7);
/// let game = CardGame::new(pack, GameOptions::default());
/// let output = MemoryOutput::new();
/// let result = game.play(&output).unwrap();
/// assert!(result.winner.is_some());
/// assert_eq!(result.card_count(), 24);
/// ```
#[derive(Debug)]
pub struct CardGame {
    coordinator: GameCoordinator,
    hands: Vec<Vec<Card>>,
    options: GameOptions,
}

impl CardGame {
    /// Builds the ring and deals `pack`.
    #[must_use]
    pub fn new(pack: Pack, options: GameOptions) -> Self {
        let players = pack.players();
        let coordinator = GameCoordinator::new(players);
        let mut hands = vec![Vec::with_capacity(HAND_SIZE); players];

        let dealt = HAND_SIZE * players;
        for (index, card) in pack.into_cards().into_iter().enumerate() {
            if index < dealt {
                hands[index % players].push(card);
            } else {
                coordinator.decks()[index % players].push(card);
            }
        }

        Self {
            coordinator,
            hands,
            options,
        }
    }

    /// Returns the number of players.
    #[must_use]
    pub fn players(&self) -> usize {
        self.hands.len()
    }

    /// Returns the coordinator, which owns the decks.
    #[must_use]
    pub const fn coordinator(&self) -> &GameCoordinator {
        &self.coordinator
    }

    /// Returns the hand dealt to a player.
    #[must_use]
    pub fn dealt_hand(&self, player_id: usize) -> Option<&[Card]> {
        player_id
            .checked_sub(1)
            .and_then(|index| self.hands.get(index))
            .map(Vec::as_slice)
    }

    /// Plays the game to completion, one thread per player.
    ///
    /// Blocks until every player has exited, then writes each deck's final
    /// contents to its [`Channel::Deck`].
    ///
    /// # Errors
    ///
    /// Returns an error if a player thread cannot be started or panics. The
    /// game is abandoned in either case so the remaining players exit.
    pub fn play(self, sink: &dyn OutputSink) -> Result<GameResult, GameError> {
        let Self {
            coordinator,
            hands,
            options,
        } = self;
        let coordinator = &coordinator;
        let options = &options;
        let n = hands.len();
        info!(players = n, "starting game");

        let mut players: Vec<PlayerReport> = thread::scope(|scope| {
            let mut handles = Vec::with_capacity(n);
            for (index, hand) in hands.into_iter().enumerate() {
                let id = index + 1;
                let (Some(left), Some(right)) = (coordinator.deck(id), coordinator.deck(id % n + 1))
                else {
                    continue;
                };
                let mut player = Player::new(id, left, right);
                for card in hand {
                    player.add_initial_card(card);
                }

                let spawned = thread::Builder::new()
                    .name(format!("player-{id}"))
                    .spawn_scoped(scope, move || {
                        let _guard = AbandonOnPanic(coordinator);
                        player.run(coordinator, sink, options)
                    });
                match spawned {
                    Ok(handle) => handles.push((id, handle)),
                    Err(err) => {
                        error!(player = id, error = %err, "could not start player thread");
                        coordinator.abandon();
                        return Err(GameError::Spawn(err));
                    }
                }
            }

            let mut reports = Vec::with_capacity(n);
            let mut panicked = None;
            for (id, handle) in handles {
                match handle.join() {
                    Ok(report) => reports.push(report),
                    Err(_) => {
                        error!(player = id, "player thread panicked");
                        panicked.get_or_insert(id);
                    }
                }
            }
            panicked.map_or(Ok(reports), |id| Err(GameError::PlayerPanicked(id)))
        })?;
        players.sort_by_key(|report| report.player_id);

        let decks: Vec<DeckContents> = coordinator
            .decks()
            .iter()
            .map(|deck| DeckContents {
                deck_id: deck.id(),
                cards: deck.snapshot(),
            })
            .collect();
        for deck in &decks {
            record(
                sink,
                Channel::Deck(deck.deck_id),
                DeckReport {
                    deck: deck.deck_id,
                    cards: &deck.cards,
                },
            );
        }

        let winner = coordinator.winner_id();
        info!(?winner, "game finished");
        Ok(GameResult {
            winner,
            players,
            decks,
        })
    }
}

/// Ends the game if a player thread unwinds, so its neighbours stop waiting
/// for cards it will never pass on.
struct AbandonOnPanic<'a>(&'a GameCoordinator);

impl Drop for AbandonOnPanic<'_> {
    fn drop(&mut self) {
        if thread::panicking() {
            self.0.abandon();
        }
    }
}
