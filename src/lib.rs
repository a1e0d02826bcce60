//! A multithreaded card game played by a ring of players.
//!
//! `n` players sit in a ring with `n` decks between them. Player `i` draws
//! from deck `i` and discards to deck `i + 1` (wrapping around), each on its
//! own thread, until one of them holds four cards of the same value. Every
//! draw/discard step locks both decks in ascending deck-id order, and the
//! first winner wakes every blocked player so all threads exit.
//!
//! # Example
//!
//! ```no_run
//! use cardring::{CardGame, FileOutput, GameOptions, Pack};
//!
//! let pack = Pack::from_path("four.txt", 4).unwrap();
//! let output = FileOutput::new(".").unwrap();
//! let result = CardGame::new(pack, GameOptions::default())
//!     .play(&output)
//!     .unwrap();
//! println!("winner: {:?}", result.winner);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod console;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod options;
pub mod output;
pub mod pack;
pub mod result;
mod sync;

// Re-export main types
pub use card::Card;
pub use deck::{Deck, DeckGuard, DeckPair};
pub use error::{CardError, GameError, LogWriteError, PackError};
pub use event::{DeckReport, PlayerEvent};
pub use game::{CardGame, GameCoordinator, GameState, Player};
pub use hand::{HAND_SIZE, Hand};
pub use options::GameOptions;
pub use output::{Channel, FileOutput, MemoryOutput, OutputSink};
pub use pack::{CARDS_PER_PLAYER, Pack};
pub use result::{DeckContents, GameResult, PlayerReport};
