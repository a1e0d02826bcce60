//! Error types for game operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::output::Channel;

/// Errors that can occur when constructing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// The denomination is negative or too large.
    #[error("card value must be a non-negative integer, got {0}")]
    InvalidValue(i64),
}

/// Errors that can occur while loading a pack.
///
/// Any of these means the pack is unusable; the console re-prompts for
/// another source.
#[derive(Debug, Error)]
pub enum PackError {
    /// A game needs at least one player.
    #[error("number of players must be positive")]
    NoPlayers,
    /// The pack file could not be opened or read.
    #[error("could not read pack file {}: {source}", .path.display())]
    Io {
        /// Path of the pack file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A line did not hold an integer.
    #[error("line {line}: {token:?} is not an integer")]
    NotAnInteger {
        /// 1-based line number.
        line: usize,
        /// The offending text.
        token: String,
    },
    /// A line held an integer that is not a valid card.
    #[error("line {line}: {source}")]
    InvalidCard {
        /// 1-based line number.
        line: usize,
        /// Why the value was rejected.
        #[source]
        source: CardError,
    },
    /// The pack does not hold exactly eight cards per player.
    #[error("pack must contain exactly {expected} cards, found {actual}")]
    WrongSize {
        /// Required number of cards.
        expected: usize,
        /// Number of cards found.
        actual: usize,
    },
}

/// A log line could not be written.
///
/// Logging is best-effort: this is reported through `tracing` and never
/// stops a player.
#[derive(Debug, Error)]
#[error("failed to write to {channel}: {source}")]
pub struct LogWriteError {
    /// Where the line was headed.
    pub channel: Channel,
    /// Underlying I/O error.
    #[source]
    pub source: io::Error,
}

/// Errors that can occur while running a game.
#[derive(Debug, Error)]
pub enum GameError {
    /// The operating system refused to start a player thread.
    #[error("failed to start player thread: {0}")]
    Spawn(#[source] io::Error),
    /// A player thread panicked.
    #[error("player {0} panicked")]
    PlayerPanicked(usize),
}
