//! Game configuration options.

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cardring::GameOptions;
///
/// let options = GameOptions::default().with_turn_limit(Some(10_000));
/// assert_eq!(options.turn_limit, Some(10_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameOptions {
    /// Number of draw/discard steps any single player may take before the
    /// game is abandoned without a winner. `None` plays until someone wins.
    pub turn_limit: Option<u64>,
}

impl GameOptions {
    /// Sets the turn limit.
    #[must_use]
    pub const fn with_turn_limit(mut self, turn_limit: Option<u64>) -> Self {
        self.turn_limit = turn_limit;
        self
    }
}
