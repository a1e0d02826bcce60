//! Card value type.

use core::fmt;

use crate::error::CardError;

/// A playing card carrying a single non-negative denomination.
///
/// Cards compare and order by value; two cards of equal value are
/// interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    value: u32,
}

impl Card {
    /// Creates a card from a signed denomination.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidValue`] if `value` is negative or does not
    /// fit in a `u32`.
    ///
    /// # Example
    ///
    /// ```
    /// use cardring::Card;
    ///
    /// assert_eq!(Card::new(7).unwrap().value(), 7);
    /// assert!(Card::new(-1).is_err());
    /// ```
    pub fn new(value: i64) -> Result<Self, CardError> {
        u32::try_from(value)
            .map(Self::from)
            .map_err(|_| CardError::InvalidValue(value))
    }

    /// Returns the denomination.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.value
    }
}

impl From<u32> for Card {
    fn from(value: u32) -> Self {
        Self { value }
    }
}

impl TryFrom<i64> for Card {
    type Error = CardError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
