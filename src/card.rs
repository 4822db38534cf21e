//! Card: a single value of the 28-card Solitaire deck.
//!
//! Values 1..=26 are letter cards (A..=Z). The two jokers are 27 (Joker A)
//! and 28 (Joker B).

use std::fmt;

use crate::error::SolitaireError;

/// Number of cards in a deck.
pub const DECK_SIZE: usize = 28;

/// Number of letter cards (one per letter of the alphabet).
pub const LETTER_CARDS: u8 = 26;

/// A card of the Solitaire deck, guaranteed to hold a value in [1, 28].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card(u8);

/// Joker A, the card valued 27.
pub const JOKER_A: Card = Card(27);

/// Joker B, the card valued 28.
pub const JOKER_B: Card = Card(28);

impl Card {
    /// Creates a card from its face value.
    ///
    /// # Errors
    /// Returns [`SolitaireError::CardOutOfRange`] if `value` is not in [1, 28].
    pub fn new(value: u8) -> Result<Self, SolitaireError> {
        if (1..=DECK_SIZE as u8).contains(&value) {
            Ok(Card(value))
        } else {
            Err(SolitaireError::CardOutOfRange(value as i64))
        }
    }

    /// Card at position `index` (0-based) of a sorted deck.
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < DECK_SIZE);
        Card(index as u8 + 1)
    }

    /// Returns the face value (1..=28).
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns `true` for Joker A and Joker B.
    pub fn is_joker(self) -> bool {
        self.0 > LETTER_CARDS
    }

    /// Value used when this card drives a count: both jokers count as 27.
    pub fn count_value(self) -> usize {
        if self == JOKER_B {
            JOKER_A.0 as usize
        } else {
            self.0 as usize
        }
    }

    /// Returns the letter value (1..=26) for letter cards, `None` for jokers.
    pub fn letter_value(self) -> Option<u8> {
        if self.is_joker() {
            None
        } else {
            Some(self.0)
        }
    }
}

impl TryFrom<i64> for Card {
    type Error = SolitaireError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| SolitaireError::CardOutOfRange(value))
            .and_then(Card::new)
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> u8 {
        card.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
