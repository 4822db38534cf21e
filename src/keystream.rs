//! Keystream: key extraction from a Solitaire deck.
//!
//! Each key is produced by running the four deck steps, then counting down
//! the top card's value (Joker B counts as 27) and reading the card that
//! follows. Joker outputs are discarded and the round is repeated on the
//! already mutated deck.
//!
//! The retry loop is bounded: after `max_attempts` consecutive joker outputs
//! extraction fails with [`SolitaireError::KeyExtractionTimeout`]. Keys
//! produced within the bound are identical to an unbounded extractor.

use log::{trace, warn};

use crate::deck::Deck;
use crate::error::SolitaireError;

/// Default number of rounds allowed for a single key.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1024;

/// Key extractor owning the deck it mutates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keystream {
    deck: Deck,
    max_attempts: usize,
}

impl Keystream {
    /// Creates a keystream over `deck` with [`DEFAULT_MAX_ATTEMPTS`].
    pub fn new(deck: Deck) -> Self {
        Keystream {
            deck,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Creates a keystream with a custom retry budget.
    ///
    /// # Errors
    /// Returns [`SolitaireError::InvalidMaxAttempts`] if `max_attempts == 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use solitaire_cipher::{Deck, Keystream};
    ///
    /// let deck = Deck::from_sequence(1u8..=28).unwrap();
    /// assert!(Keystream::with_max_attempts(deck.clone(), 8).is_ok());
    /// assert!(Keystream::with_max_attempts(deck, 0).is_err());
    /// ```
    pub fn with_max_attempts(deck: Deck, max_attempts: usize) -> Result<Self, SolitaireError> {
        if max_attempts == 0 {
            return Err(SolitaireError::InvalidMaxAttempts);
        }
        Ok(Keystream { deck, max_attempts })
    }

    /// Produces the next key, a value in [1, 26].
    ///
    /// # Errors
    /// Returns [`SolitaireError::KeyExtractionTimeout`] if every round within
    /// the retry budget lands on a joker.
    ///
    /// # Examples
    ///
    /// ```
    /// use solitaire_cipher::{Deck, Keystream};
    ///
    /// let mut ks = Keystream::new(Deck::from_sequence(1u8..=28).unwrap());
    /// assert_eq!(ks.next_key().unwrap(), 8);
    /// assert_eq!(ks.next_key().unwrap(), 16);
    /// ```
    pub fn next_key(&mut self) -> Result<u8, SolitaireError> {
        for attempt in 1..=self.max_attempts {
            self.deck.advance();
            let count = self.deck.top().count_value();
            let card = self.deck.card_at_offset(count + 1);
            match card.letter_value() {
                Some(key) => return Ok(key),
                None => trace!("attempt {} landed on joker {}, retrying", attempt, card),
            }
        }
        warn!(
            "key extraction gave up after {} attempts on deck {}",
            self.max_attempts, self.deck
        );
        Err(SolitaireError::KeyExtractionTimeout(self.max_attempts))
    }

    /// Produces the next `n` keys.
    ///
    /// # Errors
    /// Propagates the first [`SolitaireError::KeyExtractionTimeout`].
    pub fn take_keys(&mut self, n: usize) -> Result<Vec<u8>, SolitaireError> {
        (0..n).map(|_| self.next_key()).collect()
    }

    /// Returns the current deck state.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the retry budget.
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Consumes the keystream, returning its deck.
    pub fn into_deck(self) -> Deck {
        self.deck
    }
}
