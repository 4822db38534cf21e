//! Deck: the 28-card circular sequence driving the Solitaire keystream.
//!
//! The circle is stored as a fixed arena of 28 slots. The successor of slot
//! `i` is slot `(i + 1) % 28`, and a single index, the `rear`, marks the
//! bottom of the deck. Traversal always starts at the slot after `rear`
//! (the top card) and ends at `rear`.
//!
//! Every constructor validates its input, so a `Deck` always holds each
//! value of 1..=28 exactly once.

use std::fmt;
use std::str::FromStr;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::card::{Card, DECK_SIZE, JOKER_A};
use crate::error::SolitaireError;

/// A 28-card Solitaire deck arranged in a circle with a movable bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    slots: [Card; DECK_SIZE],
    rear: usize,
}

impl Deck {
    /// Builds a deck from an explicit ordering, top card first.
    ///
    /// The last value becomes the bottom of the deck.
    ///
    /// # Errors
    /// - [`SolitaireError::InvalidDeckSize`] if there are not exactly 28 values.
    /// - [`SolitaireError::CardOutOfRange`] if a value is not in [1, 28].
    /// - [`SolitaireError::DuplicateCard`] if a value repeats.
    ///
    /// # Examples
    ///
    /// ```
    /// use solitaire_cipher::Deck;
    ///
    /// let deck = Deck::from_sequence(1u8..=28).unwrap();
    /// assert_eq!(deck.top().value(), 1);
    /// assert_eq!(deck.bottom().value(), 28);
    ///
    /// assert!(Deck::from_sequence(1u8..=27).is_err());
    /// ```
    pub fn from_sequence<I>(values: I) -> Result<Self, SolitaireError>
    where
        I: IntoIterator,
        I::Item: Into<i64>,
    {
        let mut iter = values.into_iter();
        let values: Vec<i64> = iter.by_ref().take(DECK_SIZE).map(Into::into).collect();
        if values.len() != DECK_SIZE {
            return Err(SolitaireError::InvalidDeckSize(values.len()));
        }
        // oversized input is counted, never buffered
        let surplus = iter.count();
        if surplus > 0 {
            return Err(SolitaireError::InvalidDeckSize(DECK_SIZE + surplus));
        }

        let mut slots = [JOKER_A; DECK_SIZE];
        let mut seen = [false; DECK_SIZE + 1];
        for (slot, &value) in slots.iter_mut().zip(values.iter()) {
            let card = Card::try_from(value)?;
            let index = card.value() as usize;
            if seen[index] {
                return Err(SolitaireError::DuplicateCard(card.value()));
            }
            seen[index] = true;
            *slot = card;
        }

        let deck = Deck {
            slots,
            rear: DECK_SIZE - 1,
        };
        debug!("built deck from explicit ordering: {}", deck);
        Ok(deck)
    }

    /// Builds a uniformly shuffled deck, drawing entropy from `rng`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    /// use solitaire_cipher::Deck;
    ///
    /// let a = Deck::shuffled_with(&mut StdRng::seed_from_u64(9));
    /// let b = Deck::shuffled_with(&mut StdRng::seed_from_u64(9));
    /// assert_eq!(a, b);
    /// assert!(a.is_valid());
    /// ```
    pub fn shuffled_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut slots: [Card; DECK_SIZE] = std::array::from_fn(Card::from_index);
        slots.shuffle(rng);

        let deck = Deck {
            slots,
            rear: DECK_SIZE - 1,
        };
        debug!("built shuffled deck: {}", deck);
        deck
    }

    /// Builds a uniformly shuffled deck from the thread-local RNG.
    pub fn shuffled() -> Self {
        Self::shuffled_with(&mut rand::rng())
    }

    /// Returns the cards in traversal order, top card first.
    pub fn cards(&self) -> [Card; DECK_SIZE] {
        std::array::from_fn(|offset| self.slots[(self.rear + 1 + offset) % DECK_SIZE])
    }

    /// Returns the card values in traversal order, top card first.
    pub fn values(&self) -> Vec<u8> {
        self.cards().iter().map(|&c| c.value()).collect()
    }

    /// Returns the slot index of the anchor (bottom card).
    pub fn rear(&self) -> usize {
        self.rear
    }

    /// Returns the top card (the successor of the anchor).
    pub fn top(&self) -> Card {
        self.slots[self.successor(self.rear)]
    }

    /// Returns the bottom card (the anchor).
    pub fn bottom(&self) -> Card {
        self.slots[self.rear]
    }

    /// Returns the card stored in `slot`.
    ///
    /// # Panics
    /// Panics if `slot >= 28`.
    pub fn card(&self, slot: usize) -> Card {
        self.slots[slot]
    }

    /// Returns the card `offset` positions after the anchor (1 is the top card).
    pub fn card_at_offset(&self, offset: usize) -> Card {
        self.slots[(self.rear + offset) % DECK_SIZE]
    }

    /// Returns the slot following `slot` around the circle.
    pub fn successor(&self, slot: usize) -> usize {
        (slot + 1) % DECK_SIZE
    }

    /// Returns the slot preceding `slot` around the circle.
    pub fn predecessor(&self, slot: usize) -> usize {
        (slot + DECK_SIZE - 1) % DECK_SIZE
    }

    /// Returns the slot holding `card`.
    ///
    /// # Panics
    /// Never in practice: every deck holds each card value exactly once.
    pub fn position_of(&self, card: Card) -> usize {
        self.slots
            .iter()
            .position(|&c| c == card)
            .expect("deck holds every card value")
    }

    /// Returns the first joker slot strictly after `slot`, walking forward.
    pub(crate) fn next_joker_after(&self, slot: usize) -> usize {
        (1..=DECK_SIZE)
            .map(|offset| (slot + offset) % DECK_SIZE)
            .find(|&s| self.slots[s].is_joker())
            .expect("deck holds both jokers")
    }

    /// Re-checks every deck invariant: 28 distinct values in [1, 28] and a
    /// live anchor.
    pub fn is_valid(&self) -> bool {
        let mut seen = [false; DECK_SIZE + 1];
        for card in self.slots {
            let value = card.value() as usize;
            if !(1..=DECK_SIZE).contains(&value) || seen[value] {
                return false;
            }
            seen[value] = true;
        }
        self.rear < DECK_SIZE
    }

    // ──────── Mutation primitives used by the keystream steps ────────

    /// Swaps the card in `slot` with the card in its successor slot.
    pub(crate) fn swap_forward(&mut self, slot: usize) {
        let next = self.successor(slot);
        self.slots.swap(slot, next);
    }

    /// Moves the anchor to `slot` without touching any card.
    pub(crate) fn set_rear(&mut self, slot: usize) {
        self.rear = slot;
    }

    /// Replaces the deck with `order` (top card first), anchoring on its last card.
    pub(crate) fn rebuild(&mut self, order: [Card; DECK_SIZE]) {
        self.slots = order;
        self.rear = DECK_SIZE - 1;
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards().iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

/// Parses the textual deck format: whitespace-separated integers, top card first.
impl FromStr for Deck {
    type Err = SolitaireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<i64>()
                    .map_err(|_| SolitaireError::MalformedDeckToken(token.to_string()))
            })
            .collect::<Result<Vec<i64>, _>>()?;
        Deck::from_sequence(values)
    }
}
