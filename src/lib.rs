//! Solitaire keystream cipher.
//!
//! A letter cipher driven by a deterministic keystream generator that
//! repeatedly rearranges a 28-card circular deck (26 letter cards and two
//! jokers). The keystream matches the reference linked-list implementation
//! key for key.
//!
//! # Architecture
//!
//! ```text
//! Deck       (28-slot circular arena with a movable bottom anchor)
//!     ↕ mutated in place by
//! Steps      (Joker A → Joker B → Triple Cut → Count Cut)
//!     ↕ looped by
//! Keystream  (one key in 1..=26 per call, joker outputs discarded)
//!     ↕ consumed one key per letter by
//! Solitaire  (encrypt / decrypt over A..=Z)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with a fixed deck:
//!
//! ```
//! use solitaire_cipher::{Deck, Solitaire};
//!
//! let deck: Deck = "1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 \
//!                   21 22 23 24 25 26 27 28".parse().unwrap();
//!
//! let mut encoder = Solitaire::new(deck.clone());
//! let mut decoder = Solitaire::new(deck);
//!
//! let secret = encoder.encrypt("Attack at dawn").unwrap();
//! assert_eq!(decoder.decrypt(&secret).unwrap(), "ATTACKATDAWN");
//! ```
//!
//! Draw a random deck:
//!
//! ```
//! use solitaire_cipher::{Deck, Keystream};
//!
//! let mut ks = Keystream::new(Deck::shuffled());
//! let key = ks.next_key().unwrap();
//! assert!((1..=26).contains(&key));
//! ```

#![deny(clippy::all)]

pub mod card;
pub mod error;

mod deck;
mod keystream;
mod solitaire;
mod steps;

pub use card::{Card, DECK_SIZE, JOKER_A, JOKER_B};
pub use deck::Deck;
pub use error::SolitaireError;
pub use keystream::{Keystream, DEFAULT_MAX_ATTEMPTS};
pub use solitaire::{decrypt_letter, encrypt_letter, Solitaire};
