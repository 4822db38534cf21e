//! Solitaire: letter cipher driven by the deck keystream.
//!
//! Messages are folded to upper case and every character outside `A..=Z`
//! is dropped. Each remaining letter consumes exactly one key and is
//! shifted forward (encryption) or backward (decryption) around the
//! 26-letter alphabet.

use log::debug;

use crate::card::LETTER_CARDS;
use crate::deck::Deck;
use crate::error::SolitaireError;
use crate::keystream::Keystream;

/// Encrypts one upper-case ASCII letter with `key` (1..=26).
///
/// Returns `None` if `letter` is not in `A..=Z` or `key` is not in 1..=26.
///
/// # Examples
///
/// ```
/// use solitaire_cipher::encrypt_letter;
///
/// assert_eq!(encrypt_letter(b'A', 8), Some(b'I'));
/// assert_eq!(encrypt_letter(b'Z', 1), Some(b'A'));
/// assert_eq!(encrypt_letter(b'a', 1), None);
/// ```
pub fn encrypt_letter(letter: u8, key: u8) -> Option<u8> {
    checked(letter, key).then(|| shift_forward(letter, key))
}

/// Decrypts one upper-case ASCII letter with `key` (1..=26).
///
/// Returns `None` if `letter` is not in `A..=Z` or `key` is not in 1..=26.
///
/// # Examples
///
/// ```
/// use solitaire_cipher::decrypt_letter;
///
/// assert_eq!(decrypt_letter(b'I', 8), Some(b'A'));
/// assert_eq!(decrypt_letter(b'A', 1), Some(b'Z'));
/// assert_eq!(decrypt_letter(b'A', 27), None);
/// ```
pub fn decrypt_letter(letter: u8, key: u8) -> Option<u8> {
    checked(letter, key).then(|| shift_backward(letter, key))
}

fn checked(letter: u8, key: u8) -> bool {
    letter.is_ascii_uppercase() && (1..=LETTER_CARDS).contains(&key)
}

/// Caller guarantees `letter` in `A..=Z` and `key` in 1..=26.
fn shift_forward(letter: u8, key: u8) -> u8 {
    let mut sum = letter - b'A' + 1 + key;
    if sum > LETTER_CARDS {
        sum -= LETTER_CARDS;
    }
    sum + b'A' - 1
}

/// Caller guarantees `letter` in `A..=Z` and `key` in 1..=26.
fn shift_backward(letter: u8, key: u8) -> u8 {
    let mut value = letter - b'A' + 1;
    if value <= key {
        value += LETTER_CARDS;
    }
    value - key + b'A' - 1
}

/// Folds `message` to upper case, then keeps only the ASCII letters.
///
/// Folding first matters: `ß` becomes `SS` and `ı` becomes `I`.
fn letters(message: &str) -> Vec<u8> {
    message
        .to_uppercase()
        .bytes()
        .filter(u8::is_ascii_uppercase)
        .collect()
}

/// Solitaire cipher session over a single deck.
///
/// The deck advances with every letter processed, so an encoder and a
/// decoder must start from identically initialized decks and process the
/// same number of letters in the same order.
#[derive(Debug, Clone)]
pub struct Solitaire {
    keystream: Keystream,
}

impl Solitaire {
    /// Creates a cipher session over `deck` with the default retry budget.
    ///
    /// # Examples
    ///
    /// ```
    /// use solitaire_cipher::{Deck, Solitaire};
    ///
    /// let deck = Deck::from_sequence(1u8..=28).unwrap();
    /// let mut encoder = Solitaire::new(deck.clone());
    /// let mut decoder = Solitaire::new(deck);
    ///
    /// let secret = encoder.encrypt("Hello, World!").unwrap();
    /// assert_eq!(secret, "PUWTUVTSFK");
    /// assert_eq!(decoder.decrypt(&secret).unwrap(), "HELLOWORLD");
    /// ```
    pub fn new(deck: Deck) -> Self {
        Solitaire {
            keystream: Keystream::new(deck),
        }
    }

    /// Creates a cipher session with a custom key-extraction retry budget.
    ///
    /// # Errors
    /// Returns [`SolitaireError::InvalidMaxAttempts`] if `max_attempts == 0`.
    pub fn with_max_attempts(deck: Deck, max_attempts: usize) -> Result<Self, SolitaireError> {
        Ok(Solitaire {
            keystream: Keystream::with_max_attempts(deck, max_attempts)?,
        })
    }

    /// Encrypts `message`, returning upper-case letters only.
    ///
    /// On error the deck is left as it was before the call.
    ///
    /// # Errors
    /// Returns [`SolitaireError::KeyExtractionTimeout`] if a key cannot be
    /// produced within the retry budget.
    pub fn encrypt(&mut self, message: &str) -> Result<String, SolitaireError> {
        self.apply(message, shift_forward)
    }

    /// Decrypts `message`, returning upper-case letters only.
    ///
    /// On error the deck is left as it was before the call.
    ///
    /// # Errors
    /// Returns [`SolitaireError::KeyExtractionTimeout`] if a key cannot be
    /// produced within the retry budget.
    pub fn decrypt(&mut self, message: &str) -> Result<String, SolitaireError> {
        self.apply(message, shift_backward)
    }

    /// Returns the current deck state.
    pub fn deck(&self) -> &Deck {
        self.keystream.deck()
    }

    /// Returns the underlying keystream.
    pub fn keystream(&self) -> &Keystream {
        &self.keystream
    }

    fn apply(&mut self, message: &str, op: fn(u8, u8) -> u8) -> Result<String, SolitaireError> {
        let mut keystream = self.keystream.clone();
        let mut output = String::with_capacity(message.len());
        for letter in letters(message) {
            let key = keystream.next_key()?;
            output.push(op(letter, key) as char);
        }
        debug!("processed {} letters", output.len());
        self.keystream = keystream;
        Ok(output)
    }
}
