//! Error types for the Solitaire cipher library.

use thiserror::Error;

/// Errors produced by the Solitaire cipher library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolitaireError {
    /// The deck does not hold exactly 28 cards.
    #[error("Deck must contain exactly 28 cards, found {0}")]
    InvalidDeckSize(usize),
    /// A card value lies outside [1, 28].
    #[error("Card value {0} is outside the valid range [1, 28]")]
    CardOutOfRange(i64),
    /// A card value appears more than once.
    #[error("Card value {0} appears more than once in the deck")]
    DuplicateCard(u8),
    /// A token of a textual deck is not an integer.
    #[error("Deck token '{0}' is not an integer")]
    MalformedDeckToken(String),
    /// Key extraction hit its retry budget without a non-joker output.
    #[error("No key produced after {0} extraction attempts")]
    KeyExtractionTimeout(usize),
    /// The configured retry budget is zero.
    #[error("Maximum extraction attempts must be at least 1")]
    InvalidMaxAttempts,
}

impl SolitaireError {
    /// Returns `true` for every error raised while building a deck.
    pub fn is_invalid_deck(&self) -> bool {
        matches!(
            self,
            SolitaireError::InvalidDeckSize(_)
                | SolitaireError::CardOutOfRange(_)
                | SolitaireError::DuplicateCard(_)
                | SolitaireError::MalformedDeckToken(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_deck_size() {
        let err = SolitaireError::InvalidDeckSize(27);
        assert_eq!(format!("{}", err), "Deck must contain exactly 28 cards, found 27");
    }

    #[test]
    fn test_display_card_out_of_range() {
        let err = SolitaireError::CardOutOfRange(-3);
        assert_eq!(
            format!("{}", err),
            "Card value -3 is outside the valid range [1, 28]"
        );
    }

    #[test]
    fn test_display_duplicate_card() {
        let err = SolitaireError::DuplicateCard(12);
        assert_eq!(
            format!("{}", err),
            "Card value 12 appears more than once in the deck"
        );
    }

    #[test]
    fn test_display_malformed_token() {
        let err = SolitaireError::MalformedDeckToken("x7".to_string());
        assert_eq!(format!("{}", err), "Deck token 'x7' is not an integer");
    }

    #[test]
    fn test_display_key_extraction_timeout() {
        let err = SolitaireError::KeyExtractionTimeout(5);
        assert_eq!(
            format!("{}", err),
            "No key produced after 5 extraction attempts"
        );
    }

    #[test]
    fn test_is_invalid_deck() {
        assert!(SolitaireError::InvalidDeckSize(0).is_invalid_deck());
        assert!(SolitaireError::CardOutOfRange(29).is_invalid_deck());
        assert!(SolitaireError::DuplicateCard(1).is_invalid_deck());
        assert!(SolitaireError::MalformedDeckToken(String::new()).is_invalid_deck());
        assert!(!SolitaireError::KeyExtractionTimeout(1).is_invalid_deck());
        assert!(!SolitaireError::InvalidMaxAttempts.is_invalid_deck());
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            SolitaireError::DuplicateCard(4),
            SolitaireError::DuplicateCard(4)
        );
        assert_ne!(
            SolitaireError::DuplicateCard(4),
            SolitaireError::CardOutOfRange(4)
        );
    }
}
