//! The four keystream steps: Joker A move, Joker B move, Triple Cut and
//! Count Cut.
//!
//! Each step rearranges the deck in place and leaves every deck invariant
//! intact. Joker moves swap card values between neighbouring slots and never
//! touch the anchor. The cuts either move the anchor (when the deck is
//! already a rotation of the result) or rebuild the slot arena in traversal
//! order.

use log::trace;

use crate::card::{Card, DECK_SIZE, JOKER_A, JOKER_B};
use crate::deck::Deck;

impl Deck {
    /// Step 1: moves Joker A one position down the circle.
    ///
    /// When Joker A is the bottom card it swaps with the top card.
    pub fn joker_a(&mut self) {
        let slot = self.position_of(JOKER_A);
        self.swap_forward(slot);
    }

    /// Step 2: moves Joker B two positions down the circle.
    pub fn joker_b(&mut self) {
        let slot = self.position_of(JOKER_B);
        self.swap_forward(slot);
        self.swap_forward(self.successor(slot));
    }

    /// Step 3: swaps the cards above the first joker with the cards below the
    /// second joker, leaving the jokers and everything between them in place.
    ///
    /// - Top card is a joker: nothing sits above the first joker, so the
    ///   second joker becomes the new bottom.
    /// - Bottom card is a joker: nothing sits below the second joker, so the
    ///   card just above the first joker becomes the new bottom.
    ///
    /// # Examples
    ///
    /// ```
    /// use solitaire_cipher::Deck;
    ///
    /// let mut deck = Deck::from_sequence(
    ///     [1u8, 2, 27, 3, 28, 4, 5].into_iter().chain(6..=26),
    /// ).unwrap();
    /// deck.triple_cut();
    /// assert_eq!(&deck.values()[..4], &[4, 5, 6, 7]);
    /// assert_eq!(&deck.values()[25..], &[28, 1, 2]);
    /// ```
    pub fn triple_cut(&mut self) {
        let top = self.successor(self.rear());
        if self.card(top).is_joker() {
            let second = self.next_joker_after(top);
            trace!("triple cut: top joker, new rear at slot {}", second);
            self.set_rear(second);
            return;
        }

        if self.bottom().is_joker() {
            let first = self.next_joker_after(self.rear());
            let rear = self.predecessor(first);
            trace!("triple cut: bottom joker, new rear at slot {}", rear);
            self.set_rear(rear);
            return;
        }

        let order = self.cards();
        let (first, second) = joker_bounds(&order);
        let above = &order[..first];
        let middle = &order[first..=second];
        let below = &order[second + 1..];

        let mut cut = order;
        cut[..below.len()].copy_from_slice(below);
        cut[below.len()..below.len() + middle.len()].copy_from_slice(middle);
        cut[below.len() + middle.len()..].copy_from_slice(above);
        self.rebuild(cut);
    }

    /// Step 4: cuts as many cards off the top as the bottom card's count
    /// value and places them just above the bottom card.
    ///
    /// The bottom card never moves. Joker B counts as 27, which leaves the
    /// deck unchanged.
    pub fn count_cut(&mut self) {
        let order = self.cards();
        let count = self.bottom().count_value();
        let bottom = DECK_SIZE - 1;
        let moved = bottom - count;

        let mut cut = order;
        cut[..moved].copy_from_slice(&order[count..bottom]);
        cut[moved..bottom].copy_from_slice(&order[..count]);
        self.rebuild(cut);
    }

    /// Runs one full round: Joker A, Joker B, Triple Cut, Count Cut.
    pub fn advance(&mut self) {
        self.joker_a();
        self.joker_b();
        self.triple_cut();
        self.count_cut();
    }
}

/// Returns the traversal indices of the first and second joker.
fn joker_bounds(order: &[Card; DECK_SIZE]) -> (usize, usize) {
    let mut jokers = order
        .iter()
        .enumerate()
        .filter(|(_, card)| card.is_joker())
        .map(|(i, _)| i);
    let first = jokers.next().expect("deck holds Joker A");
    let second = jokers.next().expect("deck holds Joker B");
    (first, second)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(values: &[u8]) -> Deck {
        Deck::from_sequence(values.iter().copied()).unwrap()
    }

    fn identity() -> Deck {
        Deck::from_sequence(1u8..=28).unwrap()
    }

    #[test]
    fn test_joker_a_moves_one_slot() {
        let mut d = identity();
        d.joker_a();
        let values = d.values();
        assert_eq!(&values[25..], &[26, 28, 27]);
        assert_eq!(d.rear(), 27);
    }

    #[test]
    fn test_joker_a_wraps_from_bottom_to_top() {
        let mut values: Vec<u8> = (1..=26).collect();
        values.insert(0, 28);
        values.push(27);
        let mut d = deck(&values);
        d.joker_a();
        assert_eq!(d.top(), JOKER_A);
        assert_eq!(d.bottom(), JOKER_B);
        assert_eq!(d.rear(), 27);
    }

    #[test]
    fn test_joker_b_moves_two_slots() {
        let mut values: Vec<u8> = (1..=28).collect();
        values.swap(27, 5);
        // 28 now sits at slot 5, 6 at the bottom
        let mut d = deck(&values);
        d.joker_b();
        assert_eq!(&d.values()[4..8], &[5, 7, 8, 28]);
        assert_eq!(d.rear(), 27);
    }

    #[test]
    fn test_joker_b_wraps_past_bottom() {
        let mut d = identity();
        d.joker_a();
        d.joker_b();
        let mut expected: Vec<u8> = vec![28];
        expected.extend(2..=26);
        expected.extend([27, 1]);
        assert_eq!(d.values(), expected);
    }

    #[test]
    fn test_triple_cut_general_case() {
        let mut values: Vec<u8> = (1..=5).collect();
        values.push(27);
        values.extend(6..=10);
        values.push(28);
        values.extend(11..=26);
        let mut d = deck(&values);
        d.triple_cut();

        let mut expected: Vec<u8> = (11..=26).collect();
        expected.push(27);
        expected.extend(6..=10);
        expected.push(28);
        expected.extend(1..=5);
        assert_eq!(d.values(), expected);
        assert_eq!(d.bottom().value(), 5);
    }

    #[test]
    fn test_triple_cut_top_joker_moves_rear_to_second_joker() {
        let mut values: Vec<u8> = vec![27];
        values.extend(1..=13);
        values.push(28);
        values.extend(14..=26);
        let mut d = deck(&values);
        d.triple_cut();

        assert_eq!(d.rear(), 14);
        assert_eq!(d.bottom(), JOKER_B);
        let mut expected: Vec<u8> = (14..=26).collect();
        expected.push(27);
        expected.extend(1..=13);
        expected.push(28);
        assert_eq!(d.values(), expected);
    }

    #[test]
    fn test_triple_cut_bottom_joker_moves_rear_above_first_joker() {
        let mut d = identity();
        d.triple_cut();

        assert_eq!(d.rear(), 25);
        assert_eq!(d.bottom().value(), 26);
        assert_eq!(d.top(), JOKER_A);
        let mut expected: Vec<u8> = vec![27, 28];
        expected.extend(1..=26);
        assert_eq!(d.values(), expected);
    }

    #[test]
    fn test_triple_cut_jokers_at_both_ends_is_noop() {
        let mut values: Vec<u8> = vec![28];
        values.extend(1..=26);
        values.push(27);
        let mut d = deck(&values);
        let before = d.values();
        d.triple_cut();
        assert_eq!(d.values(), before);
        assert_eq!(d.rear(), 27);
    }

    #[test]
    fn test_triple_cut_adjacent_jokers() {
        let mut values: Vec<u8> = (1..=10).collect();
        values.extend([28, 27]);
        values.extend(11..=26);
        let mut d = deck(&values);
        d.triple_cut();

        let mut expected: Vec<u8> = (11..=26).collect();
        expected.extend([28, 27]);
        expected.extend(1..=10);
        assert_eq!(d.values(), expected);
    }

    #[test]
    fn test_count_cut_buries_top_cards_above_bottom() {
        let mut values: Vec<u8> = vec![1, 2];
        values.extend(4..=28);
        values.push(3);
        let mut d = deck(&values);
        d.count_cut();

        let mut expected: Vec<u8> = (5..=28).collect();
        expected.extend([1, 2, 4, 3]);
        assert_eq!(d.values(), expected);
        assert_eq!(d.bottom().value(), 3);
    }

    #[test]
    fn test_count_cut_joker_bottom_is_noop() {
        for bottom in [27u8, 28] {
            let mut values: Vec<u8> = (1..=28).filter(|&v| v != bottom).collect();
            values.push(bottom);
            let mut d = deck(&values);
            d.count_cut();
            assert_eq!(d.values(), values);
        }
    }

    #[test]
    fn test_count_cut_bottom_one() {
        let mut values: Vec<u8> = (2..=28).collect();
        values.push(1);
        let mut d = deck(&values);
        d.count_cut();

        let mut expected: Vec<u8> = (3..=28).collect();
        expected.extend([2, 1]);
        assert_eq!(d.values(), expected);
    }

    #[test]
    fn test_count_cut_after_rear_moved() {
        let mut d = identity();
        d.triple_cut();
        // bottom is now 26: cut 27, 28, 1..=24 above it
        d.count_cut();
        let mut expected: Vec<u8> = vec![25, 27, 28];
        expected.extend(1..=24);
        expected.push(26);
        assert_eq!(d.values(), expected);
    }

    #[test]
    fn test_advance_identity_round() {
        let mut d = identity();
        d.advance();
        let mut expected: Vec<u8> = vec![1, 28];
        expected.extend(2..=27);
        assert_eq!(d.values(), expected);
    }

    #[test]
    fn test_steps_preserve_validity() {
        let mut d = identity();
        for _ in 0..500 {
            d.joker_a();
            assert!(d.is_valid());
            d.joker_b();
            assert!(d.is_valid());
            d.triple_cut();
            assert!(d.is_valid());
            d.count_cut();
            assert!(d.is_valid());
        }
    }
}
