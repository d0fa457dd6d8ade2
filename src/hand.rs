//! Hands of cards held outside a deck.

use alloc::vec::Vec;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::Card;

/// An unordered group of cards.
///
/// A hand holds each card at most once. It is never synchronised with a
/// deck; cards go back only through [`Hand::return_to_deck`] and friends.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: HashSet<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a hand holding `cards`.
    #[must_use]
    pub fn from_cards<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Returns the number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the hand holds any card.
    #[must_use]
    pub fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Returns whether the hand holds `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Adds a card. Returns `false` if it was already held.
    pub fn add(&mut self, card: Card) -> bool {
        self.cards.insert(card)
    }

    /// Adds each card.
    pub fn add_many<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    /// Removes a card. Returns `false` if it was not held.
    pub fn remove(&mut self, card: &Card) -> bool {
        self.cards.remove(card)
    }

    /// Removes each card.
    pub fn remove_many(&mut self, cards: &[Card]) {
        for card in cards {
            self.remove(card);
        }
    }

    /// Moves `card` from this hand into `other`.
    ///
    /// `other` receives the card even if this hand did not hold it.
    pub fn move_to(&mut self, other: &mut Self, card: &Card) {
        self.remove(card);
        other.add(card.clone());
    }

    /// Removes `card` and returns it to the deck that generated it.
    ///
    /// A card with no deck just leaves the hand.
    pub fn return_to_deck(&mut self, card: &Card) {
        self.remove(card);
        card.return_to_deck();
    }

    /// Returns each of `cards` to its deck.
    pub fn return_many_to_deck(&mut self, cards: &[Card]) {
        for card in cards {
            self.return_to_deck(card);
        }
    }

    /// Returns every held card to its deck, leaving the hand empty.
    pub fn return_all_to_deck(&mut self) {
        for card in self.cards.drain() {
            card.return_to_deck();
        }
    }

    /// Iterates over the held cards in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Returns a copy of the held cards in no particular order.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.cards.iter().cloned().collect()
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::from_cards(iter)
    }
}

impl Extend<Card> for Hand {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.add_many(iter);
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = <&'a HashSet<Card> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{DECK_SIZE, Rank, Suit};
    use crate::deck::Deck;

    #[test]
    fn add_is_idempotent() {
        let card = Card::new(Suit::Hearts, Rank::King);
        let mut hand = Hand::new();

        assert!(hand.add(card.clone()));
        assert!(!hand.add(card.clone()));
        assert_eq!(hand.len(), 1);
        assert!(hand.contains(&card));

        let other = Card::new(Suit::Hearts, Rank::Queen);
        hand.add_many([card.clone(), other.clone(), card.clone()]);
        assert_eq!(hand.len(), 2);
        assert!(hand.contains(&other));
    }

    #[test]
    fn same_name_different_cards_both_fit() {
        let mut hand = Hand::from_cards([
            Card::new(Suit::Hearts, Rank::King),
            Card::new(Suit::Hearts, Rank::King),
        ]);
        assert_eq!(hand.len(), 2);

        hand.remove_many(&hand.cards());
        assert!(hand.is_empty());
    }

    #[test]
    fn move_to_transfers_the_card() {
        let card = Card::new(Suit::Clubs, Rank::Four);
        let mut from = Hand::from_cards([card.clone()]);
        let mut to = Hand::new();

        from.move_to(&mut to, &card);

        assert!(from.is_empty());
        assert!(to.contains(&card));
    }

    #[test]
    fn return_to_deck_goes_back_to_origin() {
        let deck = Deck::standard(3);
        let mut hand: Hand = deck.draw_many(5).into_iter().collect();
        let card = hand.cards()[0].clone();

        hand.return_to_deck(&card);

        assert_eq!(hand.len(), 4);
        assert!(deck.contains(&card));
        assert_eq!(deck.remaining(), DECK_SIZE - 4);
        assert_eq!(deck.size(), DECK_SIZE);
    }

    #[test]
    fn return_all_empties_the_hand() {
        let deck = Deck::standard(3);
        let mut hand = Hand::from_cards(deck.draw_many(5));
        hand.add(Card::new(Suit::Spades, Rank::Ace));

        hand.return_all_to_deck();

        assert!(hand.is_empty());
        assert_eq!(deck.remaining(), DECK_SIZE);
        assert!(deck.drawn_cards().is_empty());
    }
}
