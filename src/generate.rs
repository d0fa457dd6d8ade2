//! Card generation functions.
//!
//! Each generator matches [`Generator`](crate::Generator) and can be passed
//! to [`DeckOptions::with_generator`](crate::DeckOptions::with_generator) or
//! called with `None` to build loose cards.

use alloc::vec::Vec;

use crate::card::{Card, Rank, Suit};
use crate::deck::DeckRef;

/// One card of every suit and traditional rank, 52 in all.
#[must_use]
pub fn standard(deck: Option<&DeckRef>) -> Vec<Card> {
    from_ranks(deck, &Rank::TRADITIONAL, 1)
}

/// Two cards of every suit and pinochle rank, 48 in all.
#[must_use]
pub fn pinochle(deck: Option<&DeckRef>) -> Vec<Card> {
    from_ranks(deck, &Rank::PINOCHLE, 2)
}

/// Builds `copies` cards of each suit and rank, suits outermost.
#[must_use]
pub fn from_ranks(deck: Option<&DeckRef>, ranks: &[Rank], copies: usize) -> Vec<Card> {
    let mut cards = Vec::with_capacity(Suit::ALL.len() * ranks.len() * copies);

    for suit in Suit::ALL {
        for &rank in ranks {
            for _ in 0..copies {
                cards.push(match deck {
                    Some(deck) => Card::for_deck(suit, rank, deck),
                    None => Card::new(suit, rank),
                });
            }
        }
    }

    cards
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{DECK_SIZE, PINOCHLE_DECK_SIZE};

    #[test]
    fn standard_has_thirteen_per_suit() {
        let cards = standard(None);
        assert_eq!(cards.len(), DECK_SIZE);

        for suit in Suit::ALL {
            assert_eq!(cards.iter().filter(|c| c.suit() == suit).count(), 13);
        }
        assert!(cards.iter().all(|c| c.deck().is_none()));
    }

    #[test]
    fn pinochle_doubles_each_card() {
        let cards = pinochle(None);
        assert_eq!(cards.len(), PINOCHLE_DECK_SIZE);

        for rank in Rank::PINOCHLE {
            assert_eq!(cards.iter().filter(|c| c.rank() == rank).count(), 8);
        }
        assert_ne!(cards[0], cards[1]);
        assert_eq!(cards[0].name(), cards[1].name());
    }
}
