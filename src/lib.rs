//! Playing-card decks, cards and hands with optional `no_std` support.
//!
//! The crate provides a [`Deck`] type that tracks live and drawn cards,
//! [`Card`] handles that resolve their value through their deck's
//! [`ValueTable`], and [`Hand`] groups that can return cards to their deck.
//!
//! # Example
//!
//! ```
//! use decks::{Deck, Hand};
//!
//! let deck = Deck::standard(42);
//! deck.shuffle();
//!
//! let mut hand = Hand::from_cards(deck.draw_many(5));
//! assert_eq!(deck.remaining(), 47);
//!
//! hand.return_all_to_deck();
//! assert_eq!(deck.remaining(), 52);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod generate;
pub mod hand;
pub mod options;
mod sync;
pub mod values;

// Re-export main types
pub use card::{Card, DECK_SIZE, PINOCHLE_DECK_SIZE, Rank, Suit};
pub use deck::{Deck, DeckRef};
pub use error::{RankList, ValueError};
pub use hand::Hand;
pub use options::{DeckOptions, Generator, ResetMode};
pub use values::ValueTable;
