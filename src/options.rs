//! Deck configuration options.

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::DeckRef;
use crate::generate;
use crate::values::{self, ValueTable};

/// A card generation function.
///
/// Receives the handle of the deck under construction (or `None` when used
/// on its own) and returns the deck's initial cards, top card first.
pub type Generator = fn(Option<&DeckRef>) -> Vec<Card>;

/// What [`Deck::reset_with`](crate::Deck::reset_with) does after drawn cards
/// are recombined with the live ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResetMode {
    /// Shuffle the deck.
    #[default]
    Shuffle,
    /// Sort the deck.
    Sort,
    /// Leave drawn cards appended after the live ones.
    Keep,
}

/// Configuration for a deck variant: how its cards are generated and which
/// value table ranks them.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use decks::{DeckOptions, Rank, generate, values};
///
/// let options = DeckOptions::default()
///     .with_generator(generate::pinochle)
///     .with_values(values::ACE_LOW);
/// assert_eq!(options.values.unwrap().get(Rank::Ace), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct DeckOptions {
    /// Generates the initial cards.
    pub generate: Generator,
    /// Value table for the deck.
    ///
    /// `None` snapshots [`Deck::default_values`](crate::Deck::default_values)
    /// when the deck is built.
    pub values: Option<ValueTable>,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            generate: generate::standard,
            values: None,
        }
    }
}

impl DeckOptions {
    /// A traditional 52-card deck valued by the class-wide deck default.
    #[must_use]
    pub fn traditional() -> Self {
        Self::default()
    }

    /// A 48-card pinochle deck valued by [`values::PINOCHLE`].
    ///
    /// # Example
    ///
    /// ```
    /// use decks::{Deck, DeckOptions, PINOCHLE_DECK_SIZE};
    ///
    /// let deck = Deck::new(DeckOptions::pinochle(), 7);
    /// assert_eq!(deck.size(), PINOCHLE_DECK_SIZE);
    /// ```
    #[must_use]
    pub const fn pinochle() -> Self {
        Self {
            generate: generate::pinochle,
            values: Some(values::PINOCHLE),
        }
    }

    /// Sets the card generator.
    ///
    /// # Example
    ///
    /// ```
    /// use decks::{Deck, DeckOptions, generate};
    ///
    /// let deck = Deck::new(DeckOptions::default().with_generator(generate::pinochle), 1);
    /// assert_eq!(deck.remaining(), 48);
    /// ```
    #[must_use]
    pub fn with_generator(mut self, generate: Generator) -> Self {
        self.generate = generate;
        self
    }

    /// Sets the value table.
    ///
    /// # Example
    ///
    /// ```
    /// use decks::{Deck, DeckOptions, values};
    ///
    /// let deck = Deck::new(DeckOptions::default().with_values(values::ACE_LOW), 1);
    /// assert_eq!(deck.values(), values::ACE_LOW);
    /// ```
    #[must_use]
    pub fn with_values(mut self, values: ValueTable) -> Self {
        self.values = Some(values);
        self
    }
}
