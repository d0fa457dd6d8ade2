//! Card types: suits, ranks and card handles.

use alloc::string::String;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::sync::atomic::{AtomicUsize, Ordering};

use tracing::debug;

use crate::deck::DeckRef;
use crate::error::{RankList, ValueError};
use crate::sync::Mutex;
use crate::values::{self, ValueTable};

/// Card suit.
///
/// Variants are declared in canonical sort order, so the derived [`Ord`]
/// is the order [`Deck::sort`](crate::Deck::sort) groups suits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// Every suit, in canonical order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the suit's display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Card rank.
///
/// Ranks carry no ordering of their own; strength comes from a
/// [`ValueTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Ace.
    Ace,
    /// 2.
    Two,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// The thirteen ranks of a traditional deck.
    pub const TRADITIONAL: [Self; 13] = [
        Self::Ace,
        Self::King,
        Self::Queen,
        Self::Jack,
        Self::Ten,
        Self::Nine,
        Self::Eight,
        Self::Seven,
        Self::Six,
        Self::Five,
        Self::Four,
        Self::Three,
        Self::Two,
    ];

    /// The six ranks used by pinochle.
    pub const PINOCHLE: [Self; 6] = [
        Self::Ace,
        Self::King,
        Self::Queen,
        Self::Jack,
        Self::Ten,
        Self::Nine,
    ];

    /// Returns the rank's display name (`"Ace"`, `"10"`, `"King"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Next card identity to hand out.
static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// Class-wide fallback table consulted by [`Card::value`].
static DEFAULT_VALUES: Mutex<ValueTable> = Mutex::new(values::ACE_HIGH);

/// A playing card.
///
/// A `Card` is a handle: clones share the same identity, and equality and
/// hashing only look at that identity. Two cards with the same suit and rank
/// built separately are different cards.
///
/// A card may remember the deck that generated it. That link is weak and
/// is used for value lookup and [`Card::return_to_deck`] only.
#[derive(Clone)]
pub struct Card {
    id: usize,
    suit: Suit,
    rank: Rank,
    deck: Option<DeckRef>,
}

impl Card {
    /// Creates a card that belongs to no deck.
    #[must_use]
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self::build(suit, rank, None)
    }

    /// Creates a card that belongs to `deck`.
    #[must_use]
    pub fn for_deck(suit: Suit, rank: Rank, deck: &DeckRef) -> Self {
        Self::build(suit, rank, Some(deck.clone()))
    }

    fn build(suit: Suit, rank: Rank, deck: Option<DeckRef>) -> Self {
        Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            suit,
            rank,
            deck,
        }
    }

    /// Returns the card's identity.
    #[must_use]
    pub const fn id(&self) -> usize {
        self.id
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the handle of the deck that generated this card, if any.
    #[must_use]
    pub const fn deck(&self) -> Option<&DeckRef> {
        self.deck.as_ref()
    }

    /// Returns the card's name, e.g. `"Ace of Spades"` or `"10 of Clubs"`.
    #[must_use]
    pub fn name(&self) -> String {
        alloc::format!("{} of {}", self.rank, self.suit)
    }

    /// Resolves the card's numeric value.
    ///
    /// The owning deck's table is consulted first. A rank it does not list,
    /// or a card with no (live) deck, falls back to the class-wide table
    /// returned by [`Card::default_values`].
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::Missing`] if neither table lists the rank. The
    /// error lists the ranks of the deck's table when the card has a deck,
    /// otherwise those of the class-wide table.
    pub fn value(&self) -> Result<u8, ValueError> {
        let from_deck = self
            .deck
            .as_ref()
            .and_then(|deck| deck.with_state(|state| state.values.get(self.rank)));

        if let Some(Some(value)) = from_deck {
            return Ok(value);
        }

        let fallback = DEFAULT_VALUES.lock().get(self.rank);
        if let Some(value) = fallback {
            return Ok(value);
        }

        let deck_values = match from_deck {
            Some(None) => self
                .deck
                .as_ref()
                .and_then(|deck| deck.with_state(|state| state.values.clone())),
            _ => None,
        };
        let consulted = deck_values.unwrap_or_else(Self::default_values);

        debug!(card = %self, "no value for rank");
        Err(ValueError::Missing {
            card: self.name(),
            valid_ranks: consulted.ranks().collect::<RankList>(),
        })
    }

    /// Adds the card back to its deck's live cards.
    ///
    /// Does nothing if the card has no deck or the deck has been dropped.
    pub fn return_to_deck(&self) {
        if let Some(deck) = &self.deck {
            deck.with_state(|state| state.add(self.clone()));
        }
    }

    /// Returns a copy of the class-wide fallback value table.
    #[must_use]
    pub fn default_values() -> ValueTable {
        DEFAULT_VALUES.lock().clone()
    }

    /// Replaces the class-wide fallback value table.
    ///
    /// Every card that falls through to the default sees the new table
    /// immediately.
    pub fn set_default_values(values: ValueTable) {
        *DEFAULT_VALUES.lock() = values;
    }

    /// Restores the class-wide fallback table to [`values::ACE_HIGH`].
    pub fn reset_default_values() {
        Self::set_default_values(values::ACE_HIGH);
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Card")
            .field("id", &self.id)
            .field("suit", &self.suit)
            .field("rank", &self.rank)
            .field("deck", &self.deck)
            .finish()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Number of cards in a traditional deck.
pub const DECK_SIZE: usize = 52;

/// Number of cards in a pinochle deck.
pub const PINOCHLE_DECK_SIZE: usize = 48;
