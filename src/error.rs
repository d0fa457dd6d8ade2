//! Error types for card operations.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use thiserror::Error;

use crate::card::Rank;

/// Errors that can occur while resolving a card's value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// Neither the deck's table nor the class-wide default lists the rank.
    #[error("no value found for {card}; valid ranks: {valid_ranks}")]
    Missing {
        /// Name of the card, e.g. `"Ace of Spades"`.
        card: String,
        /// Ranks listed by the table that was consulted, in declared order.
        valid_ranks: RankList,
    },
}

/// An ordered list of ranks, displayed comma-separated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RankList(pub Vec<Rank>);

impl fmt::Display for RankList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, rank) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{rank}")?;
        }
        Ok(())
    }
}

impl FromIterator<Rank> for RankList {
    fn from_iter<I: IntoIterator<Item = Rank>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
