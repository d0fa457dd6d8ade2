//! Rank value tables.
//!
//! A [`ValueTable`] maps ranks to numeric strength for one game variant.
//! Tables keep the order their entries were declared in and may leave ranks
//! out entirely.

use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::card::Rank;

/// An ordered, possibly partial mapping from rank to value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValueTable {
    entries: Cow<'static, [(Rank, u8)]>,
}

impl ValueTable {
    /// Creates a table over static entries without copying them.
    ///
    /// Entries should not repeat a rank; lookups return the first match.
    #[must_use]
    pub const fn from_static(entries: &'static [(Rank, u8)]) -> Self {
        Self {
            entries: Cow::Borrowed(entries),
        }
    }

    /// Creates an empty table.
    #[must_use]
    pub const fn empty() -> Self {
        Self::from_static(&[])
    }

    /// Returns the value assigned to `rank`.
    #[must_use]
    pub fn get(&self, rank: Rank) -> Option<u8> {
        self.entries
            .iter()
            .find_map(|&(r, value)| (r == rank).then_some(value))
    }

    /// Returns whether the table assigns a value to `rank`.
    #[must_use]
    pub fn contains(&self, rank: Rank) -> bool {
        self.get(rank).is_some()
    }

    /// Sets the value of `rank`, returning the previous one.
    ///
    /// An existing rank keeps its position; a new rank is appended.
    pub fn insert(&mut self, rank: Rank, value: u8) -> Option<u8> {
        let entries = self.entries.to_mut();
        if let Some(entry) = entries.iter_mut().find(|(r, _)| *r == rank) {
            return Some(core::mem::replace(&mut entry.1, value));
        }
        entries.push((rank, value));
        None
    }

    /// Removes `rank` from the table, returning its value.
    pub fn remove(&mut self, rank: Rank) -> Option<u8> {
        let index = self.entries.iter().position(|(r, _)| *r == rank)?;
        Some(self.entries.to_mut().remove(index).1)
    }

    /// Iterates over the ranks in declared order.
    pub fn ranks(&self) -> impl Iterator<Item = Rank> + '_ {
        self.entries.iter().map(|&(rank, _)| rank)
    }

    /// Iterates over `(rank, value)` pairs in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (Rank, u8)> + '_ {
        self.entries.iter().copied()
    }

    /// Returns the number of ranks in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(Rank, u8)> for ValueTable {
    fn from_iter<I: IntoIterator<Item = (Rank, u8)>>(iter: I) -> Self {
        let mut table = Self {
            entries: Cow::Owned(Vec::new()),
        };
        for (rank, value) in iter {
            table.insert(rank, value);
        }
        table
    }
}

/// Aces above kings.
pub const ACE_HIGH: ValueTable = ValueTable::from_static(&[
    (Rank::Ace, 14),
    (Rank::King, 13),
    (Rank::Queen, 12),
    (Rank::Jack, 11),
    (Rank::Ten, 10),
    (Rank::Nine, 9),
    (Rank::Eight, 8),
    (Rank::Seven, 7),
    (Rank::Six, 6),
    (Rank::Five, 5),
    (Rank::Four, 4),
    (Rank::Three, 3),
    (Rank::Two, 2),
]);

/// Aces below twos.
pub const ACE_LOW: ValueTable = ValueTable::from_static(&[
    (Rank::King, 13),
    (Rank::Queen, 12),
    (Rank::Jack, 11),
    (Rank::Ten, 10),
    (Rank::Nine, 9),
    (Rank::Eight, 8),
    (Rank::Seven, 7),
    (Rank::Six, 6),
    (Rank::Five, 5),
    (Rank::Four, 4),
    (Rank::Three, 3),
    (Rank::Two, 2),
    (Rank::Ace, 1),
]);

/// Pinochle ranking: ten sits between ace and king.
pub const PINOCHLE: ValueTable = ValueTable::from_static(&[
    (Rank::Ace, 14),
    (Rank::Ten, 13),
    (Rank::King, 12),
    (Rank::Queen, 11),
    (Rank::Jack, 10),
    (Rank::Nine, 9),
]);
