//! Deck of live and drawn cards.

use alloc::sync::{Arc, Weak};
use alloc::vec::{self, Vec};
use core::fmt;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::card::Card;
use crate::options::{DeckOptions, ResetMode};
use crate::sync::{Mutex, MutexGuard};
use crate::values::{self, ValueTable};

/// Class-wide value table snapshotted by new decks.
static DEFAULT_VALUES: Mutex<ValueTable> = Mutex::new(values::ACE_HIGH);

/// Mutable deck state, shared between a [`Deck`] and the weak handles its
/// cards hold.
///
/// `cards` and `drawn` are disjoint and neither holds a card twice.
pub(crate) struct DeckState {
    cards: Vec<Card>,
    drawn: Vec<Card>,
    pub(crate) values: ValueTable,
    rng: ChaCha8Rng,
}

impl DeckState {
    /// Appends `card` to the live cards unless it is already there.
    ///
    /// A card waiting in `drawn` is moved back rather than duplicated.
    pub(crate) fn add(&mut self, card: Card) -> bool {
        if let Some(index) = self.drawn.iter().position(|c| *c == card) {
            self.drawn.remove(index);
        }
        if self.cards.contains(&card) {
            trace!(card = %card, "card already live");
            return false;
        }
        trace!(card = %card, "card added");
        self.cards.push(card);
        true
    }

    fn pick(&mut self, card: &Card) -> Option<Card> {
        let index = self.cards.iter().position(|c| c == card)?;
        let picked = self.cards.remove(index);
        if !self.drawn.contains(&picked) {
            self.drawn.push(picked.clone());
        }
        trace!(card = %picked, "card picked");
        Some(picked)
    }

    fn draw_many(&mut self, n: usize) -> Vec<Card> {
        let count = n.min(self.cards.len());
        let drawn: Vec<Card> = self.cards.drain(..count).collect();
        self.drawn.extend(drawn.iter().cloned());
        trace!(count, remaining = self.cards.len(), "cards drawn");
        drawn
    }

    fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Sorts by suit, then by this deck's values, falling back to `fallback`
    /// for unlisted ranks. Ranks listed in neither sort last within a suit.
    fn sort(&mut self, fallback: &ValueTable) {
        let values = &self.values;
        self.cards.sort_by_key(|card| {
            let value = values
                .get(card.rank())
                .or_else(|| fallback.get(card.rank()))
                .map_or(u16::MAX, u16::from);
            (card.suit(), value)
        });
    }

    fn recombine(&mut self) -> usize {
        let drawn = core::mem::take(&mut self.drawn);
        let count = drawn.len();
        for card in drawn {
            if !self.cards.contains(&card) {
                self.cards.push(card);
            }
        }
        count
    }
}

/// Weak handle from a card back to the deck that generated it.
///
/// Holding a `DeckRef` never keeps a deck alive.
#[derive(Clone)]
pub struct DeckRef(Weak<Mutex<DeckState>>);

impl DeckRef {
    /// Returns whether the deck still exists.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.0.strong_count() > 0
    }

    /// Runs `f` against the deck state, or returns `None` if the deck is gone.
    pub(crate) fn with_state<T>(&self, f: impl FnOnce(&mut DeckState) -> T) -> Option<T> {
        let state = self.0.upgrade()?;
        let result = f(&mut state.lock());
        Some(result)
    }
}

impl PartialEq for DeckRef {
    fn eq(&self, other: &Self) -> bool {
        Weak::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for DeckRef {}

impl fmt::Debug for DeckRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeckRef")
            .field("alive", &self.is_alive())
            .finish()
    }
}

/// A deck of playing cards.
///
/// The deck keeps an ordered list of live cards, top card first, and the
/// cards drawn out of it. Drawing and picking move cards from the live list
/// to the drawn list; [`Deck::reset`] moves them back.
///
/// # Example
///
/// ```
/// use decks::{DECK_SIZE, Deck};
///
/// let deck = Deck::standard(42);
/// let hand = deck.draw_many(3);
/// assert_eq!(hand.len(), 3);
/// assert_eq!(deck.remaining(), DECK_SIZE - 3);
///
/// deck.reset();
/// assert_eq!(deck.remaining(), DECK_SIZE);
/// ```
pub struct Deck {
    state: Arc<Mutex<DeckState>>,
}

impl Deck {
    /// Creates a deck from `options`, seeding its shuffle RNG with `seed`.
    #[must_use]
    pub fn new(options: DeckOptions, seed: u64) -> Self {
        let generate = options.generate;
        Self::from_generator(|deck| generate(Some(deck)), options.values, seed)
    }

    /// Creates a traditional 52-card deck in generation order.
    #[must_use]
    pub fn standard(seed: u64) -> Self {
        Self::new(DeckOptions::traditional(), seed)
    }

    /// Creates a 48-card pinochle deck in generation order.
    #[must_use]
    pub fn pinochle(seed: u64) -> Self {
        Self::new(DeckOptions::pinochle(), seed)
    }

    /// Creates a deck whose cards come from `generate`.
    ///
    /// `generate` receives the new deck's handle so it can build cards that
    /// point back to it. Repeated cards are kept once. With `values` set to
    /// `None` the deck snapshots [`Deck::default_values`].
    pub fn from_generator<F>(generate: F, values: Option<ValueTable>, seed: u64) -> Self
    where
        F: FnOnce(&DeckRef) -> Vec<Card>,
    {
        let state = Arc::new(Mutex::new(DeckState {
            cards: Vec::new(),
            drawn: Vec::new(),
            values: values.unwrap_or_else(Self::default_values),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }));
        let handle = DeckRef(Arc::downgrade(&state));

        let cards = generate(&handle);
        {
            let mut state = state.lock();
            for card in cards {
                state.add(card);
            }
            debug!(cards = state.cards.len(), seed, "deck generated");
        }

        Self { state }
    }

    fn lock(&self) -> MutexGuard<'_, DeckState> {
        self.state.lock()
    }

    /// Returns the handle cards use to refer back to this deck.
    #[must_use]
    pub fn handle(&self) -> DeckRef {
        DeckRef(Arc::downgrade(&self.state))
    }

    /// Shuffles the live cards with the deck's RNG.
    ///
    /// Drawn cards are untouched.
    pub fn shuffle(&self) {
        self.lock().shuffle();
    }

    /// Shuffles the live cards with a caller-supplied RNG.
    pub fn shuffle_with<R: Rng + ?Sized>(&self, rng: &mut R) {
        self.lock().cards.shuffle(rng);
    }

    /// Restarts the deck's RNG from `seed`.
    pub fn reseed(&self, seed: u64) {
        self.lock().rng = ChaCha8Rng::seed_from_u64(seed);
    }

    /// Sorts the live cards by suit, then by ascending value.
    ///
    /// Values come from this deck's table, falling back to
    /// [`Card::default_values`] for ranks it omits.
    pub fn sort(&self) {
        let fallback = Card::default_values();
        self.lock().sort(&fallback);
    }

    /// Adds a card to the bottom of the deck.
    ///
    /// Returns `false` if the card was already live. A card that had been
    /// drawn from this deck leaves the drawn list.
    pub fn add(&self, card: Card) -> bool {
        self.lock().add(card)
    }

    /// Adds each card in turn, as repeated [`Deck::add`] calls would.
    ///
    /// The deck is not locked while `cards` is iterated, so the iterator may
    /// itself look at this deck or its cards.
    pub fn add_many<I: IntoIterator<Item = Card>>(&self, cards: I) {
        for card in cards {
            self.add(card);
        }
    }

    /// Draws the top card, or `None` if the deck is empty.
    #[must_use = "a drawn card leaves the deck"]
    pub fn draw(&self) -> Option<Card> {
        self.lock().draw_many(1).pop()
    }

    /// Draws up to `n` cards from the top.
    ///
    /// Returns fewer than `n` cards when fewer remain.
    #[must_use = "drawn cards leave the deck"]
    pub fn draw_many(&self, n: usize) -> Vec<Card> {
        self.lock().draw_many(n)
    }

    /// Returns the top card without drawing it.
    #[must_use]
    pub fn peek(&self) -> Option<Card> {
        self.lock().cards.first().cloned()
    }

    /// Returns up to `n` cards from the top without drawing them.
    #[must_use]
    pub fn peek_many(&self, n: usize) -> Vec<Card> {
        let state = self.lock();
        state.cards.iter().take(n).cloned().collect()
    }

    /// Removes `card` from the live cards and marks it drawn.
    ///
    /// Returns `None` and changes nothing if the card is not live.
    pub fn pick(&self, card: &Card) -> Option<Card> {
        self.lock().pick(card)
    }

    /// Picks each of `cards`, returning those that were live in request
    /// order.
    pub fn pick_many(&self, cards: &[Card]) -> Vec<Card> {
        let mut state = self.lock();
        cards.iter().filter_map(|card| state.pick(card)).collect()
    }

    /// Recombines the drawn cards with the live ones and shuffles.
    pub fn reset(&self) {
        self.reset_with(ResetMode::default());
    }

    /// Recombines the drawn cards with the live ones, then applies `mode`.
    pub fn reset_with(&self, mode: ResetMode) {
        let fallback = Card::default_values();
        let mut state = self.lock();
        let recombined = state.recombine();

        match mode {
            ResetMode::Shuffle => state.shuffle(),
            ResetMode::Sort => state.sort(&fallback),
            ResetMode::Keep => {}
        }

        debug!(?mode, recombined, cards = state.cards.len(), "deck reset");
    }

    /// Returns a copy of the live cards, top first.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.lock().cards.clone()
    }

    /// Returns a copy of the drawn cards, in draw order.
    #[must_use]
    pub fn drawn_cards(&self) -> Vec<Card> {
        self.lock().drawn.clone()
    }

    /// Returns whether `card` is live in this deck.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.lock().cards.contains(card)
    }

    /// Returns the total number of live and drawn cards.
    #[must_use]
    pub fn size(&self) -> usize {
        let state = self.lock();
        state.cards.len() + state.drawn.len()
    }

    /// Returns the number of live cards.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.lock().cards.len()
    }

    /// Returns whether no live cards remain. Drawn cards do not count.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns whether live cards remain.
    #[must_use]
    pub fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Iterates over the live cards, top first.
    ///
    /// The live cards are copied when this is called, so later changes to
    /// the deck do not show up in the iterator. Iterating draws nothing;
    /// call again to start over.
    #[must_use]
    pub fn iter(&self) -> vec::IntoIter<Card> {
        self.cards().into_iter()
    }

    /// Returns a copy of this deck's value table.
    #[must_use]
    pub fn values(&self) -> ValueTable {
        self.lock().values.clone()
    }

    /// Replaces this deck's value table.
    pub fn set_values(&self, values: ValueTable) {
        self.lock().values = values;
    }

    /// Replaces this deck's value table with the current class-wide default.
    pub fn reset_values(&self) {
        self.set_values(Self::default_values());
    }

    /// Returns a copy of the class-wide table new decks start with.
    #[must_use]
    pub fn default_values() -> ValueTable {
        DEFAULT_VALUES.lock().clone()
    }

    /// Replaces the class-wide table new decks start with.
    ///
    /// Existing decks keep their own tables.
    pub fn set_default_values(values: ValueTable) {
        *DEFAULT_VALUES.lock() = values;
    }

    /// Restores the class-wide deck table to [`values::ACE_HIGH`].
    pub fn reset_default_values() {
        Self::set_default_values(values::ACE_HIGH);
    }
}

impl IntoIterator for &Deck {
    type Item = Card;
    type IntoIter = vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("Deck")
            .field("cards", &state.cards)
            .field("drawn", &state.drawn)
            .field("values", &state.values)
            .finish_non_exhaustive()
    }
}
