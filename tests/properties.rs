//! Property tests for deck invariants.

use std::collections::HashSet;

use decks::{Card, DECK_SIZE, Deck, ResetMode};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Shuffle,
    Sort,
    Draw,
    DrawMany(usize),
    Pick(usize),
    PickMany(Vec<usize>),
    Reset(ResetMode),
    Return(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Shuffle),
        Just(Op::Sort),
        Just(Op::Draw),
        (0..60usize).prop_map(Op::DrawMany),
        (0..DECK_SIZE).prop_map(Op::Pick),
        prop::collection::vec(0..DECK_SIZE, 0..8).prop_map(Op::PickMany),
        prop_oneof![
            Just(ResetMode::Shuffle),
            Just(ResetMode::Sort),
            Just(ResetMode::Keep),
        ]
        .prop_map(Op::Reset),
        (0..DECK_SIZE).prop_map(Op::Return),
    ]
}

fn apply(deck: &Deck, all: &[Card], op: &Op) {
    match op {
        Op::Shuffle => deck.shuffle(),
        Op::Sort => deck.sort(),
        Op::Draw => {
            let _ = deck.draw();
        }
        Op::DrawMany(n) => {
            let _ = deck.draw_many(*n);
        }
        Op::Pick(i) => {
            deck.pick(&all[*i]);
        }
        Op::PickMany(indices) => {
            let request: Vec<Card> = indices.iter().map(|&i| all[i].clone()).collect();
            deck.pick_many(&request);
        }
        Op::Reset(mode) => deck.reset_with(*mode),
        Op::Return(i) => all[*i].return_to_deck(),
    }
}

fn assert_invariants(deck: &Deck) {
    let live = deck.cards();
    let drawn = deck.drawn_cards();
    let live_set: HashSet<&Card> = live.iter().collect();
    let drawn_set: HashSet<&Card> = drawn.iter().collect();

    assert_eq!(live_set.len(), live.len(), "live cards repeat");
    assert_eq!(drawn_set.len(), drawn.len(), "drawn cards repeat");
    assert!(live_set.is_disjoint(&drawn_set), "live and drawn overlap");
    assert_eq!(deck.size(), DECK_SIZE);
}

proptest! {
    #[test]
    fn operations_preserve_invariants(seed in any::<u64>(), ops in prop::collection::vec(op(), 0..40)) {
        let deck = Deck::standard(seed);
        let all = deck.cards();

        for op in &ops {
            apply(&deck, &all, op);
            assert_invariants(&deck);
        }
    }

    #[test]
    fn draw_many_never_over_delivers(seed in any::<u64>(), first in 0..60usize, second in 0..60usize) {
        let deck = Deck::standard(seed);

        let a = deck.draw_many(first);
        let b = deck.draw_many(second);

        prop_assert_eq!(a.len(), first.min(DECK_SIZE));
        prop_assert_eq!(b.len(), second.min(DECK_SIZE - a.len()));
        prop_assert_eq!(deck.remaining(), DECK_SIZE - a.len() - b.len());
    }

    #[test]
    fn sort_is_idempotent(seed in any::<u64>()) {
        let deck = Deck::standard(seed);
        deck.shuffle();
        deck.sort();
        let once = deck.cards();
        deck.sort();
        prop_assert_eq!(deck.cards(), once);
    }

    #[test]
    fn shuffle_keeps_the_same_cards(seed in any::<u64>()) {
        let deck = Deck::standard(seed);
        let before: HashSet<Card> = deck.cards().into_iter().collect();
        deck.shuffle();
        let after: HashSet<Card> = deck.cards().into_iter().collect();
        prop_assert_eq!(before, after);
    }
}
