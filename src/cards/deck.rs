//! Deck construction, dealing and drawing.
//!
//! Decks and piles are `im::Vector<Card>` with the front as the "head":
//! the next card drawn from the deck, or the active card on the pile.

use im::Vector;
use rustc_hash::FxHashMap;

use super::card::{Card, Color, MAX_NUMBER, MIN_NUMBER};
use crate::core::{GameRng, Hand};

/// Number of cards in a full deck (4 colors x 9 numbers).
pub const DECK_SIZE: usize = Color::ALL.len() * MAX_NUMBER as usize;

/// Build the full deck in color-major order: R1..R9, G1..G9, Y1..Y9, B1..B9.
#[must_use]
pub fn full_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for color in Color::ALL {
        for number in MIN_NUMBER..=MAX_NUMBER {
            cards.push(Card::new(color, number));
        }
    }
    cards
}

/// Build the full deck and shuffle it with `rng`.
#[must_use]
pub fn shuffled_deck(rng: &mut GameRng) -> Vector<Card> {
    let mut cards = full_deck();
    rng.shuffle(&mut cards);
    cards.into_iter().collect()
}

/// Deal `hand_size` cards from the deck head to each hand in order, then
/// move one more card to the pile head as the opening discard.
///
/// Returns `false` without touching anything if the deck is too small.
pub fn deal(deck: &mut Vector<Card>, pile: &mut Vector<Card>, hands: &mut [&mut Hand], hand_size: usize) -> bool {
    if hands.len() * hand_size + 1 > deck.len() {
        return false;
    }

    for hand in hands.iter_mut() {
        let rest = deck.split_off(hand_size);
        hand.clear();
        hand.extend(deck.iter().copied());
        *deck = rest;
    }

    if let Some(opening) = deck.pop_front() {
        pile.push_front(opening);
    }
    true
}

/// Remove and return the card at the deck head.
pub fn draw_one(deck: &mut Vector<Card>) -> Option<Card> {
    deck.pop_front()
}

/// Count how many times each card value occurs.
pub fn card_counts<'a>(cards: impl IntoIterator<Item = &'a Card>) -> FxHashMap<Card, usize> {
    let mut counts = FxHashMap::default();
    for card in cards {
        *counts.entry(*card).or_insert(0) += 1;
    }
    counts
}
