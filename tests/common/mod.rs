//! Helpers for arranging exact positions over a full deck.

use speedrs::{Card, Deck, Game, GameOptions, Suit, Table};

pub const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Builds a game where the hands and center tops are exactly as given.
///
/// Every other card, in ordered-deck order, fills the human draw pile, then the
/// computer draw pile (`draw_sizes` cards each), and whatever is left is split
/// beneath the two center tops.
pub fn arrange(
    options: GameOptions,
    human_hand: &[Card],
    ai_hand: &[Card],
    tops: [Card; 2],
    draw_sizes: [usize; 2],
) -> Game {
    let placed: Vec<Card> = human_hand
        .iter()
        .chain(ai_hand)
        .chain(&tops)
        .copied()
        .collect();
    let mut rest: Vec<Card> = Deck::ordered()
        .cards()
        .iter()
        .copied()
        .filter(|card| !placed.contains(card))
        .collect();

    let human_draw: Vec<Card> = rest.drain(..draw_sizes[0]).collect();
    let ai_draw: Vec<Card> = rest.drain(..draw_sizes[1]).collect();
    let mut center_zero: Vec<Card> = rest.drain(..rest.len().div_ceil(2)).collect();
    let mut center_one = rest;
    center_zero.push(tops[0]);
    center_one.push(tops[1]);

    let table = Table::from_piles(
        [human_draw, ai_draw],
        [human_hand.to_vec(), ai_hand.to_vec()],
        [center_zero, center_one],
    );
    Game::with_table(table, options, 1).unwrap()
}
