//! Card conservation checks.
//!
//! A correct engine never trips these. They guard deck construction, dealing,
//! and the reshuffle, which are the only places cards are regrouped in bulk.

use crate::card::{Card, DECK_SIZE};
use crate::error::InvariantViolation;
use crate::table::{CENTER_PILES, Table};

/// Checks that `cards` is exactly one deck: 52 cards, valid ranks, no repeats.
///
/// # Errors
///
/// Returns the first violation found.
pub fn check_cards<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Result<(), InvariantViolation> {
    let mut seen = [false; DECK_SIZE];
    let mut found = 0;

    for card in cards {
        let index = card
            .index()
            .ok_or(InvariantViolation::InvalidRank(card.rank))?;
        if seen[index] {
            return Err(InvariantViolation::DuplicateCard(*card));
        }
        seen[index] = true;
        found += 1;
    }

    if found == DECK_SIZE {
        Ok(())
    } else {
        Err(InvariantViolation::CardCount {
            expected: DECK_SIZE,
            found,
        })
    }
}

/// Checks that a table holds one full deck and both center piles show a card.
///
/// # Errors
///
/// Returns the first violation found.
pub fn check_table(table: &Table) -> Result<(), InvariantViolation> {
    for index in 0..CENTER_PILES {
        if table.center(index).is_none_or(|pile| pile.is_empty()) {
            return Err(InvariantViolation::EmptyCenter(index));
        }
    }

    check_cards(table.piles().flat_map(|(_, pile)| pile.cards()))
}
