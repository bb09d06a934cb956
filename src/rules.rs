//! Pure rule predicates over a [`Table`].
//!
//! Nothing here mutates state or consults randomness.

use alloc::vec::Vec;

use crate::card::Card;
use crate::result::Outcome;
use crate::table::{CENTER_PILES, Player, Table};

/// A card played onto a center pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// The card leaving the hand.
    pub card: Card,
    /// The center pile it lands on.
    pub center: usize,
}

/// Returns whether `card` may be played on center pile `center`.
///
/// The card must be one rank away from the pile's top card, with King and Ace
/// adjacent. An empty center pile accepts anything.
#[must_use]
pub fn is_legal_move(table: &Table, card: Card, center: usize) -> bool {
    table
        .center(center)
        .is_some_and(|pile| pile.top().is_none_or(|top| card.is_adjacent_to(&top)))
}

/// Returns whether any card in the player's hand can be played.
#[must_use]
pub fn has_legal_move(table: &Table, player: Player) -> bool {
    table
        .hand(player)
        .cards()
        .iter()
        .any(|&card| (0..CENTER_PILES).any(|center| is_legal_move(table, card, center)))
}

/// Lists the player's legal moves in hand order, center 0 before center 1.
#[must_use]
pub fn legal_moves(table: &Table, player: Player) -> Vec<Move> {
    table
        .hand(player)
        .cards()
        .iter()
        .flat_map(|&card| (0..CENTER_PILES).map(move |center| Move { card, center }))
        .filter(|mv| is_legal_move(table, mv.card, mv.center))
        .collect()
}

/// Returns whether neither player can move while at least one still holds
/// cards. This is the trigger for the reshuffle.
#[must_use]
pub fn both_stuck(table: &Table) -> bool {
    let cards_in_hand = Player::BOTH
        .iter()
        .any(|&player| !table.hand(player).is_empty());
    cards_in_hand
        && !Player::BOTH
            .iter()
            .any(|&player| has_legal_move(table, player))
}

/// Returns the outcome if a player has run out of cards.
///
/// A player is out once both hand and draw pile are empty. If both players are
/// out at once, the game is a tie.
#[must_use]
pub fn is_terminal(table: &Table) -> Option<Outcome> {
    match (table.is_out(Player::Human), table.is_out(Player::Ai)) {
        (true, true) => Some(Outcome::Tie),
        (true, false) => Some(Outcome::Win(Player::Human)),
        (false, true) => Some(Outcome::Win(Player::Ai)),
        (false, false) => None,
    }
}
