//! Move selection for the computer opponent.
//!
//! The policy only picks a move. Applying it, and deciding how often to ask,
//! belong to the caller.

use alloc::vec::Vec;
use core::cmp::Reverse;
use core::time::Duration;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::card::Card;
use crate::rules::{Move, legal_moves};
use crate::table::{CENTER_PILES, Player, Table};

/// Plies searched when `Hard` looks for the longest run of follow-up plays.
const LOOKAHEAD_DEPTH: usize = 4;

/// How well the computer plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// Any legal move, uniformly at random.
    Easy,
    /// The first legal move found scanning the hand left to right.
    #[default]
    Medium,
    /// The move that clears the hand fastest, then the one leaving the most
    /// follow-up plays.
    Hard,
}

impl Difficulty {
    /// A delay between computer moves that suits this difficulty.
    ///
    /// Purely advisory; see [`crate::GameOptions::ai_interval`].
    #[must_use]
    pub const fn suggested_interval(self) -> Duration {
        match self {
            Self::Easy => Duration::from_millis(4000),
            Self::Medium => Duration::from_millis(2000),
            Self::Hard => Duration::from_millis(1000),
        }
    }
}

/// Picks the computer's next move, or `None` if it has no legal move.
///
/// `rng` is only consulted to break ties (`Easy` treats every move as tied).
pub fn choose_move<R: Rng + ?Sized>(
    table: &Table,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Move> {
    let moves = legal_moves(table, Player::Ai);
    let choice = match difficulty {
        Difficulty::Easy => moves.choose(rng).copied(),
        Difficulty::Medium => moves.first().copied(),
        Difficulty::Hard => choose_hard(table, &moves, rng),
    };
    log::trace!(
        "{difficulty:?} picked {choice:?} from {} legal moves",
        moves.len()
    );
    choice
}

/// Ordering key for `Hard`; larger is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Score {
    cards_left: Reverse<usize>,
    follow_ups: usize,
}

fn choose_hard<R: Rng + ?Sized>(table: &Table, moves: &[Move], rng: &mut R) -> Option<Move> {
    let hand = table.hand(Player::Ai).cards();
    let tops = table.center_tops();

    let scored: Vec<(Score, Move)> = moves
        .iter()
        .map(|&mv| (score(hand, tops, mv), mv))
        .collect();
    let best = scored.iter().map(|&(score, _)| score).max()?;
    let tied: Vec<Move> = scored
        .into_iter()
        .filter(|&(score, _)| score == best)
        .map(|(_, mv)| mv)
        .collect();

    tied.choose(rng).copied()
}

fn score(hand: &[Card], tops: [Option<Card>; CENTER_PILES], mv: Move) -> Score {
    let mut rest: Vec<Card> = hand.iter().copied().filter(|&c| c != mv.card).collect();
    let mut next = tops;
    next[mv.center] = Some(mv.card);

    let follow_ups = rest
        .iter()
        .map(|&card| next.iter().filter(|&&top| fits(card, top)).count())
        .sum();
    let chain = longest_chain(&mut rest, next, LOOKAHEAD_DEPTH);

    Score {
        cards_left: Reverse(rest.len() - chain),
        follow_ups,
    }
}

fn fits(card: Card, top: Option<Card>) -> bool {
    top.is_none_or(|top| card.is_adjacent_to(&top))
}

/// Longest sequence of consecutive plays from `hand`, searching `depth` plies.
///
/// `hand` is restored before returning.
fn longest_chain(hand: &mut Vec<Card>, tops: [Option<Card>; CENTER_PILES], depth: usize) -> usize {
    if depth == 0 {
        return 0;
    }

    let mut best = 0;
    for i in 0..hand.len() {
        for center in 0..CENTER_PILES {
            if !fits(hand[i], tops[center]) {
                continue;
            }

            let card = hand.swap_remove(i);
            let mut next = tops;
            next[center] = Some(card);
            best = best.max(1 + longest_chain(hand, next, depth - 1));
            hand.push(card);
            let last = hand.len() - 1;
            hand.swap(i, last);

            if best == hand.len() {
                return best;
            }
        }
    }
    best
}
