//! Outcome and per-operation result types.

use crate::card::Card;
use crate::game::Status;
use crate::table::Player;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// This player emptied hand and draw pile first.
    Win(Player),
    /// Both players ran out together, or neither can ever move again.
    Tie,
}

/// What an accepted move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// The card played.
    pub card: Card,
    /// The center pile it was played on.
    pub center: usize,
    /// The card drawn to refill an emptied hand, if any.
    pub auto_drawn: Option<Card>,
    /// Game status after the move.
    pub status: Status,
}

/// What the computer did on one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiTick {
    /// Played a card.
    Played(MoveResult),
    /// Drew a card into its hand.
    Drew(Card),
    /// Had nothing to do.
    Idle,
}
