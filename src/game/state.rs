//! Game phase and status types.

use crate::result::Outcome;
use crate::table::Player;

/// Where the game is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Moves are being accepted.
    AwaitingMove,
    /// Neither player can move; a reshuffle is needed.
    Stuck,
    /// The game has ended. No further moves are accepted.
    Terminal(Outcome),
}

/// Game status as reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Play continues.
    InProgress,
    /// Both players are stuck and the center piles must be reshuffled.
    Stuck,
    /// A player has won.
    Win(Player),
    /// The game ended in a tie.
    Tie,
}

impl From<Phase> for Status {
    fn from(phase: Phase) -> Self {
        match phase {
            Phase::AwaitingMove => Self::InProgress,
            Phase::Stuck => Self::Stuck,
            Phase::Terminal(Outcome::Win(player)) => Self::Win(player),
            Phase::Terminal(Outcome::Tie) => Self::Tie,
        }
    }
}

impl Status {
    /// Returns whether the game has ended.
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Win(_) | Self::Tie)
    }
}
