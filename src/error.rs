//! Error types for game operations.

use thiserror::Error;

use crate::card::Card;

/// Reasons a move is refused.
///
/// A rejected move never changes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveRejected {
    /// The game has already ended.
    #[error("the game is over")]
    GameOver,
    /// The center pile index is not 0 or 1.
    #[error("center pile index out of range")]
    CenterOutOfRange,
    /// The card is not in the player's hand.
    #[error("card is not in the player's hand")]
    CardNotInHand,
    /// The card's rank is not one away from the center pile's top card.
    #[error("card is not adjacent to the center pile's top card")]
    NotAdjacent,
}

/// Errors that can occur when drawing into a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The game has already ended.
    #[error("the game is over")]
    GameOver,
    /// The hand already holds the configured number of cards.
    #[error("hand is full")]
    HandFull,
    /// No cards left in the draw pile.
    #[error("no cards left in the draw pile")]
    DrawPileEmpty,
}

/// Errors that can occur during the center pile reshuffle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReshuffleError {
    /// The game has already ended.
    #[error("the game is over")]
    GameOver,
    /// At least one player still has a legal move.
    #[error("players are not stuck")]
    NotStuck,
    /// The reshuffle produced an inconsistent table.
    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

/// Errors that can occur when starting a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The configured hand and draw pile sizes do not fit in one deck.
    #[error("hand and draw pile sizes do not leave two center cards")]
    InvalidLayout,
    /// The deck or the dealt table is malformed.
    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

/// Broken card-conservation invariant.
///
/// These indicate a bug in the engine and cannot be provoked through the
/// move, draw, or reshuffle operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// The number of cards is not exactly one deck.
    #[error("expected {expected} cards, found {found}")]
    CardCount {
        /// Cards in one deck.
        expected: usize,
        /// Cards actually present.
        found: usize,
    },
    /// The same card appears twice.
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    /// A card has a rank outside 1..=13.
    #[error("card has invalid rank {0}")]
    InvalidRank(u8),
    /// A center pile has no cards.
    #[error("center pile {0} is empty")]
    EmptyCenter(usize),
}

/// Errors that can occur when parsing a card identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The input was empty.
    #[error("empty card identifier")]
    Empty,
    /// The trailing suit letter is not one of `H`, `D`, `C`, `S`.
    #[error("invalid suit letter")]
    InvalidSuit,
    /// The rank is not `A`, `2`..`10`, `J`, `Q`, or `K`.
    #[error("invalid rank")]
    InvalidRank,
}
