//! A rules engine and computer opponent for the Speed card game, with optional
//! `no_std` support.
//!
//! The crate provides a [`Game`] type that owns the piles of a two-player
//! game (human against computer), validates and applies moves, detects when
//! both players are stuck, reshuffles the center piles, and reports the
//! outcome. [`ai::choose_move`] picks moves for the computer at a chosen
//! [`Difficulty`]. Rendering, input, and timing are left to the caller.
//!
//! # Example
//!
//! ```
//! use speedrs::{Game, GameOptions, Player, Status};
//!
//! let mut game = Game::new(GameOptions::default(), 42).unwrap();
//! if let Some(mv) = game.legal_moves(Player::Human).first().copied() {
//!     game.attempt_move(Player::Human, mv.card, mv.center).unwrap();
//! } else if game.poll_stuck() {
//!     game.reshuffle().unwrap();
//! }
//! assert_eq!(game.table().card_count(), 52);
//! assert!(!matches!(game.status(), Status::Win(_)));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod ai;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod invariants;
pub mod options;
pub mod result;
pub mod rules;
pub mod table;

// Re-export main types
pub use ai::{Difficulty, choose_move};
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{
    DealError, DrawError, InvariantViolation, MoveRejected, ParseCardError, ReshuffleError,
};
pub use game::{Game, Phase, Status};
pub use options::GameOptions;
pub use result::{AiTick, MoveResult, Outcome};
pub use rules::Move;
pub use table::{CENTER_PILES, Pile, PileKind, Player, Table};
