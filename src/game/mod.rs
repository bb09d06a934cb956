//! Game engine and state management.

use alloc::vec::Vec;
use core::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::{DealError, InvariantViolation};
use crate::invariants::check_table;
use crate::options::GameOptions;
use crate::rules::{self, Move};
use crate::table::{Player, Table};

mod actions;
mod opponent;
mod reshuffle;
pub mod state;

pub use state::{Phase, Status};

/// A Speed game between a human and the computer.
///
/// The game owns the table, the phase marker, and a seeded random number
/// generator. Every operation either applies completely or returns an error
/// and leaves the game as it was. Clone the game to keep a snapshot.
#[derive(Debug, Clone)]
pub struct Game {
    /// All six piles.
    table: Table,
    /// Game options.
    options: GameOptions,
    /// Current phase.
    phase: Phase,
    /// Shuffles for the reshuffle protocol.
    rng: ChaCha8Rng,
    /// Seed the game was created with.
    seed: u64,
    /// Bumped on every accepted change to the table.
    revision: u64,
}

impl Game {
    /// Shuffles a fresh deck with the given seed and deals it.
    ///
    /// # Example
    ///
    /// ```
    /// use speedrs::{Game, GameOptions, Status};
    ///
    /// let game = Game::new(GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.status(), Status::InProgress);
    /// assert_eq!(game.table().card_count(), 52);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the options do not describe a layout that fits in
    /// one deck.
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, DealError> {
        options.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let table = Deck::shuffled(&mut rng)?.deal(&options)?;
        Ok(Self::assemble(table, options, rng, seed))
    }

    /// Starts a game from an arranged table instead of a shuffled deal.
    ///
    /// # Errors
    ///
    /// Returns an error unless the table holds exactly one deck and both
    /// center piles show a card.
    pub fn with_table(
        table: Table,
        options: GameOptions,
        seed: u64,
    ) -> Result<Self, InvariantViolation> {
        check_table(&table)?;
        Ok(Self::assemble(
            table,
            options,
            ChaCha8Rng::seed_from_u64(seed),
            seed,
        ))
    }

    fn assemble(table: Table, options: GameOptions, rng: ChaCha8Rng, seed: u64) -> Self {
        let phase = rules::is_terminal(&table).map_or(Phase::AwaitingMove, Phase::Terminal);
        Self {
            table,
            options,
            phase,
            rng,
            seed,
            revision: 0,
        }
    }

    /// Returns the table for rendering.
    #[must_use]
    pub const fn table(&self) -> &Table {
        &self.table
    }

    /// Returns the options the game was created with.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the current status.
    #[must_use]
    pub fn status(&self) -> Status {
        self.phase.into()
    }

    /// Returns whether the game has ended.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Terminal(_))
    }

    /// Returns the seed the game was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns how many changes have been applied to the table.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the suggested delay between computer moves.
    #[must_use]
    pub const fn ai_interval(&self) -> Duration {
        self.options.ai_interval
    }

    /// Lists a player's legal moves.
    #[must_use]
    pub fn legal_moves(&self, player: Player) -> Vec<Move> {
        rules::legal_moves(&self.table, player)
    }

    /// Verifies that the table still holds exactly one deck.
    ///
    /// # Errors
    ///
    /// Returns the violation if the engine has lost or duplicated a card.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        check_table(&self.table)
    }

    /// Re-derives the phase after the table changed.
    ///
    /// A finished game stays finished; a stuck game is released once a move
    /// exists again.
    fn settle(&mut self) {
        if self.is_over() {
            return;
        }

        if let Some(outcome) = rules::is_terminal(&self.table) {
            log::info!("game over: {outcome:?}");
            self.phase = Phase::Terminal(outcome);
        } else if self.phase == Phase::Stuck && !rules::both_stuck(&self.table) {
            log::debug!("a move is available again");
            self.phase = Phase::AwaitingMove;
        }
    }
}
