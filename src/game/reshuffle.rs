use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::Card;
use crate::error::{InvariantViolation, ReshuffleError};
use crate::invariants::check_table;
use crate::result::Outcome;
use crate::rules;
use crate::table::Player;

use super::{Game, Phase, Status};

impl Game {
    /// Checks whether both players are stuck and, if so, moves the game into
    /// the stuck phase.
    ///
    /// Returns `true` while the game is stuck.
    pub fn poll_stuck(&mut self) -> bool {
        if self.phase == Phase::AwaitingMove && rules::both_stuck(&self.table) {
            log::debug!("neither player can move");
            self.phase = Phase::Stuck;
        }
        self.phase == Phase::Stuck
    }

    /// Breaks a stuck position by reshuffling the center piles.
    ///
    /// Both center piles are gathered and shuffled. One new top card is chosen
    /// so that some card in a hand can be played on it (taken from a draw pile
    /// if no pooled card qualifies), the other is the next pooled card, and
    /// which center gets the playable card is random. The remaining pooled
    /// cards go to the bottom of the draw piles, alternating human and
    /// computer.
    ///
    /// If no playable card exists anywhere and both draw piles are empty, the
    /// game ends in a tie.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, the game is not stuck (call
    /// [`Game::poll_stuck`] first), or the reshuffle broke the card invariant.
    pub fn reshuffle(&mut self) -> Result<Status, ReshuffleError> {
        match self.phase {
            Phase::Terminal(_) => return Err(ReshuffleError::GameOver),
            Phase::AwaitingMove => return Err(ReshuffleError::NotStuck),
            Phase::Stuck => {}
        }

        let held: Vec<Card> = Player::BOTH
            .iter()
            .flat_map(|&player| self.table.hand(player).cards().iter().copied())
            .collect();
        let playable = |card: &Card| held.iter().any(|h| h.is_adjacent_to(card));

        let mut pool = self.table.take_centers();
        pool.shuffle(&mut self.rng);

        let anchor = match pool.iter().position(playable) {
            Some(index) => Some(pool.swap_remove(index)),
            None => Player::BOTH
                .iter()
                .find_map(|&player| self.table.draw_pile_mut(player).take_where(playable)),
        };

        let draw_piles_empty = Player::BOTH
            .iter()
            .all(|&player| self.table.draw_pile(player).is_empty());

        let first = match anchor {
            Some(card) => card,
            None if draw_piles_empty => {
                self.table.restore_centers(pool);
                check_table(&self.table)?;
                self.revision += 1;
                self.phase = Phase::Terminal(Outcome::Tie);
                log::info!("no card can ever be played again: tie");
                return Ok(Status::Tie);
            }
            None => pool.pop().ok_or(InvariantViolation::EmptyCenter(0))?,
        };
        let second = pool.pop().ok_or(InvariantViolation::EmptyCenter(1))?;

        let tops = if self.rng.random_bool(0.5) {
            [first, second]
        } else {
            [second, first]
        };
        self.table.seed_centers(tops);

        for (card, player) in pool.into_iter().zip(Player::BOTH.into_iter().cycle()) {
            self.table.draw_pile_mut(player).push_bottom(card);
        }

        check_table(&self.table)?;
        self.revision += 1;
        self.phase = if rules::both_stuck(&self.table) {
            Phase::Stuck
        } else {
            Phase::AwaitingMove
        };
        self.settle();

        log::debug!(
            "reshuffled centers to {} and {}, status {:?}",
            tops[0],
            tops[1],
            self.status()
        );
        Ok(self.status())
    }
}
