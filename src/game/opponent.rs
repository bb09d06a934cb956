use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::ai::{self, Difficulty};
use crate::error::MoveRejected;
use crate::result::AiTick;
use crate::rules::Move;
use crate::table::Player;

use super::Game;

impl Game {
    /// Asks the computer which move it would make, without making it.
    ///
    /// Any tie-breaking randomness is derived from the seed and the number of
    /// changes applied so far, so polling the same position always gives the
    /// same answer.
    #[must_use]
    pub fn ai_move(&self, difficulty: Difficulty) -> Option<Move> {
        if self.is_over() {
            return None;
        }
        ai::choose_move(&self.table, difficulty, &mut self.decision_rng())
    }

    fn decision_rng(&self) -> ChaCha8Rng {
        let stream = self.revision.wrapping_mul(0x9E37_79B9_7F4A_7C15);
        ChaCha8Rng::seed_from_u64(self.seed ^ stream)
    }

    /// Lets the computer act once at the configured difficulty.
    ///
    /// The computer plays its chosen move if it has one; otherwise it draws a
    /// card if its hand has room; otherwise it waits.
    ///
    /// # Errors
    ///
    /// Returns [`MoveRejected::GameOver`] if the game has ended.
    pub fn ai_tick(&mut self) -> Result<AiTick, MoveRejected> {
        if self.is_over() {
            return Err(MoveRejected::GameOver);
        }

        if let Some(mv) = self.ai_move(self.options.difficulty) {
            return self
                .attempt_move(Player::Ai, mv.card, mv.center)
                .map(AiTick::Played);
        }

        Ok(self.draw(Player::Ai).map_or(AiTick::Idle, AiTick::Drew))
    }
}
