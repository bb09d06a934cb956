use crate::card::Card;
use crate::error::{DrawError, MoveRejected};
use crate::result::MoveResult;
use crate::rules;
use crate::table::{CENTER_PILES, Player};

use super::{Game, Phase};

impl Game {
    fn check_move(&self, player: Player, card: Card, center: usize) -> Result<(), MoveRejected> {
        if matches!(self.phase, Phase::Terminal(_)) {
            return Err(MoveRejected::GameOver);
        }

        if center >= CENTER_PILES {
            return Err(MoveRejected::CenterOutOfRange);
        }

        if !self.table.hand(player).contains(card) {
            return Err(MoveRejected::CardNotInHand);
        }

        if !rules::is_legal_move(&self.table, card, center) {
            return Err(MoveRejected::NotAdjacent);
        }

        Ok(())
    }

    /// Plays `card` from the player's hand onto center pile `center`.
    ///
    /// If this empties the hand and the player's draw pile still has cards,
    /// the top one is drawn into the hand.
    ///
    /// # Example
    ///
    /// ```
    /// use speedrs::{Game, GameOptions, MoveRejected, Player};
    ///
    /// let mut game = Game::new(GameOptions::default(), 7).unwrap();
    /// let card = game.table().hand(Player::Human).cards()[0];
    /// match game.attempt_move(Player::Human, card, 0) {
    ///     Ok(result) => assert_eq!(game.table().center_top(0), Some(result.card)),
    ///     Err(rejected) => assert_eq!(rejected, MoveRejected::NotAdjacent),
    /// }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the game untouched, if the game is over, the
    /// center index is not 0 or 1, the card is not in the player's hand, or
    /// the card is not one rank away from the pile's top card.
    pub fn attempt_move(
        &mut self,
        player: Player,
        card: Card,
        center: usize,
    ) -> Result<MoveResult, MoveRejected> {
        if let Err(reason) = self.check_move(player, card, center) {
            log::trace!("{player:?} cannot play {card} on center {center}: {reason}");
            return Err(reason);
        }

        if !self.table.play(player, card, center) {
            return Err(MoveRejected::CardNotInHand);
        }

        let auto_drawn = if self.table.hand(player).is_empty() {
            self.table.draw_into_hand(player)
        } else {
            None
        };

        self.revision += 1;
        self.settle();

        log::debug!("{player:?} played {card} on center {center}");
        if let Some(drawn) = auto_drawn {
            log::debug!("{player:?} hand empty, drew {drawn}");
        }

        Ok(MoveResult {
            card,
            center,
            auto_drawn,
            status: self.status(),
        })
    }

    /// Draws the top card of the player's draw pile into the player's hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, the hand already holds the
    /// configured hand size, or the draw pile is empty.
    pub fn draw(&mut self, player: Player) -> Result<Card, DrawError> {
        if self.is_over() {
            return Err(DrawError::GameOver);
        }

        if self.table.hand(player).len() >= usize::from(self.options.hand_size) {
            return Err(DrawError::HandFull);
        }

        let card = self
            .table
            .draw_into_hand(player)
            .ok_or(DrawError::DrawPileEmpty)?;

        self.revision += 1;
        self.settle();
        log::debug!("{player:?} drew {card}");

        Ok(card)
    }
}
