//! Game configuration options.

use core::time::Duration;

use crate::ai::Difficulty;
use crate::card::DECK_SIZE;
use crate::error::DealError;

/// Configuration options for a Speed game.
///
/// Move selection (`difficulty`) and pacing (`ai_interval`) are independent:
/// the engine only reads the former, callers schedule AI ticks with the latter.
///
/// ```
/// use core::time::Duration;
/// use speedrs::{Difficulty, GameOptions};
///
/// let options = GameOptions::default()
///     .with_hand_size(4)
///     .with_difficulty(Difficulty::Hard)
///     .with_ai_interval(Duration::from_millis(750));
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Cards dealt to each hand, and the most a hand can be refilled to.
    pub hand_size: u8,
    /// Cards dealt to each draw pile.
    pub draw_pile_size: u8,
    /// Policy used when the engine plays for the computer.
    pub difficulty: Difficulty,
    /// Suggested delay between computer moves.
    pub ai_interval: Duration,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_size: 5,
            draw_pile_size: 15,
            difficulty: Difficulty::Medium,
            ai_interval: Difficulty::Medium.suggested_interval(),
        }
    }
}

impl GameOptions {
    /// Sets the hand size.
    ///
    /// # Example
    ///
    /// ```
    /// use speedrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(4);
    /// assert_eq!(options.hand_size, 4);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: u8) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets the draw pile size.
    ///
    /// # Example
    ///
    /// ```
    /// use speedrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_draw_pile_size(20);
    /// assert_eq!(options.draw_pile_size, 20);
    /// ```
    #[must_use]
    pub const fn with_draw_pile_size(mut self, draw_pile_size: u8) -> Self {
        self.draw_pile_size = draw_pile_size;
        self
    }

    /// Sets the computer's difficulty.
    ///
    /// # Example
    ///
    /// ```
    /// use speedrs::{Difficulty, GameOptions};
    ///
    /// let options = GameOptions::default().with_difficulty(Difficulty::Easy);
    /// assert_eq!(options.difficulty, Difficulty::Easy);
    /// ```
    #[must_use]
    pub const fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Sets the suggested delay between computer moves.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use speedrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_ai_interval(Duration::from_secs(3));
    /// assert_eq!(options.ai_interval, Duration::from_secs(3));
    /// ```
    #[must_use]
    pub const fn with_ai_interval(mut self, interval: Duration) -> Self {
        self.ai_interval = interval;
        self
    }

    /// Number of cards left for the two center piles after dealing hands and
    /// draw piles, or `None` if the hands and draw piles need more than a deck.
    #[must_use]
    pub const fn center_cards(&self) -> Option<usize> {
        let per_player = self.hand_size as usize + self.draw_pile_size as usize;
        DECK_SIZE.checked_sub(per_player * 2)
    }

    /// Checks that the layout fits in one deck.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InvalidLayout`] if the hand size is zero or fewer
    /// than two cards remain for the center piles.
    pub const fn validate(&self) -> Result<(), DealError> {
        if self.hand_size == 0 {
            return Err(DealError::InvalidLayout);
        }
        match self.center_cards() {
            Some(remaining) if remaining >= 2 => Ok(()),
            _ => Err(DealError::InvalidLayout),
        }
    }
}
