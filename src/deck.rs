//! The 52-card deck: building, shuffling, and dealing.

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, RANKS, Suit};
use crate::error::InvariantViolation;
use crate::invariants::check_cards;
use crate::options::GameOptions;
use crate::table::{Player, Table};

/// A full deck. The last card is dealt first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an unshuffled deck, suit by suit, Ace to King.
    #[must_use]
    pub fn ordered() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in 1..=RANKS {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Creates a deck from an explicit order.
    ///
    /// # Errors
    ///
    /// Returns an error unless `cards` is exactly one deck.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, InvariantViolation> {
        check_cards(&cards)?;
        Ok(Self { cards })
    }

    /// Creates a deck shuffled with `rng`.
    ///
    /// # Errors
    ///
    /// Returns an error if the shuffled deck fails validation, which means the
    /// card set itself was built wrong.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, InvariantViolation> {
        let mut cards = Self::ordered().cards;
        cards.shuffle(rng);
        Self::from_cards(cards)
    }

    /// Creates a deck shuffled from a seed. The same seed always gives the same
    /// order.
    ///
    /// # Errors
    ///
    /// See [`Deck::shuffled`].
    pub fn from_seed(seed: u64) -> Result<Self, InvariantViolation> {
        Self::shuffled(&mut ChaCha8Rng::seed_from_u64(seed))
    }

    /// Returns the cards; the last one is dealt first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    fn deal_pile(&mut self, count: usize) -> Vec<Card> {
        let split = self.cards.len().saturating_sub(count);
        let mut pile = self.cards.split_off(split);
        pile.reverse();
        pile
    }

    /// Deals the deck into draw piles, hands, and center piles.
    ///
    /// Piles are dealt in order: human draw pile, computer draw pile, human
    /// hand, computer hand, then the rest split between the two center piles
    /// (center 0 takes the odd card).
    ///
    /// # Errors
    ///
    /// Returns [`InvariantViolation::EmptyCenter`] if the options leave no
    /// card for a center pile; call [`GameOptions::validate`] first.
    pub fn deal(mut self, options: &GameOptions) -> Result<Table, InvariantViolation> {
        let draw_size = usize::from(options.draw_pile_size);
        let hand_size = usize::from(options.hand_size);

        let human_draw = self.deal_pile(draw_size);
        let ai_draw = self.deal_pile(draw_size);
        let human_hand = self.deal_pile(hand_size);
        let ai_hand = self.deal_pile(hand_size);
        let center_zero = self.deal_pile(self.cards.len().div_ceil(2));
        let center_one = self.deal_pile(self.cards.len());

        let table = Table::from_piles(
            [human_draw, ai_draw],
            [human_hand, ai_hand],
            [center_zero, center_one],
        );
        crate::invariants::check_table(&table)?;

        log::debug!(
            "dealt {} to each hand, {} to each draw pile, centers show {:?}",
            table.hand(Player::Human).len(),
            table.draw_pile(Player::Human).len(),
            table.center_tops(),
        );
        Ok(table)
    }
}
