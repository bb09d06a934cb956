//! Piles and the table that owns them.

use alloc::vec::Vec;

use crate::card::Card;

/// Number of center piles.
pub const CENTER_PILES: usize = 2;

/// A participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// The person at the keyboard.
    Human,
    /// The computer opponent.
    Ai,
}

impl Player {
    /// Both players, human first.
    pub const BOTH: [Self; 2] = [Self::Human, Self::Ai];

    /// Returns the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Human => Self::Ai,
            Self::Ai => Self::Human,
        }
    }

    const fn slot(self) -> usize {
        match self {
            Self::Human => 0,
            Self::Ai => 1,
        }
    }
}

/// Identifies one of the six piles on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PileKind {
    /// A player's face-down draw pile.
    Draw(Player),
    /// A player's hand.
    Hand(Player),
    /// A center pile (0 or 1).
    Center(usize),
}

impl PileKind {
    /// Returns whether the card `depth` positions below the top of this pile
    /// is shown face-up (0 is the top card).
    ///
    /// The computer's hand stays hidden from the human.
    #[must_use]
    pub const fn is_face_up(self, depth: usize) -> bool {
        match self {
            Self::Draw(_) | Self::Hand(Player::Ai) => false,
            Self::Hand(Player::Human) => true,
            Self::Center(_) => depth == 0,
        }
    }
}

/// An ordered stack of cards. The last card is the top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    /// Creates a pile from cards ordered bottom to top.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns the cards, bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the top card.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the pile holds `card`.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub(crate) fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub(crate) fn push_bottom(&mut self, card: Card) {
        self.cards.insert(0, card);
    }

    /// Removes `card` wherever it lies, keeping the order of the rest.
    pub(crate) fn take(&mut self, card: Card) -> Option<Card> {
        let position = self.cards.iter().position(|&c| c == card)?;
        Some(self.cards.remove(position))
    }

    /// Removes the topmost card matching `pred`.
    pub(crate) fn take_where(&mut self, pred: impl Fn(&Card) -> bool) -> Option<Card> {
        let position = self.cards.iter().rposition(pred)?;
        Some(self.cards.remove(position))
    }

    pub(crate) fn drain(&mut self) -> Vec<Card> {
        core::mem::take(&mut self.cards)
    }
}

/// Every pile in play: two draw piles, two hands, and two center piles.
///
/// The table is the complete card state of a game. Cards only ever move
/// between its piles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    draw_piles: [Pile; 2],
    hands: [Pile; 2],
    centers: [Pile; CENTER_PILES],
}

impl Table {
    /// Builds a table from explicit piles (cards ordered bottom to top).
    ///
    /// Arrays are indexed human first. The result is not validated; use
    /// [`crate::invariants::check_table`] or [`crate::Game::with_table`].
    #[must_use]
    pub fn from_piles(
        draw_piles: [Vec<Card>; 2],
        hands: [Vec<Card>; 2],
        centers: [Vec<Card>; CENTER_PILES],
    ) -> Self {
        Self {
            draw_piles: draw_piles.map(Pile::from_cards),
            hands: hands.map(Pile::from_cards),
            centers: centers.map(Pile::from_cards),
        }
    }

    /// Returns the pile identified by `kind`, or `None` for a center index out
    /// of range.
    #[must_use]
    pub fn pile(&self, kind: PileKind) -> Option<&Pile> {
        match kind {
            PileKind::Draw(player) => Some(self.draw_pile(player)),
            PileKind::Hand(player) => Some(self.hand(player)),
            PileKind::Center(index) => self.center(index),
        }
    }

    /// Returns a player's draw pile.
    #[must_use]
    pub const fn draw_pile(&self, player: Player) -> &Pile {
        &self.draw_piles[player.slot()]
    }

    /// Returns a player's hand.
    #[must_use]
    pub const fn hand(&self, player: Player) -> &Pile {
        &self.hands[player.slot()]
    }

    /// Returns a center pile.
    #[must_use]
    pub fn center(&self, index: usize) -> Option<&Pile> {
        self.centers.get(index)
    }

    /// Returns the top card of a center pile.
    #[must_use]
    pub fn center_top(&self, index: usize) -> Option<Card> {
        self.center(index).and_then(Pile::top)
    }

    /// Returns the top card of each center pile.
    #[must_use]
    pub fn center_tops(&self) -> [Option<Card>; CENTER_PILES] {
        [self.centers[0].top(), self.centers[1].top()]
    }

    /// Iterates over every pile with its identifier.
    pub fn piles(&self) -> impl Iterator<Item = (PileKind, &Pile)> {
        let players = Player::BOTH.into_iter().flat_map(move |player| {
            [
                (PileKind::Draw(player), self.draw_pile(player)),
                (PileKind::Hand(player), self.hand(player)),
            ]
        });
        let centers = self
            .centers
            .iter()
            .enumerate()
            .map(|(index, pile)| (PileKind::Center(index), pile));
        players.chain(centers)
    }

    /// Total number of cards on the table.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.piles().map(|(_, pile)| pile.len()).sum()
    }

    /// Returns whether a player has emptied both hand and draw pile.
    #[must_use]
    pub fn is_out(&self, player: Player) -> bool {
        self.hand(player).is_empty() && self.draw_pile(player).is_empty()
    }

    pub(crate) const fn draw_pile_mut(&mut self, player: Player) -> &mut Pile {
        &mut self.draw_piles[player.slot()]
    }

    pub(crate) const fn hand_mut(&mut self, player: Player) -> &mut Pile {
        &mut self.hands[player.slot()]
    }

    /// Moves `card` from the player's hand onto a center pile. Returns `false`,
    /// changing nothing, if either end of the move is missing.
    pub(crate) fn play(&mut self, player: Player, card: Card, center: usize) -> bool {
        if center >= CENTER_PILES || !self.hand(player).contains(card) {
            return false;
        }
        let Some(card) = self.hands[player.slot()].take(card) else {
            return false;
        };
        self.centers[center].push(card);
        true
    }

    /// Moves the top of the player's draw pile into the player's hand.
    pub(crate) fn draw_into_hand(&mut self, player: Player) -> Option<Card> {
        let card = self.draw_pile_mut(player).pop()?;
        self.hand_mut(player).push(card);
        Some(card)
    }

    /// Places a fresh top card on each center pile.
    pub(crate) fn seed_centers(&mut self, tops: [Card; CENTER_PILES]) {
        for (pile, card) in self.centers.iter_mut().zip(tops) {
            pile.push(card);
        }
    }

    /// Lays pooled cards back out over the two center piles, first half on
    /// center 0.
    pub(crate) fn restore_centers(&mut self, mut cards: Vec<Card>) {
        let rest = cards.split_off(cards.len().div_ceil(2));
        self.centers = [Pile::from_cards(cards), Pile::from_cards(rest)];
    }

    /// Empties both center piles into one vector (center 0 first).
    pub(crate) fn take_centers(&mut self) -> Vec<Card> {
        let mut pooled = self.centers[0].drain();
        pooled.extend(self.centers[1].drain());
        pooled
    }
}
