//! Card types, rank adjacency, and text identifiers.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits, in deck order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Single-letter identifier (`H`, `D`, `C`, `S`).
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
            Self::Spades => 'S',
        }
    }

    const fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'H' => Some(Self::Hearts),
            'D' => Some(Self::Diamonds),
            'C' => Some(Self::Clubs),
            'S' => Some(Self::Spades),
            _ => None,
        }
    }

    const fn ordinal(self) -> usize {
        match self {
            Self::Hearts => 0,
            Self::Diamonds => 1,
            Self::Clubs => 2,
            Self::Spades => 3,
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Decks and tables built
    /// from cards outside 1..=13 are rejected by the invariant checks.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns whether this card can be played on `other` (ranks one apart,
    /// King and Ace wrapping).
    #[must_use]
    pub const fn is_adjacent_to(&self, other: &Self) -> bool {
        ranks_adjacent(self.rank, other.rank)
    }

    /// Position of the card in a suit-major ordered deck, or `None` when the
    /// rank is out of range.
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        if self.rank == 0 || self.rank > RANKS {
            return None;
        }
        Some(self.suit.ordinal() * RANKS as usize + (self.rank - 1) as usize)
    }
}

/// Number of distinct ranks.
pub const RANKS: u8 = 13;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Returns whether two ranks are one apart on the 13-rank cycle.
///
/// ```
/// use speedrs::card::ranks_adjacent;
///
/// assert!(ranks_adjacent(7, 8));
/// assert!(ranks_adjacent(13, 1));
/// assert!(ranks_adjacent(1, 13));
/// assert!(!ranks_adjacent(7, 7));
/// assert!(!ranks_adjacent(2, 4));
/// ```
#[must_use]
pub const fn ranks_adjacent(a: u8, b: u8) -> bool {
    if a == 0 || b == 0 || a > RANKS || b > RANKS {
        return false;
    }
    let up = (a + RANKS - b) % RANKS;
    up == 1 || up == RANKS - 1
}

const fn rank_label(rank: u8) -> Option<&'static str> {
    match rank {
        1 => Some("A"),
        2 => Some("2"),
        3 => Some("3"),
        4 => Some("4"),
        5 => Some("5"),
        6 => Some("6"),
        7 => Some("7"),
        8 => Some("8"),
        9 => Some("9"),
        10 => Some("10"),
        11 => Some("J"),
        12 => Some("Q"),
        13 => Some("K"),
        _ => None,
    }
}

fn parse_rank(text: &str) -> Option<u8> {
    let face = [("A", 1), ("J", 11), ("Q", 12), ("K", 13)];
    if let Some(&(_, rank)) = face
        .iter()
        .find(|(label, _)| text.eq_ignore_ascii_case(label))
    {
        return Some(rank);
    }
    text.parse::<u8>()
        .ok()
        .filter(|rank| (1..=RANKS).contains(rank))
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match rank_label(self.rank) {
            Some(label) => write!(f, "{label}{}", self.suit.letter()),
            None => write!(f, "?{}", self.suit.letter()),
        }
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses identifiers such as `"8H"`, `"10d"`, `"AS"` or `"1S"`.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        let mut chars = text.chars();
        let suit_letter = chars.next_back().ok_or(ParseCardError::Empty)?;
        let suit = Suit::from_letter(suit_letter).ok_or(ParseCardError::InvalidSuit)?;
        let rank = parse_rank(chars.as_str()).ok_or(ParseCardError::InvalidRank)?;
        Ok(Self::new(suit, rank))
    }
}
