//! Card model
//!
//! A card is a (suit, rank) value packed into a single deck index so it stays
//! `Copy` and cheap to sort. Ranks use poker numbering: 2..=10 for pip cards,
//! 11 = Jack, 12 = Queen, 13 = King, 14 = Ace.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EvalError;

pub const TWO: u8 = 2;
pub const THREE: u8 = 3;
pub const FOUR: u8 = 4;
pub const FIVE: u8 = 5;
pub const SIX: u8 = 6;
pub const SEVEN: u8 = 7;
pub const EIGHT: u8 = 8;
pub const NINE: u8 = 9;
pub const TEN: u8 = 10;
pub const JACK: u8 = 11;
pub const QUEEN: u8 = 12;
pub const KING: u8 = 13;
pub const ACE: u8 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Hearts = 0,
    Diamonds = 1,
    Spades = 2,
    Clubs = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs];

    /// Index into per-suit tables (0..4)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Unicode suit symbol
    pub fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Spades => '♠',
            Suit::Clubs => '♣',
        }
    }

    fn from_index(index: u8) -> Suit {
        Suit::ALL[index as usize % 4]
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Spades => 's',
            Suit::Clubs => 'c',
        };
        write!(f, "{ch}")
    }
}

/// A playing card, stored as its deck index `suit * 13 + (rank - 2)` (0-51)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Card(u8);

impl Card {
    /// Create a card, rejecting ranks outside 2..=14
    pub fn new(suit: Suit, rank: u8) -> Result<Self, EvalError> {
        if !(TWO..=ACE).contains(&rank) {
            return Err(EvalError::InvalidRank(rank));
        }
        Ok(Card(suit as u8 * 13 + (rank - TWO)))
    }

    /// Create a card from its deck index 0-51
    pub fn from_index(index: u8) -> Self {
        assert!(index < 52, "Card index must be 0-51");
        Card(index)
    }

    /// Deck index 0-51
    pub fn index(self) -> u8 {
        self.0
    }

    pub fn rank(self) -> u8 {
        self.0 % 13 + TWO
    }

    pub fn suit(self) -> Suit {
        Suit::from_index(self.0 / 13)
    }
}

/// Order used throughout the evaluator: rank descending, suit breaking ties
/// so sorting is deterministic.
pub(crate) fn by_rank_desc(a: &Card, b: &Card) -> std::cmp::Ordering {
    b.rank().cmp(&a.rank()).then_with(|| a.suit().cmp(&b.suit()))
}

pub(crate) fn rank_char(rank: u8) -> char {
    match rank {
        TEN => 'T',
        JACK => 'J',
        QUEEN => 'Q',
        KING => 'K',
        ACE => 'A',
        r => char::from(b'0' + r),
    }
}

impl fmt::Display for Card {
    /// Two-character notation such as `Ah`, `Td`, `7c`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", rank_char(self.rank()), self.suit())
    }
}

impl FromStr for Card {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EvalError::InvalidCard(s.to_string());
        let mut chars = s.chars();
        let (Some(r), Some(u), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let rank = match r.to_ascii_uppercase() {
            d @ '2'..='9' => d as u8 - b'0',
            'T' => TEN,
            'J' => JACK,
            'Q' => QUEEN,
            'K' => KING,
            'A' => ACE,
            _ => return Err(invalid()),
        };
        let suit = match u {
            'h' | 'H' | '♥' => Suit::Hearts,
            'd' | 'D' | '♦' => Suit::Diamonds,
            's' | 'S' | '♠' => Suit::Spades,
            'c' | 'C' | '♣' => Suit::Clubs,
            _ => return Err(invalid()),
        };

        Card::new(suit, rank)
    }
}

impl From<Card> for String {
    fn from(card: Card) -> String {
        card.to_string()
    }
}

impl TryFrom<String> for Card {
    type Error = EvalError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
