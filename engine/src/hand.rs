//! Seven-card hand builder
//!
//! Holds the two hole cards and five board cards of one player in a fixed
//! array. Card order carries no meaning; the evaluator sorts its own copy.

use std::fmt;
use std::str::FromStr;

use crate::card::Card;
use crate::error::EvalError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand {
    cards: [Option<Card>; Hand::CAPACITY],
    len: usize,
}

impl Hand {
    pub const CAPACITY: usize = 7;

    /// Create an empty hand
    pub fn new() -> Self {
        Hand {
            cards: [None; Hand::CAPACITY],
            len: 0,
        }
    }

    /// Build a full hand from the board and a player's hole cards
    pub fn from_board_and_hole(board: [Card; 5], hole: [Card; 2]) -> Self {
        let mut cards = [None; Hand::CAPACITY];
        for (slot, card) in cards.iter_mut().zip(board.into_iter().chain(hole)) {
            *slot = Some(card);
        }
        Hand {
            cards,
            len: Hand::CAPACITY,
        }
    }

    /// Add one card, failing once the hand already holds 7.
    ///
    /// Returns `&mut Self` so deals can be chained with `?`.
    pub fn add_card(&mut self, card: Card) -> Result<&mut Self, EvalError> {
        if self.len == Hand::CAPACITY {
            return Err(EvalError::CapacityExceeded);
        }
        self.cards[self.len] = Some(card);
        self.len += 1;
        Ok(self)
    }

    /// Cards dealt so far, in the order they were added
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards[..self.len].iter().flatten().copied()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_complete(&self) -> bool {
        self.len == Hand::CAPACITY
    }

    /// All seven cards, or `InvalidHandSize` if the hand is short
    pub fn to_array(&self) -> Result<[Card; 7], EvalError> {
        match self.cards {
            [Some(a), Some(b), Some(c), Some(d), Some(e), Some(f), Some(g)] => {
                Ok([a, b, c, d, e, f, g])
            }
            _ => Err(EvalError::InvalidHandSize { found: self.len }),
        }
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = EvalError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        let mut hand = Hand::new();
        for &card in cards {
            hand.add_card(card)?;
        }
        Ok(hand)
    }
}

/// Parse whitespace-separated card notation, e.g. `"Ad Jd 2h 7d 3d Ks 8c"`
impl FromStr for Hand {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut hand = Hand::new();
        for token in s.split_whitespace() {
            hand.add_card(token.parse()?)?;
        }
        Ok(hand)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
