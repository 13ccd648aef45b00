//! Made hands and their ordering
//!
//! A `MadeHand` is everything needed to rank a hand: its category and five
//! ranks ordered by significance. Field order drives the derived `Ord`:
//! hand type first, then the rank list compared position by position.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::card::{rank_char, Card, ACE, TWO};
use crate::hand_type::HandType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MadeHand {
    hand_type: HandType,
    ranks: [u8; 5],
}

impl MadeHand {
    /// Build a made hand from selector output; the rank list is the cards'
    /// ranks in slot order.
    pub fn from_cards(hand_type: HandType, cards: &[Card; 5]) -> Self {
        MadeHand {
            hand_type,
            ranks: (*cards).map(Card::rank),
        }
    }

    pub fn hand_type(&self) -> HandType {
        self.hand_type
    }

    /// Ranks in tie-break order, most significant first
    pub fn ranks(&self) -> [u8; 5] {
        self.ranks
    }

    /// Rank that decides between two hands of this type first.
    ///
    /// For the wheel this is 5, not the ace.
    pub fn leading_rank(&self) -> u8 {
        self.ranks[0]
    }
}

impl fmt::Display for MadeHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.hand_type)?;
        for (i, &rank) in self.ranks.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            debug_assert!((TWO..=ACE).contains(&rank));
            write!(f, "{}", rank_char(rank))?;
        }
        f.write_str("]")
    }
}

/// A made hand together with the five cards that realize it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestHand {
    pub made: MadeHand,
    pub cards: [Card; 5],
}

impl fmt::Display for BestHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (", self.made)?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str(")")
    }
}
