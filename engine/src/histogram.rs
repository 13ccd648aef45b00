//! Rank and suit frequency tables
//!
//! Both tables are fixed-size arrays so building them never allocates.

use crate::card::{Card, Suit, ACE, TWO};

/// Count of cards per rank, indexed directly by rank (2..=14)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RankHistogram([u8; 15]);

impl RankHistogram {
    pub fn count(&self, rank: u8) -> u8 {
        self.0.get(rank as usize).copied().unwrap_or(0)
    }

    /// Ranks holding at least `min` cards, highest first
    pub fn ranks_with_at_least(&self, min: u8) -> impl Iterator<Item = u8> + '_ {
        (TWO..=ACE).rev().filter(move |&r| self.count(r) >= min)
    }

    /// Highest rank holding exactly `n` cards
    pub fn highest_with(&self, n: u8) -> Option<u8> {
        (TWO..=ACE).rev().find(|&r| self.count(r) == n)
    }

    pub fn has_count(&self, n: u8) -> bool {
        self.highest_with(n).is_some()
    }

    /// Distinct ranks present, highest first
    pub fn distinct_desc(&self) -> impl Iterator<Item = u8> + '_ {
        self.ranks_with_at_least(1)
    }

    pub fn total(&self) -> usize {
        self.0.iter().map(|&c| c as usize).sum()
    }
}

/// Count of cards per suit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SuitHistogram([u8; 4]);

impl SuitHistogram {
    pub fn count(&self, suit: Suit) -> u8 {
        self.0[suit.index()]
    }

    /// The suit with five or more cards, if any. Seven cards can hold at
    /// most one such suit.
    pub fn flush_suit(&self) -> Option<Suit> {
        Suit::ALL.into_iter().find(|&s| self.count(s) >= 5)
    }

    pub fn total(&self) -> usize {
        self.0.iter().map(|&c| c as usize).sum()
    }
}

/// Build both frequency tables in one pass over the cards
pub fn build_histograms(cards: &[Card]) -> (RankHistogram, SuitHistogram) {
    let mut ranks = [0u8; 15];
    let mut suits = [0u8; 4];
    for card in cards {
        ranks[card.rank() as usize] += 1;
        suits[card.suit().index()] += 1;
    }
    (RankHistogram(ranks), SuitHistogram(suits))
}
