//! Best-hand selection
//!
//! Given a hand type, picks the five cards that realize it, in slot order:
//! the cards defining the category first, kickers after, each group highest
//! first. The rank list of a `MadeHand` is read straight off these slots, so
//! slot order is the tie-break order.

use crate::card::{by_rank_desc, Card};
use crate::classifier::{run_ranks, straight_high, suited_straight_high};
use crate::error::EvalError;
use crate::hand_type::HandType;
use crate::histogram::{RankHistogram, SuitHistogram};

/// Collects cards into the five output slots
struct Slots {
    cards: [Option<Card>; 5],
    len: usize,
}

impl Slots {
    fn new() -> Self {
        Slots {
            cards: [None; 5],
            len: 0,
        }
    }

    fn push(&mut self, card: Card) {
        if self.len < 5 {
            self.cards[self.len] = Some(card);
            self.len += 1;
        }
    }

    fn contains(&self, card: Card) -> bool {
        self.cards[..self.len].contains(&Some(card))
    }

    /// Take up to `n` cards of `rank`
    fn take_rank(&mut self, sorted: &[Card], rank: u8, n: usize) {
        for &card in sorted.iter().filter(|c| c.rank() == rank).take(n) {
            self.push(card);
        }
    }

    /// Fill the remaining slots with the highest cards not yet used and not
    /// of an excluded rank
    fn fill_kickers(&mut self, sorted: &[Card], excluded: &[u8]) {
        for &card in sorted {
            if self.len == 5 {
                break;
            }
            if !excluded.contains(&card.rank()) && !self.contains(card) {
                self.push(card);
            }
        }
    }

    fn finish(self, hand_type: HandType) -> Result<[Card; 5], EvalError> {
        let [Some(a), Some(b), Some(c), Some(d), Some(e)] = self.cards else {
            return Err(EvalError::Unrealizable(hand_type));
        };
        Ok([a, b, c, d, e])
    }
}

/// Extract the five cards realizing `hand_type` from `cards`.
///
/// `hand_type` is normally what [`classify`](crate::classify) returned for the
/// same cards. Asking for a category the cards do not contain fails with
/// [`EvalError::Unrealizable`].
pub fn select_hand(
    cards: &[Card],
    hand_type: HandType,
    ranks: &RankHistogram,
    suits: &SuitHistogram,
) -> Result<[Card; 5], EvalError> {
    let mut sorted = cards.to_vec();
    sorted.sort_unstable_by(by_rank_desc);

    let slots = match hand_type {
        HandType::HighCard => high_card(&sorted),
        HandType::Pair => pair(&sorted, ranks),
        HandType::TwoPair => two_pair(&sorted, ranks),
        HandType::Trips => trips(&sorted, ranks),
        HandType::Straight => straight(&sorted, ranks),
        HandType::Flush => flush(&sorted, suits),
        HandType::FullHouse => full_house(&sorted, ranks),
        HandType::Quads => quads(&sorted, ranks),
        HandType::StraightFlush => straight_flush(&sorted, suits),
    };

    slots.finish(hand_type)
}

fn high_card(sorted: &[Card]) -> Slots {
    let mut slots = Slots::new();
    slots.fill_kickers(sorted, &[]);
    slots
}

fn pair(sorted: &[Card], ranks: &RankHistogram) -> Slots {
    let mut slots = Slots::new();
    if let Some(pair) = ranks.highest_with(2) {
        slots.take_rank(sorted, pair, 2);
        slots.fill_kickers(sorted, &[pair]);
    }
    slots
}

/// With three pairs only the two highest play; the lowest pair competes for
/// the kicker slot like any other card.
fn two_pair(sorted: &[Card], ranks: &RankHistogram) -> Slots {
    let mut slots = Slots::new();
    let mut paired = ranks.ranks_with_at_least(2);
    if let (Some(high), Some(low)) = (paired.next(), paired.next()) {
        slots.take_rank(sorted, high, 2);
        slots.take_rank(sorted, low, 2);
        slots.fill_kickers(sorted, &[high, low]);
    }
    slots
}

fn trips(sorted: &[Card], ranks: &RankHistogram) -> Slots {
    let mut slots = Slots::new();
    if let Some(trips) = ranks.highest_with(3) {
        slots.take_rank(sorted, trips, 3);
        slots.fill_kickers(sorted, &[trips]);
    }
    slots
}

fn straight(sorted: &[Card], ranks: &RankHistogram) -> Slots {
    let mut slots = Slots::new();
    if let Some(high) = straight_high(ranks.distinct_desc()) {
        for rank in run_ranks(high) {
            slots.take_rank(sorted, rank, 1);
        }
    }
    slots
}

fn flush(sorted: &[Card], suits: &SuitHistogram) -> Slots {
    let mut slots = Slots::new();
    if let Some(suit) = suits.flush_suit() {
        for &card in sorted.iter().filter(|c| c.suit() == suit).take(5) {
            slots.push(card);
        }
    }
    slots
}

/// Of two triples the higher one is the set and the lower one supplies
/// the pair.
fn full_house(sorted: &[Card], ranks: &RankHistogram) -> Slots {
    let mut slots = Slots::new();
    if let Some(set) = ranks.highest_with(3) {
        if let Some(pair) = ranks.ranks_with_at_least(2).find(|&r| r != set) {
            slots.take_rank(sorted, set, 3);
            slots.take_rank(sorted, pair, 2);
        }
    }
    slots
}

fn quads(sorted: &[Card], ranks: &RankHistogram) -> Slots {
    let mut slots = Slots::new();
    if let Some(quads) = ranks.highest_with(4) {
        slots.take_rank(sorted, quads, 4);
        slots.fill_kickers(sorted, &[quads]);
    }
    slots
}

fn straight_flush(sorted: &[Card], suits: &SuitHistogram) -> Slots {
    let mut slots = Slots::new();
    if let Some(suit) = suits.flush_suit() {
        let suited: Vec<Card> = sorted.iter().copied().filter(|c| c.suit() == suit).collect();
        if let Some(high) = suited_straight_high(&suited, suit) {
            for rank in run_ranks(high) {
                slots.take_rank(&suited, rank, 1);
            }
        }
    }
    slots
}
