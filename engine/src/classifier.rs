//! Hand-type classification
//!
//! Predicates are checked strongest first and the first match wins. The
//! order matters: a full house also contains trips and a pair, a straight
//! flush also contains a straight and a flush.

use crate::card::{Card, Suit, ACE, FIVE, FOUR, THREE, TWO};
use crate::hand_type::HandType;
use crate::histogram::{RankHistogram, SuitHistogram};

/// Ranks of A-2-3-4-5, which plays as a five-high straight
const WHEEL: [u8; 5] = [ACE, TWO, THREE, FOUR, FIVE];

/// Determine the best hand type the cards contain
pub fn classify(cards: &[Card], ranks: &RankHistogram, suits: &SuitHistogram) -> HandType {
    if let Some(suit) = suits.flush_suit() {
        if suited_straight_high(cards, suit).is_some() {
            return HandType::StraightFlush;
        }
    }
    if ranks.has_count(4) {
        return HandType::Quads;
    }
    if ranks.has_count(3) && ranks.ranks_with_at_least(2).nth(1).is_some() {
        return HandType::FullHouse;
    }
    if suits.flush_suit().is_some() {
        return HandType::Flush;
    }
    if straight_high(ranks.distinct_desc()).is_some() {
        return HandType::Straight;
    }
    if ranks.has_count(3) {
        return HandType::Trips;
    }
    if ranks.ranks_with_at_least(2).nth(1).is_some() {
        return HandType::TwoPair;
    }
    if ranks.has_count(2) {
        return HandType::Pair;
    }
    HandType::HighCard
}

/// High end of the best straight among distinct ranks given highest first.
///
/// A literal five-rank run always wins; the wheel only counts when no such
/// run exists, and reports five as its high end.
pub(crate) fn straight_high(distinct_desc: impl IntoIterator<Item = u8>) -> Option<u8> {
    let mut present = [false; 15];
    let mut run_start = 0u8;
    let mut run_len = 0;
    let mut prev: Option<u8> = None;

    for rank in distinct_desc {
        present[rank as usize] = true;
        match prev {
            Some(p) if p == rank + 1 => run_len += 1,
            _ => {
                run_start = rank;
                run_len = 1;
            }
        }
        if run_len == 5 {
            return Some(run_start);
        }
        prev = Some(rank);
    }

    WHEEL.iter().all(|&r| present[r as usize]).then_some(FIVE)
}

/// High end of the best straight made only of `suit` cards
pub(crate) fn suited_straight_high(cards: &[Card], suit: Suit) -> Option<u8> {
    let mut suited: Vec<u8> = cards
        .iter()
        .filter(|c| c.suit() == suit)
        .map(|c| c.rank())
        .collect();
    suited.sort_unstable_by(|a, b| b.cmp(a));
    suited.dedup();
    straight_high(suited)
}

/// Ranks of the straight ending at `high`, highest first.
///
/// Ace-low positions are counted from one, so the wheel lists its ace last.
pub(crate) fn run_ranks(high: u8) -> [u8; 5] {
    let mut ranks = [0u8; 5];
    for (i, slot) in ranks.iter_mut().enumerate() {
        let low_ace_rank = high - i as u8;
        *slot = if low_ace_rank == 1 { ACE } else { low_ace_rank };
    }
    ranks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{KING, SIX, TEN};
    use crate::histogram::build_histograms;

    fn classify_str(s: &str) -> HandType {
        let cards: Vec<Card> = s.split_whitespace().map(|c| c.parse().unwrap()).collect();
        let (ranks, suits) = build_histograms(&cards);
        classify(&cards, &ranks, &suits)
    }

    #[test]
    fn test_each_category() {
        assert_eq!(classify_str("Ad Jd 2h 7d 3d Ks 8c"), HandType::HighCard);
        assert_eq!(classify_str("Jd Jh 9s 7c Kd 2h 3c"), HandType::Pair);
        assert_eq!(classify_str("Jd Jh 9s 7c Kd 2h 9c"), HandType::TwoPair);
        assert_eq!(classify_str("Jd Jh 9s Jc Kd 2h 4c"), HandType::Trips);
        assert_eq!(classify_str("Td Jh 9s 2c Kd 2h Qc"), HandType::Straight);
        assert_eq!(classify_str("Th Jh 9s 3h Kd 2h Ah"), HandType::Flush);
        assert_eq!(classify_str("Th Jh Ts 3h Jc Js Ah"), HandType::FullHouse);
        assert_eq!(classify_str("Ah 2s 2c 3c 2h 3s 2d"), HandType::Quads);
        assert_eq!(classify_str("6h 5h 9s 3h Kd 2h 4h"), HandType::StraightFlush);
    }

    #[test]
    fn test_three_pairs_is_two_pair() {
        assert_eq!(classify_str("Jd Jh 9s 9c Kd 7h 7c"), HandType::TwoPair);
    }

    #[test]
    fn test_double_trips_is_full_house() {
        assert_eq!(classify_str("Ah 2s 2c 3c 2h 3s 3h"), HandType::FullHouse);
    }

    #[test]
    fn test_quads_beat_full_house_pattern() {
        assert_eq!(classify_str("Kh Ks Kd Kc 2h 2s 2d"), HandType::Quads);
    }

    #[test]
    fn test_flush_and_straight_without_straight_flush() {
        // 5-9 straight across suits plus a heart flush that is not a run
        assert_eq!(classify_str("5h 6h 7s 8h 9c Kh 2h"), HandType::Flush);
    }

    #[test]
    fn test_wheel_variants() {
        assert_eq!(classify_str("Ad 5h 9s 3h Kd 2h 4h"), HandType::Straight);
        assert_eq!(classify_str("Ah 5h 9s 3h Kd 2h 4h"), HandType::StraightFlush);
    }

    #[test]
    fn test_straight_high() {
        assert_eq!(straight_high([KING, 12, 11, 10, 9, 3, 2]), Some(KING));
        assert_eq!(straight_high([ACE, 9, 5, 4, 3, 2]), Some(FIVE));
        // a six-high run outranks the wheel hiding in the same ranks
        assert_eq!(straight_high([ACE, 6, 5, 4, 3, 2]), Some(SIX));
        assert_eq!(straight_high([ACE, KING, TEN, 9, 8, 7]), None);
        assert_eq!(straight_high(std::iter::empty()), None);
    }

    #[test]
    fn test_run_ranks() {
        assert_eq!(run_ranks(ACE), [ACE, KING, 12, 11, TEN]);
        assert_eq!(run_ranks(SIX), [6, 5, 4, 3, 2]);
        assert_eq!(run_ranks(FIVE), [5, 4, 3, 2, ACE]);
    }
}
