//! Known seven-card deals and the made hand each must produce

use crate::card::Suit::{Clubs as C, Diamonds as D, Hearts as H, Spades as S};
use crate::card::*;
use crate::evaluator::evaluate;
use crate::hand::Hand;
use crate::hand_type::HandType::{self, *};

fn c(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank).unwrap()
}

fn deal(cards: [Card; 7]) -> Hand {
    let mut hand = Hand::new();
    for card in cards {
        hand.add_card(card).unwrap();
    }
    hand
}

fn check(cards: [Card; 7], hand_type: HandType, ranks: [u8; 5]) {
    let made = evaluate(&deal(cards)).unwrap();
    assert_eq!(made.hand_type(), hand_type, "{}", deal(cards));
    assert_eq!(made.ranks(), ranks, "{}", deal(cards));
}

fn leading(cards: [Card; 7], hand_type: HandType, rank: u8) {
    let made = evaluate(&deal(cards)).unwrap();
    assert_eq!(made.hand_type(), hand_type, "{}", deal(cards));
    assert_eq!(made.leading_rank(), rank, "{}", deal(cards));
}

#[test]
fn test_high_card() {
    check(
        [c(D, ACE), c(D, JACK), c(H, TWO), c(D, SEVEN), c(D, THREE), c(S, KING), c(C, EIGHT)],
        HighCard,
        [ACE, KING, JACK, EIGHT, SEVEN],
    );
}

#[test]
fn test_pair() {
    check(
        [c(D, JACK), c(H, JACK), c(S, NINE), c(C, SEVEN), c(D, KING), c(H, TWO), c(C, THREE)],
        Pair,
        [JACK, JACK, KING, NINE, SEVEN],
    );
}

#[test]
fn test_two_pair() {
    check(
        [c(D, JACK), c(H, JACK), c(S, NINE), c(C, SEVEN), c(D, KING), c(H, TWO), c(C, NINE)],
        TwoPair,
        [JACK, JACK, NINE, NINE, KING],
    );
    check(
        [c(D, JACK), c(H, JACK), c(S, NINE), c(C, SEVEN), c(D, KING), c(H, SEVEN), c(C, THREE)],
        TwoPair,
        [JACK, JACK, SEVEN, SEVEN, KING],
    );
}

#[test]
fn test_trips() {
    check(
        [c(D, JACK), c(H, JACK), c(S, NINE), c(C, JACK), c(D, KING), c(H, TWO), c(C, FOUR)],
        Trips,
        [JACK, JACK, JACK, KING, NINE],
    );
}

#[test]
fn test_straight() {
    leading(
        [c(D, TEN), c(H, JACK), c(S, NINE), c(C, TWO), c(D, KING), c(H, TWO), c(C, QUEEN)],
        Straight,
        KING,
    );
}

#[test]
fn test_flush() {
    check(
        [c(H, TEN), c(H, JACK), c(S, NINE), c(H, THREE), c(D, KING), c(H, TWO), c(H, ACE)],
        Flush,
        [ACE, JACK, TEN, THREE, TWO],
    );
}

#[test]
fn test_full_house() {
    check(
        [c(H, TEN), c(H, JACK), c(S, TEN), c(H, THREE), c(C, JACK), c(S, JACK), c(H, ACE)],
        FullHouse,
        [JACK, JACK, JACK, TEN, TEN],
    );
    // two triples: the higher plays as the set, the lower as the pair
    check(
        [c(H, ACE), c(S, TWO), c(C, TWO), c(C, THREE), c(H, TWO), c(S, THREE), c(H, THREE)],
        FullHouse,
        [THREE, THREE, THREE, TWO, TWO],
    );
}

#[test]
fn test_quads() {
    check(
        [c(H, ACE), c(S, TWO), c(C, TWO), c(C, THREE), c(H, TWO), c(S, THREE), c(D, TWO)],
        Quads,
        [TWO, TWO, TWO, TWO, ACE],
    );
}

#[test]
fn test_straight_flush() {
    check(
        [c(H, SIX), c(H, FIVE), c(S, NINE), c(H, THREE), c(D, KING), c(H, TWO), c(H, FOUR)],
        StraightFlush,
        [SIX, FIVE, FOUR, THREE, TWO],
    );
}

#[test]
fn test_wheel() {
    leading(
        [c(D, ACE), c(H, FIVE), c(S, NINE), c(H, THREE), c(D, KING), c(H, TWO), c(H, FOUR)],
        Straight,
        FIVE,
    );
}

#[test]
fn test_straight_flush_wheel() {
    leading(
        [c(H, ACE), c(H, FIVE), c(S, NINE), c(H, THREE), c(D, KING), c(H, TWO), c(H, FOUR)],
        StraightFlush,
        FIVE,
    );
}

#[test]
fn test_four_hearts_is_not_a_flush() {
    // four hearts, and 5-4-3-2 with no ace or six to finish a run
    check(
        [c(H, TEN), c(H, FIVE), c(S, NINE), c(H, THREE), c(D, KING), c(H, TWO), c(C, FOUR)],
        HighCard,
        [KING, TEN, NINE, FIVE, FOUR],
    );
}
