use std::fmt;

use serde::{Deserialize, Serialize};

/// The nine hand categories, weakest first.
///
/// The discriminant is the category's strength, so the derived `Ord` matches
/// poker ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HandType {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    Trips = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    Quads = 7,
    StraightFlush = 8,
}

impl HandType {
    /// All categories in ascending strength
    pub const ALL: [HandType; 9] = [
        HandType::HighCard,
        HandType::Pair,
        HandType::TwoPair,
        HandType::Trips,
        HandType::Straight,
        HandType::Flush,
        HandType::FullHouse,
        HandType::Quads,
        HandType::StraightFlush,
    ];

    pub fn strength(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for HandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandType::HighCard => "High card",
            HandType::Pair => "Pair",
            HandType::TwoPair => "Two pair",
            HandType::Trips => "Three of a kind",
            HandType::Straight => "Straight",
            HandType::Flush => "Flush",
            HandType::FullHouse => "Full house",
            HandType::Quads => "Four of a kind",
            HandType::StraightFlush => "Straight flush",
        };
        f.write_str(name)
    }
}
