//! Error type shared by every evaluation entry point
//!
//! All failures are caller misuse and are reported synchronously; nothing
//! in the engine retries.

use thiserror::Error;

use crate::hand_type::HandType;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// `evaluate` was called before all 7 cards were dealt
    #[error("hand has {found} cards, evaluation needs exactly 7")]
    InvalidHandSize { found: usize },

    /// More than 7 cards were added to a hand
    #[error("tried to deal too many cards to this hand (capacity is 7)")]
    CapacityExceeded,

    #[error("card rank {0} is outside 2..=14")]
    InvalidRank(u8),

    #[error("invalid card notation: {0:?}")]
    InvalidCard(String),

    /// The selector was asked for a hand type the cards do not contain
    #[error("cards do not contain a {0}")]
    Unrealizable(HandType),
}
