//! showdown Engine - Seven-card hold'em hand evaluation
//!
//! This crate classifies two hole cards plus five board cards into the best
//! five-card hand and produces a `MadeHand` that orders hands against each
//! other: hand type first, then five tie-break ranks.
//!
//! The engine is pure computation and has no I/O or UI dependencies.

pub mod card;
pub mod classifier;
pub mod error;
pub mod evaluator;
pub mod hand;
pub mod hand_type;
pub mod histogram;
pub mod made_hand;
pub mod selector;

#[cfg(test)]
mod scenarios;

pub use card::{Card, Suit};
pub use classifier::classify;
pub use error::EvalError;
pub use evaluator::{best_hand, evaluate, HandEvaluator, SevenCardEvaluator};
pub use hand::Hand;
pub use hand_type::HandType;
pub use histogram::{build_histograms, RankHistogram, SuitHistogram};
pub use made_hand::{BestHand, MadeHand};
pub use selector::select_hand;
