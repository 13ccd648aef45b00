//! Seven-card hand evaluator
//!
//! Evaluation runs in four steps over a private copy of the cards:
//! histograms → classifier → selector → made hand. Every step is pure, so
//! independent hands can be evaluated from any number of threads; the batch
//! API spreads them over the rayon pool.

use log::{debug, trace};
use rayon::prelude::*;

use crate::card::Card;
use crate::classifier::classify;
use crate::error::EvalError;
use crate::hand::Hand;
use crate::histogram::build_histograms;
use crate::made_hand::{BestHand, MadeHand};
use crate::selector::select_hand;

/// Hand evaluator seam used by callers that hold board and hole cards
/// separately.
pub trait HandEvaluator {
    /// Evaluate a 7-card hand (5 board cards + 2 hole cards)
    fn evaluate(&self, board: [Card; 5], hole: [Card; 2]) -> MadeHand;
}

/// Evaluate a complete 7-card hand.
///
/// Fails with [`EvalError::InvalidHandSize`] if fewer than 7 cards were dealt.
pub fn evaluate(hand: &Hand) -> Result<MadeHand, EvalError> {
    best_hand(hand).map(|best| best.made)
}

/// Evaluate a complete 7-card hand, keeping the five cards that play
pub fn best_hand(hand: &Hand) -> Result<BestHand, EvalError> {
    let cards = hand.to_array()?;
    best_of(&cards)
}

/// Run the pipeline over any set of five or more cards
pub(crate) fn best_of(cards: &[Card]) -> Result<BestHand, EvalError> {
    let (ranks, suits) = build_histograms(cards);
    let hand_type = classify(cards, &ranks, &suits);
    let five = select_hand(cards, hand_type, &ranks, &suits)?;
    let made = MadeHand::from_cards(hand_type, &five);
    trace!("classified {} cards as {}", cards.len(), made);
    Ok(BestHand { made, cards: five })
}

/// Evaluator over full 7-card hands
#[derive(Debug, Clone, Copy, Default)]
pub struct SevenCardEvaluator;

impl SevenCardEvaluator {
    /// Create a new evaluator
    pub fn new() -> Self {
        SevenCardEvaluator
    }

    /// Evaluate one board/hole pair
    pub fn evaluate_7cards(&self, board: [Card; 5], hole: [Card; 2]) -> MadeHand {
        let cards = [board[0], board[1], board[2], board[3], board[4], hole[0], hole[1]];
        match best_of(&cards) {
            Ok(best) => best.made,
            // seven cards always realize their own classification
            Err(err) => unreachable!("{err}"),
        }
    }

    /// Evaluate a batch of 7-card hands in parallel.
    ///
    /// `boards[i]` pairs with `holes[i]`; results keep the input order.
    pub fn evaluate_batch(&self, boards: &[[Card; 5]], holes: &[[Card; 2]]) -> Vec<MadeHand> {
        assert_eq!(boards.len(), holes.len(), "boards and holes must have same length");
        debug!("evaluating batch of {} hands", boards.len());

        boards
            .par_iter()
            .zip(holes.par_iter())
            .map(|(board, hole)| self.evaluate_7cards(*board, *hole))
            .collect()
    }
}

impl HandEvaluator for SevenCardEvaluator {
    fn evaluate(&self, board: [Card; 5], hole: [Card; 2]) -> MadeHand {
        self.evaluate_7cards(board, hole)
    }
}

/// Deterministic LCG used to sample benchmark hands
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next_card(&mut self) -> Card {
        self.state = self.state.wrapping_mul(1103515245).wrapping_add(12345) & 0x7fffffff;
        Card::from_index((self.state % 52) as u8)
    }
}

/// Sample `count` duplicate-free (board, hole) pairs from a fixed seed
pub fn sample_hands(count: usize, seed: u64) -> (Vec<[Card; 5]>, Vec<[Card; 2]>) {
    let mut lcg = Lcg::new(seed);
    let mut boards = Vec::with_capacity(count);
    let mut holes = Vec::with_capacity(count);

    for _ in 0..count {
        let mut cards: Vec<Card> = Vec::with_capacity(7);
        while cards.len() < 7 {
            let card = lcg.next_card();
            if !cards.contains(&card) {
                cards.push(card);
            }
        }
        boards.push([cards[0], cards[1], cards[2], cards[3], cards[4]]);
        holes.push([cards[5], cards[6]]);
    }

    (boards, holes)
}

/// Benchmark helper for CLI
///
/// Runs a batch evaluation and returns (evals_per_sec, duration_ms)
pub fn benchmark_throughput(sample_size: usize) -> (f64, u64) {
    use std::time::Instant;

    let evaluator = SevenCardEvaluator::new();
    let (boards, holes) = sample_hands(sample_size, 12345);

    // Warm-up
    for i in 0..10_000.min(sample_size) {
        let _ = evaluator.evaluate(boards[i], holes[i]);
    }

    let start = Instant::now();
    let _results = evaluator.evaluate_batch(&boards, &holes);
    let duration = start.elapsed();

    let evals_per_sec = sample_size as f64 / duration.as_secs_f64();
    (evals_per_sec, duration.as_millis() as u64)
}
