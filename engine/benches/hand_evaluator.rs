//! Benchmark harness for hand evaluator throughput
//!
//! Measures 7-card evaluation, one hand at a time and as a parallel batch.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use showdown_engine::evaluator::sample_hands;
use showdown_engine::{evaluate, Hand, HandEvaluator, SevenCardEvaluator};

fn benchmark_scalar_evaluation(c: &mut Criterion) {
    let evaluator = SevenCardEvaluator::new();
    let (boards, holes) = sample_hands(100_000, 12345);

    c.bench_function("hand_evaluator_7card_scalar", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for (board, hole) in black_box(&boards).iter().zip(&holes) {
                let made = evaluator.evaluate(*board, *hole);
                sum += made.hand_type().strength() as u64;
            }
            black_box(sum)
        })
    });
}

fn benchmark_hand_builder(c: &mut Criterion) {
    let (boards, holes) = sample_hands(100_000, 12345);
    let hands: Vec<Hand> = boards
        .iter()
        .zip(&holes)
        .map(|(board, hole)| Hand::from_board_and_hole(*board, *hole))
        .collect();

    c.bench_function("hand_evaluator_7card_hand", |b| {
        b.iter(|| {
            let mut ok = 0usize;
            for hand in black_box(&hands) {
                ok += evaluate(hand).is_ok() as usize;
            }
            black_box(ok)
        })
    });
}

fn benchmark_batch_evaluation(c: &mut Criterion) {
    let evaluator = SevenCardEvaluator::new();
    let (boards, holes) = sample_hands(100_000, 12345);

    c.bench_function("hand_evaluator_7card_batch", |b| {
        b.iter(|| {
            let results = evaluator.evaluate_batch(black_box(&boards), black_box(&holes));
            black_box(results.len())
        })
    });
}

criterion_group!(
    benches,
    benchmark_scalar_evaluation,
    benchmark_hand_builder,
    benchmark_batch_evaluation
);
criterion_main!(benches);
