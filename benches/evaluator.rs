use std::hint::black_box;

use cardlib::cards::parse_cards;
use cardlib::evaluator::evaluate;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_evaluate(c: &mut Criterion) {
    let high_card = parse_cards("Ah Kd 7s 5c 2d").unwrap();
    let straight_flush = parse_cards("6d 9d Ad Qc 8d 10d 7d").unwrap();

    let mut g = c.benchmark_group("evaluate");
    g.bench_with_input(BenchmarkId::new("high_card", "A,K,7,5,2"), &high_card, |b, input| {
        b.iter(|| evaluate(black_box(input), &[]))
    });
    g.bench_with_input(
        BenchmarkId::new("straight_flush", "seven_card_pool"),
        &straight_flush,
        |b, input| b.iter(|| evaluate(black_box(input), &[])),
    );
    g.finish();
}

fn bench_evaluate_large_pool(c: &mut Criterion) {
    // 2 hole + 5 community is the common worst case; stretch to 23
    let pool = parse_cards(
        "2h 3h 4h 5h 6h 7h 8h 9h 10h Jh Qh Kh Ah 2s 3s 4s 5s 6s 7s 8s 9s 10s Js",
    )
    .unwrap();
    c.bench_function("evaluate_23_cards", |b| b.iter(|| evaluate(black_box(&pool), &[])));
}

criterion_group!(benches, bench_evaluate, bench_evaluate_large_pool);
criterion_main!(benches);
