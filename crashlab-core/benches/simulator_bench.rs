//! Criterion benchmarks for the balance replay.
//!
//! Benchmarks:
//! 1. Flat replay over long record sequences
//! 2. Martingale replay over long record sequences
//! 3. Full dashboard rebuild (both series + accuracy)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use crashlab_core::domain::{OutcomeRecord, Prediction};
use crashlab_core::metrics::Dashboard;
use crashlab_core::simulator::{simulate, Strategy};
use crashlab_core::{CoinFlip, PredictionSource};

// ── Helpers ──────────────────────────────────────────────────────────

fn make_records(n: usize) -> Vec<OutcomeRecord> {
    let mut coin = CoinFlip::seeded(42);
    (0..n)
        .map(|i| {
            let actual = 1.0 + (i as f64 * 0.37).sin().abs() * 3.0;
            OutcomeRecord::evaluate(coin.draw(), actual)
        })
        .collect()
}

fn bench_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("replay");
    for n in [100, 10_000, 100_000] {
        let records = make_records(n);
        for strategy in [Strategy::Flat, Strategy::Martingale] {
            group.bench_with_input(
                BenchmarkId::new(strategy.label(), n),
                &records,
                |b, records| b.iter(|| simulate(strategy, black_box(records))),
            );
        }
    }
    group.finish();
}

fn bench_dashboard(c: &mut Criterion) {
    let records = make_records(10_000);
    c.bench_function("dashboard_10k", |b| {
        b.iter(|| Dashboard::from_records(black_box(&records)))
    });
}

fn bench_all_under(c: &mut Criterion) {
    let records: Vec<_> = (0..10_000)
        .map(|_| OutcomeRecord::evaluate(Prediction::Under, 1.5))
        .collect();
    c.bench_function("martingale_all_under_10k", |b| {
        b.iter(|| simulate(Strategy::Martingale, black_box(&records)))
    });
}

criterion_group!(benches, bench_replay, bench_dashboard, bench_all_under);
criterion_main!(benches);
