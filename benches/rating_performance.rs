//! Performance benchmarks for rating calculations

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glicko2_engine::{
    expected_score, rate, Glicko2Parameters, GlickoRating, MatchRecord, OpponentSnapshot,
    ScaledRating,
};

fn snapshot_at(rating: f64, deviation: f64) -> OpponentSnapshot {
    let scaled = ScaledRating::from(GlickoRating {
        rating,
        deviation,
        volatility: 0.06,
    });
    OpponentSnapshot {
        mu: scaled.mu,
        phi: scaled.phi,
    }
}

fn bench_expected_score(c: &mut Criterion) {
    let opponent = snapshot_at(1650.0, 110.0);

    c.bench_function("expected_score", |b| {
        b.iter(|| black_box(expected_score(black_box(0.23), black_box(opponent))))
    });
}

fn bench_single_match_update(c: &mut Criterion) {
    let current = ScaledRating::from(GlickoRating {
        rating: 1500.0,
        deviation: 200.0,
        volatility: 0.06,
    });
    let params = Glicko2Parameters::default();
    let batch = [MatchRecord {
        opponent: snapshot_at(1550.0, 120.0),
        score: 1.0,
    }];

    c.bench_function("rate_single_match", |b| {
        b.iter(|| black_box(rate(black_box(current), black_box(&batch), &params)))
    });
}

fn bench_tournament_batch_update(c: &mut Criterion) {
    let current = ScaledRating::from(GlickoRating {
        rating: 1500.0,
        deviation: 150.0,
        volatility: 0.06,
    });
    let params = Glicko2Parameters::default();

    // 25 rounds against a spread of opponents with cycling outcomes.
    let batch: Vec<MatchRecord> = (0..25usize)
        .map(|i| MatchRecord {
            opponent: snapshot_at(1350.0 + (i as f64) * 12.0, 60.0 + (i as f64) * 6.0),
            score: [1.0, 0.5, 0.0][i % 3],
        })
        .collect();

    c.bench_function("rate_tournament_batch", |b| {
        b.iter(|| black_box(rate(black_box(current), black_box(&batch), &params)))
    });
}

fn bench_idle_period_update(c: &mut Criterion) {
    let current = ScaledRating::from(GlickoRating {
        rating: 1500.0,
        deviation: 200.0,
        volatility: 0.06,
    });
    let params = Glicko2Parameters::default();

    c.bench_function("rate_idle_period", |b| {
        b.iter(|| black_box(rate(black_box(current), &[], &params)))
    });
}

criterion_group!(
    benches,
    bench_expected_score,
    bench_single_match_update,
    bench_tournament_batch_update,
    bench_idle_period_update
);
criterion_main!(benches);
