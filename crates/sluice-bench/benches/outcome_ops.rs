//! Criterion micro-benchmarks for outcome construction, inspection, and
//! rendering.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sluice_core::{ErrorCode, Integral, Outcome, OutcomeCode, Pointer, Unit};

/// Benchmark: the flag constructor, both success and the two failure
/// shapes of the sentinel substitution rule.
fn bench_outcome_from_flag(c: &mut Criterion) {
    c.bench_function("outcome_from_flag", |b| {
        b.iter(|| {
            let ok = OutcomeCode::from_flag(black_box(7), black_box(true));
            let derived = OutcomeCode::from_flag(black_box(7), black_box(false));
            let sentinel = OutcomeCode::from_flag(black_box(0), black_box(false));
            black_box((ok.ok(), derived.error(), sentinel.error()))
        });
    });
}

/// Benchmark: accessor reads on a pre-built outcome.
fn bench_outcome_inspect(c: &mut Criterion) {
    let outcome = Outcome::<Integral<u64>>::new(99, ErrorCode::new(99));
    c.bench_function("outcome_inspect", |b| {
        b.iter(|| {
            let outcome = black_box(outcome);
            black_box((outcome.ok(), outcome.value(), outcome.error()))
        });
    });
}

/// Benchmark: the diagnostic rendering for each category.
fn bench_outcome_render(c: &mut Criterion) {
    let unit = Outcome::<Unit>::from_error(ErrorCode::new(42));
    let integral = Outcome::<Integral<u64>>::from_value(7);
    let pointer = Outcome::<Pointer<u8>>::default();
    c.bench_function("outcome_render", |b| {
        b.iter(|| {
            black_box(black_box(unit).to_string());
            black_box(black_box(integral).to_string());
            black_box(black_box(pointer).to_string());
        });
    });
}

criterion_group!(
    benches,
    bench_outcome_from_flag,
    bench_outcome_inspect,
    bench_outcome_render
);
criterion_main!(benches);
