//! Cook-time benchmarks
//!
//! Single-call timings for the cook-time functions and the status report.

use std::time::Duration;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use lasagna_timer::{
    CookStatus, checked_total_elapsed_time, remaining_cook_time, total_elapsed_time,
    total_preparation_time,
};

fn ci_criterion() -> Criterion {
    Criterion::default()
        .sample_size(20)
        .measurement_time(Duration::from_secs(3))
}

fn bench_cook_time(c: &mut Criterion) {
    let mut group = c.benchmark_group("cook_time");

    group.bench_function("remaining_cook_time", |b| {
        b.iter(|| remaining_cook_time(black_box(25)))
    });

    group.bench_function("total_preparation_time", |b| {
        b.iter(|| total_preparation_time(black_box(9)))
    });

    group.bench_function("total_elapsed_time", |b| {
        b.iter(|| total_elapsed_time(black_box(3), black_box(20)))
    });

    group.bench_function("checked_total_elapsed_time", |b| {
        b.iter(|| checked_total_elapsed_time(black_box(3), black_box(20)))
    });

    group.finish();
}

fn bench_status(c: &mut Criterion) {
    let mut group = c.benchmark_group("status");

    group.bench_function("new", |b| {
        b.iter(|| CookStatus::new(black_box(3), black_box(20)))
    });

    group.bench_function("display", |b| {
        let status = CookStatus::new(3, 20);
        b.iter(|| black_box(&status).to_string())
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = ci_criterion();
    targets = bench_cook_time, bench_status
}
criterion_main!(benches);
