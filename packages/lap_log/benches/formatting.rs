//! Benchmarks of the pure formatting functions that run on every recorded line.

#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use lap_log::{Style, bytes_to_human, clear};

criterion_group!(benches, entrypoint);
criterion_main!(benches);

fn entrypoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("lap_log_formatting");

    group.bench_function("bytes_to_human_small", |b| {
        b.iter(|| bytes_to_human(black_box(512)));
    });

    group.bench_function("bytes_to_human_large", |b| {
        b.iter(|| bytes_to_human(black_box(123_456_789_012)));
    });

    let plain = "a line without any highlighting at all, just text";
    group.bench_function("clear_plain", |b| {
        b.iter(|| clear(black_box(plain)));
    });

    let highlighted = format!(
        "{} [{} / {}] [{} / {}] message",
        Style::Blue.wrap("12:00:00"),
        Style::Blue.wrap("0.52s"),
        Style::Blue.wrap("3.1s"),
        Style::Blue.wrap("976.6K"),
        Style::Blue.wrap("12.4M"),
    );
    group.bench_function("clear_highlighted", |b| {
        b.iter(|| clear(black_box(&highlighted)));
    });

    group.finish();
}
