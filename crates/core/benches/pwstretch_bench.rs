//! Benchmarks for stretching and hashing

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pwstretch_core::{DEFAULT_LENGTH, Hasher, stretch};

fn bench_stretch(c: &mut Criterion) {
    c.bench_function("stretch_default", |b| {
        b.iter(|| stretch(black_box("flower123"), black_box(DEFAULT_LENGTH)))
    });

    c.bench_function("stretch_long", |b| {
        b.iter(|| stretch(black_box("sunshine987"), black_box(4096)))
    });
}

fn bench_hash(c: &mut Criterion) {
    let hasher = Hasher::new();
    let password = stretch("brownDavid", DEFAULT_LENGTH).unwrap();

    let mut group = c.benchmark_group("bcrypt");
    // Default cost takes hundreds of milliseconds per hash
    group.sample_size(10);
    group.bench_function("hash_default_cost", |b| {
        b.iter(|| hasher.hash(black_box(&password)))
    });
    group.finish();
}

criterion_group!(benches, bench_stretch, bench_hash);
criterion_main!(benches);
