//! Benchmarks comparing the three kernels across input sizes, on stable
//! Rust with `criterion`, the same setup as `cesarb-constant_time_eq`'s
//! `benches/bench.rs`.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use levenshtein_core::{levenshtein, levenshtein_bounded};

fn random_code_points(len: usize, alphabet: u32, seed: u64) -> Vec<u32> {
    let mut state = seed;
    let mut next = move || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (state >> 33) as u32 % alphabet
    };
    (0..len).map(|_| next()).collect()
}

fn bench_unbounded(c: &mut Criterion) {
    let mut group = c.benchmark_group("levenshtein_unbounded");
    for &len in &[16usize, 64, 256, 4096] {
        let a = random_code_points(len, 4, 1);
        let b = random_code_points(len, 4, 2);
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |bencher, _| {
            bencher.iter(|| levenshtein(black_box(&a), black_box(&b)));
        });
    }
    group.finish();
}

fn bench_small_k(c: &mut Criterion) {
    let mut group = c.benchmark_group("levenshtein_bounded_small_k");
    for &len in &[64usize, 1024, 8192] {
        let a = random_code_points(len, 20, 3);
        let mut b = a.clone();
        b[len / 2] = (b[len / 2] + 1) % 20;
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |bencher, _| {
            bencher.iter(|| levenshtein_bounded(black_box(&a), black_box(&b), 2));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_unbounded, bench_small_k);
criterion_main!(benches);
