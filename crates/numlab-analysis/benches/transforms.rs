//! Benchmarks for the direct DFT and the two determinant algorithms
//!
//! Run with: cargo bench -p numlab-analysis

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nalgebra::DMatrix;
use numlab_analysis::prelude::*;

fn benchmark_dft(c: &mut Criterion) {
    let mut group = c.benchmark_group("dft");

    for &n in &[16, 64, 256] {
        let signal: Vec<f64> = (0..n).map(|i| (i as f64 * 0.37).sin()).collect();
        let spectrum = dft_real(&signal);

        group.bench_with_input(BenchmarkId::new("forward", n), &n, |b, _| {
            b.iter(|| dft_real(black_box(&signal)));
        });

        group.bench_with_input(BenchmarkId::new("inverse", n), &n, |b, _| {
            b.iter(|| idft(black_box(&spectrum)));
        });
    }

    group.finish();
}

fn benchmark_determinants(c: &mut Criterion) {
    let mut group = c.benchmark_group("determinant");

    for &n in &[3, 5, 7] {
        let matrix = DMatrix::from_fn(n, n, |i, j| ((i * n + j) as f64).cos() + if i == j { 2.0 } else { 0.0 });

        group.bench_with_input(BenchmarkId::new("cofactor", n), &n, |b, _| {
            b.iter(|| recursive_determinant(black_box(&matrix)).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("lu", n), &n, |b, _| {
            b.iter(|| lu_determinant(black_box(&matrix)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_dft, benchmark_determinants);
criterion_main!(benches);
