use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use core_mvdist::linalg::{ln_det, solve, trace};
use core_mvdist::*;
use ndarray::Array2;

fn spd_matrix(dim: usize) -> Array2<f64> {
    Array2::from_shape_fn((dim, dim), |(i, j)| {
        if i == j {
            dim as f64
        } else {
            1.0 / (1.0 + (i as f64 - j as f64).abs())
        }
    })
}

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("ln_factorial cached", |b| {
        b.iter(|| ln_factorial(black_box(120.0)))
    });

    c.bench_function("ln_factorial gamma", |b| {
        b.iter(|| ln_factorial(black_box(12345.0)))
    });

    c.bench_function("ln_multivariate_gamma 8", |b| {
        b.iter(|| ln_multivariate_gamma(black_box(8), black_box(10.5)))
    });
}

fn decompositions(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompositions");
    for size in [2usize, 4, 8, 16, 32, 64].iter() {
        let matrix = spd_matrix(*size);
        group.bench_with_input(BenchmarkId::new("ln_det", size), &matrix, |b, matrix| {
            b.iter(|| ln_det(matrix));
        });
        group.bench_with_input(BenchmarkId::new("trace_solve", size), &matrix, |b, matrix| {
            b.iter(|| solve(matrix, matrix).map(|x| trace(&x)));
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark, decompositions);
criterion_main!(benches);
