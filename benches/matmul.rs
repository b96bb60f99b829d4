//! Benchmarks for matmul and the memoized transpose

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use matr::matrix::Matrix;

/// Deterministic pseudo-random square matrix
fn square(n: usize) -> Matrix<f32> {
    let rows = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| ((i * n + j) * 17 % 1000) as f32 / 1000.0)
                .collect()
        })
        .collect();
    Matrix::from_rows(rows).expect("rows are rectangular by construction")
}

fn bench_matmul(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");
    for size in [16, 64, 128] {
        let a = square(size);
        let b = square(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bencher, _| {
            bencher.iter(|| black_box(a.multiply(&b).unwrap()));
        });
    }
    group.finish();
}

fn bench_transpose(c: &mut Criterion) {
    let mut group = c.benchmark_group("transpose");

    let m = square(128);
    group.bench_function("cold", |bencher| {
        bencher.iter(|| {
            let fresh = m.clone();
            black_box(fresh.transpose().rows())
        });
    });

    let warm = square(128);
    warm.transpose();
    group.bench_function("cached", |bencher| {
        bencher.iter(|| black_box(warm.transpose().rows()));
    });

    group.finish();
}

criterion_group!(benches, bench_matmul, bench_transpose);
criterion_main!(benches);
