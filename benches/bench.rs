use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use huddle::distance::{argmin, euclidean, squared_euclidean};
use huddle::kmeans::{distance_matrix, distance_matrix_parallel};
use rand::Rng;

pub fn l2_distance_benchmark(c: &mut Criterion) {
    let mut rng = rand::rng();

    let mut group = c.benchmark_group("l2 distance");
    for dim in [64, 128, 512, 1024].into_iter() {
        let lhs: Vec<f64> = (0..dim).map(|_| rng.random::<f64>()).collect();
        let rhs: Vec<f64> = (0..dim).map(|_| rng.random::<f64>()).collect();

        group.bench_with_input(
            BenchmarkId::new("squared", dim),
            &(&lhs, &rhs),
            |b, input| b.iter(|| squared_euclidean(input.0.as_slice(), input.1.as_slice())),
        );
        group.bench_with_input(BenchmarkId::new("sqrt", dim), &(&lhs, &rhs), |b, input| {
            b.iter(|| euclidean(input.0.as_slice(), input.1.as_slice()))
        });
    }
    group.finish();
}

pub fn argmin_benchmark(c: &mut Criterion) {
    let mut rng = rand::rng();

    let mut group = c.benchmark_group("argmin");
    for dim in [64, 128, 512, 1024].into_iter() {
        let x: Vec<f64> = (0..dim).map(|_| rng.random::<f64>()).collect();

        group.bench_with_input(BenchmarkId::new("native", dim), &x, |b, input| {
            b.iter(|| argmin(input.as_slice()))
        });
    }
    group.finish();
}

pub fn distance_matrix_benchmark(c: &mut Criterion) {
    let mut rng = rand::rng();
    let dim = 64;
    let points: Vec<f64> = (0..1000 * dim).map(|_| rng.random::<f64>()).collect();
    let centroids: Vec<f64> = (0..16 * dim).map(|_| rng.random::<f64>()).collect();

    let mut group = c.benchmark_group("distance matrix");
    group.bench_function("single thread", |b| {
        b.iter(|| distance_matrix(&points, &centroids, dim))
    });
    group.bench_function("parallel", |b| {
        b.iter(|| distance_matrix_parallel(&points, &centroids, dim))
    });
    group.finish();
}

criterion_group!(l2_benches, l2_distance_benchmark);
criterion_group!(argmin_benches, argmin_benchmark);
criterion_group!(matrix_benches, distance_matrix_benchmark);
criterion_main!(l2_benches, argmin_benches, matrix_benches);
