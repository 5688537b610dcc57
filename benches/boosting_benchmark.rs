//! Benchmark for gradient-boosted tree training and prediction
//!
//! Run with: cargo bench --bench boosting_benchmark

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use rand::SeedableRng;

use tabboost::boosting::{BoostingConfig, GradientBoostedClassifier};
use tabboost::pipeline::{FeatureMatrix, TargetVector};

/// Generate a synthetic binary problem with a few informative features
fn generate_problem(n_rows: usize, n_features: usize, seed: u64) -> (FeatureMatrix, TargetVector) {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    let rows: Vec<Vec<f64>> = (0..n_rows)
        .map(|_| (0..n_features).map(|_| rng.gen::<f64>() * 2.0 - 1.0).collect())
        .collect();

    let labels: Vec<usize> = rows
        .iter()
        .map(|r| {
            let signal = r[0] + 0.5 * r[1 % n_features] - 0.25 * r[2 % n_features];
            let noise = rng.gen::<f64>() * 0.2 - 0.1;
            usize::from(signal + noise > 0.0)
        })
        .collect();

    let names = (0..n_features).map(|i| format!("f{}", i)).collect();
    let x = FeatureMatrix::from_rows(&rows, names);
    let y = TargetVector::new(labels, vec!["0".to_string(), "1".to_string()]).unwrap();
    (x, y)
}

fn bench_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("boosting_fit");
    group.sample_size(10);

    let config = BoostingConfig {
        n_estimators: 20,
        show_progress: false,
        ..Default::default()
    };

    for &n_rows in &[500usize, 2_000, 8_000] {
        let (x, y) = generate_problem(n_rows, 10, 42);
        group.throughput(Throughput::Elements(n_rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n_rows), &n_rows, |b, _| {
            b.iter(|| GradientBoostedClassifier::fit(black_box(&x), black_box(&y), &config).unwrap())
        });
    }

    group.finish();
}

fn bench_predict(c: &mut Criterion) {
    let (x, y) = generate_problem(5_000, 10, 7);
    let config = BoostingConfig {
        show_progress: false,
        ..Default::default()
    };
    let model = GradientBoostedClassifier::fit(&x, &y, &config).unwrap();

    c.bench_function("boosting_predict_5000", |b| {
        b.iter(|| model.predict(black_box(&x)).unwrap())
    });
}

criterion_group!(benches, bench_fit, bench_predict);
criterion_main!(benches);
