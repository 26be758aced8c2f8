use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trend_kf::estimator::filter_series;
use trend_kf::estimator::kalman::TrendKalman;
use trend_kf::simulator::SyntheticTrend;

fn criterion_benchmark(c: &mut Criterion) {
    let mut kf = TrendKalman::init(0.01, 1.0, 100.0).unwrap();
    c.bench_function("step", |b| b.iter(|| kf.step(black_box(101.0)).unwrap()));

    for &n in &[100_usize, 1_000, 10_000] {
        let series = SyntheticTrend::new(n, 100.0, 112.0, 1.0, 42).generate();
        c.bench_with_input(
            BenchmarkId::new("filter_series", n),
            &series.observed,
            |b, observed| b.iter(|| filter_series(0.01, 1.0, black_box(observed)).unwrap()),
        );
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
