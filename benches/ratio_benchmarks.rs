//! Benchmarks for eye ratio computation and ratio filters

use blink_monitor::{
    blink_ratio::{EyeLandmarks, LandmarkSet},
    constants::NUM_FACIAL_LANDMARKS,
    filters::create_filter,
    geometry::Point2D,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn noisy_face() -> LandmarkSet {
    let points = (0..NUM_FACIAL_LANDMARKS)
        .map(|i| {
            let angle = i as f64 * 0.37;
            Point2D::new(
                320.0 + 80.0 * angle.cos() + rand::random::<f64>(),
                240.0 + 90.0 * angle.sin() + rand::random::<f64>(),
            )
        })
        .collect();
    LandmarkSet::new(points).expect("generated face is valid")
}

fn benchmark_ratio(c: &mut Criterion) {
    let mut group = c.benchmark_group("ratio");

    let eye = EyeLandmarks::from_points([
        Point2D::new(0.0, 0.0),
        Point2D::new(10.0, -5.0),
        Point2D::new(20.0, -5.0),
        Point2D::new(30.0, 0.0),
        Point2D::new(20.0, 5.0),
        Point2D::new(10.0, 5.0),
    ]);
    group.bench_function("single_eye", |b| b.iter(|| black_box(black_box(&eye).ratio())));

    let face = noisy_face();
    group.bench_function("combined_face", |b| b.iter(|| black_box(black_box(&face).combined_ratio())));

    group.finish();
}

fn benchmark_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("ratio_filters");

    let ratios: Vec<f64> = (0..100)
        .map(|i| 3.0 + 0.3 * (f64::from(i) * 0.2).sin() + 0.1 * rand::random::<f64>())
        .collect();

    for name in ["none", "moving_average:5", "median:5", "exponential:0.5"] {
        let mut filter = create_filter(name).expect("valid filter");
        group.bench_with_input(BenchmarkId::new("sequence_100", name), &ratios, |b, data| {
            b.iter(|| {
                filter.reset();
                for &ratio in data {
                    black_box(filter.apply(black_box(ratio)));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_ratio, benchmark_filters);
criterion_main!(benches);
