//! Benchmarks for the per-frame monitoring pipeline

use blink_monitor::{
    blink_ratio::LandmarkSet,
    constants::{LEFT_EYE_LANDMARKS, NUM_FACIAL_LANDMARKS, RIGHT_EYE_LANDMARKS},
    geometry::Point2D,
    monitor::BlinkMonitor,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::time::Duration;

fn face(gap: f64) -> LandmarkSet {
    let h = gap / 2.0;
    let eye = [(-15.0, 0.0), (-5.0, -h), (5.0, -h), (15.0, 0.0), (5.0, h), (-5.0, h)];
    let mut points = vec![Point2D::new(300.0, 300.0); NUM_FACIAL_LANDMARKS];
    for (i, &(x, y)) in eye.iter().enumerate() {
        points[LEFT_EYE_LANDMARKS[i]] = Point2D::new(260.0 + x, 200.0 + y);
        points[RIGHT_EYE_LANDMARKS[i]] = Point2D::new(340.0 + x, 200.0 + y);
    }
    LandmarkSet::new(points).expect("generated face is valid")
}

fn benchmark_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    // One minute of 30 fps frames with a blink every three seconds
    let open = face(10.0);
    let closed = face(4.0);
    let frames: Vec<(Vec<LandmarkSet>, Duration)> = (0..1800u32)
        .map(|i| {
            let faces = if i % 90 < 3 { vec![closed.clone()] } else { vec![open.clone()] };
            (faces, Duration::from_secs_f64(f64::from(i) / 30.0))
        })
        .collect();

    group.bench_function("process_frame_single", |b| {
        let mut monitor = BlinkMonitor::with_defaults(Duration::ZERO);
        let mut t = Duration::ZERO;
        b.iter(|| {
            t += Duration::from_millis(33);
            black_box(monitor.process_frame(black_box(&frames[0].0), t))
        });
    });

    group.bench_function("one_minute_session", |b| {
        b.iter(|| {
            let mut monitor = BlinkMonitor::with_defaults(Duration::ZERO);
            for (faces, t) in &frames {
                black_box(monitor.process_frame(faces, *t));
            }
            monitor.state().total_blinks
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_pipeline);
criterion_main!(benches);
