//! Benchmarks for merge-based polygon simplification.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use mapshape::simplify::merge_pass;
use mapshape::{compute_merge_costs, simplify, split_and_filter, Point2, Polygon};

/// Generates a closed coastline-like ring: a circle with deterministic jitter.
fn generate_coastline(num_points: usize, radius: f64) -> Vec<Point2<f64>> {
    (0..num_points)
        .map(|i| {
            let t = i as f64 / num_points as f64 * std::f64::consts::TAU;
            let noise = ((i * 17) % 100) as f64 / 1000.0; // Deterministic "noise"
            let r = radius * (1.0 + noise);
            Point2::new(r * t.cos(), r * t.sin())
        })
        .collect()
}

fn bench_merge_costs(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_costs");

    for size in [100, 1000, 10000, 50000] {
        let points = generate_coastline(size, 100.0);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("coastline", size), &points, |b, pts| {
            b.iter(|| compute_merge_costs(black_box(pts)))
        });
    }

    group.finish();
}

fn bench_merge_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_pass");

    for size in [1000, 10000] {
        let points = generate_coastline(size, 100.0);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("coastline", size), &points, |b, pts| {
            b.iter(|| merge_pass(black_box(pts), black_box(0.5)))
        });
    }

    group.finish();
}

fn bench_simplify(c: &mut Criterion) {
    let mut group = c.benchmark_group("simplify");

    for size in [100, 1000, 10000, 50000] {
        let Ok(polygon) = Polygon::new(generate_coastline(size, 100.0)) else {
            continue;
        };
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("coastline", size), &polygon, |b, poly| {
            b.iter(|| simplify(black_box(poly), black_box(0.5), 16, 1))
        });
    }

    group.finish();
}

fn bench_split_and_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_and_filter");

    // One mainland plus many small islands
    let mut points = generate_coastline(10000, 100.0);
    let mut offsets = Vec::new();
    for i in 0..200 {
        offsets.push(points.len());
        let island = generate_coastline(12, 0.5 + (i % 7) as f64);
        points.extend(island.into_iter().map(|p| Point2::new(p.x + 300.0, p.y + i as f64)));
    }
    group.throughput(Throughput::Elements(points.len() as u64));

    group.bench_function("mainland_with_islands", |b| {
        b.iter(|| split_and_filter(black_box(&points), black_box(&offsets), black_box(0.001)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_merge_costs,
    bench_merge_pass,
    bench_simplify,
    bench_split_and_filter
);
criterion_main!(benches);
