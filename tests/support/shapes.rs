//! Deterministic test shapes.

#![allow(dead_code)]

use mapshape::{Point2, Polygon};

/// Regular `n`-gon centred on `(cx, cy)`, counter-clockwise.
pub fn regular_polygon(n: usize, cx: f64, cy: f64, radius: f64) -> Vec<Point2<f64>> {
    (0..n)
        .map(|i| {
            let t = i as f64 / n as f64 * std::f64::consts::TAU;
            Point2::new(cx + radius * t.cos(), cy + radius * t.sin())
        })
        .collect()
}

/// A jagged ring whose radius wobbles with a xorshift sequence.
pub fn jagged_ring(n: usize, radius: f64, seed: u64) -> Polygon<f64> {
    let mut state = seed.max(1);
    let points = (0..n)
        .map(|i| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let wobble = (state as f64 / u64::MAX as f64 - 0.5) * 0.1;
            let t = i as f64 / n as f64 * std::f64::consts::TAU;
            let r = radius * (1.0 + wobble);
            Point2::new(r * t.cos(), r * t.sin())
        })
        .collect();
    Polygon::new(points).unwrap()
}

/// Axis-aligned square with its lower-left corner at `(x, y)`.
pub fn square(x: f64, y: f64, size: f64) -> Vec<Point2<f64>> {
    vec![
        Point2::new(x, y),
        Point2::new(x + size, y),
        Point2::new(x + size, y + size),
        Point2::new(x, y + size),
    ]
}

/// Concatenates rings into a flat buffer plus start offsets.
pub fn flatten(rings: &[Vec<Point2<f64>>]) -> (Vec<Point2<f64>>, Vec<usize>) {
    let mut points = Vec::new();
    let mut offsets = Vec::new();
    for ring in rings {
        offsets.push(points.len());
        points.extend_from_slice(ring);
    }
    (points, offsets)
}
