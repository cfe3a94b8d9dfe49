//! Bernstein basis polynomials and direct curve evaluation.

use cgmath::prelude::*;
use cgmath::{Point2, Vector2};

/// Computes the binomial coefficient `C(n, i)` as the factorial ratio
/// `n·(n-1)···(n-i+1) / i!`.
///
/// Both products are accumulated in `f64`, which stays exact up to a degree
/// well beyond what an interactive editor ever produces and degrades to a
/// rounded value instead of overflowing past that. Returns zero if `i > n`.
pub fn binomial(n: u32, i: u32) -> f64 {
    if i > n {
        return 0.0;
    }

    let mut numerator = 1.0f64;
    for k in (n - i)..n {
        numerator *= f64::from(k) + 1.0;
    }

    let mut denominator = 1.0f64;
    for k in 1..=i {
        denominator *= f64::from(k);
    }

    numerator / denominator
}

/// Evaluates the Bernstein basis polynomial `B(i, n, t) = C(n, i)·t^i·(1-t)^(n-i)`.
///
/// The coefficient is recomputed on every call.
pub fn evaluate_bernstein(i: u32, n: u32, t: f32) -> f32 {
    if i > n {
        return 0.0;
    }

    let t = f64::from(t);
    let b = binomial(n, i) * t.powi(i as i32) * (1.0 - t).powi((n - i) as i32);
    b as f32
}

/// Evaluates the Bezier curve defined by `points` at parameter `t`.
///
/// Returns `None` for an empty control point list. A single control point is a
/// degree-0 curve and is returned as is for every `t`.
pub fn evaluate_curve_point(points: &[Point2<f32>], t: f32) -> Option<Point2<f32>> {
    if points.is_empty() {
        return None;
    }

    let n = (points.len() - 1) as u32;
    let mut q = Vector2::zero();
    for (i, p) in points.iter().enumerate() {
        q += p.to_vec() * evaluate_bernstein(i as u32, n, t);
    }

    Some(Point2::from_vec(q))
}

/// Samples `count + 1` evenly spaced points of the curve over `[0, 1]`.
///
/// With `count == 0` the curve is sampled once, at its start. An empty control
/// point list yields an empty polyline.
pub fn sample_curve(points: &[Point2<f32>], count: u32) -> Vec<Point2<f32>> {
    if points.is_empty() {
        return Vec::new();
    }

    (0..=count)
        .filter_map(|k| {
            let t = if count == 0 {
                0.0
            } else {
                k as f32 / count as f32
            };

            evaluate_curve_point(points, t)
        })
        .collect()
}
