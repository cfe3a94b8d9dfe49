use cgmath::{Point2, Vector2};

use super::bernstein::evaluate_curve_point;
use super::subdivision::SubdivisionLevels;

/// Setup of the curve editor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveParams {
    /// Number of frames for one sweep of the curve parameter from 0 to 1. Also
    /// the resolution of the sampled curve.
    pub max_count: u32,
    /// Size of the window client area in pixels, used to map cursor positions.
    pub viewport: Vector2<u32>,
}

impl Default for CurveParams {
    fn default() -> Self {
        CurveParams {
            max_count: 500,
            viewport: Vector2::new(800, 600),
        }
    }
}

/// Drives the curve parameter forward by one step every frame, wrapping back
/// to zero once a full sweep is done.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveAnimator {
    max_count: u32,
    count: u32,
}

impl CurveAnimator {
    pub fn new(params: CurveParams) -> Self {
        assert!(
            params.max_count > 0,
            "The sweep length of curve animation cannot be zero."
        );

        CurveAnimator {
            max_count: params.max_count,
            count: 0,
        }
    }

    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    #[inline]
    pub fn max_count(&self) -> u32 {
        self.max_count
    }

    /// The current curve parameter, in `[0, 1]`.
    #[inline]
    pub fn t(&self) -> f32 {
        self.count as f32 / self.max_count as f32
    }

    /// Steps to the next frame.
    pub fn advance(&mut self) {
        self.count += 1;
        if self.count > self.max_count {
            self.count = 0;
        }
    }

    /// The part of the curve swept so far, sampled at `k / max_count` for
    /// every `k` up to the current count.
    pub fn samples(&self, points: &[Point2<f32>]) -> Vec<Point2<f32>> {
        (0..=self.count)
            .filter_map(|k| evaluate_curve_point(points, k as f32 / self.max_count as f32))
            .collect()
    }

    /// The de Casteljau construction at the current curve parameter.
    #[inline]
    pub fn levels(&self, points: &[Point2<f32>]) -> SubdivisionLevels {
        SubdivisionLevels::new(points.to_vec(), self.t())
    }
}

impl Default for CurveAnimator {
    fn default() -> Self {
        CurveAnimator::new(CurveParams::default())
    }
}
