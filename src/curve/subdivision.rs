//! The de Casteljau construction as a sequence of polylines.

use std::iter::FusedIterator;

use cgmath::prelude::*;
use cgmath::Point2;

/// Iterator over the levels of the de Casteljau construction at a fixed `t`.
///
/// Level 0 is the control polygon itself. Level `k + 1` interpolates every
/// adjacent pair of level `k` at `t`, so each level is exactly one point shorter
/// than the previous one. The iteration stops after the single-point level,
/// which is the curve point at `t`. An empty input yields no levels at all.
///
/// The iterator owns a snapshot of the input points, so a later edit of the
/// control points never affects a construction that is already underway.
#[derive(Debug, Clone)]
pub struct SubdivisionLevels {
    current: Option<Vec<Point2<f32>>>,
    t: f32,
}

impl SubdivisionLevels {
    pub fn new(points: Vec<Point2<f32>>, t: f32) -> Self {
        let current = if points.is_empty() {
            None
        } else {
            Some(points)
        };

        SubdivisionLevels { current, t }
    }

    /// The interpolation parameter shared by every level.
    #[inline]
    pub fn t(&self) -> f32 {
        self.t
    }

    fn interpolate(level: &[Point2<f32>], t: f32) -> Vec<Point2<f32>> {
        level
            .windows(2)
            .map(|pair| Point2::from_vec(pair[0].to_vec() * (1.0 - t) + pair[1].to_vec() * t))
            .collect()
    }
}

impl Iterator for SubdivisionLevels {
    type Item = Vec<Point2<f32>>;

    fn next(&mut self) -> Option<Self::Item> {
        let level = self.current.take()?;
        if level.len() >= 2 {
            self.current = Some(Self::interpolate(&level, self.t));
        }

        Some(level)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.current.as_ref().map(|v| v.len()).unwrap_or(0);
        (len, Some(len))
    }
}

impl ExactSizeIterator for SubdivisionLevels {}

impl FusedIterator for SubdivisionLevels {}

/// Starts the de Casteljau construction of `points` at parameter `t`.
#[inline]
pub fn subdivision_levels(points: &[Point2<f32>], t: f32) -> SubdivisionLevels {
    SubdivisionLevels::new(points.to_vec(), t)
}
