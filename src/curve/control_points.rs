use std::slice::Iter;

use cgmath::{Point2, Vector2};

/// The editable control polygon of a Bezier curve.
///
/// Points are appended at the back and undone from the back. Their order
/// defines the index `i` of each point in the Bernstein sum, duplicates are
/// allowed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlPoints {
    points: Vec<Point2<f32>>,
}

impl ControlPoints {
    /// Constructs a new, empty `ControlPoints`.
    pub fn new() -> Self {
        ControlPoints { points: Vec::new() }
    }

    /// Converts a cursor position in window pixels (origin at the top-left
    /// corner) into normalized device coordinates.
    pub fn cursor_to_ndc(cursor: Vector2<f64>, viewport: Vector2<u32>) -> Point2<f32> {
        let x = 2.0 * cursor.x / f64::from(viewport.x) - 1.0;
        let y = 1.0 - 2.0 * cursor.y / f64::from(viewport.y);
        Point2::new(x as f32, y as f32)
    }

    #[inline]
    pub fn append(&mut self, point: Point2<f32>) {
        trace!("Appends control point {:?}.", point);
        self.points.push(point);
    }

    /// Appends the point under the cursor, see `cursor_to_ndc`.
    pub fn append_cursor(&mut self, cursor: Vector2<f64>, viewport: Vector2<u32>) -> Point2<f32> {
        let point = Self::cursor_to_ndc(cursor, viewport);
        self.append(point);
        point
    }

    /// Removes the most recently appended point. Does nothing if there is none.
    #[inline]
    pub fn remove_last(&mut self) -> Option<Point2<f32>> {
        let point = self.points.pop();
        if let Some(ref v) = point {
            trace!("Removes control point {:?}.", v);
        }

        point
    }

    #[inline]
    pub fn clear(&mut self) {
        self.points.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> Iter<Point2<f32>> {
        self.points.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Point2<f32>] {
        &self.points
    }
}

impl<'a> IntoIterator for &'a ControlPoints {
    type Item = &'a Point2<f32>;
    type IntoIter = Iter<'a, Point2<f32>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
