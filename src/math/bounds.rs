//! Axis-aligned cubic bounds.
//!
//! The demos approximate every collidable model with a cube centered on the
//! model origin, sized by the largest extent of its bounding box. Two cubes
//! collide when their projections overlap on all three axes.

use cgmath::{BaseFloat, Point3};

/// An axis-aligned cube described by its center and half edge length.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cube<S> {
    /// Center of the cube.
    pub center: Point3<S>,
    /// Half of the edge length.
    pub half_extent: S,
}

impl<S: BaseFloat> Cube<S> {
    /// Construct a new cube from its center and half edge length.
    #[inline]
    pub fn new(center: Point3<S>, half_extent: S) -> Self {
        Cube {
            center,
            half_extent,
        }
    }

    /// Return the corner nearest to (-inf, -inf, -inf).
    #[inline]
    pub fn min(&self) -> Point3<S> {
        let h = self.half_extent;
        Point3::new(self.center.x - h, self.center.y - h, self.center.z - h)
    }

    /// Return the corner nearest to (inf, inf, inf).
    #[inline]
    pub fn max(&self) -> Point3<S> {
        let h = self.half_extent;
        Point3::new(self.center.x + h, self.center.y + h, self.center.z + h)
    }

    /// Returns true if the two cubes overlap. Touching faces count as a hit.
    pub fn intersects(&self, rhs: &Cube<S>) -> bool {
        let (a0, a1) = (self.min(), self.max());
        let (b0, b1) = (rhs.min(), rhs.max());

        !(a1.x < b0.x || a0.x > b1.x)
            && !(a1.y < b0.y || a0.y > b1.y)
            && !(a1.z < b0.z || a0.z > b1.z)
    }
}

/// Checks whether two cubes, given by center and half edge length, overlap.
#[inline]
pub fn check_collision<S: BaseFloat>(p1: Point3<S>, s1: S, p2: Point3<S>, s2: S) -> bool {
    Cube::new(p1, s1).intersects(&Cube::new(p2, s2))
}
