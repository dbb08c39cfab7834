//! Definition of the segment shape.

use crate::math::{BarycentricCoordinates, Point, Real, Vector};
use crate::shape::Simplex;

use core::mem;

/// A segment shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Segment {
    /// The segment first point.
    pub a: Point<Real>,
    /// The segment second point.
    pub b: Point<Real>,
}

impl Segment {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>) -> Segment {
        Segment { a, b }
    }

    /// Creates the reference to a segment from the reference to an array of two points.
    pub fn from_array(arr: &[Point<Real>; 2]) -> &Segment {
        unsafe { mem::transmute(arr) }
    }

    /// Reference to an array containing the two vertices of this segment.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>; 2] {
        unsafe { mem::transmute(self) }
    }

    /// The direction of this segment scaled by its length.
    ///
    /// Points from `self.a` toward `self.b`.
    pub fn scaled_direction(&self) -> Vector<Real> {
        self.b - self.a
    }

    /// The length of this segment.
    pub fn length(&self) -> Real {
        self.scaled_direction().norm()
    }

    /// The point at the parameter `t` of this segment, i.e., `a + t * (b - a)`.
    pub fn point_at_parameter(&self, t: Real) -> Point<Real> {
        self.a + self.scaled_direction() * t
    }
}

impl Simplex for Segment {
    const DIM: usize = 1;

    fn measure(&self) -> Real {
        self.length()
    }
}

impl From<[Point<Real>; 2]> for Segment {
    fn from(arr: [Point<Real>; 2]) -> Self {
        *Self::from_array(&arr)
    }
}

impl Segment {
    /// The point with the given barycentric coordinates.
    pub fn point_from_barycentric(&self, bcoords: &BarycentricCoordinates<2>) -> Point<Real> {
        self.a * bcoords[0] + self.b.coords * bcoords[1]
    }
}
