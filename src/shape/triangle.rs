//! Definition of the triangle shape.

use crate::math::{BarycentricCoordinates, Point, Real, Vector};
use crate::shape::reference_simplex::TRIANGLE_EDGES;
use crate::shape::{Segment, Simplex};

use core::mem;

/// A triangle shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

impl From<[Point<Real>; 3]> for Triangle {
    fn from(arr: [Point<Real>; 3]) -> Self {
        *Self::from_array(&arr)
    }
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// Creates the reference to a triangle from the reference to an array of three points.
    pub fn from_array(arr: &[Point<Real>; 3]) -> &Triangle {
        unsafe { mem::transmute(arr) }
    }

    /// Reference to an array containing the three vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>; 3] {
        unsafe { mem::transmute(self) }
    }

    /// A vector normal of this triangle.
    ///
    /// The vector points such that it is collinear to `AB × AC` (where `×` denotes the cross
    /// product).
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(&ac)
    }

    /// The `i`-th edge of this triangle.
    ///
    /// The edges are `[AB, AC, BC]`, each oriented from its lowest vertex index.
    #[inline]
    pub fn edge(&self, i: usize) -> Segment {
        let [a, b] = TRIANGLE_EDGES[i];
        Segment::new(self.vertices()[a], self.vertices()[b])
    }

    /// The area of this triangle.
    #[inline]
    pub fn area(&self) -> Real {
        self.scaled_normal().norm() * 0.5
    }

    /// The point with the given barycentric coordinates.
    pub fn point_from_barycentric(&self, bcoords: &BarycentricCoordinates<3>) -> Point<Real> {
        self.a * bcoords[0] + self.b.coords * bcoords[1] + self.c.coords * bcoords[2]
    }
}

impl Simplex for Triangle {
    const DIM: usize = 2;

    fn measure(&self) -> Real {
        self.area()
    }
}
