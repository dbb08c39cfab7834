//! Definition of the tetrahedron shape.

use crate::math::{BarycentricCoordinates, Matrix, Point, Real};
use crate::shape::reference_simplex::{TETRAHEDRON_EDGES, TETRAHEDRON_FACES};
use crate::shape::{Segment, Simplex, Triangle};
use core::mem;

/// A tetrahedron with 4 vertices.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tetrahedron {
    /// The tetrahedron first point.
    pub a: Point<Real>,
    /// The tetrahedron second point.
    pub b: Point<Real>,
    /// The tetrahedron third point.
    pub c: Point<Real>,
    /// The tetrahedron fourth point.
    pub d: Point<Real>,
}

impl From<[Point<Real>; 4]> for Tetrahedron {
    fn from(arr: [Point<Real>; 4]) -> Self {
        *Self::from_array(&arr)
    }
}

impl Tetrahedron {
    /// Creates a tetrahedron from four points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>, d: Point<Real>) -> Tetrahedron {
        Tetrahedron { a, b, c, d }
    }

    /// Creates the reference to a tetrahedron from the reference to an array of four points.
    pub fn from_array(arr: &[Point<Real>; 4]) -> &Tetrahedron {
        unsafe { mem::transmute(arr) }
    }

    /// Reference to an array containing the four vertices of this tetrahedron.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>; 4] {
        unsafe { mem::transmute(self) }
    }

    /// Returns the i-th face of this tetrahedron.
    ///
    /// The 0-th face is the triangle ABC.
    /// The 1-st face is the triangle ABD.
    /// The 2-nd face is the triangle ACD.
    /// The 3-rd face is the triangle BCD.
    ///
    /// The face `i` is opposite to the vertex `3 - i`.
    pub fn face(&self, i: usize) -> Triangle {
        let [a, b, c] = TETRAHEDRON_FACES[i];
        let pts = self.vertices();
        Triangle::new(pts[a], pts[b], pts[c])
    }

    /// Returns the i-th edge of this tetrahedron.
    ///
    /// The 0-st edge is the segment AB.
    /// The 1-st edge is the segment AC.
    /// The 2-nd edge is the segment BC.
    /// The 3-rd edge is the segment AD.
    /// The 4-th edge is the segment BD.
    /// The 5-th edge is the segment CD.
    pub fn edge(&self, i: usize) -> Segment {
        let [a, b] = TETRAHEDRON_EDGES[i];
        Segment::new(self.vertices()[a], self.vertices()[b])
    }

    /// Computes the volume of this tetrahedron.
    #[inline]
    pub fn volume(&self) -> Real {
        self.signed_volume().abs()
    }

    /// Computes the signed volume of this tetrahedron.
    ///
    /// If it is positive, `p4` is on the half-space pointed by the normal of the oriented triangle
    /// `(p1, p2, p3)`.
    #[inline]
    pub fn signed_volume(&self) -> Real {
        let p1p2 = self.b - self.a;
        let p1p3 = self.c - self.a;
        let p1p4 = self.d - self.a;

        let mat = Matrix::new(
            p1p2[0], p1p3[0], p1p4[0], p1p2[1], p1p3[1], p1p4[1], p1p2[2], p1p3[2], p1p4[2],
        );

        mat.determinant() / 6.0
    }

    /// The point with the given barycentric coordinates.
    pub fn point_from_barycentric(&self, bcoords: &BarycentricCoordinates<4>) -> Point<Real> {
        self.a * bcoords[0]
            + self.b.coords * bcoords[1]
            + self.c.coords * bcoords[2]
            + self.d.coords * bcoords[3]
    }

    /// Computes the barycentric coordinates of the given point in the coordinate system of this
    /// tetrahedron.
    ///
    /// Returns `None` if this tetrahedron is degenerate.
    pub fn barycentric_coordinates(&self, p: &Point<Real>) -> Option<BarycentricCoordinates<4>> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        let ad = self.d - self.a;
        let m = Matrix::new(ab.x, ac.x, ad.x, ab.y, ac.y, ad.y, ab.z, ac.z, ad.z);

        m.try_inverse().map(|im| {
            let bcoords = im * (p - self.a);
            BarycentricCoordinates::<4>::new(
                1.0 - bcoords.x - bcoords.y - bcoords.z,
                bcoords.x,
                bcoords.y,
                bcoords.z,
            )
        })
    }
}

impl Simplex for Tetrahedron {
    const DIM: usize = 3;

    fn measure(&self) -> Real {
        self.volume()
    }
}
