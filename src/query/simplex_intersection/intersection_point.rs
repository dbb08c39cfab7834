use crate::math::{BarycentricCoordinates, Real};
use crate::shape::reference_simplex;
use crate::shape::Topology;
use arrayvec::ArrayVec;
use core::mem;

/// How a line crossed the plane of a triangle at an intersection point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// The line direction points toward the same side as the triangle normal.
    Along,
    /// The line direction points toward the opposite side of the triangle normal.
    Against,
    /// The point was found by the resolution of a degenerate configuration and has no
    /// reliable orientation.
    Degenerate,
}

impl Orientation {
    /// `0` for [`Orientation::Along`], `1` for [`Orientation::Against`], `None` otherwise.
    pub fn parity(self) -> Option<usize> {
        match self {
            Orientation::Along => Some(0),
            Orientation::Against => Some(1),
            Orientation::Degenerate => None,
        }
    }
}

/// A point at the intersection of two simplices A and B.
///
/// The point is given by its barycentric coordinates in both simplices (`NA` and `NB` are the
/// number of vertices of A and B) together with the most specific sub-entity of each simplex
/// containing it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct IntersectionPoint<const NA: usize, const NB: usize> {
    /// Barycentric coordinates of the point in the simplex A.
    pub bcoords_a: BarycentricCoordinates<NA>,
    /// Barycentric coordinates of the point in the simplex B.
    pub bcoords_b: BarycentricCoordinates<NB>,
    /// The sub-entity of A the point lies on.
    pub topology_a: Topology,
    /// The sub-entity of B the point lies on.
    pub topology_b: Topology,
    /// The orientation of the underlying line-triangle crossing.
    pub orientation: Orientation,
    /// Was this point obtained from a degenerate configuration?
    pub pathological: bool,
}

/// An intersection point between a segment and a triangle.
pub type IntersectionPoint12 = IntersectionPoint<2, 3>;
/// An intersection point between a segment and a tetrahedron.
pub type IntersectionPoint13 = IntersectionPoint<2, 4>;
/// An intersection point between two triangles.
pub type IntersectionPoint22 = IntersectionPoint<3, 3>;
/// An intersection point between a triangle and a tetrahedron.
pub type IntersectionPoint23 = IntersectionPoint<3, 4>;

impl<const NA: usize, const NB: usize> IntersectionPoint<NA, NB> {
    /// The same point with the roles of A and B exchanged.
    pub fn switch(&self) -> IntersectionPoint<NB, NA> {
        IntersectionPoint {
            bcoords_a: self.bcoords_b,
            bcoords_b: self.bcoords_a,
            topology_a: self.topology_b,
            topology_b: self.topology_a,
            orientation: self.orientation,
            pathological: self.pathological,
        }
    }

    /// Re-expresses the B side of this point in a parent simplex of B.
    ///
    /// `nodes[i]` is the index, in the parent simplex with `MB` vertices, of the `i`-th vertex
    /// of B. The coordinates and the topology of B are mapped accordingly.
    pub fn lift_b<const MB: usize>(&self, nodes: &[usize; NB]) -> IntersectionPoint<NA, MB> {
        let mut bcoords_b = BarycentricCoordinates::<MB>::zeros();

        for (local, node) in nodes.iter().enumerate() {
            bcoords_b[*node] = self.bcoords_b[local];
        }

        IntersectionPoint {
            bcoords_a: self.bcoords_a,
            bcoords_b,
            topology_a: self.topology_a,
            topology_b: self.topology_b.lift::<NB, MB>(nodes),
            orientation: self.orientation,
            pathological: self.pathological,
        }
    }

    /// Re-expresses the A side of this point in a parent simplex of A.
    ///
    /// This switches A and B, lifts B with [`Self::lift_b`], and switches them back.
    pub fn lift_a<const MA: usize>(&self, nodes: &[usize; NA]) -> IntersectionPoint<MA, NB> {
        self.switch().lift_b::<MA>(nodes).switch()
    }

    /// Re-runs the topology classification of the simplex B from its coordinates.
    pub fn reclassify_b(&mut self, eps: Real) {
        self.topology_b = Topology::classify(&mut self.bcoords_b, eps);
    }
}

impl<const NB: usize> IntersectionPoint<2, NB> {
    /// The parameter of this point along the segment A.
    #[inline]
    pub fn parameter(&self) -> Real {
        self.bcoords_a[1]
    }

    /// Moves this point onto the `vertex`-th endpoint of the segment A.
    fn snap_to_segment_vertex(&mut self, vertex: usize) {
        self.bcoords_a = BarycentricCoordinates::<2>::zeros();
        self.bcoords_a[vertex] = 1.0;
        self.topology_a = Topology::vertex(vertex);
    }

    /// Clips the portion of a line between two hits to the segment `[0, 1]`.
    ///
    /// The hits are reordered along the segment. A hit outside of the segment is replaced by
    /// the corresponding segment endpoint, with coordinates in B linearly interpolated between
    /// both hits. Returns no point if both hits lie on the same side outside of the segment, and
    /// a single point if the clipped portion has a zero length.
    pub(crate) fn clip_to_segment(
        mut first: Self,
        mut second: Self,
        eps: Real,
    ) -> ArrayVec<Self, 2> {
        let mut result = ArrayVec::new();

        if first.parameter() > second.parameter() {
            mem::swap(&mut first, &mut second);
        }

        let (theta1, theta2) = (first.parameter(), second.parameter());
        let (c1, c2) = (first.bcoords_b, second.bcoords_b);
        let t1 = theta1.max(0.0);
        let t2 = theta2.min(1.0);

        if t2 < t1 {
            return result;
        }

        if t1 == 0.0 {
            if theta1 < 0.0 {
                first.bcoords_b = reference_simplex::line_barycentric_interpolation(
                    &c1, &c2, theta1, theta2, t1,
                );
                first.reclassify_b(eps);
            }
            first.snap_to_segment_vertex(0);
        }

        result.push(first);

        if t1 == t2 {
            return result;
        }

        if t2 == 1.0 {
            if theta2 > 1.0 {
                second.bcoords_b = reference_simplex::line_barycentric_interpolation(
                    &c1, &c2, theta1, theta2, t2,
                );
                second.reclassify_b(eps);
            }
            second.snap_to_segment_vertex(1);
        }

        result.push(second);
        result
    }
}
