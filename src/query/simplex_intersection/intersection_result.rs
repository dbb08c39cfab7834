use crate::math::Real;
use crate::query::simplex_intersection::{IntersectionPoint, IntersectionPoint23};
use crate::shape::Triangle;
use arrayvec::ArrayVec;
use smallvec::SmallVec;

/// The points of an intersection whose dimension is at most one.
///
/// This is the output of the segment-triangle, segment-tetrahedron, and triangle-triangle
/// intersections. When two points are reported they are the endpoints of the intersection
/// segment.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct IntersectionResult<const NA: usize, const NB: usize> {
    /// The intersection points.
    pub points: ArrayVec<IntersectionPoint<NA, NB>, 2>,
    /// Is any of the points pathological, or was the configuration degenerate?
    pub pathological: bool,
}

impl<const NA: usize, const NB: usize> Default for IntersectionResult<NA, NB> {
    fn default() -> Self {
        Self {
            points: ArrayVec::new(),
            pathological: false,
        }
    }
}

impl<const NA: usize, const NB: usize> IntersectionResult<NA, NB> {
    /// An empty intersection.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a result from a set of points, computing the aggregated pathological flag.
    pub fn from_points(points: ArrayVec<IntersectionPoint<NA, NB>, 2>) -> Self {
        let pathological = points.iter().any(|pt| pt.pathological);
        Self {
            points,
            pathological,
        }
    }

    /// Is the intersection empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The number of intersection points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Adds a point to this result.
    ///
    /// Returns `false` and marks the result as pathological if two points are already stored.
    pub(crate) fn push(&mut self, point: IntersectionPoint<NA, NB>) -> bool {
        self.pathological |= point.pathological;

        if self.points.try_push(point).is_err() {
            self.pathological = true;
            return false;
        }

        true
    }
}

/// A mesh entity through which an intersection polygon continues outside of the intersected
/// pair of simplices.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Prolongation {
    /// The polygon crosses the given face of the tetrahedron.
    TetrahedronFace(usize),
    /// The polygon crosses the given edge of the triangle.
    TriangleEdge(usize),
}

impl Prolongation {
    /// The prolongation associated to a row of the tracing table.
    ///
    /// Rows `0..4` are the tetrahedron faces and rows `4..7` are the triangle edges.
    pub(crate) fn from_row(row: usize) -> Self {
        if row < 4 {
            Prolongation::TetrahedronFace(row)
        } else {
            Prolongation::TriangleEdge(row - 4)
        }
    }
}

/// The intersection polygon between a triangle and a tetrahedron.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct IntersectionPolygon {
    /// The polygon vertices.
    ///
    /// With more than two points they are cyclically ordered, counter-clockwise around the
    /// normal of the triangle.
    pub points: Vec<IntersectionPoint23>,
    /// The entities crossed by the polygon boundary.
    ///
    /// After tracing, the `i`-th entry is the entity containing the polygon side starting at the
    /// `i`-th point. It is left empty if less than three points were found.
    pub prolongations: SmallVec<[Prolongation; 8]>,
    /// Was any point pathological, or did the graph walk fail?
    pub pathological: bool,
}

impl IntersectionPolygon {
    /// Is the intersection empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The number of polygon vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// The area of this polygon, given the triangle it was computed with.
    ///
    /// The area is evaluated with the shoelace formula in the barycentric plane of the triangle,
    /// then scaled to the actual triangle. It is only meaningful once the points are ordered, so
    /// any polygon with less than three points has a zero area.
    pub fn area(&self, triangle: &Triangle) -> Real {
        if self.points.len() < 3 {
            return 0.0;
        }

        let mut reference_area = 0.0;
        let n = self.points.len();

        for i in 0..n {
            let p = &self.points[i].bcoords_a;
            let q = &self.points[(i + 1) % n].bcoords_a;
            reference_area += p[1] * q[2] - q[1] * p[2];
        }

        // The reference triangle has an area of 1/2.
        reference_area.abs() * triangle.area()
    }
}
