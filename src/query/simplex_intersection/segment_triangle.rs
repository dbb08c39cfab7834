use crate::math::{BarycentricCoordinates, Point, Real};
use crate::query::simplex_intersection::{
    ComputeIntersection, IntersectionPoint12, IntersectionResult, IntersectionTolerances,
    Orientation, PluckerTable,
};
use crate::query::IntersectionError;
use crate::shape::reference_simplex::{TRIANGLE_EDGES, TRIANGLE_EDGE_SIGNS};
use crate::shape::{Segment, Simplex, Topology, Triangle};
use arrayvec::ArrayVec;
use ordered_float::OrderedFloat;

/// Snaps a parameter along a segment to its endpoints.
///
/// Returns the snapped parameter and the topology of the segment it lies on.
fn snap_parameter(t: Real, eps: Real) -> (Real, Topology) {
    if t.abs() <= eps {
        (0.0, Topology::vertex(0))
    } else if (t - 1.0).abs() <= eps {
        (1.0, Topology::vertex(1))
    } else {
        (t, Topology::edge(0))
    }
}

/// A segment-triangle intersection expressed with lines of a [`PluckerTable`].
///
/// This is the building block of every other intersection: the segment-tetrahedron uses one
/// slot per face, the triangle-triangle one slot per edge, and the triangle-tetrahedron one
/// slot per tetrahedron edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct SegmentTriangleSlot {
    /// The line of the segment.
    pub segment: usize,
    /// The lines of the triangle edges, in the reference order.
    pub triangle: [usize; 3],
}

impl SegmentTriangleSlot {
    pub fn new(segment: usize, triangle: [usize; 3]) -> Self {
        Self { segment, triangle }
    }

    fn triangle_vertices(&self, table: &PluckerTable) -> [Point<Real>; 3] {
        let [v0, v1] = *table.endpoints(self.triangle[0]);
        let [_, v2] = *table.endpoints(self.triangle[1]);
        [v0, v1, v2]
    }

    /// The Plucker products between the segment and each triangle edge.
    ///
    /// The product with the edge 1 is negated so the three edges follow the cyclic boundary of
    /// the triangle: all three products share the same sign iff the segment line crosses the
    /// triangle interior.
    fn signed_products(&self, table: &mut PluckerTable) -> [Real; 3] {
        [0, 1, 2].map(|k| TRIANGLE_EDGE_SIGNS[k] * table.product(self.segment, self.triangle[k]))
    }

    fn is_regular(w: &[Real; 3], eps: Real) -> bool {
        w.iter().all(|w| *w > eps) || w.iter().all(|w| *w < -eps)
    }

    /// The crossing point of the segment line with the triangle when the products share the same
    /// strict sign.
    ///
    /// The segment parameter is snapped to the endpoints but not clipped.
    fn regular_point(
        &self,
        table: &mut PluckerTable,
        w: &[Real; 3],
        tolerances: &IntersectionTolerances,
    ) -> IntersectionPoint12 {
        let bcoords_b = BarycentricCoordinates::<3>::new(w[2], w[1], w[0]) / (w[0] + w[1] + w[2]);
        let vertices = self.triangle_vertices(table);
        let global = vertices[0] * bcoords_b[0]
            + vertices[1].coords * bcoords_b[1]
            + vertices[2].coords * bcoords_b[2];

        let origin = table.endpoints(self.segment)[0];
        let dir = table.coordinates(self.segment).direction;
        let i = dir.iamax();
        assert!(
            dir[i] != 0.0,
            "The segment direction has no dominant component: {:?}.",
            dir
        );

        let t = (global[i] - origin[i]) / dir[i];
        let (t, topology_a) = snap_parameter(t, tolerances.geometry_epsilon);

        IntersectionPoint12 {
            bcoords_a: BarycentricCoordinates::<2>::new(1.0 - t, t),
            bcoords_b,
            topology_a,
            topology_b: Topology::face(0),
            orientation: if w[0] > 0.0 {
                Orientation::Against
            } else {
                Orientation::Along
            },
            pathological: false,
        }
    }

    /// The intersection between the segment line and the `k`-th triangle edge, when both lines
    /// are coplanar.
    ///
    /// Returns `None` if the lines are parallel or if they cross outside of the edge.
    fn degenerate_point(
        &self,
        table: &mut PluckerTable,
        k: usize,
        tolerances: &IntersectionTolerances,
    ) -> Option<IntersectionPoint12> {
        let [n0, n1] = TRIANGLE_EDGES[k];
        let origin = table.endpoints(self.segment)[0];
        let start = table.endpoints(self.triangle[k])[0];
        let u = table.coordinates(self.segment).direction;
        let v = table.coordinates(self.triangle[k]).direction;
        let offset = start - origin;

        // Solve `origin + s u = start + t v` on the two axes giving the largest 2×2 minor.
        let det = -u.cross(&v);
        let m = det.iamax();

        if det[m].abs() <= tolerances.rounding_epsilon {
            return None;
        }

        let (i, j) = ((m + 1) % 3, (m + 2) % 3);
        let s = (-offset[i] * v[j] + offset[j] * v[i]) / det[m];
        let t = (-offset[i] * u[j] + offset[j] * u[i]) / det[m];

        let eps = tolerances.geometry_epsilon;
        if t < -eps || t > 1.0 + eps {
            return None;
        }

        let (s, topology_a) = snap_parameter(s, eps);
        let (t, topology_b) = match snap_parameter(t, eps) {
            (t, Topology { dim: 0, index: 0 }) => (t, Topology::vertex(n0)),
            (t, Topology { dim: 0, .. }) => (t, Topology::vertex(n1)),
            (t, _) => (t, Topology::edge(k)),
        };

        let mut bcoords_b = BarycentricCoordinates::<3>::zeros();
        bcoords_b[n0] = 1.0 - t;
        bcoords_b[n1] = t;

        Some(IntersectionPoint12 {
            bcoords_a: BarycentricCoordinates::<2>::new(1.0 - s, s),
            bcoords_b,
            topology_a,
            topology_b,
            orientation: Orientation::Degenerate,
            pathological: true,
        })
    }

    /// Computes the intersection point between the segment *line* and the triangle.
    ///
    /// The segment parameter of the result is not restricted to `[0, 1]`: callers clip it.
    /// If `resolve_degenerate` is `false`, coplanar configurations yield no point.
    pub fn compute(
        &self,
        table: &mut PluckerTable,
        tolerances: &IntersectionTolerances,
        resolve_degenerate: bool,
    ) -> Option<IntersectionPoint12> {
        let eps = tolerances.rounding_epsilon;
        let w = self.signed_products(table);

        if Self::is_regular(&w, eps) {
            return Some(self.regular_point(table, &w, tolerances));
        }

        if !resolve_degenerate {
            return None;
        }

        for k in 0..3 {
            if w[k].abs() <= eps {
                if let Some(point) = self.degenerate_point(table, k, tolerances) {
                    log::debug!(
                        "Degenerate segment-triangle intersection on the edge {} (products: {:?}).",
                        k,
                        w
                    );
                    return Some(point);
                }
            }
        }

        None
    }

    /// Computes the intersection between the segment and the triangle.
    ///
    /// Unlike [`Self::compute`], the result is restricted to the segment, and a segment lying in
    /// the plane of the triangle yields the whole overlap (up to two points).
    pub fn compute_final(
        &self,
        table: &mut PluckerTable,
        tolerances: &IntersectionTolerances,
    ) -> IntersectionResult<2, 3> {
        let eps = tolerances.geometry_epsilon;
        let w = self.signed_products(table);

        if Self::is_regular(&w, tolerances.rounding_epsilon) {
            let point = self.regular_point(table, &w, tolerances);
            let t = point.parameter();
            let mut points = ArrayVec::new();

            if t >= -eps && t <= 1.0 + eps {
                points.push(point);
            }

            return IntersectionResult::from_points(points);
        }

        let mut hits: ArrayVec<IntersectionPoint12, 3> = ArrayVec::new();

        for k in 0..3 {
            if w[k].abs() <= tolerances.rounding_epsilon {
                if let Some(point) = self.degenerate_point(table, k, tolerances) {
                    hits.push(point);
                }
            }
        }

        if hits.is_empty() {
            return IntersectionResult::empty();
        }

        log::debug!(
            "Degenerate segment-triangle intersection with {} edge hits (products: {:?}).",
            hits.len(),
            w
        );

        hits.sort_by_key(|pt| OrderedFloat(pt.parameter()));

        let mut merged: ArrayVec<IntersectionPoint12, 3> = ArrayVec::new();
        for hit in hits {
            if merged
                .last()
                .map_or(true, |last| (hit.parameter() - last.parameter()).abs() > eps)
            {
                merged.push(hit);
            }
        }

        let points = match merged.as_slice() {
            [single] => {
                let mut points = ArrayVec::new();
                if (0.0..=1.0).contains(&single.parameter()) {
                    points.push(*single);
                }
                points
            }
            [first, .., last] => IntersectionPoint12::clip_to_segment(*first, *last, eps),
            [] => ArrayVec::new(),
        };

        IntersectionResult::from_points(points)
    }
}

/// The intersection between a segment and a triangle.
///
/// # Example
///
/// ```
/// # use simplex3d::na::Point3;
/// # use simplex3d::shape::{Segment, Triangle};
/// # use simplex3d::query::{ComputeIntersection, IntersectionTolerances, SegmentTriangleIntersector};
/// let segment = Segment::new(Point3::new(0.2, 0.2, -1.0), Point3::new(0.2, 0.2, 1.0));
/// let triangle = Triangle::new(
///     Point3::origin(),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// );
///
/// let mut intersector =
///     SegmentTriangleIntersector::new(&segment, &triangle, IntersectionTolerances::default());
/// let result = intersector.compute();
/// assert_eq!(result.len(), 1);
/// assert!((result.points[0].parameter() - 0.5).abs() < 1.0e-12);
/// ```
#[derive(Clone, Debug)]
pub struct SegmentTriangleIntersector {
    table: PluckerTable,
    slot: SegmentTriangleSlot,
    tolerances: IntersectionTolerances,
}

impl SegmentTriangleIntersector {
    /// Prepares the intersection between a segment and a triangle.
    pub fn new(segment: &Segment, triangle: &Triangle, tolerances: IntersectionTolerances) -> Self {
        let mut table = PluckerTable::new();
        let segment = table.add_segment(segment);
        let edges = table.add_triangle_edges(triangle);

        Self {
            table,
            slot: SegmentTriangleSlot::new(segment, edges),
            tolerances,
        }
    }

    /// Prepares the intersection after checking the tolerances and the simplices.
    pub fn try_new(
        segment: &Segment,
        triangle: &Triangle,
        tolerances: IntersectionTolerances,
    ) -> Result<Self, IntersectionError> {
        tolerances.validate()?;
        segment.check_non_degenerate(tolerances.geometry_epsilon)?;
        triangle.check_non_degenerate(tolerances.geometry_epsilon)?;
        Ok(Self::new(segment, triangle, tolerances))
    }

    /// The tolerances used by this intersector.
    pub fn tolerances(&self) -> &IntersectionTolerances {
        &self.tolerances
    }

    /// The Plucker coordinates and products computed so far.
    pub fn plucker_table(&self) -> &PluckerTable {
        &self.table
    }

    /// The intersection point between the segment line and the triangle.
    ///
    /// The parameter of the point along the segment is not clipped to `[0, 1]`.
    pub fn compute_point(&mut self, resolve_degenerate: bool) -> Option<IntersectionPoint12> {
        self.slot
            .compute(&mut self.table, &self.tolerances, resolve_degenerate)
    }

    /// The intersection between the segment and the triangle.
    pub fn compute_final(&mut self) -> IntersectionResult<2, 3> {
        self.slot.compute_final(&mut self.table, &self.tolerances)
    }
}

impl ComputeIntersection for SegmentTriangleIntersector {
    type Output = IntersectionResult<2, 3>;

    fn compute(&mut self) -> Self::Output {
        self.compute_final()
    }
}

/// Computes the intersection between a segment and a triangle.
pub fn intersection_segment_triangle(
    segment: &Segment,
    triangle: &Triangle,
    tolerances: IntersectionTolerances,
) -> IntersectionResult<2, 3> {
    SegmentTriangleIntersector::new(segment, triangle, tolerances).compute_final()
}
