use crate::math::Real;
use crate::query::simplex_intersection::polygon_tracing::{self, TracedPoint};
use crate::query::simplex_intersection::{
    ComputeIntersection, IntersectionPoint23, IntersectionPolygon, IntersectionTolerances,
    PluckerTable, SegmentTetrahedronSlot, SegmentTriangleSlot,
};
use crate::query::IntersectionError;
use crate::shape::reference_simplex::{TETRAHEDRON_EDGES, TRIANGLE_EDGES};
use crate::shape::{Simplex, Tetrahedron, Triangle};

/// Adds `point` to `points` unless a point on the same triangle vertex or the same tetrahedron
/// vertex is already there.
fn add_point(points: &mut Vec<IntersectionPoint23>, point: IntersectionPoint23) {
    let duplicate = points.iter_mut().find(|pt| {
        (pt.topology_a.is_vertex() && pt.topology_a == point.topology_a)
            || (pt.topology_b.is_vertex() && pt.topology_b == point.topology_b)
    });

    match duplicate {
        Some(pt) => pt.pathological |= point.pathological,
        None => points.push(point),
    }
}

/// The intersection polygon between a triangle and a tetrahedron.
///
/// The polygon vertices are the intersections of the triangle edges with the tetrahedron, and
/// of the tetrahedron edges with the triangle. The nine lines involved share a single
/// [`PluckerTable`], so every Plucker product is computed at most once.
///
/// # Example
///
/// ```
/// # use simplex3d::na::Point3;
/// # use simplex3d::shape::{Tetrahedron, Triangle};
/// # use simplex3d::query::{ComputeIntersection, IntersectionTolerances, TriangleTetrahedronIntersector};
/// let tetrahedron = Tetrahedron::new(
///     Point3::origin(),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
///     Point3::new(0.0, 0.0, 1.0),
/// );
/// let triangle = Triangle::new(
///     Point3::new(-1.0, -1.0, 0.25),
///     Point3::new(3.0, -1.0, 0.25),
///     Point3::new(-1.0, 3.0, 0.25),
/// );
///
/// let mut intersector = TriangleTetrahedronIntersector::new(
///     &triangle,
///     &tetrahedron,
///     IntersectionTolerances::default(),
/// );
/// let polygon = intersector.compute();
/// assert_eq!(polygon.len(), 3);
/// assert!(!polygon.pathological);
/// assert!((polygon.area(&triangle) - 0.28125).abs() < 1.0e-12);
/// ```
#[derive(Clone, Debug)]
pub struct TriangleTetrahedronIntersector {
    table: PluckerTable,
    triangle_edges: [SegmentTetrahedronSlot; 3],
    tetrahedron_edges: [SegmentTriangleSlot; 6],
    tetrahedron_parity: usize,
    tolerances: IntersectionTolerances,
}

impl TriangleTetrahedronIntersector {
    /// Prepares the intersection between a triangle and a tetrahedron.
    pub fn new(
        triangle: &Triangle,
        tetrahedron: &Tetrahedron,
        tolerances: IntersectionTolerances,
    ) -> Self {
        let mut table = PluckerTable::new();
        let t = table.add_triangle_edges(triangle);
        let e = table.add_tetrahedron_edges(tetrahedron);

        Self {
            table,
            triangle_edges: t.map(|line| SegmentTetrahedronSlot::new(line, e)),
            tetrahedron_edges: e.map(|line| SegmentTriangleSlot::new(line, t)),
            tetrahedron_parity: (tetrahedron.signed_volume() < 0.0) as usize,
            tolerances,
        }
    }

    /// Prepares the intersection after checking the tolerances and the simplices.
    pub fn try_new(
        triangle: &Triangle,
        tetrahedron: &Tetrahedron,
        tolerances: IntersectionTolerances,
    ) -> Result<Self, IntersectionError> {
        tolerances.validate()?;
        triangle.check_non_degenerate(tolerances.geometry_epsilon)?;
        tetrahedron.check_non_degenerate(tolerances.geometry_epsilon)?;
        Ok(Self::new(triangle, tetrahedron, tolerances))
    }

    /// The tolerances used by this intersector.
    pub fn tolerances(&self) -> &IntersectionTolerances {
        &self.tolerances
    }

    /// The Plucker coordinates and products computed so far.
    pub fn plucker_table(&self) -> &PluckerTable {
        &self.table
    }

    /// Computes the unordered intersection points.
    ///
    /// Points that cannot be ordered by the graph walk are flagged as pathological.
    pub fn compute_points(&mut self) -> IntersectionPolygon {
        let mut points = Vec::new();

        for (s, slot) in self.triangle_edges.iter().enumerate() {
            let result = slot.compute(&mut self.table, &self.tolerances);

            for point in result.points {
                add_point(&mut points, point.lift_a::<3>(&TRIANGLE_EDGES[s]));
            }
        }

        for (k, slot) in self.tetrahedron_edges.iter().enumerate() {
            let Some(point) = slot.compute(&mut self.table, &self.tolerances, false) else {
                continue;
            };

            if !(0.0..=1.0).contains(&point.parameter()) {
                continue;
            }

            let mut point = point.switch().lift_b::<4>(&TETRAHEDRON_EDGES[k]);

            if point.topology_b.is_vertex() {
                point.pathological = true;
            }

            add_point(&mut points, point);
        }

        for point in &mut points {
            if TracedPoint::classify(point).is_none() {
                point.pathological = true;
            }
        }

        let pathological = points.iter().any(|pt| pt.pathological);

        if pathological {
            log::debug!(
                "Pathological triangle-tetrahedron intersection with {} points.",
                points.len()
            );
        }

        IntersectionPolygon {
            points,
            prolongations: Default::default(),
            pathological,
        }
    }

    /// The signed volume parity of the tetrahedron: `1` if it is negatively oriented.
    pub fn tetrahedron_parity(&self) -> usize {
        self.tetrahedron_parity
    }

    fn geometry_epsilon(&self) -> Real {
        self.tolerances.geometry_epsilon
    }
}

impl ComputeIntersection for TriangleTetrahedronIntersector {
    type Output = IntersectionPolygon;

    fn compute(&mut self) -> Self::Output {
        let mut polygon = self.compute_points();
        polygon_tracing::trace_polygon(
            &mut polygon,
            self.tetrahedron_parity,
            self.geometry_epsilon(),
        );
        polygon
    }
}

/// Computes the intersection polygon between a triangle and a tetrahedron.
pub fn intersection_triangle_tetrahedron(
    triangle: &Triangle,
    tetrahedron: &Tetrahedron,
    tolerances: IntersectionTolerances,
) -> IntersectionPolygon {
    TriangleTetrahedronIntersector::new(triangle, tetrahedron, tolerances).compute()
}
