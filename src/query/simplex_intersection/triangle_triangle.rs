use crate::query::simplex_intersection::{
    ComputeIntersection, IntersectionResult, IntersectionTolerances, PluckerTable,
    ResolvedSides, SegmentTriangleSlot,
};
use crate::query::IntersectionError;
use crate::shape::reference_simplex::{TRIANGLE_EDGES, TRIANGLE_NODE_EDGES};
use crate::shape::{Simplex, Triangle};

/// The intersection between two triangles A and B.
///
/// The intersection is computed from six segment-triangle intersections: the three edges of A
/// against B, then the three edges of B against A. Two triangles in general position intersect
/// along a segment, so at most two points are reported. Coplanar triangles may overlap along a
/// polygon: only its first two points are kept and the result is flagged pathological.
#[derive(Clone, Debug)]
pub struct TriangleTriangleIntersector {
    table: PluckerTable,
    slots: [SegmentTriangleSlot; 6],
    tolerances: IntersectionTolerances,
}

impl TriangleTriangleIntersector {
    /// Prepares the intersection between two triangles.
    pub fn new(a: &Triangle, b: &Triangle, tolerances: IntersectionTolerances) -> Self {
        let mut table = PluckerTable::new();
        let edges_a = table.add_triangle_edges(a);
        let edges_b = table.add_triangle_edges(b);
        let slots = [0, 1, 2, 3, 4, 5].map(|i| {
            if i < 3 {
                SegmentTriangleSlot::new(edges_a[i], edges_b)
            } else {
                SegmentTriangleSlot::new(edges_b[i - 3], edges_a)
            }
        });

        Self {
            table,
            slots,
            tolerances,
        }
    }

    /// Prepares the intersection after checking the tolerances and the triangles.
    pub fn try_new(
        a: &Triangle,
        b: &Triangle,
        tolerances: IntersectionTolerances,
    ) -> Result<Self, IntersectionError> {
        tolerances.validate()?;
        a.check_non_degenerate(tolerances.geometry_epsilon)?;
        b.check_non_degenerate(tolerances.geometry_epsilon)?;
        Ok(Self::new(a, b, tolerances))
    }

    /// The tolerances used by this intersector.
    pub fn tolerances(&self) -> &IntersectionTolerances {
        &self.tolerances
    }

    /// The Plucker coordinates and products computed so far.
    pub fn plucker_table(&self) -> &PluckerTable {
        &self.table
    }
}

impl ComputeIntersection for TriangleTriangleIntersector {
    type Output = IntersectionResult<3, 3>;

    fn compute(&mut self) -> Self::Output {
        let mut result = IntersectionResult::empty();
        let mut resolved = ResolvedSides::new();

        for (i, slot) in self.slots.iter().enumerate() {
            if result.len() >= 2 {
                break;
            }

            if resolved.contains(i) {
                continue;
            }

            let edge_hits = slot.compute_final(&mut self.table, &self.tolerances);

            for hit in edge_hits.points {
                // Express the edge side of the hit in its own triangle.
                let hit = hit.lift_a::<3>(&TRIANGLE_EDGES[i % 3]);

                let point = if i < 3 {
                    // Points on a vertex of A would be found again by the other edge of A.
                    if hit.topology_a.is_vertex() {
                        resolved.insert_all(TRIANGLE_NODE_EDGES[hit.topology_a.index]);
                    }

                    match hit.topology_b.dim {
                        0 => resolved
                            .insert_all(TRIANGLE_NODE_EDGES[hit.topology_b.index].map(|e| e + 3)),
                        1 => resolved.insert(hit.topology_b.index + 3),
                        _ => {}
                    }

                    hit
                } else {
                    let hit = hit.switch();

                    if hit.topology_b.is_vertex() {
                        resolved
                            .insert_all(TRIANGLE_NODE_EDGES[hit.topology_b.index].map(|e| e + 3));
                    }

                    hit
                };

                if !result.push(point) {
                    log::debug!(
                        "Triangle-triangle intersection with more than two points (coplanar overlap)."
                    );
                }
            }
        }

        result
    }
}

/// Computes the intersection between two triangles.
pub fn intersection_triangle_triangle(
    a: &Triangle,
    b: &Triangle,
    tolerances: IntersectionTolerances,
) -> IntersectionResult<3, 3> {
    TriangleTriangleIntersector::new(a, b, tolerances).compute()
}
