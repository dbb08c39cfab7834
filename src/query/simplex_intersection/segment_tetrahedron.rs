use crate::query::simplex_intersection::{
    ComputeIntersection, IntersectionPoint13, IntersectionResult, IntersectionTolerances,
    PluckerTable, ResolvedSides, SegmentTriangleSlot,
};
use crate::query::IntersectionError;
use crate::shape::reference_simplex::{
    TETRAHEDRON_EDGE_FACES, TETRAHEDRON_FACES, TETRAHEDRON_FACE_EDGES, TETRAHEDRON_NODE_FACES,
};
use crate::shape::{Segment, Simplex, Tetrahedron};
use arrayvec::ArrayVec;

/// A segment-tetrahedron intersection expressed with lines of a [`PluckerTable`].
///
/// The face `f` of the tetrahedron is handled by the `f`-th segment-triangle slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct SegmentTetrahedronSlot {
    faces: [SegmentTriangleSlot; 4],
}

impl SegmentTetrahedronSlot {
    /// A slot intersecting the line `segment` with the tetrahedron whose edge lines are `edges`.
    pub fn new(segment: usize, edges: [usize; 6]) -> Self {
        Self {
            faces: TETRAHEDRON_FACE_EDGES
                .map(|face_edges| SegmentTriangleSlot::new(segment, face_edges.map(|e| edges[e]))),
        }
    }

    /// Computes the intersection between the segment and the tetrahedron.
    ///
    /// The points are sorted along the segment.
    pub fn compute(
        &self,
        table: &mut PluckerTable,
        tolerances: &IntersectionTolerances,
    ) -> IntersectionResult<2, 4> {
        let mut hits: ArrayVec<IntersectionPoint13, 2> = ArrayVec::new();
        let mut resolved = ResolvedSides::new();

        for (f, face) in self.faces.iter().enumerate() {
            if hits.is_full() {
                break;
            }

            if resolved.contains(f) {
                continue;
            }

            if let Some(hit) = face.compute(table, tolerances, true) {
                let hit = hit.lift_b::<4>(&TETRAHEDRON_FACES[f]);

                if hit.pathological {
                    log::debug!(
                        "Degenerate segment-tetrahedron hit on the face {}: {:?}.",
                        f,
                        hit.topology_b
                    );

                    // Faces sharing the entity hit would report the same point.
                    match hit.topology_b.dim {
                        0 => resolved.insert_all(TETRAHEDRON_NODE_FACES[hit.topology_b.index]),
                        1 => resolved.insert_all(TETRAHEDRON_EDGE_FACES[hit.topology_b.index]),
                        _ => {}
                    }
                }

                hits.push(hit);
            }
        }

        let points = match hits.as_slice() {
            [single] => {
                let mut points = ArrayVec::new();
                if (0.0..=1.0).contains(&single.parameter()) {
                    points.push(*single);
                }
                points
            }
            [first, second] => {
                IntersectionPoint13::clip_to_segment(*first, *second, tolerances.geometry_epsilon)
            }
            _ => ArrayVec::new(),
        };

        IntersectionResult::from_points(points)
    }
}

/// The intersection between a segment and a tetrahedron.
///
/// The result contains either no point, a single point if the segment touches the tetrahedron
/// or if it only has one endpoint on its boundary, or the two endpoints of the part of the
/// segment inside of the tetrahedron.
#[derive(Clone, Debug)]
pub struct SegmentTetrahedronIntersector {
    table: PluckerTable,
    slot: SegmentTetrahedronSlot,
    tolerances: IntersectionTolerances,
}

impl SegmentTetrahedronIntersector {
    /// Prepares the intersection between a segment and a tetrahedron.
    pub fn new(
        segment: &Segment,
        tetrahedron: &Tetrahedron,
        tolerances: IntersectionTolerances,
    ) -> Self {
        let mut table = PluckerTable::new();
        let segment = table.add_segment(segment);
        let edges = table.add_tetrahedron_edges(tetrahedron);

        Self {
            table,
            slot: SegmentTetrahedronSlot::new(segment, edges),
            tolerances,
        }
    }

    /// Prepares the intersection after checking the tolerances and the simplices.
    pub fn try_new(
        segment: &Segment,
        tetrahedron: &Tetrahedron,
        tolerances: IntersectionTolerances,
    ) -> Result<Self, IntersectionError> {
        tolerances.validate()?;
        segment.check_non_degenerate(tolerances.geometry_epsilon)?;
        tetrahedron.check_non_degenerate(tolerances.geometry_epsilon)?;
        Ok(Self::new(segment, tetrahedron, tolerances))
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

impl ComputeIntersection for SegmentTetrahedronIntersector {
    type Output = IntersectionResult<2, 4>;

    fn compute(&mut self) -> Self::Output {
        self.slot.compute(&mut self.table, &self.tolerances)
    }
}

/// Computes the intersection between a segment and a tetrahedron.
pub fn intersection_segment_tetrahedron(
    segment: &Segment,
    tetrahedron: &Tetrahedron,
    tolerances: IntersectionTolerances,
) -> IntersectionResult<2, 4> {
    SegmentTetrahedronIntersector::new(segment, tetrahedron, tolerances).compute()
}
