//! Intersections between segments, triangles and tetrahedra.
//!
//! Every intersection is reduced to segment-triangle intersections computed with the signs of
//! Plucker products. The lines of both simplices are registered once in a [`PluckerTable`] so
//! sub-intersections sharing a pair of lines share the same product, which keeps the results
//! consistent across neighboring sub-intersections.

pub use self::intersection_point::{
    IntersectionPoint, IntersectionPoint12, IntersectionPoint13, IntersectionPoint22,
    IntersectionPoint23, Orientation,
};
pub use self::intersection_result::{IntersectionPolygon, IntersectionResult, Prolongation};
pub use self::plucker_table::{PluckerTable, MAX_LINES};
pub use self::segment_tetrahedron::{
    intersection_segment_tetrahedron, SegmentTetrahedronIntersector,
};
pub use self::segment_triangle::{intersection_segment_triangle, SegmentTriangleIntersector};
pub use self::tolerances::IntersectionTolerances;
pub use self::triangle_tetrahedron::{
    intersection_triangle_tetrahedron, TriangleTetrahedronIntersector,
};
pub use self::triangle_triangle::{intersection_triangle_triangle, TriangleTriangleIntersector};

pub(crate) use self::resolved_sides::ResolvedSides;
pub(crate) use self::segment_tetrahedron::SegmentTetrahedronSlot;
pub(crate) use self::segment_triangle::SegmentTriangleSlot;

mod intersection_point;
mod intersection_result;
mod plucker_table;
mod polygon_tracing;
mod resolved_sides;
mod segment_tetrahedron;
mod segment_triangle;
mod tolerances;
mod triangle_tetrahedron;
mod triangle_triangle;

/// An intersection query between two simplices.
pub trait ComputeIntersection {
    /// The result of the query.
    type Output;

    /// Runs the query.
    ///
    /// Plucker products computed by a previous call are reused.
    fn compute(&mut self) -> Self::Output;
}
