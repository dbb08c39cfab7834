//! Non-persistent geometric queries.
//!
//! # General cases
//! Each supported pair of simplices has a dedicated intersector:
//!
//! * [`SegmentTriangleIntersector`] for the intersection between a segment and a triangle.
//! * [`SegmentTetrahedronIntersector`] for the intersection between a segment and a tetrahedron.
//! * [`TriangleTriangleIntersector`] for the intersection between two triangles.
//! * [`TriangleTetrahedronIntersector`] for the intersection polygon between a triangle and a
//!   tetrahedron.
//!
//! All of them implement the [`ComputeIntersection`] trait. The free functions
//! [`intersection_segment_triangle()`], [`intersection_segment_tetrahedron()`],
//! [`intersection_triangle_triangle()`], and [`intersection_triangle_tetrahedron()`] are
//! shortcuts running a single query with the given tolerances.

pub use self::error::IntersectionError;
pub use self::simplex_intersection::*;

mod error;
pub mod simplex_intersection;
