use crate::math::Real;

/// Error returned by the checked constructors of the intersection queries.
///
/// Degenerate *intersections* (parallel lines, touching vertices, coplanar faces) are never
/// errors: they are reported through the pathological flag of the results. Only invalid
/// *inputs* are rejected here.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum IntersectionError {
    /// One of the simplices has a zero (or nearly zero) measure.
    #[error("the simplex of dimension {dim} is degenerate (measure: {measure}).")]
    DegenerateSimplex {
        /// The dimension of the degenerate simplex.
        dim: usize,
        /// The measure (length, area, or volume) of the degenerate simplex.
        measure: Real,
    },
    /// A tolerance is negative, zero, or not finite.
    #[error("the tolerance `{name}` must be finite and strictly positive (got {value}).")]
    InvalidTolerance {
        /// The name of the invalid tolerance.
        name: &'static str,
        /// The value of the invalid tolerance.
        value: Real,
    },
}
