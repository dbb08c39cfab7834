use crate::math::Real;
use crate::query::IntersectionError;

/// Trait implemented by the segment, the triangle, and the tetrahedron.
pub trait Simplex {
    /// The topological dimension of this simplex.
    const DIM: usize;

    /// The length, area, or volume of this simplex.
    fn measure(&self) -> Real;

    /// Is the measure of this simplex smaller than `eps`?
    fn is_degenerate(&self, eps: Real) -> bool {
        self.measure() <= eps
    }

    /// Returns an error if this simplex is degenerate.
    fn check_non_degenerate(&self, eps: Real) -> Result<(), IntersectionError> {
        if self.is_degenerate(eps) {
            Err(IntersectionError::DegenerateSimplex {
                dim: Self::DIM,
                measure: self.measure(),
            })
        } else {
            Ok(())
        }
    }
}
