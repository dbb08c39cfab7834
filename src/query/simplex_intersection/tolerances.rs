use crate::math::Real;
use crate::query::IntersectionError;

/// Tolerances for the simplex-simplex intersection algorithms.
///
/// # Examples
///
/// ```
/// # use simplex3d::query::IntersectionTolerances;
/// // Use default tolerances (recommended for most cases)
/// let default_tol = IntersectionTolerances::default();
///
/// // Or create custom tolerances for meshes with a very different scale.
/// let custom_tol = IntersectionTolerances {
///     geometry_epsilon: 1.0e-6,
///     ..IntersectionTolerances::default()
/// };
/// assert!(custom_tol.validate().is_ok());
/// ```
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct IntersectionTolerances {
    /// Plucker products (and 2×2 determinants) with an absolute value smaller than this are
    /// considered zero.
    ///
    /// This selects between the regular computation and the resolution of degenerate cases.
    pub rounding_epsilon: Real,
    /// Barycentric coordinates and line parameters closer than this to 0 or 1 are snapped
    /// to exactly 0 or 1.
    pub geometry_epsilon: Real,
}

impl Default for IntersectionTolerances {
    fn default() -> Self {
        Self {
            rounding_epsilon: Real::EPSILON * 8.0,
            geometry_epsilon: 1.0e-9,
        }
    }
}

impl IntersectionTolerances {
    /// Checks that both tolerances are finite and strictly positive.
    pub fn validate(&self) -> Result<(), IntersectionError> {
        for (name, value) in [
            ("rounding_epsilon", self.rounding_epsilon),
            ("geometry_epsilon", self.geometry_epsilon),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(IntersectionError::InvalidTolerance { name, value });
            }
        }

        Ok(())
    }
}
