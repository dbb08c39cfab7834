use crate::math::{Point, Real, Vector};

/// The Plucker coordinates of an oriented line.
///
/// The line passing through `a` and then `b` is represented by its direction `u = b - a`
/// and its moment `ω = u × a`. The [`Plucker::product`] of two lines is zero iff they are
/// coplanar (parallel or intersecting), and its sign tells on which side one line passes
/// around the other.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Plucker {
    /// The direction of the line (not normalized).
    pub direction: Vector<Real>,
    /// The moment of the line about the origin.
    pub moment: Vector<Real>,
}

impl Plucker {
    /// The Plucker coordinates of the line oriented from `a` toward `b`.
    #[inline]
    pub fn new(a: &Point<Real>, b: &Point<Real>) -> Self {
        let direction = b - a;
        Self {
            direction,
            moment: direction.cross(&a.coords),
        }
    }

    /// The Plucker coordinates of the same line with the opposite orientation.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self {
            direction: -self.direction,
            moment: -self.moment,
        }
    }

    /// The permuted inner product of two Plucker coordinates.
    ///
    /// For two lines `(a1, u1)` and `(a2, u2)` this equals `det(u1, u2, a2 - a1)`.
    /// It is symmetric, and reversing one of the lines flips its sign.
    #[inline]
    pub fn product(&self, other: &Plucker) -> Real {
        self.direction.dot(&other.moment) + other.direction.dot(&self.moment)
    }
}
