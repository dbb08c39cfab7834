use crate::math::{Point, Real};
use crate::shape::{Segment, Tetrahedron, Triangle};
use crate::utils::Plucker;
use arrayvec::ArrayVec;

/// The maximum number of lines involved in a single intersection query.
///
/// The largest query is the triangle-tetrahedron intersection, with the 3 edges of the
/// triangle and the 6 edges of the tetrahedron.
pub const MAX_LINES: usize = 9;

static_assertions::const_assert!(MAX_LINES >= 3 + 6);

/// Products are symmetric and only stored in the upper triangle of the table.
#[inline]
fn product_entry(line1: usize, line2: usize) -> (usize, usize) {
    (line1.min(line2), line1.max(line2))
}

/// Memoized Plucker coordinates and Plucker products of the lines of an intersection query.
///
/// Every line is identified by its insertion index. Coordinates and products are computed
/// lazily the first time they are needed and shared by every sub-intersection referencing
/// the same lines. A table is owned by a single top-level intersector and lives only as long
/// as it does.
#[derive(Clone, Debug)]
pub struct PluckerTable {
    lines: ArrayVec<[Point<Real>; 2], MAX_LINES>,
    coordinates: [Option<Plucker>; MAX_LINES],
    products: [[Option<Real>; MAX_LINES]; MAX_LINES],
}

impl Default for PluckerTable {
    fn default() -> Self {
        Self::new()
    }
}

impl PluckerTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            lines: ArrayVec::new(),
            coordinates: [None; MAX_LINES],
            products: [[None; MAX_LINES]; MAX_LINES],
        }
    }

    /// Registers the line oriented from `a` toward `b` and returns its index.
    ///
    /// Panics if the table already contains [`MAX_LINES`] lines.
    pub fn add_line(&mut self, a: Point<Real>, b: Point<Real>) -> usize {
        assert!(
            !self.lines.is_full(),
            "A Plucker table cannot contain more than {} lines.",
            MAX_LINES
        );
        self.lines.push([a, b]);
        self.lines.len() - 1
    }

    /// Registers the line supporting the given segment.
    pub fn add_segment(&mut self, segment: &Segment) -> usize {
        self.add_line(segment.a, segment.b)
    }

    /// Registers the three edges of a triangle, in the reference order.
    pub fn add_triangle_edges(&mut self, triangle: &Triangle) -> [usize; 3] {
        [0, 1, 2].map(|i| self.add_segment(&triangle.edge(i)))
    }

    /// Registers the six edges of a tetrahedron, in the reference order.
    pub fn add_tetrahedron_edges(&mut self, tetrahedron: &Tetrahedron) -> [usize; 6] {
        [0, 1, 2, 3, 4, 5].map(|i| self.add_segment(&tetrahedron.edge(i)))
    }

    /// The number of lines in this table.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Does this table contain no line?
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The two points defining the `line`-th line.
    #[inline]
    pub fn endpoints(&self, line: usize) -> &[Point<Real>; 2] {
        &self.lines[line]
    }

    /// The Plucker coordinates of the `line`-th line, computed if not already known.
    pub fn coordinates(&mut self, line: usize) -> Plucker {
        let [a, b] = &self.lines[line];
        *self.coordinates[line].get_or_insert_with(|| Plucker::new(a, b))
    }

    /// The Plucker product between two lines, computed if not already known.
    ///
    /// The product is symmetric so `product(i, j)` and `product(j, i)` share the same entry.
    pub fn product(&mut self, line1: usize, line2: usize) -> Real {
        if let Some(product) = self.cached_product(line1, line2) {
            return product;
        }

        let product = self.coordinates(line1).product(&self.coordinates(line2));
        let (i, j) = product_entry(line1, line2);
        self.products[i][j] = Some(product);
        product
    }

    /// The Plucker product between two lines if it was already computed.
    pub fn cached_product(&self, line1: usize, line2: usize) -> Option<Real> {
        let (i, j) = product_entry(line1, line2);
        self.products[i][j]
    }
}
