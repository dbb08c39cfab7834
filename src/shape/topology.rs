use crate::math::{BarycentricCoordinates, Real};
use crate::shape::reference_simplex;

/// The sub-entity of a simplex on which a point lies.
///
/// A topology is the pair `(dim, index)` where `dim` is the dimension of the sub-entity
/// (0 for a vertex, 1 for an edge, 2 for a face, 3 for a tetrahedron interior) and `index`
/// its local index in the reference numbering of the simplex. The whole simplex itself is the
/// only entity of its own dimension and has the index `0`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Topology {
    /// The dimension of the sub-entity.
    pub dim: usize,
    /// The local index of the sub-entity.
    pub index: usize,
}

impl Topology {
    /// Creates a new topology tag.
    #[inline]
    pub fn new(dim: usize, index: usize) -> Self {
        Self { dim, index }
    }

    /// The topology tag of the `i`-th vertex.
    #[inline]
    pub fn vertex(i: usize) -> Self {
        Self::new(0, i)
    }

    /// The topology tag of the `i`-th edge.
    #[inline]
    pub fn edge(i: usize) -> Self {
        Self::new(1, i)
    }

    /// The topology tag of the `i`-th face.
    #[inline]
    pub fn face(i: usize) -> Self {
        Self::new(2, i)
    }

    /// Is this a vertex?
    #[inline]
    pub fn is_vertex(&self) -> bool {
        self.dim == 0
    }

    /// The nodes of this sub-entity, in a simplex with `N` nodes.
    pub fn nodes<const N: usize>(&self) -> &'static [usize] {
        reference_simplex::entity_nodes(N - 1, self.dim, self.index)
    }

    /// Maps this topology from a sub-simplex into its parent simplex.
    ///
    /// `self` is a topology of the sub-simplex with `N` nodes, and `nodes` gives, for each node
    /// of the sub-simplex, the corresponding node index of the parent simplex with `M` nodes.
    pub fn lift<const N: usize, const M: usize>(&self, nodes: &[usize; N]) -> Topology {
        let mask = self
            .nodes::<N>()
            .iter()
            .fold(0u8, |mask, local| mask | (1 << nodes[*local]));
        let (dim, index) = reference_simplex::entity_from_node_mask(M - 1, mask)
            .unwrap_or_else(|| panic!("Invalid sub-simplex nodes: {:?}.", nodes));
        Topology::new(dim, index)
    }

    /// Snaps the given barycentric coordinates and returns the most specific sub-entity they
    /// lie on.
    ///
    /// Every coordinate with an absolute value smaller or equal to `eps` is set to exactly
    /// zero. If only one coordinate remains it is set to exactly one. The result is the
    /// sub-entity whose nodes are the nodes with a non-zero coordinate. Applying this twice
    /// gives the same result.
    pub fn classify<const N: usize>(bcoords: &mut BarycentricCoordinates<N>, eps: Real) -> Self {
        let mut mask = 0u8;

        for i in 0..N {
            if bcoords[i].abs() <= eps {
                bcoords[i] = 0.0;
            } else {
                mask |= 1 << i;
            }
        }

        if mask.count_ones() == 1 {
            bcoords[mask.trailing_zeros() as usize] = 1.0;
        }

        match reference_simplex::entity_from_node_mask(N - 1, mask) {
            Some((dim, index)) => Topology::new(dim, index),
            // All the coordinates vanished. This can only happen with an invalid input.
            None => panic!("Barycentric coordinates are all zero: {:?}.", bcoords),
        }
    }
}
