//! Numbering of the sub-entities of the reference segment, triangle and tetrahedron.
//!
//! Every sub-entity lists its nodes in increasing order. Lines (edges) are
//! oriented from their first node toward their second node.

use crate::math::{BarycentricCoordinates, Real};

/// Nodes of the triangle edges.
pub const TRIANGLE_EDGES: [[usize; 2]; 3] = [[0, 1], [0, 2], [1, 2]];

/// Edges of the triangle incident to each node.
pub const TRIANGLE_NODE_EDGES: [[usize; 2]; 3] = [[0, 1], [0, 2], [1, 2]];

/// Orientation of each triangle edge relative to the cyclic boundary `0 → 1 → 2 → 0`.
///
/// The edge `1` is stored as `(0, 2)` but traversed as `2 → 0`.
pub const TRIANGLE_EDGE_SIGNS: [Real; 3] = [1.0, -1.0, 1.0];

/// Nodes of the tetrahedron edges.
pub const TETRAHEDRON_EDGES: [[usize; 2]; 6] = [[0, 1], [0, 2], [1, 2], [0, 3], [1, 3], [2, 3]];

/// Nodes of the tetrahedron faces. The face `i` is opposite to the node `3 - i`.
pub const TETRAHEDRON_FACES: [[usize; 3]; 4] = [[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]];

/// Tetrahedron edges of each face, in the order of the face local edges.
pub const TETRAHEDRON_FACE_EDGES: [[usize; 3]; 4] = [[0, 1, 2], [0, 3, 4], [1, 3, 5], [2, 4, 5]];

/// The two faces sharing each tetrahedron edge.
pub const TETRAHEDRON_EDGE_FACES: [[usize; 2]; 6] =
    [[0, 1], [0, 2], [0, 3], [1, 2], [1, 3], [2, 3]];

/// Faces of the tetrahedron incident to each node.
pub const TETRAHEDRON_NODE_FACES: [[usize; 3]; 4] = [[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]];

/// Edges of the tetrahedron incident to each node.
pub const TETRAHEDRON_NODE_EDGES: [[usize; 3]; 4] = [[0, 1, 3], [0, 2, 4], [1, 2, 5], [3, 4, 5]];

const SEGMENT_ENTITIES: [&[&[usize]]; 2] = [&[&[0], &[1]], &[&[0, 1]]];

const TRIANGLE_ENTITIES: [&[&[usize]]; 3] = [
    &[&[0], &[1], &[2]],
    &[&[0, 1], &[0, 2], &[1, 2]],
    &[&[0, 1, 2]],
];

const TETRAHEDRON_ENTITIES: [&[&[usize]]; 4] = [
    &[&[0], &[1], &[2], &[3]],
    &[&[0, 1], &[0, 2], &[1, 2], &[0, 3], &[1, 3], &[2, 3]],
    &[&[0, 1, 2], &[0, 1, 3], &[0, 2, 3], &[1, 2, 3]],
    &[&[0, 1, 2, 3]],
];

fn entities(simplex_dim: usize) -> &'static [&'static [&'static [usize]]] {
    match simplex_dim {
        1 => &SEGMENT_ENTITIES,
        2 => &TRIANGLE_ENTITIES,
        3 => &TETRAHEDRON_ENTITIES,
        _ => panic!("Unsupported simplex dimension: {}.", simplex_dim),
    }
}

/// The nodes of the `index`-th sub-entity of dimension `entity_dim`.
pub fn entity_nodes(simplex_dim: usize, entity_dim: usize, index: usize) -> &'static [usize] {
    entities(simplex_dim)[entity_dim][index]
}

/// Finds the sub-entity whose set of nodes is exactly `nodes`.
///
/// The nodes are given as a bit mask: bit `i` is set if the node `i` belongs to the entity.
/// Returns `(entity_dim, index)`, or `None` if the mask is empty or names nodes outside of the
/// simplex.
pub fn entity_from_node_mask(simplex_dim: usize, nodes: u8) -> Option<(usize, usize)> {
    let n_nodes = nodes.count_ones() as usize;

    if n_nodes == 0 || n_nodes > simplex_dim + 1 {
        return None;
    }

    let entity_dim = n_nodes - 1;
    entities(simplex_dim)[entity_dim]
        .iter()
        .position(|entity| node_mask(entity) == nodes)
        .map(|index| (entity_dim, index))
}

/// The bit mask of a set of nodes.
pub fn node_mask(nodes: &[usize]) -> u8 {
    nodes.iter().fold(0, |mask, node| mask | (1 << node))
}

/// Linear interpolation of barycentric coordinates along a line.
///
/// `c1` and `c2` are the coordinates of two points located at the parameters `theta1` and
/// `theta2` of the line. Returns the coordinates at the parameter `theta`.
pub fn line_barycentric_interpolation<const N: usize>(
    c1: &BarycentricCoordinates<N>,
    c2: &BarycentricCoordinates<N>,
    theta1: Real,
    theta2: Real,
    theta: Real,
) -> BarycentricCoordinates<N> {
    (c2 * (theta - theta1) + c1 * (theta2 - theta)) / (theta2 - theta1)
}
