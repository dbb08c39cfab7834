//! Ordering of the triangle-tetrahedron intersection points into a polygon.

use crate::math::Real;
use crate::query::simplex_intersection::{
    IntersectionPoint23, IntersectionPolygon, Orientation, Prolongation,
};
use crate::shape::reference_simplex::TETRAHEDRON_EDGE_FACES;
use ordered_float::OrderedFloat;
use smallvec::SmallVec;

/// Number of rows of the tracing table: four tetrahedron faces and three triangle edges.
const TRACING_ROWS: usize = 7;

/// Parity of the permutation `[p, q, r, s]` for the tetrahedron edge `(p, q)`, where `r < s`
/// are the two remaining nodes.
const TETRAHEDRON_EDGE_PARITIES: [usize; 6] = [0, 1, 0, 0, 1, 0];

/// Incoming and outgoing triangle edges at each triangle vertex, following the counter-clockwise
/// boundary `0 → 1 → 2 → 0`.
const TRIANGLE_VERTEX_EDGES: [(usize, usize); 3] = [(1, 0), (0, 2), (2, 1)];

type Prolongations = SmallVec<[Prolongation; 8]>;

/// The kind of a point for the purpose of the graph walk.
///
/// Any other combination of topologies cannot be placed in the tracing table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum TracedPoint {
    /// A triangle edge crossing a tetrahedron face.
    EdgeFace { edge: usize, face: usize },
    /// A tetrahedron edge crossing the triangle interior.
    InteriorEdge { edge: usize },
    /// A triangle vertex inside of the tetrahedron.
    VertexInterior { vertex: usize },
}

impl TracedPoint {
    pub fn classify(point: &IntersectionPoint23) -> Option<Self> {
        let (a, b) = (point.topology_a, point.topology_b);

        match (a.dim, b.dim) {
            (1, 2) if point.orientation != Orientation::Degenerate => Some(TracedPoint::EdgeFace {
                edge: a.index,
                face: b.index,
            }),
            (2, 1) => Some(TracedPoint::InteriorEdge { edge: b.index }),
            (0, 3) => Some(TracedPoint::VertexInterior { vertex: a.index }),
            _ => None,
        }
    }
}

/// Orders the points of `polygon` counter-clockwise around the triangle normal and fills its
/// prolongations.
///
/// `tetrahedron_parity` is `1` if the tetrahedron is negatively oriented and `0` otherwise.
/// Polygons flagged as pathological, or for which the graph walk fails, are traced with a
/// convex hull instead.
pub(crate) fn trace_polygon(polygon: &mut IntersectionPolygon, tetrahedron_parity: usize, eps: Real) {
    if polygon.points.len() < 3 {
        return;
    }

    if !polygon.pathological {
        match graph_walk(&polygon.points, tetrahedron_parity) {
            Some((points, prolongations)) => {
                polygon.points = points;
                polygon.prolongations = prolongations;
                return;
            }
            None => {
                log::debug!(
                    "Polygon graph walk failed on {} points, falling back to the convex hull.",
                    polygon.points.len()
                );
                polygon.pathological = true;
            }
        }
    }

    let (points, prolongations) = convex_hull(&polygon.points, eps);
    polygon.points = points;
    polygon.prolongations = prolongations;
}

/// Builds the tracing table and follows it.
///
/// Row `r < 4` is the tetrahedron face `r`, row `4 + s` is the triangle edge `s`. An entry
/// `table[r] = (next, i)` means that the boundary arriving along the entity `r` reaches the
/// point `i` and leaves along the entity `next`.
fn graph_walk(
    points: &[IntersectionPoint23],
    tetrahedron_parity: usize,
) -> Option<(Vec<IntersectionPoint23>, Prolongations)> {
    let mut table: [Option<(usize, usize)>; TRACING_ROWS] = [None; TRACING_ROWS];

    for (i, point) in points.iter().enumerate() {
        match TracedPoint::classify(point)? {
            TracedPoint::EdgeFace { edge, face } => {
                let o = point.orientation.parity()?;

                if (edge + face + o + tetrahedron_parity) % 2 == 0 {
                    table[face] = Some((4 + edge, i));
                } else {
                    table[4 + edge] = Some((face, i));
                }
            }
            TracedPoint::InteriorEdge { edge } => {
                let o = point.orientation.parity()?;
                let [fc, fd] = TETRAHEDRON_EDGE_FACES[edge];

                if (TETRAHEDRON_EDGE_PARITIES[edge] + tetrahedron_parity + o) % 2 == 0 {
                    table[fd] = Some((fc, i));
                } else {
                    table[fc] = Some((fd, i));
                }
            }
            TracedPoint::VertexInterior { vertex } => {
                let (incoming, outgoing) = TRIANGLE_VERTEX_EDGES[vertex];

                if table[4 + incoming].is_none() {
                    table[4 + incoming] = Some((4 + outgoing, i));
                }
            }
        }
    }

    let start = table.iter().position(|row| row.is_some())?;
    let mut row = start;
    let mut ordered = Vec::with_capacity(points.len());
    let mut prolongations = Prolongations::new();

    loop {
        let (next, i) = table[row]?;
        ordered.push(points[i]);
        prolongations.push(Prolongation::from_row(next));
        row = next;

        if row == start {
            break;
        }

        if ordered.len() > TRACING_ROWS {
            return None;
        }
    }

    if ordered.len() != points.len() {
        return None;
    }

    Some((ordered, prolongations))
}

fn cross(
    o: &IntersectionPoint23,
    a: &IntersectionPoint23,
    b: &IntersectionPoint23,
) -> Real {
    let (ox, oy) = (o.bcoords_a[1], o.bcoords_a[2]);
    (a.bcoords_a[1] - ox) * (b.bcoords_a[2] - oy) - (a.bcoords_a[2] - oy) * (b.bcoords_a[1] - ox)
}

fn is_close(a: &IntersectionPoint23, b: &IntersectionPoint23, eps: Real) -> bool {
    (a.bcoords_a - b.bcoords_a).amax() <= eps
}

/// Orders the points with a monotone-chain convex hull in the barycentric plane of the triangle.
///
/// Near-duplicate points are removed. The prolongations list every triangle edge and every
/// tetrahedron face containing a side of the hull, except the tetrahedron face the whole
/// polygon lies on, if any.
fn convex_hull(
    points: &[IntersectionPoint23],
    eps: Real,
) -> (Vec<IntersectionPoint23>, Prolongations) {
    let mut sorted = points.to_vec();
    sorted.sort_by_key(|pt| (OrderedFloat(pt.bcoords_a[1]), OrderedFloat(pt.bcoords_a[2])));
    sorted.dedup_by(|a, b| is_close(a, b, eps));

    if sorted.len() > 2 && is_close(&sorted[0], &sorted[sorted.len() - 1], eps) {
        let _ = sorted.pop();
    }

    let hull = if sorted.len() <= 2 {
        sorted
    } else {
        let mut hull: Vec<IntersectionPoint23> = Vec::with_capacity(sorted.len() + 1);

        // Lower chain.
        for pt in &sorted {
            while hull.len() >= 2 && cross(&hull[hull.len() - 2], &hull[hull.len() - 1], pt) <= 0.0
            {
                let _ = hull.pop();
            }
            hull.push(*pt);
        }

        // Upper chain.
        let lower_len = hull.len() + 1;
        for pt in sorted.iter().rev().skip(1) {
            while hull.len() >= lower_len
                && cross(&hull[hull.len() - 2], &hull[hull.len() - 1], pt) <= 0.0
            {
                let _ = hull.pop();
            }
            hull.push(*pt);
        }

        // The first point was pushed again at the end of the upper chain.
        let _ = hull.pop();
        hull
    };

    let content_coordinate =
        (0..4).find(|k| hull.iter().filter(|pt| pt.bcoords_b[*k] < eps).count() > 2);
    let n_sides = if hull.len() == 2 { 1 } else { hull.len() };
    let mut prolongations = Prolongations::new();

    if hull.len() >= 2 {
        for i in 0..n_sides {
            let (p, q) = (&hull[i], &hull[(i + 1) % hull.len()]);

            for j in 0..3 {
                if p.bcoords_a[j] < eps && q.bcoords_a[j] < eps {
                    prolongations.push(Prolongation::TriangleEdge(2 - j));
                }
            }

            for k in 0..4 {
                if Some(k) != content_coordinate && p.bcoords_b[k] < eps && q.bcoords_b[k] < eps {
                    prolongations.push(Prolongation::TetrahedronFace(3 - k));
                }
            }
        }
    }

    (hull, prolongations)
}
