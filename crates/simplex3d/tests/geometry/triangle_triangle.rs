use crate::helpers::unit_triangle;
use na::Point3;
use simplex3d::query::{self, IntersectionTolerances};
use simplex3d::shape::{Topology, Triangle};

fn vertical_triangle() -> Triangle {
    Triangle::new(
        Point3::new(0.25, -1.0, -1.0),
        Point3::new(0.25, -1.0, 1.0),
        Point3::new(0.25, 2.0, 0.5),
    )
}

#[test]
fn coplanar_disjoint_triangles() {
    let a = unit_triangle();
    let b = Triangle::new(
        Point3::new(0.6, 0.6, 0.0),
        Point3::new(1.6, 0.6, 0.0),
        Point3::new(0.6, 1.6, 0.0),
    );

    for (a, b) in [(&a, &b), (&b, &a)] {
        let result = query::intersection_triangle_triangle(a, b, IntersectionTolerances::default());
        assert!(result.is_empty());
        assert!(!result.pathological);
    }
}

#[test]
fn crossing_triangles() {
    let a = unit_triangle();
    let b = vertical_triangle();
    let result = query::intersection_triangle_triangle(&a, &b, IntersectionTolerances::default());

    assert_eq!(result.len(), 2);
    assert!(!result.pathological);
    assert_eq!(result.points[0].topology_a, Topology::edge(0));
    assert_eq!(result.points[1].topology_a, Topology::edge(2));

    let expected = [Point3::new(0.25, 0.0, 0.0), Point3::new(0.25, 0.75, 0.0)];

    for (point, expected) in result.points.iter().zip(expected.iter()) {
        assert_eq!(point.topology_b, Topology::face(0));
        assert_relative_eq!(a.point_from_barycentric(&point.bcoords_a), *expected, epsilon = 1.0e-12);
        assert_relative_eq!(b.point_from_barycentric(&point.bcoords_b), *expected, epsilon = 1.0e-12);
    }
}

#[test]
fn crossing_triangles_swapped() {
    let a = vertical_triangle();
    let b = unit_triangle();
    let result = query::intersection_triangle_triangle(&a, &b, IntersectionTolerances::default());

    assert_eq!(result.len(), 2);
    assert!(!result.pathological);

    let mut edges: Vec<_> = result.points.iter().map(|pt| pt.topology_b).collect();
    edges.sort_by_key(|topo| topo.index);
    assert_eq!(edges, vec![Topology::edge(0), Topology::edge(2)]);

    for point in &result.points {
        assert_eq!(point.topology_a, Topology::face(0));
        assert_relative_eq!(
            a.point_from_barycentric(&point.bcoords_a),
            b.point_from_barycentric(&point.bcoords_b),
            epsilon = 1.0e-12
        );
    }
}

#[test]
fn triangles_sharing_a_vertex() {
    let a = unit_triangle();
    let b = Triangle::new(
        Point3::origin(),
        Point3::new(-1.0, 0.0, 1.0),
        Point3::new(0.0, -1.0, 1.0),
    );
    let result = query::intersection_triangle_triangle(&a, &b, IntersectionTolerances::default());

    assert_eq!(result.len(), 1);
    assert!(result.pathological);
    assert_eq!(result.points[0].topology_a, Topology::vertex(0));
    assert_eq!(result.points[0].topology_b, Topology::vertex(0));
}
