use crate::helpers::unit_triangle;
use na::{Point3, Vector2, Vector3};
use simplex3d::query::{
    self, ComputeIntersection, IntersectionError, IntersectionTolerances,
    SegmentTriangleIntersector,
};
use simplex3d::shape::{Segment, Topology, Triangle};

#[test]
fn segment_starting_on_a_triangle_vertex() {
    let seg = Segment::new(Point3::origin(), Point3::new(0.0, 0.0, 1.0));
    let result =
        query::intersection_segment_triangle(&seg, &unit_triangle(), IntersectionTolerances::default());

    assert_eq!(result.len(), 1);
    let point = &result.points[0];
    assert_eq!(point.topology_a, Topology::vertex(0));
    assert_eq!(point.topology_b, Topology::vertex(0));
    assert_eq!(point.bcoords_a, Vector2::new(1.0, 0.0));
    assert_eq!(point.bcoords_b, Vector3::new(1.0, 0.0, 0.0));
    assert!(result.pathological);
}

#[test]
fn segment_ending_on_the_triangle() {
    let seg = Segment::new(Point3::new(0.25, 0.25, 1.0), Point3::new(0.25, 0.25, 0.0));
    let result =
        query::intersection_segment_triangle(&seg, &unit_triangle(), IntersectionTolerances::default());

    assert_eq!(result.len(), 1);
    assert!(!result.pathological);
    assert_eq!(result.points[0].topology_a, Topology::vertex(1));
    assert_eq!(result.points[0].topology_b, Topology::face(0));
    assert_relative_eq!(
        result.points[0].bcoords_b,
        Vector3::new(0.5, 0.25, 0.25),
        epsilon = 1.0e-12
    );
}

#[test]
fn triangle_vertex_order_does_not_move_the_point() {
    let seg = Segment::new(Point3::new(0.3, 0.1, -2.0), Point3::new(0.1, 0.3, 3.0));
    let tri = unit_triangle();
    let vertices = tri.vertices();
    let mut reference = None;

    for perm in [[0, 1, 2], [1, 0, 2], [1, 2, 0], [0, 2, 1], [2, 0, 1], [2, 1, 0]] {
        let permuted = Triangle::new(vertices[perm[0]], vertices[perm[1]], vertices[perm[2]]);
        let result =
            query::intersection_segment_triangle(&seg, &permuted, IntersectionTolerances::default());
        assert_eq!(result.len(), 1);

        let point = permuted.point_from_barycentric(&result.points[0].bcoords_b);
        assert_relative_eq!(point, seg.point_from_barycentric(&result.points[0].bcoords_a), epsilon = 1.0e-12);

        let reference = *reference.get_or_insert(point);
        assert_relative_eq!(point, reference, epsilon = 1.0e-12);
    }
}

#[test]
fn unclipped_point_on_the_line() {
    let seg = Segment::new(Point3::new(0.25, 0.25, 1.0), Point3::new(0.25, 0.25, 2.0));
    let mut isec =
        SegmentTriangleIntersector::new(&seg, &unit_triangle(), IntersectionTolerances::default());

    let point = isec.compute_point(false).unwrap();
    assert_relative_eq!(point.parameter(), -1.0, epsilon = 1.0e-12);
    assert!(isec.compute().is_empty());
    assert!(isec.plucker_table().cached_product(0, 1).is_some());
}

#[test]
fn invalid_tolerances_are_rejected() {
    let seg = Segment::new(Point3::origin(), Point3::new(0.0, 0.0, 1.0));
    let tolerances = IntersectionTolerances {
        geometry_epsilon: 0.0,
        ..IntersectionTolerances::default()
    };

    let err = SegmentTriangleIntersector::try_new(&seg, &unit_triangle(), tolerances).unwrap_err();
    assert_eq!(
        err,
        IntersectionError::InvalidTolerance {
            name: "geometry_epsilon",
            value: 0.0
        }
    );

    let flat = Triangle::new(
        Point3::origin(),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(2.0, 0.0, 0.0),
    );
    let err = SegmentTriangleIntersector::try_new(&seg, &flat, IntersectionTolerances::default())
        .unwrap_err();
    assert!(matches!(err, IntersectionError::DegenerateSimplex { dim: 2, .. }));
}
