use crate::helpers::{permutations4, random_point, random_tetrahedron, regular_tetrahedron};
use na::{Point3, Vector4};
use simplex3d::query::{self, ComputeIntersection, IntersectionTolerances, SegmentTetrahedronIntersector};
use simplex3d::shape::{Segment, Tetrahedron, Topology};

#[test]
fn segment_through_the_centroid_of_a_regular_tetrahedron() {
    let tet = regular_tetrahedron();
    let seg = Segment::new(Point3::new(-1.0, -1.0, 0.0), Point3::new(1.0, 1.0, 0.0));
    let mut isec =
        SegmentTetrahedronIntersector::new(&seg, &tet, IntersectionTolerances::default());
    let result = isec.compute();

    assert_eq!(result.len(), 2);
    assert!(!result.pathological);

    let (entry, exit) = (&result.points[0], &result.points[1]);
    assert_relative_eq!(entry.parameter(), 0.25, epsilon = 1.0e-12);
    assert_relative_eq!(exit.parameter(), 0.75, epsilon = 1.0e-12);
    assert_eq!(entry.topology_b, Topology::face(3));
    assert_eq!(exit.topology_b, Topology::face(0));
    assert_relative_eq!(entry.bcoords_b, Vector4::new(0.0, 0.25, 0.25, 0.5), epsilon = 1.0e-12);
    assert_relative_eq!(exit.bcoords_b, Vector4::new(0.5, 0.25, 0.25, 0.0), epsilon = 1.0e-12);

    for point in &result.points {
        assert_relative_eq!(point.bcoords_b.sum(), 1.0, epsilon = 1.0e-12);
        assert_relative_eq!(
            tet.point_from_barycentric(&point.bcoords_b),
            seg.point_from_barycentric(&point.bcoords_a),
            epsilon = 1.0e-12
        );
    }

    // A second query on the same intersector reuses the products.
    assert_eq!(isec.compute(), result);
}

#[test]
fn tetrahedron_vertex_order_does_not_move_the_points() {
    let mut rng = oorandom::Rand64::new(42);

    for _ in 0..50 {
        let tet = random_tetrahedron(&mut rng);
        let seg = Segment::new(random_point(&mut rng), random_point(&mut rng));
        let vertices = tet.vertices();
        let reference = query::intersection_segment_tetrahedron(
            &seg,
            &tet,
            IntersectionTolerances::default(),
        );

        if reference.pathological {
            continue;
        }

        for perm in permutations4() {
            let permuted = Tetrahedron::new(
                vertices[perm[0]],
                vertices[perm[1]],
                vertices[perm[2]],
                vertices[perm[3]],
            );
            let result = query::intersection_segment_tetrahedron(
                &seg,
                &permuted,
                IntersectionTolerances::default(),
            );

            assert_eq!(result.len(), reference.len());

            for (point, expected) in result.points.iter().zip(reference.points.iter()) {
                assert_relative_eq!(point.parameter(), expected.parameter(), epsilon = 1.0e-9);
                assert_relative_eq!(
                    permuted.point_from_barycentric(&point.bcoords_b),
                    tet.point_from_barycentric(&expected.bcoords_b),
                    epsilon = 1.0e-9
                );
            }
        }
    }
}

#[test]
fn segment_through_a_vertex() {
    let tet = regular_tetrahedron();
    let seg = Segment::new(Point3::new(2.0, 2.0, 2.0), Point3::new(0.0, 0.0, 0.0));
    let result =
        query::intersection_segment_tetrahedron(&seg, &tet, IntersectionTolerances::default());

    // Enters through the vertex 0 and ends at the centroid.
    assert_eq!(result.len(), 2);
    assert!(result.pathological);
    assert_eq!(result.points[0].topology_b, Topology::vertex(0));
    assert_relative_eq!(result.points[0].parameter(), 0.5, epsilon = 1.0e-12);
    assert_relative_eq!(result.points[1].parameter(), 1.0, epsilon = 1.0e-12);
    assert_eq!(result.points[1].topology_a, Topology::vertex(1));
}

#[test]
fn missing_segment() {
    let seg = Segment::new(Point3::new(3.0, 3.0, 3.0), Point3::new(4.0, 3.0, 3.0));
    let result = query::intersection_segment_tetrahedron(
        &seg,
        &regular_tetrahedron(),
        IntersectionTolerances::default(),
    );

    assert!(result.is_empty());
    assert!(!result.pathological);
}
