// Properties checked on many random configurations.

use crate::helpers::{clipped_area, random_point, random_tetrahedron, random_triangle};
use simplex3d::query::{self, IntersectionTolerances, Prolongation};
use simplex3d::shape::Segment;

const NUM_TESTS: usize = 500;

#[test]
fn segment_tetrahedron_points_lie_on_both_simplices() {
    let mut rng = oorandom::Rand64::new(42);
    let mut num_hits = 0;

    for _ in 0..NUM_TESTS {
        let tet = random_tetrahedron(&mut rng);
        let seg = Segment::new(random_point(&mut rng), random_point(&mut rng));
        let result =
            query::intersection_segment_tetrahedron(&seg, &tet, IntersectionTolerances::default());

        for point in &result.points {
            assert_relative_eq!(point.bcoords_a.sum(), 1.0, epsilon = 1.0e-9);
            assert_relative_eq!(point.bcoords_b.sum(), 1.0, epsilon = 1.0e-9);
            assert!((0.0..=1.0).contains(&point.parameter()));
            assert!(point.bcoords_b.min() >= -1.0e-9);
            assert_relative_eq!(
                seg.point_from_barycentric(&point.bcoords_a),
                tet.point_from_barycentric(&point.bcoords_b),
                epsilon = 1.0e-8
            );
        }

        if let [first, second] = result.points.as_slice() {
            assert!(first.parameter() <= second.parameter());
        }

        // A segment with both endpoints inside is returned whole.
        let inside = |p: &na::Point3<f64>| {
            tet.barycentric_coordinates(p)
                .is_some_and(|bcoords| bcoords.min() > 1.0e-6)
        };
        if inside(&seg.a) && inside(&seg.b) {
            assert_eq!(result.len(), 2);
            assert_eq!(result.points[0].parameter(), 0.0);
            assert_eq!(result.points[1].parameter(), 1.0);
        }

        num_hits += !result.is_empty() as usize;
    }

    assert!(num_hits > 0);
}

#[test]
fn triangle_triangle_is_symmetric() {
    let mut rng = oorandom::Rand64::new(1234);

    for _ in 0..NUM_TESTS {
        let a = random_triangle(&mut rng);
        let b = random_triangle(&mut rng);
        let ab = query::intersection_triangle_triangle(&a, &b, IntersectionTolerances::default());
        let ba = query::intersection_triangle_triangle(&b, &a, IntersectionTolerances::default());

        for point in &ab.points {
            assert_relative_eq!(
                a.point_from_barycentric(&point.bcoords_a),
                b.point_from_barycentric(&point.bcoords_b),
                epsilon = 1.0e-8
            );
        }

        if ab.pathological || ba.pathological {
            continue;
        }

        // Two triangles in general position cross along a segment, or not at all.
        assert!(ab.len() == 0 || ab.len() == 2);
        assert_eq!(ab.len(), ba.len());

        for point in &ab.points {
            let global = a.point_from_barycentric(&point.bcoords_a);
            assert!(ba.points.iter().any(|other| {
                relative_eq!(
                    b.point_from_barycentric(&other.bcoords_a),
                    global,
                    epsilon = 1.0e-8
                )
            }));
        }
    }
}

#[test]
fn triangle_tetrahedron_polygon_matches_the_clipped_triangle() {
    let mut rng = oorandom::Rand64::new(7);
    let mut num_polygons = 0;

    for _ in 0..NUM_TESTS {
        let tet = random_tetrahedron(&mut rng);
        let tri = random_triangle(&mut rng);
        let polygon =
            query::intersection_triangle_tetrahedron(&tri, &tet, IntersectionTolerances::default());

        assert!(polygon.area(&tri) <= tri.area() * (1.0 + 1.0e-9));

        for point in &polygon.points {
            assert_relative_eq!(point.bcoords_a.sum(), 1.0, epsilon = 1.0e-9);
            assert_relative_eq!(point.bcoords_b.sum(), 1.0, epsilon = 1.0e-9);
            assert_relative_eq!(
                tri.point_from_barycentric(&point.bcoords_a),
                tet.point_from_barycentric(&point.bcoords_b),
                epsilon = 1.0e-8
            );
        }

        if polygon.pathological {
            continue;
        }

        assert_relative_eq!(polygon.area(&tri), clipped_area(&tri, &tet), epsilon = 1.0e-8);

        if polygon.len() >= 3 {
            num_polygons += 1;
            assert_eq!(polygon.prolongations.len(), polygon.len());

            // Counter-clockwise in the barycentric plane of the triangle.
            let n = polygon.len();
            let signed_area: f64 = (0..n)
                .map(|i| {
                    let p = &polygon.points[i].bcoords_a;
                    let q = &polygon.points[(i + 1) % n].bcoords_a;
                    p[1] * q[2] - p[2] * q[1]
                })
                .sum();
            assert!(signed_area > 0.0);

            // Consecutive points share the entity of the side joining them.
            for (i, prolongation) in polygon.prolongations.iter().enumerate() {
                let (p, q) = (&polygon.points[i], &polygon.points[(i + 1) % n]);

                match *prolongation {
                    Prolongation::TriangleEdge(e) => {
                        let j = 2 - e;
                        assert!(p.bcoords_a[j].abs() < 1.0e-9 && q.bcoords_a[j].abs() < 1.0e-9);
                    }
                    Prolongation::TetrahedronFace(f) => {
                        let k = 3 - f;
                        assert!(p.bcoords_b[k].abs() < 1.0e-9 && q.bcoords_b[k].abs() < 1.0e-9);
                    }
                }
            }
        }
    }

    assert!(num_polygons > 0);
}
