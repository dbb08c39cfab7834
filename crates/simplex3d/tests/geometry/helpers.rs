use na::Point3;
use simplex3d::shape::{Tetrahedron, Triangle};

pub fn unit_tetrahedron() -> Tetrahedron {
    Tetrahedron::new(
        Point3::origin(),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
    )
}

pub fn regular_tetrahedron() -> Tetrahedron {
    Tetrahedron::new(
        Point3::new(1.0, 1.0, 1.0),
        Point3::new(1.0, -1.0, -1.0),
        Point3::new(-1.0, 1.0, -1.0),
        Point3::new(-1.0, -1.0, 1.0),
    )
}

pub fn unit_triangle() -> Triangle {
    Triangle::new(
        Point3::origin(),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    )
}

pub fn random_point(rng: &mut oorandom::Rand64) -> Point3<f64> {
    Point3::new(
        rng.rand_float() * 2.0 - 1.0,
        rng.rand_float() * 2.0 - 1.0,
        rng.rand_float() * 2.0 - 1.0,
    )
}

pub fn random_tetrahedron(rng: &mut oorandom::Rand64) -> Tetrahedron {
    loop {
        let tet = Tetrahedron::new(
            random_point(rng),
            random_point(rng),
            random_point(rng),
            random_point(rng),
        );

        if tet.volume() > 1.0e-2 {
            return tet;
        }
    }
}

pub fn random_triangle(rng: &mut oorandom::Rand64) -> Triangle {
    loop {
        let tri = Triangle::new(random_point(rng), random_point(rng), random_point(rng));

        if tri.area() > 1.0e-2 {
            return tri;
        }
    }
}

/// All the 24 orderings of four vertices.
pub fn permutations4() -> Vec<[usize; 4]> {
    let mut result = Vec::new();

    for a in 0..4 {
        for b in 0..4 {
            for c in 0..4 {
                for d in 0..4 {
                    if a != b && a != c && a != d && b != c && b != d && c != d {
                        result.push([a, b, c, d]);
                    }
                }
            }
        }
    }

    result
}

/// The area of the intersection between a triangle and a tetrahedron, computed by clipping
/// the triangle with the four half-spaces of the tetrahedron.
pub fn clipped_area(triangle: &Triangle, tetrahedron: &Tetrahedron) -> f64 {
    let mut polygon: Vec<Point3<f64>> = triangle.vertices().to_vec();
    let vertices = tetrahedron.vertices();

    for opposite in 0..4 {
        let face: Vec<_> = (0..4).filter(|i| *i != opposite).map(|i| vertices[i]).collect();
        let mut normal = (face[1] - face[0]).cross(&(face[2] - face[0]));

        if normal.dot(&(vertices[opposite] - face[0])) < 0.0 {
            normal = -normal;
        }

        let dist = |p: &Point3<f64>| normal.dot(&(p - face[0]));
        let mut clipped = Vec::new();

        for i in 0..polygon.len() {
            let p = polygon[i];
            let q = polygon[(i + 1) % polygon.len()];
            let (dp, dq) = (dist(&p), dist(&q));

            if dp >= 0.0 {
                clipped.push(p);
            }

            if (dp >= 0.0) != (dq >= 0.0) {
                clipped.push(p + (q - p) * (dp / (dp - dq)));
            }
        }

        polygon = clipped;

        if polygon.is_empty() {
            return 0.0;
        }
    }

    let mut doubled = na::Vector3::zeros();
    for i in 0..polygon.len() {
        doubled += polygon[i].coords.cross(&polygon[(i + 1) % polygon.len()].coords);
    }

    doubled.norm() * 0.5
}
