use cgmath::{InnerSpace, Vector3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use molshapes::{Arrow, Color, Cylinder, Shape, ShapeDescriptor, Solid, Sphere, Transformable};

const TOL: f64 = 1e-9;

fn v(x: f64, y: f64, z: f64) -> Vector3<f64> {
    Vector3::new(x, y, z)
}

fn random_point(rng: &mut StdRng) -> Vector3<f64> {
    v(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0))
}

/// Face normal of triangle `t` by the right-hand rule.
fn face_normal(shape: &dyn Solid, t: usize) -> (Vector3<f64>, Vector3<f64>) {
    let tri = shape.mesh().triangle(t);
    let [a, b, c] = [0, 1, 2].map(|k| shape.vertices()[tri[k] as usize]);
    ((b - a).cross(c - a), (a + b + c) / 3.0)
}

#[test]
fn cylinder_example_layout() {
    let c = Cylinder::new(1.0, v(0.0, 0.0, 0.0), v(0.0, 0.0, 2.0), 4, Color::GRAY).unwrap();
    assert_eq!(c.vertices().len(), 10);
    assert_eq!(c.indices().len(), 24);
    for (i, p) in c.vertices().iter().enumerate() {
        let z = if i % 2 == 0 { 0.0 } else { 2.0 };
        assert!((p.z - z).abs() < TOL, "vertex {} at {:?}", i, p);
    }
}

#[test]
fn sphere_example_layout() {
    let s = Sphere::new(1.0, v(0.0, 0.0, 0.0), 4, 4, Color::GRAY).unwrap();
    assert_eq!(s.vertices().len(), 17);
    assert!((s.vertices()[0] - v(0.0, 0.0, 1.0)).magnitude() < TOL);
    assert!((s.vertices()[16] - v(0.0, 0.0, -1.0)).magnitude() < TOL);
}

#[test]
fn arrow_has_fixed_topology() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let orientation = rng.gen_range(-10.0..10.0);
        let a = Arrow::new(v(0.0, 0.0, 0.0), v(0.0, 0.0, 1.0), orientation, 0.05, Color::GRAY).unwrap();
        assert_eq!(a.vertices().len(), 7);
        assert_eq!(a.indices().len(), 9);
    }
}

#[test]
fn random_cylinders_are_consistent_and_face_outward() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let segments = rng.gen_range(3..40);
        let radius = rng.gen_range(0.01..3.0);
        let start = random_point(&mut rng);
        let end = random_point(&mut rng);
        let c = Cylinder::new(radius, start, end, segments, Color::GRAY).unwrap();

        assert_eq!(c.vertices().len(), 2 * segments as usize + 2);
        assert_eq!(c.indices().len(), 6 * segments as usize);
        assert!(c.indices().iter().all(|&i| (i as usize) < c.vertices().len()));
        assert!(c.mesh().validate().is_ok());

        for (i, p) in c.vertices().iter().enumerate() {
            let anchor = if i % 2 == 0 { start } else { end };
            assert!(((p - anchor).magnitude() - radius).abs() < 1e-6 * radius.max(1.0));
        }
        for n in c.normals() {
            assert!((n.magnitude() - 1.0).abs() < 1e-9);
        }

        let axis = (end - start).normalize();
        for t in 0..c.triangle_count() {
            let (normal, centroid) = face_normal(&c, t);
            let from_axis = (centroid - start) - axis * (centroid - start).dot(axis);
            assert!(normal.dot(from_axis) > 0.0, "triangle {} faces inward", t);
        }
    }
}

#[test]
fn random_spheres_are_consistent_and_face_outward() {
    let mut rng = StdRng::seed_from_u64(1234);
    for _ in 0..50 {
        let parallels = rng.gen_range(2..30);
        let meridians = rng.gen_range(3..30);
        let radius = rng.gen_range(0.01..3.0);
        let center = random_point(&mut rng);
        let s = Sphere::new(radius, center, parallels, meridians, Color::GRAY).unwrap();

        let expected = 2 + (parallels as usize - 1) * (meridians as usize + 1);
        assert_eq!(s.vertices().len(), expected);
        assert!(s.mesh().validate().is_ok());

        for p in s.vertices() {
            assert!(((p - center).magnitude() - radius).abs() <= 1e-6 * radius);
        }
        for n in s.normals() {
            assert!((n.magnitude() - 1.0).abs() < 1e-9);
        }
        for t in 0..s.triangle_count() {
            let (normal, centroid) = face_normal(&s, t);
            assert!(normal.dot(centroid - center) > 0.0, "triangle {} faces inward", t);
        }
    }
}

#[test]
fn anti_parallel_axes_stay_finite() {
    let c = Cylinder::new(0.5, v(1.0, 1.0, 1.0), v(1.0, 1.0, -2.0), 8, Color::GRAY).unwrap();
    assert!(c.vertices().iter().chain(c.normals()).all(|p| p.x.is_finite() && p.y.is_finite() && p.z.is_finite()));
    assert!(((c.vertices()[0] - v(1.0, 1.0, 1.0)).magnitude() - 0.5).abs() < TOL);
    assert!(((c.vertices()[1] - v(1.0, 1.0, -2.0)).magnitude() - 0.5).abs() < TOL);

    let a = Arrow::new(v(0.0, 0.0, 0.0), v(0.0, 0.0, -1.0), 0.0, 0.05, Color::GRAY).unwrap();
    assert!((a.vertices()[6] - v(0.0, 0.0, -1.0)).magnitude() < TOL);
}

#[test]
fn sphere_rotation_round_trips() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..20 {
        let mut s = Sphere::new(1.5, random_point(&mut rng), 6, 7, Color::GRAY).unwrap();
        let before = s.vertices().to_vec();
        let axis = random_point(&mut rng);
        let angle = rng.gen_range(-3.0..3.0);
        s.rotate_about_center(axis, angle).unwrap();
        s.rotate_about_center(axis, -angle).unwrap();
        for (p, q) in before.iter().zip(s.vertices()) {
            assert!((p - q).magnitude() < 1e-9);
        }
    }
}

#[test]
fn translation_round_trips_for_every_shape() {
    let mut shapes: Vec<Shape> = vec![
        Cylinder::new(1.0, v(0.0, 0.0, 0.0), v(1.0, 2.0, 3.0), 6, Color::GRAY).unwrap().into(),
        Sphere::new(1.0, v(1.0, 0.0, 0.0), 5, 5, Color::GRAY).unwrap().into(),
        Arrow::new(v(0.0, 0.0, 0.0), v(0.0, 3.0, 0.0), 0.4, 0.1, Color::GRAY).unwrap().into(),
    ];
    let shift = v(0.25, -4.0, 7.5);
    for shape in shapes.iter_mut() {
        let before = shape.vertices().to_vec();
        let normals = shape.normals().to_vec();
        shape.translate(shift);
        assert!((shape.vertices()[0] - before[0] - shift).magnitude() < TOL);
        assert_eq!(shape.normals(), &normals[..]);
        shape.translate(-shift);
        for (p, q) in before.iter().zip(shape.vertices()) {
            assert!((p - q).magnitude() < 1e-9, "{} moved", shape.kind());
        }
    }
}

#[test]
fn rotation_about_a_pivot_keeps_distances() {
    let mut c = Cylinder::new(0.3, v(1.0, 0.0, 0.0), v(1.0, 0.0, 2.0), 5, Color::GRAY).unwrap();
    let pivot = v(1.0, 0.0, 0.0);
    let before: Vec<f64> = c.vertices().iter().map(|p| (p - pivot).magnitude()).collect();
    c.rotate(v(0.0, 1.0, 0.0), std::f64::consts::FRAC_PI_2, pivot).unwrap();
    for (d, p) in before.iter().zip(c.vertices()) {
        assert!((d - (p - pivot).magnitude()).abs() < 1e-9);
    }
    assert!((c.end() - v(3.0, 0.0, 0.0)).magnitude() < 1e-9);
    assert!(c.rotate(v(0.0, 0.0, 0.0), 1.0, pivot).is_err());
}

#[test]
fn buffers_match_the_mesh() {
    let s = Sphere::new(1.0, v(0.0, 0.0, 0.0), 3, 4, Color::new(10, 20, 30)).unwrap();
    let n = s.vertices().len();
    assert_eq!(s.position_buffer().len(), 3 * n);
    assert_eq!(s.normal_buffer().len(), 3 * n);
    assert_eq!(s.color_buffer().len(), 3 * n);
    assert_eq!(&s.color_buffer()[..3], &[10, 20, 30]);

    let stream = s.expanded();
    assert_eq!(stream.vertex_count(), s.indices().len());
    assert_eq!(stream.colors.len(), 3 * s.indices().len());
}

#[test]
fn descriptors_parse_from_json() {
    let json = r#"[
        {"kind": "cylinder", "radius": 0.1, "start": [0, 0, 0], "end": [0, 0, 1], "segments": 6},
        {"kind": "sphere", "radius": 1.0, "center": [0, 0, 0], "parallels": 4, "meridians": 4},
        {"kind": "arrow", "start": [0, 0, 0], "end": [1, 0, 0], "orientation": 0.0, "width": 0.05}
    ]"#;
    let descriptors: Vec<ShapeDescriptor> = serde_json::from_str(json).unwrap();
    let kinds: Vec<&str> = descriptors
        .iter()
        .map(|d| Shape::from_descriptor(d, Color::GRAY).unwrap().kind())
        .collect();
    assert_eq!(kinds, vec!["cylinder", "sphere", "arrow"]);
}

#[test]
fn invalid_parameters_are_rejected() {
    let o = v(0.0, 0.0, 0.0);
    let z = v(0.0, 0.0, 1.0);
    assert!(Cylinder::new(1.0, o, z, 2, Color::GRAY).is_err());
    assert!(Cylinder::new(0.0, o, z, 8, Color::GRAY).is_err());
    assert!(Cylinder::new(1.0, o, o, 8, Color::GRAY).is_err());
    assert!(Sphere::new(1.0, o, 1, 8, Color::GRAY).is_err());
    assert!(Sphere::new(1.0, o, 4, 2, Color::GRAY).is_err());
    assert!(Sphere::new(f64::NAN, o, 4, 4, Color::GRAY).is_err());
    assert!(Sphere::new(1.0, v(f64::INFINITY, 0.0, 0.0), 4, 4, Color::GRAY).is_err());
}
