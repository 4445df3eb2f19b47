use cgmath::{InnerSpace, Matrix3, Rad, Vector3, Zero};

use crate::error::{Error, Result};


/// Below this sine of the angle two directions are treated as collinear.
pub const COLLINEAR_EPSILON: f64 = 1e-12;

pub fn vec3(x: f64, y: f64, z: f64) -> Vector3<f64> {
    Vector3::new(x, y, z)
}

pub fn is_finite(v: Vector3<f64>) -> bool {
    v.x.is_finite() && v.y.is_finite() && v.z.is_finite()
}

pub fn distance(a: Vector3<f64>, b: Vector3<f64>) -> f64 {
    (b - a).magnitude()
}

/// Unit vector along `v`, or the zero vector when `v` has no length.
pub fn normalized(v: Vector3<f64>) -> Vector3<f64> {
    let length = v.magnitude();
    if length == 0.0 {
        Vector3::zero()
    } else {
        v / length
    }
}

/// Angle in radians between `a` and `b`, in `[0, π]`.
pub fn angle_between(a: Vector3<f64>, b: Vector3<f64>) -> f64 {
    let denominator = a.magnitude() * b.magnitude();
    if denominator == 0.0 {
        return 0.0;
    }
    (a.dot(b) / denominator).max(-1.0).min(1.0).acos()
}

/// Axis-angle rotation (Rodrigues). The axis does not need to be unit length
/// but must not vanish.
pub fn rotation_matrix(angle: f64, axis: Vector3<f64>) -> Result<Matrix3<f64>> {
    if !is_finite(axis) || !angle.is_finite() {
        return Err(Error::invalid(format!("non-finite rotation {:?} by {}", axis, angle)));
    }
    let length = axis.magnitude();
    if length == 0.0 {
        return Err(Error::invalid("rotation about a zero-length axis"));
    }
    Ok(Matrix3::from_axis_angle(axis / length, Rad(angle)))
}

/// Axis carrying `from` onto `to`. Fails with `DegenerateRotation` when the
/// two are collinear and the cross product gives no usable direction.
pub fn rotation_axis(from: Vector3<f64>, to: Vector3<f64>) -> Result<Vector3<f64>> {
    let axis = from.cross(to);
    let scale = from.magnitude() * to.magnitude();
    if axis.magnitude() <= COLLINEAR_EPSILON * scale {
        return Err(Error::DegenerateRotation { opposite: from.dot(to) < 0.0 });
    }
    Ok(axis / axis.magnitude())
}

/// Some unit vector orthogonal to `v`.
pub fn perpendicular(v: Vector3<f64>) -> Vector3<f64> {
    let v = normalized(v);
    // cross with the basis vector least aligned with v
    let reference = if v.x.abs() <= v.y.abs() && v.x.abs() <= v.z.abs() {
        Vector3::unit_x()
    } else if v.y.abs() <= v.z.abs() {
        Vector3::unit_y()
    } else {
        Vector3::unit_z()
    };
    normalized(v.cross(reference))
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn close(a: Vector3<f64>, b: Vector3<f64>) -> bool {
        (a - b).magnitude() < 1e-12
    }

    #[test]
    fn angle_between_basis_vectors() {
        assert!((angle_between(Vector3::unit_x(), Vector3::unit_y()) - PI / 2.0).abs() < 1e-12);
        assert!((angle_between(Vector3::unit_z(), -Vector3::unit_z()) - PI).abs() < 1e-12);
        assert_eq!(angle_between(Vector3::unit_z(), Vector3::unit_z() * 3.0), 0.0);
    }

    #[test]
    fn rotation_matrix_is_right_handed() {
        let rotation = rotation_matrix(PI / 2.0, vec3(0.0, 0.0, 2.0)).unwrap();
        assert!(close(rotation * Vector3::unit_x(), Vector3::unit_y()));
    }

    #[test]
    fn rotation_matrix_rejects_null_axis() {
        assert!(matches!(rotation_matrix(1.0, Vector3::zero()), Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn rotation_axis_reports_collinear_inputs() {
        match rotation_axis(Vector3::unit_z(), vec3(0.0, 0.0, 5.0)) {
            Err(Error::DegenerateRotation { opposite }) => assert!(!opposite),
            other => panic!("unexpected {:?}", other),
        }
        match rotation_axis(Vector3::unit_z(), vec3(0.0, 0.0, -0.5)) {
            Err(Error::DegenerateRotation { opposite }) => assert!(opposite),
            other => panic!("unexpected {:?}", other),
        }
        assert!(close(rotation_axis(Vector3::unit_z(), Vector3::unit_x()).unwrap(), Vector3::unit_y()));
    }

    #[test]
    fn perpendicular_is_orthogonal_unit() {
        for v in [vec3(0.0, 0.0, 1.0), vec3(1.0, 2.0, 3.0), vec3(-4.0, 0.1, 0.0)].iter() {
            let p = perpendicular(*v);
            assert!(p.dot(*v).abs() < 1e-12);
            assert!((p.magnitude() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn normalized_zero_stays_zero() {
        assert_eq!(normalized(Vector3::zero()), Vector3::zero());
        assert!(close(normalized(vec3(3.0, 0.0, 4.0)), vec3(0.6, 0.0, 0.8)));
    }
}
