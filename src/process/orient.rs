use std::f64::consts::PI;

use cgmath::{InnerSpace, Matrix3, Rad, SquareMatrix, Vector3};

use crate::error::{Error, Result};
use crate::primitives::geometry::{angle_between, is_finite, perpendicular, rotation_axis, rotation_matrix};
use crate::process::generate::PointCloud;


/// Axis every canonical solid is generated along.
pub fn canonical_axis() -> Vector3<f64> {
    Vector3::unit_z()
}

/// Rotation carrying +Z onto `target`. Collinear targets have no cross product
/// to rotate about: parallel ones get the identity and anti-parallel ones a
/// half turn about an axis perpendicular to +Z.
pub fn alignment(target: Vector3<f64>) -> Result<Matrix3<f64>> {
    if !is_finite(target) || target.magnitude() == 0.0 {
        return Err(Error::invalid(format!("cannot align to axis {:?}", target)));
    }
    let from = canonical_axis();
    match rotation_axis(from, target) {
        Ok(axis) => rotation_matrix(angle_between(from, target), axis),
        Err(Error::DegenerateRotation { opposite: false }) => Ok(Matrix3::identity()),
        Err(Error::DegenerateRotation { opposite: true }) => {
            log::debug!("anti-parallel alignment, half turn about a perpendicular axis");
            Ok(Matrix3::from_axis_angle(perpendicular(from), Rad(PI)))
        }
        Err(e) => Err(e),
    }
}

/// Places canonical geometry on `start → end`: rotates vertices and normals by
/// the alignment and then shifts vertices by `start`.
#[derive(Copy, Clone, Debug)]
pub struct Orienter {
    rotation: Matrix3<f64>,
    origin: Vector3<f64>,
}

impl Orienter {
    pub fn new(start: Vector3<f64>, end: Vector3<f64>) -> Result<Self> {
        if !is_finite(start) {
            return Err(Error::invalid(format!("non-finite start {:?}", start)));
        }
        Ok(Orienter {
            rotation: alignment(end - start)?,
            origin: start,
        })
    }

    /// Applies a spin of `angle` about +Z before the alignment.
    pub fn with_spin(mut self, angle: f64) -> Result<Self> {
        let spin = rotation_matrix(angle, canonical_axis())?;
        self.rotation = self.rotation * spin;
        Ok(self)
    }

    pub fn rotation(&self) -> &Matrix3<f64> {
        &self.rotation
    }

    pub fn apply(&self, cloud: &mut PointCloud) {
        for vertex in cloud.vertices.iter_mut() {
            *vertex = self.rotation * *vertex + self.origin;
        }
        for normal in cloud.normals.iter_mut() {
            *normal = self.rotation * *normal;
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::geometry::vec3;

    fn close(a: Vector3<f64>, b: Vector3<f64>) -> bool {
        (a - b).magnitude() < 1e-9
    }

    #[test]
    fn alignment_maps_z_onto_target() {
        for target in [vec3(1.0, 0.0, 0.0), vec3(1.0, 2.0, -3.0), vec3(0.0, -1.0, 0.1)].iter() {
            let rotation = alignment(*target).unwrap();
            assert!(close(rotation * canonical_axis(), target.normalize()));
        }
    }

    #[test]
    fn parallel_alignment_is_identity() {
        assert_eq!(alignment(vec3(0.0, 0.0, 4.0)).unwrap(), Matrix3::identity());
    }

    #[test]
    fn anti_parallel_alignment_flips() {
        let rotation = alignment(vec3(0.0, 0.0, -2.0)).unwrap();
        assert!(close(rotation * canonical_axis(), vec3(0.0, 0.0, -1.0)));
        let m = rotation * vec3(1.0, 1.0, 1.0);
        assert!(m.x.is_finite() && m.y.is_finite() && m.z.is_finite());
    }

    #[test]
    fn zero_axis_is_rejected() {
        assert!(matches!(alignment(vec3(0.0, 0.0, 0.0)), Err(Error::InvalidParameter(_))));
        assert!(Orienter::new(vec3(1.0, 1.0, 1.0), vec3(1.0, 1.0, 1.0)).is_err());
    }

    #[test]
    fn orienter_translates_vertices_only() {
        let mut cloud = PointCloud {
            vertices: vec![vec3(0.0, 0.0, 0.0), vec3(0.0, 0.0, 2.0)],
            normals: vec![vec3(1.0, 0.0, 0.0); 2],
        };
        let orienter = Orienter::new(vec3(1.0, 1.0, 1.0), vec3(3.0, 1.0, 1.0)).unwrap();
        orienter.apply(&mut cloud);
        assert!(close(cloud.vertices[0], vec3(1.0, 1.0, 1.0)));
        assert!(close(cloud.vertices[1], vec3(3.0, 1.0, 1.0)));
        assert!((cloud.normals[0].magnitude() - 1.0).abs() < 1e-12);
        assert!(cloud.normals[0].dot(vec3(1.0, 0.0, 0.0)).abs() < 1e-9);
    }

    #[test]
    fn spin_happens_before_alignment() {
        let orienter = Orienter::new(vec3(0.0, 0.0, 0.0), vec3(0.0, 0.0, 1.0))
            .unwrap()
            .with_spin(PI / 2.0)
            .unwrap();
        assert!(close(orienter.rotation() * vec3(1.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0)));

        let flipped = Orienter::new(vec3(0.0, 0.0, 0.0), vec3(1.0, 0.0, 0.0))
            .unwrap()
            .with_spin(PI / 2.0)
            .unwrap();
        // spin takes +X to +Y, alignment about +Y leaves it there
        assert!(close(flipped.rotation() * vec3(1.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0)));
    }
}
