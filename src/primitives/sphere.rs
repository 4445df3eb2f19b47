use cgmath::Vector3;

use crate::error::Result;
use crate::primitives::geometry::rotation_matrix;
use crate::primitives::material::Color;
use crate::primitives::mesh::Mesh;
use crate::primitives::shape::{check_at_least, check_point, check_positive, Solid, Transformable};
use crate::process::{generate, triangulate};


/// Latitude/longitude sphere. `parallels` counts the latitude bands and
/// `meridians` the longitude slices.
#[derive(Clone, Debug)]
pub struct Sphere {
    radius: f64,
    center: Vector3<f64>,
    parallels: u32,
    meridians: u32,
    color: Color,
    mesh: Mesh,
}

impl Sphere {
    pub fn new(radius: f64, center: Vector3<f64>, parallels: u32, meridians: u32, color: Color) -> Result<Self> {
        check_positive("sphere radius", radius)?;
        check_point("sphere center", center)?;
        check_at_least("sphere parallels", parallels, 2)?;
        check_at_least("sphere meridians", meridians, 3)?;

        let cloud = generate::sphere(radius, center, parallels, meridians);
        let mesh = Mesh::new(cloud.vertices, cloud.normals, triangulate::sphere(parallels, meridians));

        Ok(Sphere {
            radius,
            center,
            parallels,
            meridians,
            color,
            mesh,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn center(&self) -> Vector3<f64> {
        self.center
    }

    pub fn parallels(&self) -> u32 {
        self.parallels
    }

    pub fn meridians(&self) -> u32 {
        self.meridians
    }

    pub fn rotate_about_center(&mut self, axis: Vector3<f64>, angle: f64) -> Result<()> {
        let center = self.center;
        self.rotate(axis, angle, center)
    }
}

impl Solid for Sphere {
    fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    fn color(&self) -> Color {
        self.color
    }
}

impl Transformable for Sphere {
    fn translate(&mut self, displacement: Vector3<f64>) {
        self.mesh.translate(displacement);
        self.center += displacement;
    }

    fn rotate(&mut self, axis: Vector3<f64>, angle: f64, pivot: Vector3<f64>) -> Result<()> {
        let rotation = rotation_matrix(angle, axis)?;
        self.mesh.rotate(&rotation, pivot);
        self.center = rotation * (self.center - pivot) + pivot;
        Ok(())
    }
}
