use cgmath::Vector3;

use crate::error::{Error, Result};
use crate::primitives::geometry::{distance, rotation_matrix};
use crate::primitives::material::Color;
use crate::primitives::mesh::Mesh;
use crate::primitives::shape::{check_at_least, check_point, check_positive, Solid, Transformable};
use crate::process::{generate, orient::Orienter, triangulate};


/// Open tube from `start` to `end`, drawn as `segments` flat side quads.
#[derive(Clone, Debug)]
pub struct Cylinder {
    radius: f64,
    start: Vector3<f64>,
    end: Vector3<f64>,
    segments: u32,
    color: Color,
    mesh: Mesh,
}

impl Cylinder {
    pub fn new(radius: f64, start: Vector3<f64>, end: Vector3<f64>, segments: u32, color: Color) -> Result<Self> {
        check_positive("cylinder radius", radius)?;
        check_point("cylinder start", start)?;
        check_point("cylinder end", end)?;
        check_at_least("cylinder segments", segments, 3)?;
        let length = distance(start, end);
        if length == 0.0 {
            return Err(Error::invalid("cylinder start and end coincide"));
        }

        let mut cloud = generate::cylinder(radius, length, segments);
        Orienter::new(start, end)?.apply(&mut cloud);
        let mesh = Mesh::new(cloud.vertices, cloud.normals, triangulate::cylinder(segments));

        Ok(Cylinder {
            radius,
            start,
            end,
            segments,
            color,
            mesh,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn start(&self) -> Vector3<f64> {
        self.start
    }

    pub fn end(&self) -> Vector3<f64> {
        self.end
    }

    pub fn segments(&self) -> u32 {
        self.segments
    }
}

impl Solid for Cylinder {
    fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    fn color(&self) -> Color {
        self.color
    }
}

impl Transformable for Cylinder {
    fn translate(&mut self, displacement: Vector3<f64>) {
        self.mesh.translate(displacement);
        self.start += displacement;
        self.end += displacement;
    }

    fn rotate(&mut self, axis: Vector3<f64>, angle: f64, pivot: Vector3<f64>) -> Result<()> {
        let rotation = rotation_matrix(angle, axis)?;
        self.mesh.rotate(&rotation, pivot);
        self.start = rotation * (self.start - pivot) + pivot;
        self.end = rotation * (self.end - pivot) + pivot;
        Ok(())
    }
}
