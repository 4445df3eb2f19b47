use cgmath::Vector3;

use crate::error::{Error, Result};
use crate::primitives::geometry::{distance, rotation_matrix};
use crate::primitives::material::Color;
use crate::primitives::mesh::Mesh;
use crate::primitives::shape::{check_point, check_positive, Solid, Transformable};
use crate::process::{generate, orient::Orienter, triangulate};


/// Flat arrow from `start` to `end`, a shaft of `width` and a head twice as
/// wide and long. `orientation` spins the flat profile about its own axis.
///
/// Arrows shorter than their head still build; the shaft then runs backwards
/// past `start`.
#[derive(Clone, Debug)]
pub struct Arrow {
    start: Vector3<f64>,
    end: Vector3<f64>,
    orientation: f64,
    width: f64,
    color: Color,
    mesh: Mesh,
}

impl Arrow {
    pub fn new(start: Vector3<f64>, end: Vector3<f64>, orientation: f64, width: f64, color: Color) -> Result<Self> {
        check_point("arrow start", start)?;
        check_point("arrow end", end)?;
        check_positive("arrow width", width)?;
        if !orientation.is_finite() {
            return Err(Error::invalid(format!("arrow orientation {} is not finite", orientation)));
        }
        let length = distance(start, end);
        if length == 0.0 {
            return Err(Error::invalid("arrow start and end coincide"));
        }

        // spin first, then align: the other order changes which way the head faces
        let mut cloud = generate::arrow(length, width);
        Orienter::new(start, end)?.with_spin(orientation)?.apply(&mut cloud);
        let mesh = Mesh::new(cloud.vertices, cloud.normals, triangulate::arrow());

        Ok(Arrow {
            start,
            end,
            orientation,
            width,
            color,
            mesh,
        })
    }

    pub fn start(&self) -> Vector3<f64> {
        self.start
    }

    pub fn end(&self) -> Vector3<f64> {
        self.end
    }

    pub fn orientation(&self) -> f64 {
        self.orientation
    }

    pub fn width(&self) -> f64 {
        self.width
    }
}

impl Solid for Arrow {
    fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    fn color(&self) -> Color {
        self.color
    }
}

impl Transformable for Arrow {
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
