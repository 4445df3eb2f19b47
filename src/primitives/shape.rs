use cgmath::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::primitives::arrow::Arrow;
use crate::primitives::cylinder::Cylinder;
use crate::primitives::geometry::is_finite;
use crate::primitives::material::Color;
use crate::primitives::mesh::{Mesh, MeshBuffers, TriangleStream};
use crate::primitives::sphere::Sphere;


/// Receives finished geometry. Uploading and issuing the draw call is up to
/// the implementor.
pub trait Renderer {
    fn draw_triangles(&mut self, buffers: &MeshBuffers);
}

/// Rigid transforms applied in place to an already placed shape. Repeated
/// calls accumulate.
pub trait Transformable {
    /// Shifts positions by `displacement`; normals are left alone.
    fn translate(&mut self, displacement: Vector3<f64>);

    /// Turns the shape by `angle` radians about `axis` through `pivot`.
    fn rotate(&mut self, axis: Vector3<f64>, angle: f64, pivot: Vector3<f64>) -> Result<()>;
}

/// A colored mesh that can be handed to a renderer.
pub trait Solid {
    fn mesh(&self) -> &Mesh;

    fn color(&self) -> Color;

    fn vertices(&self) -> &[Vector3<f64>] {
        &self.mesh().vertices
    }

    fn normals(&self) -> &[Vector3<f64>] {
        &self.mesh().normals
    }

    fn indices(&self) -> &[u32] {
        &self.mesh().indices
    }

    fn triangle_count(&self) -> usize {
        self.mesh().triangle_count()
    }

    fn position_buffer(&self) -> Vec<f32> {
        self.mesh().position_buffer()
    }

    fn normal_buffer(&self) -> Vec<f32> {
        self.mesh().normal_buffer()
    }

    fn color_buffer(&self) -> Vec<u8> {
        self.color().broadcast(self.mesh().vertex_count())
    }

    fn buffers(&self) -> MeshBuffers {
        self.mesh().buffers(self.color())
    }

    fn expanded(&self) -> TriangleStream {
        self.mesh().expanded(self.color())
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.draw_triangles(&self.buffers());
    }
}

pub(crate) fn check_point(name: &str, p: Vector3<f64>) -> Result<()> {
    if is_finite(p) {
        Ok(())
    } else {
        Err(Error::invalid(format!("{} {:?} is not finite", name, p)))
    }
}

pub(crate) fn check_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::invalid(format!("{} must be positive, got {}", name, value)))
    }
}

pub(crate) fn check_at_least(name: &str, value: u32, minimum: u32) -> Result<()> {
    if value >= minimum {
        Ok(())
    } else {
        Err(Error::invalid(format!("{} must be at least {}, got {}", name, minimum, value)))
    }
}


/// Immutable recipe for a shape. Changing any parameter means building a new
/// shape from a new descriptor.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeDescriptor {
    Cylinder {
        radius: f64,
        start: [f64; 3],
        end: [f64; 3],
        segments: u32,
    },
    Sphere {
        radius: f64,
        center: [f64; 3],
        parallels: u32,
        meridians: u32,
    },
    Arrow {
        start: [f64; 3],
        end: [f64; 3],
        orientation: f64,
        width: f64,
    },
}


#[derive(Clone, Debug)]
pub enum Shape {
    Cylinder(Cylinder),
    Sphere(Sphere),
    Arrow(Arrow),
}

impl Shape {
    pub fn from_descriptor(descriptor: &ShapeDescriptor, color: Color) -> Result<Shape> {
        let shape = match *descriptor {
            ShapeDescriptor::Cylinder { radius, start, end, segments } => {
                Shape::Cylinder(Cylinder::new(radius, start.into(), end.into(), segments, color)?)
            }
            ShapeDescriptor::Sphere { radius, center, parallels, meridians } => {
                Shape::Sphere(Sphere::new(radius, center.into(), parallels, meridians, color)?)
            }
            ShapeDescriptor::Arrow { start, end, orientation, width } => {
                Shape::Arrow(Arrow::new(start.into(), end.into(), orientation, width, color)?)
            }
        };
        Ok(shape)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Cylinder(_) => "cylinder",
            Shape::Sphere(_) => "sphere",
            Shape::Arrow(_) => "arrow",
        }
    }
}

impl Solid for Shape {
    fn mesh(&self) -> &Mesh {
        match self {
            Shape::Cylinder(s) => s.mesh(),
            Shape::Sphere(s) => s.mesh(),
            Shape::Arrow(s) => s.mesh(),
        }
    }

    fn color(&self) -> Color {
        match self {
            Shape::Cylinder(s) => s.color(),
            Shape::Sphere(s) => s.color(),
            Shape::Arrow(s) => s.color(),
        }
    }
}

impl Transformable for Shape {
    fn translate(&mut self, displacement: Vector3<f64>) {
        match self {
            Shape::Cylinder(s) => s.translate(displacement),
            Shape::Sphere(s) => s.translate(displacement),
            Shape::Arrow(s) => s.translate(displacement),
        }
    }

    fn rotate(&mut self, axis: Vector3<f64>, angle: f64, pivot: Vector3<f64>) -> Result<()> {
        match self {
            Shape::Cylinder(s) => s.rotate(axis, angle, pivot),
            Shape::Sphere(s) => s.rotate(axis, angle, pivot),
            Shape::Arrow(s) => s.rotate(axis, angle, pivot),
        }
    }
}

impl From<Cylinder> for Shape {
    fn from(c: Cylinder) -> Self {
        Shape::Cylinder(c)
    }
}

impl From<Sphere> for Shape {
    fn from(s: Sphere) -> Self {
        Shape::Sphere(s)
    }
}

impl From<Arrow> for Shape {
    fn from(a: Arrow) -> Self {
        Shape::Arrow(a)
    }
}
