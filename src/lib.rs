//! Procedural triangle meshes for cylinders, spheres and flat arrows, and the
//! molecular data model used to lay them out as ball-and-stick scenes.

pub mod chem;
pub mod config;
pub mod error;
pub mod primitives;
pub mod process;

pub use chem::molecule::{Atom, Molecule};
pub use chem::system::{merge_systems, subsystem_from_atoms, subsystem_from_molecules, System};
pub use config::TessellationConfig;
pub use error::{Error, Result};
pub use primitives::arrow::Arrow;
pub use primitives::cylinder::Cylinder;
pub use primitives::material::Color;
pub use primitives::mesh::{GpuVertex, Mesh, MeshBuffers, TriangleStream};
pub use primitives::scene::Scene;
pub use primitives::shape::{Renderer, Shape, ShapeDescriptor, Solid, Transformable};
pub use primitives::sphere::Sphere;
