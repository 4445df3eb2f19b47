use rayon::prelude::*;

use crate::chem::elements;
use crate::chem::gro::element_of;
use crate::chem::system::System;
use crate::config::TessellationConfig;
use crate::error::Result;
use crate::primitives::material::Color;
use crate::primitives::mesh::{Mesh, MeshBuffers};
use crate::primitives::shape::{Renderer, Shape, ShapeDescriptor, Solid};


#[derive(Clone, Debug)]
pub struct Scene {
    pub config: TessellationConfig,
    shapes: Vec<Shape>,
}

impl Scene {
    pub fn new(config: TessellationConfig) -> Self {
        Scene {
            config,
            shapes: Vec::new(),
        }
    }

    /// Builds one shape per descriptor in the config color. Shapes come back
    /// in descriptor order; if several fail, the earliest error is returned.
    pub fn from_descriptors(config: TessellationConfig, descriptors: &[ShapeDescriptor]) -> Result<Self> {
        let items: Vec<(ShapeDescriptor, Color)> = descriptors.iter().map(|d| (*d, config.color)).collect();
        let shapes = build(&items)?;
        Ok(Scene { config, shapes })
    }

    /// Ball-and-stick model: a sphere per atom sized by its van der Waals
    /// radius and colored by element, and a cylinder per bond in the config
    /// color.
    pub fn ball_and_stick(system: &System, config: TessellationConfig) -> Result<Self> {
        config.validate()?;
        system.validate()?;

        let mut items = Vec::with_capacity(system.n_atoms() + system.bonds.len());
        for (atom_type, r) in system.type_array.iter().zip(system.r_array.iter()) {
            let symbol = element_of(atom_type);
            let descriptor = ShapeDescriptor::Sphere {
                radius: config.atom_scale * elements::vdw_radius(symbol),
                center: *r,
                parallels: config.sphere_parallels,
                meridians: config.sphere_meridians,
            };
            items.push((descriptor, elements::cpk_color(symbol)));
        }

        for bond in &system.bonds {
            let (start, end) = (system.r_array[bond[0]], system.r_array[bond[1]]);
            if start == end {
                log::warn!("skipping bond {:?}: both atoms sit at {:?}", bond, start);
                continue;
            }
            let descriptor = ShapeDescriptor::Cylinder {
                radius: config.bond_radius,
                start,
                end,
                segments: config.cylinder_segments,
            };
            items.push((descriptor, config.color));
        }

        let shapes = build(&items)?;
        log::info!(
            "ball-and-stick scene: {} atoms, {} bonds, {} shapes",
            system.n_atoms(),
            system.bonds.len(),
            shapes.len()
        );
        Ok(Scene { config, shapes })
    }

    pub fn add(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    /// Adds an arrow from `start` to `end` with the config arrow width and
    /// color.
    pub fn add_arrow(&mut self, start: [f64; 3], end: [f64; 3], orientation: f64) -> Result<()> {
        let descriptor = ShapeDescriptor::Arrow {
            start,
            end,
            orientation,
            width: self.config.arrow_width,
        };
        self.shapes.push(Shape::from_descriptor(&descriptor, self.config.color)?);
        Ok(())
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.shapes.iter().map(|s| s.mesh().vertex_count()).sum()
    }

    pub fn triangle_count(&self) -> usize {
        self.shapes.iter().map(|s| s.triangle_count()).sum()
    }

    pub fn draw(&self, renderer: &mut dyn Renderer) {
        for shape in &self.shapes {
            shape.draw(renderer);
        }
    }

    /// Every shape's mesh concatenated, indices offset accordingly.
    pub fn merged_mesh(&self) -> Mesh {
        let mut merged = Mesh::default();
        for shape in &self.shapes {
            merged.append(shape.mesh());
        }
        merged
    }

    /// Like `merged_mesh` but flattened, keeping each shape's color on its
    /// own vertices.
    pub fn merged_buffers(&self) -> MeshBuffers {
        let mesh = self.merged_mesh();
        let mut colors = Vec::with_capacity(mesh.vertex_count() * 3);
        for shape in &self.shapes {
            colors.extend(shape.color_buffer());
        }
        MeshBuffers {
            positions: mesh.position_buffer(),
            normals: mesh.normal_buffer(),
            colors,
            indices: mesh.indices,
        }
    }
}

fn build(items: &[(ShapeDescriptor, Color)]) -> Result<Vec<Shape>> {
    let built: Vec<Result<Shape>> = items
        .par_iter()
        .map(|(descriptor, color)| Shape::from_descriptor(descriptor, *color))
        .collect();
    built.into_iter().collect()
}
