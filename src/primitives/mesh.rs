use cgmath::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::primitives::material::Color;


/// Indexed triangle mesh in CPU memory. `normals` runs parallel to
/// `vertices` and `indices` holds one triple per triangle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vector3<f64>>,
    pub normals: Vec<Vector3<f64>>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new(vertices: Vec<Vector3<f64>>, normals: Vec<Vector3<f64>>, indices: Vec<u32>) -> Self {
        Mesh { vertices, normals, indices }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn triangle(&self, i: usize) -> [u32; 3] {
        [self.indices[3 * i], self.indices[3 * i + 1], self.indices[3 * i + 2]]
    }

    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    pub fn validate(&self) -> Result<()> {
        if self.normals.len() != self.vertices.len() {
            return Err(Error::invalid(format!(
                "{} normals for {} vertices",
                self.normals.len(),
                self.vertices.len()
            )));
        }
        if self.indices.len() % 3 != 0 {
            return Err(Error::invalid(format!("{} indices is not a whole number of triangles", self.indices.len())));
        }
        if let Some(index) = self.indices.iter().find(|&&i| i as usize >= self.vertices.len()) {
            return Err(Error::invalid(format!(
                "index {} out of range for {} vertices",
                index,
                self.vertices.len()
            )));
        }
        Ok(())
    }

    /// Rotates positions about `pivot` and normals about the origin.
    pub fn rotate(&mut self, rotation: &Matrix3<f64>, pivot: Vector3<f64>) {
        for vertex in self.vertices.iter_mut() {
            *vertex = rotation * (*vertex - pivot) + pivot;
        }
        for normal in self.normals.iter_mut() {
            *normal = rotation * *normal;
        }
    }

    /// Shifts positions only.
    pub fn translate(&mut self, displacement: Vector3<f64>) {
        for vertex in self.vertices.iter_mut() {
            *vertex += displacement;
        }
    }

    /// Appends `other`, offsetting its indices past the current vertices.
    pub fn append(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.normals.extend_from_slice(&other.normals);
        self.indices.extend(other.indices.iter().map(|i| i + offset));
    }

    pub fn position_buffer(&self) -> Vec<f32> {
        flatten(&self.vertices)
    }

    pub fn normal_buffer(&self) -> Vec<f32> {
        flatten(&self.normals)
    }

    pub fn gpu_vertices(&self) -> Vec<GpuVertex> {
        self.vertices
            .iter()
            .zip(self.normals.iter())
            .map(|(v, n)| GpuVertex::new(*v, *n))
            .collect()
    }

    /// One entry per index, for renderers that draw unindexed triangle lists.
    pub fn expanded(&self, color: Color) -> TriangleStream {
        let mut vertices = Vec::with_capacity(self.indices.len() * 3);
        let mut normals = Vec::with_capacity(self.indices.len() * 3);
        for &i in &self.indices {
            let v = self.vertices[i as usize];
            let n = self.normals[i as usize];
            vertices.extend_from_slice(&[v.x as f32, v.y as f32, v.z as f32]);
            normals.extend_from_slice(&[n.x as f32, n.y as f32, n.z as f32]);
        }
        TriangleStream {
            vertices,
            normals,
            colors: color.broadcast(self.indices.len()),
        }
    }

    pub fn buffers(&self, color: Color) -> MeshBuffers {
        MeshBuffers {
            positions: self.position_buffer(),
            normals: self.normal_buffer(),
            colors: color.broadcast(self.vertices.len()),
            indices: self.indices.clone(),
        }
    }
}

fn flatten(points: &[Vector3<f64>]) -> Vec<f32> {
    let mut out = Vec::with_capacity(points.len() * 3);
    for p in points {
        out.extend_from_slice(&[p.x as f32, p.y as f32, p.z as f32]);
    }
    out
}


#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl GpuVertex {
    pub fn new(position: Vector3<f64>, normal: Vector3<f64>) -> Self {
        Self {
            position: [position.x as f32, position.y as f32, position.z as f32],
            normal: [normal.x as f32, normal.y as f32, normal.z as f32],
        }
    }

    pub fn as_bytes(vertices: &[GpuVertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}


/// Flat, indexed buffers ready to hand to a renderer or write out.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshBuffers {
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
    pub colors: Vec<u8>,
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }
}


/// Pre-expanded triangle list: three floats, three floats and three bytes
/// per emitted vertex, three emitted vertices per triangle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriangleStream {
    pub vertices: Vec<f32>,
    pub normals: Vec<f32>,
    pub colors: Vec<u8>,
}

impl TriangleStream {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }
}
