//! Canonical point clouds for the parametric solids, built along +Z before
//! any placement. Nothing here validates its inputs; the shape constructors
//! do that.

use std::f64::consts::PI;

use cgmath::{Matrix3, Rad, Vector3};

use crate::primitives::geometry::{normalized, vec3};


/// Unconnected vertices with one normal each.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointCloud {
    pub vertices: Vec<Vector3<f64>>,
    pub normals: Vec<Vector3<f64>>,
}

impl PointCloud {
    fn with_capacity(n: usize) -> Self {
        PointCloud {
            vertices: Vec::with_capacity(n),
            normals: Vec::with_capacity(n),
        }
    }

    fn push(&mut self, vertex: Vector3<f64>, normal: Vector3<f64>) {
        self.vertices.push(vertex);
        self.normals.push(normal);
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// `segments` bottom/top pairs around +Z from `z = 0` to `z = length`, with
/// the first pair repeated at the end to close the loop.
///
/// Successive pairs step clockwise seen from +Z so that the cylinder index
/// pattern winds counter-clockwise seen from outside.
pub fn cylinder(radius: f64, length: f64, segments: u32) -> PointCloud {
    let mut cloud = PointCloud::with_capacity(2 * segments as usize + 2);
    let bottom = vec3(radius, 0.0, 0.0);
    let top = vec3(radius, 0.0, length);
    let step = 2.0 * PI / segments as f64;

    for i in 0..segments {
        let rotation = Matrix3::from_angle_z(Rad(-(i as f64) * step));
        let next_bottom = rotation * bottom;
        let next_top = rotation * top;
        let normal = normalized(vec3(next_bottom.x, next_bottom.y, 0.0));
        cloud.push(next_bottom, normal);
        cloud.push(next_top, normal);
    }

    // closing pair
    let normal = normalized(vec3(bottom.x, bottom.y, 0.0));
    cloud.push(bottom, normal);
    cloud.push(top, normal);
    cloud
}

/// North pole, `parallels - 1` rings of `meridians + 1` points (the last
/// repeating the first), then the south pole. Normals are computed before the
/// center offset is applied.
pub fn sphere(radius: f64, center: Vector3<f64>, parallels: u32, meridians: u32) -> PointCloud {
    let ring_size = meridians as usize + 1;
    let mut cloud = PointCloud::with_capacity(2 + (parallels as usize - 1) * ring_size);
    let dphi = PI / parallels as f64;
    let dtheta = 2.0 * PI / meridians as f64;

    let mut push = |point: Vector3<f64>| cloud.push(point + center, normalized(point));

    push(vec3(0.0, 0.0, radius));
    for j in 1..parallels {
        let phi = dphi * j as f64;
        let z = radius * phi.cos();
        let ring_radius = radius * phi.sin();
        for i in 0..=meridians {
            let theta = dtheta * i as f64;
            push(vec3(ring_radius * theta.cos(), ring_radius * theta.sin(), z));
        }
    }
    push(vec3(0.0, 0.0, -radius));
    cloud
}

/// Flat arrow in the XZ plane: shaft corners `a b c d`, then head corners
/// `t1 t2` and the tip `t3` at `z = length`.
///
/// ```text
///   ____|\
///  |____  *
///       |/
/// ```
pub fn arrow(length: f64, width: f64) -> PointCloud {
    let head_length = width * 2.0;
    let head_width = width * 2.0;
    let neck = length - head_length;

    let points = [
        vec3(-width / 2.0, 0.0, 0.0),
        vec3(width / 2.0, 0.0, 0.0),
        vec3(-width / 2.0, 0.0, neck),
        vec3(width / 2.0, 0.0, neck),
        vec3(-head_width / 2.0, 0.0, neck),
        vec3(head_width / 2.0, 0.0, neck),
        vec3(0.0, 0.0, length),
    ];

    let mut cloud = PointCloud::with_capacity(points.len());
    for point in points.iter() {
        cloud.push(*point, Vector3::unit_y());
    }
    cloud
}
