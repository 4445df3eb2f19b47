//! Index buffers stitching the generated point clouds into triangles.
//!
//! Ring-closing vertices are duplicated by the generators, so every index here
//! is reached by plain addition and nothing wraps around.

/// Two triangles per side quad, `{2i, 2i+1, 2i+2, 2i+2, 2i+1, 2i+3}` for every
/// segment `i`.
pub fn cylinder(segments: u32) -> Vec<u32> {
    let mut indices = Vec::with_capacity(segments as usize * 6);
    for i in 0..segments {
        let o = 2 * i;
        indices.extend_from_slice(&[o, o + 1, o + 2, o + 2, o + 1, o + 3]);
    }
    indices
}

/// North cap fan, body quads between consecutive rings, south cap fan.
/// Fewer than two parallels leave no ring to stitch and give no triangles.
pub fn sphere(parallels: u32, meridians: u32) -> Vec<u32> {
    if parallels < 2 {
        return Vec::new();
    }
    let m = meridians;
    let ring = m + 1;
    let mut indices = Vec::with_capacity(sphere_triangle_count(parallels, meridians) * 3);

    for i in 0..m {
        indices.extend_from_slice(&[0, 1 + i, 2 + i]);
    }

    for k in 0..parallels.saturating_sub(2) {
        let offset = 1 + k * ring;
        for i in 0..m {
            let o = offset + i;
            indices.extend_from_slice(&[o, o + ring, o + 1, o + 1, o + ring, o + ring + 1]);
        }
    }

    let last_ring = 1 + parallels.saturating_sub(2) * ring;
    let south = last_ring + ring;
    for i in 0..m {
        let o = last_ring + i;
        indices.extend_from_slice(&[south, o + 1, o]);
    }
    indices
}

pub fn sphere_triangle_count(parallels: u32, meridians: u32) -> usize {
    if parallels < 2 {
        return 0;
    }
    meridians as usize * (2 + 2 * parallels.saturating_sub(2) as usize)
}

/// Shaft as two triangles, head as one.
pub const ARROW: [u32; 9] = [0, 1, 2, 1, 2, 3, 4, 5, 6];

pub fn arrow() -> Vec<u32> {
    ARROW.to_vec()
}
