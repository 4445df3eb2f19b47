use serde::{Deserialize, Serialize};


/// Flat per-shape color. Every vertex of a shape shares it.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Color {
    pub rgb: [u8; 3],
}

impl Color {
    pub const GRAY: Color = Color::new(175, 175, 175);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { rgb: [r, g, b] }
    }

    /// The color repeated once per vertex, 3 bytes each.
    pub fn broadcast(&self, count: usize) -> Vec<u8> {
        let mut out = Vec::with_capacity(count * 3);
        for _ in 0..count {
            out.extend_from_slice(&self.rgb);
        }
        out
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::GRAY
    }
}

impl From<[u8; 3]> for Color {
    fn from(rgb: [u8; 3]) -> Self {
        Color { rgb }
    }
}
