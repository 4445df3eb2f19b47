use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::primitives::material::Color;


/// Smoothness and sizing knobs shared by everything that builds shapes.
/// Missing fields in a config file fall back to the defaults below.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TessellationConfig {
    pub cylinder_segments: u32,
    pub sphere_parallels: u32,
    pub sphere_meridians: u32,
    pub arrow_width: f64,
    /// Radius of the bond cylinders in ball-and-stick scenes.
    pub bond_radius: f64,
    /// Atom sphere radius as a fraction of the van der Waals radius.
    pub atom_scale: f64,
    pub color: Color,
}

impl Default for TessellationConfig {
    fn default() -> Self {
        Self {
            cylinder_segments: 10,
            sphere_parallels: 20,
            sphere_meridians: 15,
            arrow_width: 0.05,
            bond_radius: 0.02,
            atom_scale: 0.3,
            color: Color::GRAY,
        }
    }
}

impl TessellationConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: TessellationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config = Self::from_json(&fs::read_to_string(path)?)?;
        log::info!("loaded tessellation config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.cylinder_segments < 3 {
            return Err(Error::invalid(format!("cylinder_segments {} < 3", self.cylinder_segments)));
        }
        if self.sphere_parallels < 2 {
            return Err(Error::invalid(format!("sphere_parallels {} < 2", self.sphere_parallels)));
        }
        if self.sphere_meridians < 3 {
            return Err(Error::invalid(format!("sphere_meridians {} < 3", self.sphere_meridians)));
        }
        for (name, value) in [
            ("arrow_width", self.arrow_width),
            ("bond_radius", self.bond_radius),
            ("atom_scale", self.atom_scale),
        ]
        .iter()
        {
            if !(value.is_finite() && *value > 0.0) {
                return Err(Error::invalid(format!("{} must be positive, got {}", name, value)));
            }
        }
        Ok(())
    }
}
