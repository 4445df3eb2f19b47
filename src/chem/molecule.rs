use serde::{Deserialize, Serialize};

use crate::chem::elements;
use crate::error::{Error, Result};


/// Extra distance allowed on top of the covalent radii sum when guessing
/// bonds, in nanometers.
pub const BOND_TOLERANCE: f64 = 0.045;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    #[serde(rename = "type")]
    pub atom_type: String,
    pub r: [f64; 3],
}

impl Atom {
    pub fn new(atom_type: impl Into<String>, r: [f64; 3]) -> Self {
        Atom { atom_type: atom_type.into(), r }
    }
}


/// Atoms stored as parallel arrays plus bonds as pairs of local atom indices.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Molecule {
    pub type_array: Vec<String>,
    pub r_array: Vec<[f64; 3]>,
    #[serde(default)]
    pub bonds: Vec<[usize; 2]>,
}

impl Molecule {
    pub fn new(atoms: Vec<Atom>, bonds: Vec<[usize; 2]>) -> Result<Self> {
        let (type_array, r_array): (Vec<String>, Vec<[f64; 3]>) = atoms.into_iter().map(|a| (a.atom_type, a.r)).unzip();
        let molecule = Molecule { type_array, r_array, bonds };
        molecule.validate()?;
        Ok(molecule)
    }

    pub fn validate(&self) -> Result<()> {
        if self.type_array.len() != self.r_array.len() {
            return Err(Error::system(format!(
                "{} types for {} positions",
                self.type_array.len(),
                self.r_array.len()
            )));
        }
        check_bonds(&self.bonds, self.n_atoms())
    }

    pub fn n_atoms(&self) -> usize {
        self.r_array.len()
    }

    pub fn atoms(&self) -> Vec<Atom> {
        self.type_array
            .iter()
            .zip(self.r_array.iter())
            .map(|(t, r)| Atom::new(t.clone(), *r))
            .collect()
    }

    /// Mass-weighted center. Falls back to the geometric center when every
    /// atom is massless.
    pub fn center_of_mass(&self) -> [f64; 3] {
        center_of_mass(&self.type_array, &self.r_array)
    }

    pub fn translate(&mut self, displacement: [f64; 3]) {
        for r in self.r_array.iter_mut() {
            for k in 0..3 {
                r[k] += displacement[k];
            }
        }
    }

    /// Translates so that the center of mass sits on `position`.
    pub fn move_to(&mut self, position: [f64; 3]) {
        let com = self.center_of_mass();
        self.translate([position[0] - com[0], position[1] - com[1], position[2] - com[2]]);
    }

    /// Replaces the bonds with pairs closer than their covalent radii sum
    /// plus `BOND_TOLERANCE`.
    pub fn guess_bonds(&mut self) {
        self.bonds = guess_bonds(&self.type_array, &self.r_array, 0);
    }

    /// Element-wise signature used to group molecules of the same kind.
    pub fn signature(&self) -> String {
        self.type_array.join("-")
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let molecule: Molecule = serde_json::from_str(json)?;
        molecule.validate()?;
        Ok(molecule)
    }
}

pub(crate) fn check_bonds(bonds: &[[usize; 2]], n_atoms: usize) -> Result<()> {
    match bonds.iter().find(|b| b[0] >= n_atoms || b[1] >= n_atoms || b[0] == b[1]) {
        Some(b) => Err(Error::system(format!("bond {:?} is invalid for {} atoms", b, n_atoms))),
        None => Ok(()),
    }
}

pub(crate) fn center_of_mass(types: &[String], positions: &[[f64; 3]]) -> [f64; 3] {
    let mut weighted = [0.0; 3];
    let mut total = 0.0;
    for (t, r) in types.iter().zip(positions.iter()) {
        let m = elements::mass(t);
        total += m;
        for k in 0..3 {
            weighted[k] += m * r[k];
        }
    }
    if total > 0.0 {
        return [weighted[0] / total, weighted[1] / total, weighted[2] / total];
    }

    let n = positions.len().max(1) as f64;
    let mut sum = [0.0; 3];
    for r in positions {
        for k in 0..3 {
            sum[k] += r[k];
        }
    }
    [sum[0] / n, sum[1] / n, sum[2] / n]
}

pub(crate) fn squared_distance(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    (a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2) + (a[2] - b[2]).powi(2)
}

/// Bonds among `positions`, reported with `offset` added to each index.
pub(crate) fn guess_bonds(types: &[String], positions: &[[f64; 3]], offset: usize) -> Vec<[usize; 2]> {
    let radii: Vec<f64> = types.iter().map(|t| elements::covalent_radius(t)).collect();
    let mut bonds = Vec::new();
    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            let cutoff = radii[i] + radii[j] + BOND_TOLERANCE;
            if squared_distance(&positions[i], &positions[j]) <= cutoff * cutoff {
                bonds.push([i + offset, j + offset]);
            }
        }
    }
    bonds
}
