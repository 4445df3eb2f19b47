use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::chem::molecule::{self, check_bonds, squared_distance, Molecule};
use crate::error::{Error, Result};


/// A collection of molecules flattened into per-atom arrays. Molecule `i`
/// owns atoms `mol_indices[i] .. mol_indices[i] + mol_n_atoms[i]`; bonds use
/// system-wide atom indices.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct System {
    pub r_array: Vec<[f64; 3]>,
    pub type_array: Vec<String>,
    pub mol_indices: Vec<usize>,
    pub mol_n_atoms: Vec<usize>,
    #[serde(default)]
    pub bonds: Vec<[usize; 2]>,
    #[serde(default)]
    pub box_vectors: Option<[[f64; 3]; 3]>,
}

impl System {
    pub fn empty() -> Self {
        System::default()
    }

    pub fn new(molecules: &[Molecule]) -> Self {
        let mut system = System::empty();
        for m in molecules {
            system.add(m);
        }
        system
    }

    pub fn from_arrays(
        r_array: Vec<[f64; 3]>,
        type_array: Vec<String>,
        mol_indices: Vec<usize>,
        mol_n_atoms: Vec<usize>,
        bonds: Vec<[usize; 2]>,
    ) -> Result<Self> {
        let system = System {
            r_array,
            type_array,
            mol_indices,
            mol_n_atoms,
            bonds,
            box_vectors: None,
        };
        system.validate()?;
        Ok(system)
    }

    pub fn with_box_vectors(mut self, box_vectors: [[f64; 3]; 3]) -> Self {
        self.box_vectors = Some(box_vectors);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.type_array.len() != self.r_array.len() {
            return Err(Error::system(format!(
                "{} types for {} positions",
                self.type_array.len(),
                self.r_array.len()
            )));
        }
        if self.mol_indices.len() != self.mol_n_atoms.len() {
            return Err(Error::system(format!(
                "{} molecule starts for {} molecule sizes",
                self.mol_indices.len(),
                self.mol_n_atoms.len()
            )));
        }
        let mut expected = 0;
        for (i, (&start, &n)) in self.mol_indices.iter().zip(self.mol_n_atoms.iter()).enumerate() {
            if start != expected {
                return Err(Error::system(format!("molecule {} starts at {}, expected {}", i, start, expected)));
            }
            expected += n;
        }
        if expected != self.n_atoms() {
            return Err(Error::system(format!(
                "molecules cover {} atoms but the system has {}",
                expected,
                self.n_atoms()
            )));
        }
        check_bonds(&self.bonds, self.n_atoms())
    }

    pub fn n_mol(&self) -> usize {
        self.mol_indices.len()
    }

    pub fn n_atoms(&self) -> usize {
        self.r_array.len()
    }

    /// Appends `molecule`, shifting its bonds to system-wide indices.
    pub fn add(&mut self, molecule: &Molecule) {
        let offset = self.n_atoms();
        self.mol_indices.push(offset);
        self.mol_n_atoms.push(molecule.n_atoms());
        self.r_array.extend_from_slice(&molecule.r_array);
        self.type_array.extend(molecule.type_array.iter().cloned());
        self.bonds
            .extend(molecule.bonds.iter().map(|b| [b[0] + offset, b[1] + offset]));
    }

    /// Appends every molecule and bond of `other`.
    pub fn extend(&mut self, other: &System) {
        let offset = self.n_atoms();
        self.r_array.extend_from_slice(&other.r_array);
        self.type_array.extend(other.type_array.iter().cloned());
        self.mol_indices.extend(other.mol_indices.iter().map(|i| i + offset));
        self.mol_n_atoms.extend_from_slice(&other.mol_n_atoms);
        self.bonds
            .extend(other.bonds.iter().map(|b| [b[0] + offset, b[1] + offset]));
    }

    fn atom_range(&self, i: usize) -> std::ops::Range<usize> {
        self.mol_indices[i]..self.mol_indices[i] + self.mol_n_atoms[i]
    }

    /// Copy of molecule `i` with bonds in molecule-local indices. Bonds that
    /// leave the molecule are not included.
    pub fn molecule(&self, i: usize) -> Result<Molecule> {
        if i >= self.n_mol() {
            return Err(Error::system(format!("molecule {} out of range for {} molecules", i, self.n_mol())));
        }
        let range = self.atom_range(i);
        let start = range.start;
        let bonds = self
            .bonds
            .iter()
            .filter(|b| range.contains(&b[0]) && range.contains(&b[1]))
            .map(|b| [b[0] - start, b[1] - start])
            .collect();
        Ok(Molecule {
            type_array: self.type_array[range.clone()].to_vec(),
            r_array: self.r_array[range].to_vec(),
            bonds,
        })
    }

    pub fn molecules(&self) -> impl Iterator<Item = Molecule> + '_ {
        (0..self.n_mol()).filter_map(move |i| self.molecule(i).ok())
    }

    pub fn atom_to_molecule(&self, atom: usize) -> Result<usize> {
        if atom >= self.n_atoms() {
            return Err(Error::system(format!("atom {} out of range for {} atoms", atom, self.n_atoms())));
        }
        Ok(self.mol_indices.partition_point(|&start| start <= atom) - 1)
    }

    /// New system holding the molecules listed in `order`, in that order.
    /// Bonds keep their relative order and are dropped when either end is
    /// not selected.
    fn select_molecules(&self, order: &[usize]) -> Result<System> {
        let mut seen = HashSet::new();
        let mut atom_map: Vec<Option<usize>> = vec![None; self.n_atoms()];
        let mut out = System {
            box_vectors: self.box_vectors,
            ..System::default()
        };

        for &i in order {
            if i >= self.n_mol() {
                return Err(Error::system(format!("molecule {} out of range for {} molecules", i, self.n_mol())));
            }
            if !seen.insert(i) {
                return Err(Error::system(format!("molecule {} selected twice", i)));
            }
            out.mol_indices.push(out.n_atoms());
            out.mol_n_atoms.push(self.mol_n_atoms[i]);
            for atom in self.atom_range(i) {
                atom_map[atom] = Some(out.n_atoms());
                out.r_array.push(self.r_array[atom]);
                out.type_array.push(self.type_array[atom].clone());
            }
        }

        out.bonds = self
            .bonds
            .iter()
            .filter_map(|b| match (atom_map[b[0]], atom_map[b[1]]) {
                (Some(x), Some(y)) => Some([x, y]),
                _ => None,
            })
            .collect();
        Ok(out)
    }

    pub fn remove_molecules(&mut self, indices: &[usize]) -> Result<()> {
        if let Some(&bad) = indices.iter().find(|&&i| i >= self.n_mol()) {
            return Err(Error::system(format!("molecule {} out of range for {} molecules", bad, self.n_mol())));
        }
        let doomed: HashSet<usize> = indices.iter().copied().collect();
        let keep: Vec<usize> = (0..self.n_mol()).filter(|i| !doomed.contains(i)).collect();
        *self = self.select_molecules(&keep)?;
        Ok(())
    }

    /// Removes the listed atoms together with the molecules they belong to.
    pub fn remove_atoms(&mut self, indices: &[usize]) -> Result<()> {
        let molecules = indices
            .iter()
            .map(|&a| self.atom_to_molecule(a))
            .collect::<Result<Vec<_>>>()?;
        self.remove_molecules(&molecules)
    }

    /// Rearranges molecules so that new molecule `k` is old molecule
    /// `order[k]`. `order` must be a permutation.
    pub fn reorder_molecules(&mut self, order: &[usize]) -> Result<()> {
        if order.len() != self.n_mol() {
            return Err(Error::system(format!(
                "reorder needs {} molecule indices, got {}",
                self.n_mol(),
                order.len()
            )));
        }
        *self = self.select_molecules(order)?;
        Ok(())
    }

    /// Groups molecules of the same kind together, ordered by their atom type
    /// signature. The relative order inside a group is kept.
    pub fn sort(&mut self) -> Result<()> {
        let signatures: Vec<String> = (0..self.n_mol())
            .map(|i| self.type_array[self.atom_range(i)].join("-"))
            .collect();
        let mut order: Vec<usize> = (0..self.n_mol()).collect();
        order.sort_by(|&a, &b| signatures[a].cmp(&signatures[b]));
        *self = self.select_molecules(&order)?;
        Ok(())
    }

    /// Replaces the bonds with the ones guessed inside each molecule.
    pub fn guess_bonds(&mut self) {
        let mut bonds = Vec::new();
        for i in 0..self.n_mol() {
            let range = self.atom_range(i);
            bonds.extend(molecule::guess_bonds(
                &self.type_array[range.clone()],
                &self.r_array[range.clone()],
                range.start,
            ));
        }
        log::debug!("guessed {} bonds across {} molecules", bonds.len(), self.n_mol());
        self.bonds = bonds;
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let system: System = serde_json::from_str(json)?;
        system.validate()?;
        Ok(system)
    }
}

pub fn subsystem_from_molecules(system: &System, indices: &[usize]) -> Result<System> {
    system.select_molecules(indices)
}

/// Subsystem of every molecule that has at least one atom set in `mask`.
pub fn subsystem_from_atoms(system: &System, mask: &[bool]) -> Result<System> {
    if mask.len() != system.n_atoms() {
        return Err(Error::system(format!(
            "atom mask has {} entries for {} atoms",
            mask.len(),
            system.n_atoms()
        )));
    }
    let selected: Vec<usize> = (0..system.n_mol())
        .filter(|&i| system.atom_range(i).any(|atom| mask[atom]))
        .collect();
    system.select_molecules(&selected)
}

/// `a` with every molecule that comes within `bounding` of an atom of `b`
/// removed, followed by all of `b`. A non-positive `bounding` keeps all of
/// `a`.
pub fn merge_systems(a: &System, b: &System, bounding: f64) -> Result<System> {
    let mut merged = a.clone();
    if bounding > 0.0 && b.n_atoms() > 0 {
        let grid = CellGrid::new(&b.r_array, bounding);
        let mut clashing = HashSet::new();
        for (atom, r) in a.r_array.iter().enumerate() {
            if grid.any_within(r, &b.r_array, bounding) {
                clashing.insert(a.atom_to_molecule(atom)?);
            }
        }
        if !clashing.is_empty() {
            log::info!("merge removes {} overlapping molecules", clashing.len());
            merged.remove_molecules(&clashing.into_iter().collect::<Vec<_>>())?;
        }
    }
    merged.extend(b);
    Ok(merged)
}


/// Uniform hash grid over a point set, used to find close pairs without
/// comparing every atom with every other.
struct CellGrid {
    size: f64,
    cells: HashMap<(i64, i64, i64), Vec<usize>>,
}

impl CellGrid {
    fn new(points: &[[f64; 3]], size: f64) -> Self {
        let mut cells: HashMap<(i64, i64, i64), Vec<usize>> = HashMap::new();
        for (i, p) in points.iter().enumerate() {
            cells.entry(Self::key(p, size)).or_default().push(i);
        }
        CellGrid { size, cells }
    }

    // far-out coordinates saturate at the i64 bounds; neighbours are still
    // confirmed by distance
    fn key(p: &[f64; 3], size: f64) -> (i64, i64, i64) {
        (
            (p[0] / size).floor() as i64,
            (p[1] / size).floor() as i64,
            (p[2] / size).floor() as i64,
        )
    }

    fn any_within(&self, p: &[f64; 3], points: &[[f64; 3]], cutoff: f64) -> bool {
        let (x, y, z) = Self::key(p, self.size);
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let cell = (x.saturating_add(dx), y.saturating_add(dy), z.saturating_add(dz));
                    if let Some(members) = self.cells.get(&cell) {
                        if members.iter().any(|&j| squared_distance(p, &points[j]) < cutoff * cutoff) {
                            return true;
                        }
                    }
                }
            }
        }
        false
    }
}
