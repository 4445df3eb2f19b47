//! Element symbols and the handful of per-element numbers the scene builder
//! and bond guesser need. Lengths are in nanometers, masses in daltons.
//!
//! Lookups take atom types, so GROMACS names such as `OW` resolve to their
//! element before the table is searched.

use crate::chem::gro::element_of;
use crate::primitives::material::Color;


pub const SYMBOLS: [&str; 118] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S", "Cl", "Ar", "K", "Ca",
    "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As", "Se", "Br", "Kr", "Rb", "Sr", "Y",
    "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In", "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce",
    "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb", "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir",
    "Pt", "Au", "Hg", "Tl", "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm",
    "Bk", "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn", "Nh", "Fl", "Mc",
    "Lv", "Ts", "Og",
];

/// Used when an atom type has no entry in the table.
pub const DEFAULT_COVALENT_RADIUS: f64 = 0.15;
pub const DEFAULT_VDW_RADIUS: f64 = 0.15;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ElementData {
    pub symbol: &'static str,
    pub mass: f64,
    pub covalent_radius: f64,
    pub vdw_radius: f64,
    pub color: Color,
}

const fn element(symbol: &'static str, mass: f64, covalent_radius: f64, vdw_radius: f64, color: [u8; 3]) -> ElementData {
    ElementData {
        symbol,
        mass,
        covalent_radius,
        vdw_radius,
        color: Color::new(color[0], color[1], color[2]),
    }
}

#[rustfmt::skip]
const TABLE: [ElementData; 30] = [
    element("H",  1.008,   0.031, 0.120, [255, 255, 255]),
    element("He", 4.0026,  0.028, 0.140, [217, 255, 255]),
    element("Li", 6.94,    0.128, 0.182, [204, 128, 255]),
    element("Be", 9.0122,  0.096, 0.153, [194, 255, 0]),
    element("B",  10.81,   0.084, 0.192, [255, 181, 181]),
    element("C",  12.011,  0.076, 0.170, [144, 144, 144]),
    element("N",  14.007,  0.071, 0.155, [48, 80, 248]),
    element("O",  15.999,  0.066, 0.152, [255, 13, 13]),
    element("F",  18.998,  0.057, 0.147, [144, 224, 80]),
    element("Ne", 20.180,  0.058, 0.154, [179, 227, 245]),
    element("Na", 22.990,  0.166, 0.227, [171, 92, 242]),
    element("Mg", 24.305,  0.141, 0.173, [138, 255, 0]),
    element("Al", 26.982,  0.121, 0.184, [191, 166, 166]),
    element("Si", 28.085,  0.111, 0.210, [240, 200, 160]),
    element("P",  30.974,  0.107, 0.180, [255, 128, 0]),
    element("S",  32.06,   0.105, 0.180, [255, 255, 48]),
    element("Cl", 35.45,   0.102, 0.175, [31, 240, 31]),
    element("Ar", 39.948,  0.106, 0.188, [128, 209, 227]),
    element("K",  39.098,  0.203, 0.275, [143, 64, 212]),
    element("Ca", 40.078,  0.176, 0.231, [61, 255, 0]),
    element("Fe", 55.845,  0.132, 0.204, [224, 102, 51]),
    element("Cu", 63.546,  0.132, 0.140, [200, 128, 51]),
    element("Zn", 65.38,   0.122, 0.139, [125, 128, 176]),
    element("Br", 79.904,  0.120, 0.185, [166, 41, 41]),
    element("Rb", 85.468,  0.220, 0.303, [112, 46, 176]),
    element("Sr", 87.62,   0.195, 0.249, [0, 255, 0]),
    element("I",  126.90,  0.139, 0.198, [148, 0, 148]),
    element("Cs", 132.91,  0.244, 0.343, [87, 23, 143]),
    element("Ba", 137.33,  0.215, 0.268, [0, 201, 0]),
    // virtual sites and lone pairs
    element("Xx", 0.0,     0.0,   0.050, [255, 20, 147]),
];

pub fn lookup(atom_type: &str) -> Option<&'static ElementData> {
    let symbol = element_of(atom_type);
    TABLE.iter().find(|e| e.symbol == symbol)
}

pub fn is_symbol(symbol: &str) -> bool {
    SYMBOLS.contains(&symbol)
}

pub fn atomic_number(symbol: &str) -> Option<u32> {
    SYMBOLS.iter().position(|&s| s == symbol).map(|i| i as u32 + 1)
}

pub fn mass(atom_type: &str) -> f64 {
    lookup(atom_type).map(|e| e.mass).unwrap_or(0.0)
}

pub fn covalent_radius(atom_type: &str) -> f64 {
    lookup(atom_type).map(|e| e.covalent_radius).unwrap_or(DEFAULT_COVALENT_RADIUS)
}

pub fn vdw_radius(atom_type: &str) -> f64 {
    lookup(atom_type).map(|e| e.vdw_radius).unwrap_or(DEFAULT_VDW_RADIUS)
}

pub fn cpk_color(atom_type: &str) -> Color {
    lookup(atom_type).map(|e| e.color).unwrap_or(Color::GRAY)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_are_ordered_by_atomic_number() {
        assert_eq!(atomic_number("H"), Some(1));
        assert_eq!(atomic_number("C"), Some(6));
        assert_eq!(atomic_number("Og"), Some(118));
        assert_eq!(atomic_number("Xx"), None);
    }

    #[test]
    fn table_entries_are_symbols() {
        for e in TABLE.iter().filter(|e| e.symbol != "Xx") {
            assert!(is_symbol(e.symbol), "{} is not an element", e.symbol);
        }
    }

    #[test]
    fn unknown_elements_fall_back() {
        assert_eq!(vdw_radius("Uuo"), DEFAULT_VDW_RADIUS);
        assert_eq!(cpk_color("Pt"), Color::GRAY);
        assert_eq!(mass("Pt"), 0.0);
        assert_eq!(cpk_color("O"), Color::new(255, 13, 13));
    }

    #[test]
    fn gromacs_names_resolve_to_elements() {
        assert_eq!(mass("OW"), mass("O"));
        assert_eq!(covalent_radius("HW1"), covalent_radius("H"));
        assert_eq!(vdw_radius("NA"), vdw_radius("Na"));
        assert_eq!(cpk_color("CA"), cpk_color("C"));
    }
}
