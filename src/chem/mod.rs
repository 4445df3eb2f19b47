pub mod elements;
pub mod gro;
pub mod molecule;
pub mod system;
