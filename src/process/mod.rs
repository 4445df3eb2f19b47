pub mod generate;
pub mod orient;
pub mod triangulate;
