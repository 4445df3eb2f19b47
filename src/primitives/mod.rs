pub mod arrow;
pub mod cylinder;
pub mod geometry;
pub mod material;
pub mod mesh;
pub mod scene;
pub mod shape;
pub mod sphere;
