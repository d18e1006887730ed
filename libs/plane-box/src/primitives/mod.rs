//! # Primitives
//!
//! Mesh generation for the solid hit volume and the marker sphere.

pub mod cube;
pub mod sphere;

pub use cube::create_box;
pub use sphere::create_sphere;
