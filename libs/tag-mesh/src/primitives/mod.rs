//! # Primitives
//!
//! Mesh generation for shapes that are built directly rather than swept.

pub mod cylinder;

pub use cylinder::create_disc;
