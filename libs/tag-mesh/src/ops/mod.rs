//! # Mesh Operations
//!
//! 2D outline operations and the beveled sweep that turns an outline
//! into a solid.

pub mod extrude;
pub mod offset;
pub mod triangulate;

pub use extrude::{bevel_extrude, BevelParams, Polygon2D};
pub use offset::inset_polygon;
pub use triangulate::triangulate;
