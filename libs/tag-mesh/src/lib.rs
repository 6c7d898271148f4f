//! # Tag Mesh
//!
//! Solid geometry for 3D-printable QR tags.
//!
//! ## Architecture
//!
//! ```text
//! Shape + size → Profile → Solid → { ViewState, STL bytes }
//! ```
//!
//! ## Algorithms
//!
//! All algorithms are pure Rust:
//! - **Profiles**: flattened Bézier and arc segments
//! - **Bevel**: mitred polygon inset, one ring per bevel step
//! - **Caps**: ear clipping
//! - **Export**: parallel facet conversion, binary STL via `stl_io`
//!
//! ## Usage
//!
//! ```rust
//! use tag_mesh::{build_solid, export_binary, Shape};
//! use tag_mesh::solid::ExtrudeSettings;
//!
//! let mut solid = build_solid(Shape::Heart, 50.0, 4.0, &ExtrudeSettings::default()).unwrap();
//! let stl = export_binary(&mut solid).unwrap();
//! assert!(stl.len() > 84);
//! ```

pub mod camera;
pub mod error;
pub mod export;
pub mod mesh;
pub mod ops;
pub mod primitives;
pub mod profile;
pub mod solid;

#[cfg(test)]
pub(crate) mod test_support;

pub use camera::{fit_distance, frame, FramingParams, ViewState};
pub use error::MeshError;
pub use export::{export_binary, PoseGuard};
pub use mesh::Mesh;
pub use profile::{generate_profile, Profile, Shape};
pub use solid::{extrude, ExtrudeSettings, Solid, UvSpace};

/// Generates the profile for `shape` and extrudes it in one step.
///
/// # Errors
///
/// Returns [`MeshError`] from either stage.
pub fn build_solid(
    shape: Shape,
    size: f64,
    thickness: f64,
    settings: &ExtrudeSettings,
) -> Result<Solid, MeshError> {
    let profile = generate_profile(shape, size)?;
    extrude(&profile, thickness, settings)
}
