//! # STL Export
//!
//! Serializes a solid to binary STL in its canonical pose.
//!
//! The solid's display orientation is swapped for the canonical pose
//! while writing and put back afterwards, on success and failure alike.
//! Facets are converted in parallel; their order follows the mesh.

use crate::error::MeshError;
use crate::solid::Solid;
use config::constants::DEGENERATE_AREA_EPSILON;
use glam::{DQuat, DVec3};
use rayon::prelude::*;
use std::io::Cursor;
use std::ops::{Deref, DerefMut};
use tracing::info;

/// Holds a solid in the canonical pose and restores its previous
/// orientation when dropped.
pub struct PoseGuard<'a> {
    solid: &'a mut Solid,
    saved: DQuat,
}

impl<'a> PoseGuard<'a> {
    pub fn canonical(solid: &'a mut Solid) -> Self {
        let saved = solid.orientation();
        solid.reset_orientation();
        Self { solid, saved }
    }
}

impl Deref for PoseGuard<'_> {
    type Target = Solid;

    fn deref(&self) -> &Solid {
        self.solid
    }
}

impl DerefMut for PoseGuard<'_> {
    fn deref_mut(&mut self) -> &mut Solid {
        self.solid
    }
}

impl Drop for PoseGuard<'_> {
    fn drop(&mut self) {
        self.solid.set_orientation(self.saved);
    }
}

/// Writes `solid` as binary STL.
///
/// The output depends only on the solid's geometry, so repeated exports
/// are byte-identical whatever the current spin.
///
/// # Errors
///
/// Returns [`MeshError::DegenerateGeometry`] if a facet has no area, or
/// [`MeshError::Serialization`] if writing fails.
///
/// # Example
///
/// ```rust
/// use tag_mesh::export::export_binary;
/// use tag_mesh::profile::{generate_profile, Shape};
/// use tag_mesh::solid::{extrude, ExtrudeSettings};
///
/// let profile = generate_profile(Shape::Square, 30.0).unwrap();
/// let mut solid = extrude(&profile, 2.0, &ExtrudeSettings::default()).unwrap();
/// let bytes = export_binary(&mut solid).unwrap();
/// assert_eq!(bytes.len(), 84 + 50 * solid.mesh().triangle_count());
/// ```
pub fn export_binary(solid: &mut Solid) -> Result<Vec<u8>, MeshError> {
    let posed = PoseGuard::canonical(solid);
    let bytes = write_posed(&posed)?;
    info!(
        shape = %posed.shape(),
        facets = posed.mesh().triangle_count(),
        bytes = bytes.len(),
        "Exported solid"
    );
    Ok(bytes)
}

fn write_posed(solid: &Solid) -> Result<Vec<u8>, MeshError> {
    let vertices = solid.world_vertices();
    let facets = solid
        .mesh()
        .triangles()
        .par_iter()
        .enumerate()
        .map(|(index, tri)| facet(index, tri.map(|i| vertices[i as usize])))
        .collect::<Result<Vec<_>, _>>()?;

    let mut cursor = Cursor::new(Vec::with_capacity(84 + 50 * facets.len()));
    stl_io::write_stl(&mut cursor, facets.iter())?;
    Ok(cursor.into_inner())
}

fn facet(index: usize, [a, b, c]: [DVec3; 3]) -> Result<stl_io::Triangle, MeshError> {
    let cross = (b - a).cross(c - a);
    if cross.length() * 0.5 < DEGENERATE_AREA_EPSILON {
        return Err(MeshError::degenerate(format!(
            "Facet {index} has no area"
        )));
    }

    let n = cross.normalize();
    Ok(stl_io::Triangle {
        normal: stl_io::Normal::new([n.x as f32, n.y as f32, n.z as f32]),
        vertices: [a, b, c].map(|v| stl_io::Vertex::new([v.x as f32, v.y as f32, v.z as f32])),
    })
}
