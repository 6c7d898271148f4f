//! # Disc Primitive
//!
//! Generates the flat cylinder used for round tags. The disc is built in
//! the same frame as the beveled sweep: circular cross-section in XY,
//! thickness along Z, centered on the origin.

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::MIN_DISC_SEGMENTS;
use glam::{DVec2, DVec3};
use std::f64::consts::TAU;
use std::ops::Range;

/// Creates a disc mesh.
///
/// # Arguments
///
/// * `diameter` - Diameter in the XY plane
/// * `thickness` - Extent along Z, centered on Z=0
/// * `segments` - Number of segments around the circumference
///
/// # Returns
///
/// The mesh and the vertex range of the top (+Z) cap. Side UVs wrap the
/// circumference (`u` around, `v` up); cap UVs are radial, with the cap
/// center at `(0.5, 0.5)` and the rim on the circle of radius `0.5`.
///
/// # Example
///
/// ```rust
/// use tag_mesh::primitives::create_disc;
///
/// let (mesh, top) = create_disc(50.0, 4.0, 64).unwrap();
/// assert!(mesh.validate());
/// assert_eq!(top.len(), 65);
/// ```
pub fn create_disc(
    diameter: f64,
    thickness: f64,
    segments: u32,
) -> Result<(Mesh, Range<u32>), MeshError> {
    if diameter <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Disc diameter must be positive: {diameter}"
        )));
    }

    if thickness <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Disc thickness must be positive: {thickness}"
        )));
    }

    if segments < MIN_DISC_SEGMENTS {
        return Err(MeshError::invalid_parameter(format!(
            "Disc segments must be at least {MIN_DISC_SEGMENTS}: {segments}"
        )));
    }

    let radius = diameter / 2.0;
    let half = thickness / 2.0;
    let n = segments as usize;
    let mut mesh = Mesh::with_capacity(2 * (n + 1) + 2 * (n + 1), 4 * n);

    // Side wall, one seam column repeated so u runs 0..=1
    let side_base = mesh.vertex_count() as u32;
    for (z, v) in [(-half, 0.0), (half, 1.0)] {
        for j in 0..=segments {
            let u = j as f64 / segments as f64;
            let (sin, cos) = (u * TAU).sin_cos();
            mesh.add_vertex(DVec3::new(radius * cos, radius * sin, z), DVec2::new(u, v));
        }
    }

    let stride = segments + 1;
    for j in 0..segments {
        let b0 = side_base + j;
        let b1 = b0 + 1;
        let t0 = b0 + stride;
        let t1 = t0 + 1;
        mesh.add_triangle(b0, b1, t1);
        mesh.add_triangle(b0, t1, t0);
    }

    add_cap(&mut mesh, radius, -half, segments, false);
    let top_start = mesh.vertex_count() as u32;
    add_cap(&mut mesh, radius, half, segments, true);
    let top = top_start..mesh.vertex_count() as u32;

    Ok((mesh, top))
}

/// Adds a triangle fan cap: a center vertex followed by the rim.
fn add_cap(mesh: &mut Mesh, radius: f64, z: f64, segments: u32, facing_up: bool) {
    let center = mesh.add_vertex(DVec3::new(0.0, 0.0, z), DVec2::splat(0.5));

    for j in 0..segments {
        let theta = TAU * j as f64 / segments as f64;
        let (sin, cos) = theta.sin_cos();
        mesh.add_vertex(
            DVec3::new(radius * cos, radius * sin, z),
            DVec2::new(0.5 + 0.5 * cos, 0.5 + 0.5 * sin),
        );
    }

    for j in 0..segments {
        let a = center + 1 + j;
        let b = center + 1 + (j + 1) % segments;
        if facing_up {
            mesh.add_triangle(center, a, b);
        } else {
            mesh.add_triangle(center, b, a);
        }
    }
}
