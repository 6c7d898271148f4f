//! # Beveled Linear Extrusion
//!
//! Extrudes a 2D polygon along the Z axis, centered on Z=0, and rounds
//! both extrusion edges with a quarter-round bevel.
//!
//! ## Ring Layout
//!
//! The side wall is a stack of rings, bottom to top. Each bevel step
//! `k` in `0..=segments` sits at angle `φ = k/segments · π/2` and uses
//!
//! - inset `depth · (1 - sin φ)` from the outline
//! - height `depth · (1 - cos φ)` from the cap
//!
//! so ring `k = 0` is the cap rim and ring `k = segments` is flush with
//! the outline. Caps are triangulated separately with planar UVs.

use super::Polygon2D;
use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::ops::offset::inset_polygon;
use crate::ops::triangulate::triangulate;
use config::constants::{BEVEL_DEPTH, BEVEL_SEGMENTS, EPSILON};
use glam::{DVec2, DVec3};
use std::f64::consts::FRAC_PI_2;

/// Parameters for the edge bevel.
#[derive(Debug, Clone, PartialEq)]
pub struct BevelParams {
    /// Bevel depth in millimetres, both inward and along Z
    pub depth: f64,
    /// Number of subdivisions along each bevel
    pub segments: u32,
}

impl Default for BevelParams {
    fn default() -> Self {
        Self {
            depth: BEVEL_DEPTH,
            segments: BEVEL_SEGMENTS,
        }
    }
}

struct Ring {
    z: f64,
    outline: Polygon2D,
}

/// Extrudes a counter-clockwise polygon into a beveled solid.
///
/// The solid spans `-height/2..=height/2` along Z. The top cap faces +Z
/// and carries UVs normalized so the profile's longer side spans `0..=1`.
///
/// The bevel depth is limited to a quarter of the height so both bevels
/// leave a straight wall.
///
/// # Errors
///
/// Returns [`MeshError::DegenerateGeometry`] for non-positive height,
/// fewer than three vertices, or a bevel that would invert the outline.
///
/// # Example
///
/// ```rust
/// use tag_mesh::ops::extrude::{bevel_extrude, BevelParams, Polygon2D};
///
/// let square = Polygon2D::square(30.0, true);
/// let (mesh, top) = bevel_extrude(&square, 2.0, &BevelParams::default()).unwrap();
/// let (min, max) = mesh.bounding_box();
/// assert!((max.z - min.z - 2.0).abs() < 1e-9);
/// assert!(!top.is_empty());
/// ```
pub fn bevel_extrude(
    polygon: &Polygon2D,
    height: f64,
    params: &BevelParams,
) -> Result<(Mesh, std::ops::Range<u32>), MeshError> {
    if height <= 0.0 {
        return Err(MeshError::degenerate("Extrusion height must be positive"));
    }

    if polygon.vertex_count() < 3 {
        return Err(MeshError::degenerate(
            "Polygon must have at least 3 vertices",
        ));
    }

    let depth = params.depth.clamp(0.0, height * 0.25);
    let (depth, segments) = if depth > EPSILON && params.segments > 0 {
        (depth, params.segments)
    } else {
        (0.0, 0)
    };

    let rings = build_rings(polygon, height, depth, segments)?;
    let cap = triangulate(&rings[0].outline)?;

    let n = polygon.vertex_count();
    let uv_span = polygon.extent().max_element().max(EPSILON);
    let uv_center = polygon.bounds_center();

    let side_vertices = rings.len() * (n + 1);
    let cap_vertices = 2 * n;
    let mut mesh = Mesh::with_capacity(
        side_vertices + cap_vertices,
        (rings.len() - 1) * n * 2 + cap.len() * 2,
    );

    add_side_wall(&mut mesh, &rings, height);

    // Bottom cap, wound to face -Z
    let bottom = &rings[0];
    let bottom_base = mesh.vertex_count() as u32;
    for v in &bottom.outline.outer {
        mesh.add_vertex(DVec3::new(v.x, v.y, bottom.z), planar_uv(*v, uv_center, uv_span));
    }
    for [a, b, c] in &cap {
        mesh.add_triangle(bottom_base + a, bottom_base + c, bottom_base + b);
    }

    // Top cap, wound to face +Z
    let top = &rings[rings.len() - 1];
    let top_base = mesh.vertex_count() as u32;
    for v in &top.outline.outer {
        mesh.add_vertex(DVec3::new(v.x, v.y, top.z), planar_uv(*v, uv_center, uv_span));
    }
    for [a, b, c] in &cap {
        mesh.add_triangle(top_base + a, top_base + b, top_base + c);
    }
    let top_range = top_base..mesh.vertex_count() as u32;

    Ok((mesh, top_range))
}

fn build_rings(
    polygon: &Polygon2D,
    height: f64,
    depth: f64,
    segments: u32,
) -> Result<Vec<Ring>, MeshError> {
    let half = height / 2.0;

    // One inset outline per bevel step, shared by the bottom and top bevels
    let mut steps = Vec::with_capacity(segments as usize + 1);
    for k in 0..=segments {
        let phi = if segments == 0 {
            FRAC_PI_2
        } else {
            k as f64 / segments as f64 * FRAC_PI_2
        };
        let inset = depth * (1.0 - phi.sin());
        let rise = depth * (1.0 - phi.cos());
        steps.push((rise, inset_polygon(polygon, inset)?));
    }

    let mut rings = Vec::with_capacity(steps.len() * 2);
    for (rise, outline) in &steps {
        rings.push(Ring {
            z: -half + rise,
            outline: outline.clone(),
        });
    }

    // The depth clamp keeps the wall at least height/2 tall, so the two
    // flush rings never coincide
    for (rise, outline) in steps.into_iter().rev() {
        rings.push(Ring {
            z: half - rise,
            outline,
        });
    }

    Ok(rings)
}

fn add_side_wall(mesh: &mut Mesh, rings: &[Ring], height: f64) {
    let n = rings[0].outline.vertex_count();
    let perimeter = perimeter_fractions(&rings[rings.len() / 2].outline);
    let base = mesh.vertex_count() as u32;
    let stride = (n + 1) as u32;

    // Each ring repeats its first vertex so the U seam can run 0..=1
    for ring in rings {
        let v = (ring.z + height / 2.0) / height;
        for (i, u) in perimeter.iter().enumerate() {
            let p = ring.outline.outer[i % n];
            mesh.add_vertex(DVec3::new(p.x, p.y, ring.z), DVec2::new(*u, v));
        }
    }

    for r in 0..rings.len() as u32 - 1 {
        let lower = base + r * stride;
        let upper = lower + stride;
        for i in 0..n as u32 {
            mesh.add_triangle(lower + i, lower + i + 1, upper + i + 1);
            mesh.add_triangle(lower + i, upper + i + 1, upper + i);
        }
    }
}

/// Cumulative arc-length fraction at each vertex, closing back at 1.0.
fn perimeter_fractions(outline: &Polygon2D) -> Vec<f64> {
    let n = outline.vertex_count();
    let mut fractions = Vec::with_capacity(n + 1);
    let mut length = 0.0;
    fractions.push(0.0);
    for i in 0..n {
        length += outline.outer[i].distance(outline.outer[(i + 1) % n]);
        fractions.push(length);
    }
    let total = length.max(EPSILON);
    fractions.iter().map(|l| l / total).collect()
}

fn planar_uv(p: DVec2, center: DVec2, span: f64) -> DVec2 {
    DVec2::splat(0.5) + (p - center) / span
}
