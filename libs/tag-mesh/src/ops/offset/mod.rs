//! # 2D Polygon Inset
//!
//! Moves every edge of a counter-clockwise polygon inward by a fixed
//! distance, joining neighbouring edges with mitred corners.
//!
//! ## Algorithm Overview
//!
//! 1. For each vertex, take the inward normals of its two edges
//! 2. Place the new vertex on the corner bisector at the distance where
//!    both offset edges meet
//! 3. Reject the result if any edge flipped direction
//!
//! The output has the same vertex count as the input, so rings built
//! from successive insets can be stitched one-to-one.


use crate::error::MeshError;
use crate::ops::extrude::Polygon2D;
use config::constants::{approx_zero, EPSILON};
use glam::DVec2;

/// Mitre length is capped at this multiple of the inset distance.
const MITER_LIMIT: f64 = 8.0;

/// Computes the inward offset of a counter-clockwise polygon.
///
/// # Arguments
///
/// * `polygon` - The polygon to inset (counter-clockwise)
/// * `distance` - Inset distance; zero returns a copy
///
/// # Errors
///
/// Returns [`MeshError::DegenerateGeometry`] if the polygon has fewer than
/// three vertices or the inset collapses or inverts an edge.
///
/// # Example
///
/// ```rust
/// use tag_mesh::ops::extrude::Polygon2D;
/// use tag_mesh::ops::offset::inset_polygon;
///
/// let square = Polygon2D::square(10.0, true);
/// let inner = inset_polygon(&square, 1.0).unwrap();
/// assert!((inner.extent().x - 8.0).abs() < 1e-9);
/// ```
pub fn inset_polygon(polygon: &Polygon2D, distance: f64) -> Result<Polygon2D, MeshError> {
    let n = polygon.vertex_count();
    if n < 3 {
        return Err(MeshError::degenerate(
            "Polygon must have at least 3 vertices",
        ));
    }

    if approx_zero(distance) {
        return Ok(polygon.clone());
    }

    let vertices = &polygon.outer;
    let mut inset = Vec::with_capacity(n);

    for i in 0..n {
        let prev = vertices[(i + n - 1) % n];
        let curr = vertices[i];
        let next = vertices[(i + 1) % n];

        // Inward normal of a CCW edge (dx, dy) is (-dy, dx)
        let normal_in = (curr - prev).normalize_or_zero().perp();
        let normal_out = (next - curr).normalize_or_zero().perp();

        let bisector = normal_in + normal_out;
        if bisector.length() < EPSILON {
            // Edges fold back onto each other
            return Err(MeshError::degenerate(format!(
                "Inset of {distance} folds at vertex {i}"
            )));
        }
        let bisector = bisector.normalize();

        // Both offset edges meet where the bisector has moved `distance`
        // along each normal
        let cos_half = bisector.dot(normal_in).max(1.0 / MITER_LIMIT);
        inset.push(curr + bisector * (distance / cos_half));
    }

    check_orientation_preserved(vertices, &inset, distance)?;

    Ok(Polygon2D::new(inset))
}

fn check_orientation_preserved(
    original: &[DVec2],
    inset: &[DVec2],
    distance: f64,
) -> Result<(), MeshError> {
    let n = original.len();
    for i in 0..n {
        let before = original[(i + 1) % n] - original[i];
        let after = inset[(i + 1) % n] - inset[i];
        if before.length() > EPSILON && before.dot(after) <= 0.0 {
            return Err(MeshError::degenerate(format!(
                "Inset of {distance} inverts edge {i}"
            )));
        }
    }

    if Polygon2D::new(inset.to_vec()).signed_area() <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Inset of {distance} collapses the outline"
        )));
    }

    Ok(())
}
