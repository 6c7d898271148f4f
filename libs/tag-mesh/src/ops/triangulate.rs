//! # Polygon Triangulation
//!
//! Ear clipping for simple polygons without holes. Handles the concave
//! outlines produced by the heart profile, where a fan from one vertex
//! would spill outside the shape.

use crate::error::MeshError;
use crate::ops::extrude::Polygon2D;
use config::constants::EPSILON;
use glam::DVec2;

/// Triangulates a simple counter-clockwise polygon.
///
/// Returns index triples into `polygon.outer`, each wound counter-clockwise.
/// An `n`-gon always yields `n - 2` triangles.
///
/// # Errors
///
/// Returns [`MeshError::TriangulationFailed`] when no ear can be found,
/// which happens for self-intersecting or clockwise input.
///
/// # Example
///
/// ```rust
/// use tag_mesh::ops::extrude::Polygon2D;
/// use tag_mesh::ops::triangulate::triangulate;
///
/// let square = Polygon2D::square(1.0, false);
/// let triangles = triangulate(&square).unwrap();
/// assert_eq!(triangles.len(), 2);
/// ```
pub fn triangulate(polygon: &Polygon2D) -> Result<Vec<[u32; 3]>, MeshError> {
    let points = &polygon.outer;
    let n = points.len();
    if n < 3 {
        return Err(MeshError::triangulation_failed(
            "Polygon must have at least 3 vertices",
        ));
    }

    let mut remaining: Vec<usize> = (0..n).collect();
    let mut triangles = Vec::with_capacity(n - 2);

    while remaining.len() > 3 {
        let m = remaining.len();
        let ear = (0..m).find(|&i| {
            let prev = remaining[(i + m - 1) % m];
            let curr = remaining[i];
            let next = remaining[(i + 1) % m];
            is_ear(points, &remaining, prev, curr, next)
        });

        let Some(i) = ear else {
            return Err(MeshError::triangulation_failed(format!(
                "No ear found with {m} vertices remaining"
            )));
        };

        let prev = remaining[(i + m - 1) % m];
        let next = remaining[(i + 1) % m];
        triangles.push([prev as u32, remaining[i] as u32, next as u32]);
        remaining.remove(i);
    }

    triangles.push([
        remaining[0] as u32,
        remaining[1] as u32,
        remaining[2] as u32,
    ]);

    Ok(triangles)
}

fn is_ear(points: &[DVec2], remaining: &[usize], prev: usize, curr: usize, next: usize) -> bool {
    let a = points[prev];
    let b = points[curr];
    let c = points[next];

    // Reflex or collinear corners are never ears
    if (b - a).perp_dot(c - b) <= EPSILON {
        return false;
    }

    remaining
        .iter()
        .filter(|&&idx| idx != prev && idx != curr && idx != next)
        .all(|&idx| !point_in_triangle(points[idx], a, b, c))
}

/// Inclusive point-in-triangle test for a counter-clockwise triangle.
fn point_in_triangle(p: DVec2, a: DVec2, b: DVec2, c: DVec2) -> bool {
    (b - a).perp_dot(p - a) >= -EPSILON
        && (c - b).perp_dot(p - b) >= -EPSILON
        && (a - c).perp_dot(p - c) >= -EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(points: &[DVec2], tri: [u32; 3]) -> f64 {
        let [a, b, c] = tri.map(|i| points[i as usize]);
        (b - a).perp_dot(c - a) * 0.5
    }

    #[test]
    fn test_triangulate_convex() {
        let hexagon = Polygon2D::new(
            (0..6)
                .map(|i| {
                    let t = i as f64 * std::f64::consts::TAU / 6.0;
                    DVec2::new(t.cos(), t.sin())
                })
                .collect(),
        );
        let triangles = triangulate(&hexagon).unwrap();
        assert_eq!(triangles.len(), 4);
    }

    #[test]
    fn test_triangulate_concave_preserves_area() {
        let l_shape = Polygon2D::new(vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 0.0),
            DVec2::new(10.0, 4.0),
            DVec2::new(4.0, 4.0),
            DVec2::new(4.0, 10.0),
            DVec2::new(0.0, 10.0),
        ]);
        let triangles = triangulate(&l_shape).unwrap();
        assert_eq!(triangles.len(), 4);

        let total: f64 = triangles.iter().map(|t| area(&l_shape.outer, *t)).sum();
        assert!((total - l_shape.signed_area()).abs() < 1e-9);
        assert!(triangles.iter().all(|t| area(&l_shape.outer, *t) > 0.0));
    }

    #[test]
    fn test_triangulate_clockwise_fails() {
        let mut square = Polygon2D::square(1.0, false);
        square.outer.reverse();
        assert!(triangulate(&square).is_err());
    }

    #[test]
    fn test_triangulate_too_few_vertices() {
        let line = Polygon2D::new(vec![DVec2::ZERO, DVec2::X]);
        assert!(triangulate(&line).is_err());
    }
}
