//! # Extrusion Operations
//!
//! Sweeps a closed 2D outline along the Z axis into a solid with
//! rounded bevels on both ends. The bevel is cut inward so the solid's
//! planar extent and depth match the requested dimensions exactly.

mod linear;

#[cfg(test)]
mod tests;

pub use linear::{bevel_extrude, BevelParams};

use config::constants::{approx_zero, EPSILON};
use glam::DVec2;

/// A 2D polygon for extrusion operations.
///
/// Represents a closed outline without holes. The last vertex connects
/// back to the first; it is not repeated.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon2D {
    /// Boundary vertices in counter-clockwise order
    pub outer: Vec<DVec2>,
}

impl Polygon2D {
    /// Creates a new polygon from boundary vertices.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tag_mesh::ops::extrude::Polygon2D;
    /// use glam::DVec2;
    ///
    /// let triangle = Polygon2D::new(vec![DVec2::ZERO, DVec2::X, DVec2::Y]);
    /// assert_eq!(triangle.vertex_count(), 3);
    /// ```
    pub fn new(outer: Vec<DVec2>) -> Self {
        Self { outer }
    }

    /// Creates a square polygon.
    ///
    /// # Arguments
    ///
    /// * `side` - Edge length
    /// * `center` - If true, center at origin
    pub fn square(side: f64, center: bool) -> Self {
        let offset = if center { -side / 2.0 } else { 0.0 };

        Self::new(vec![
            DVec2::new(offset, offset),
            DVec2::new(offset + side, offset),
            DVec2::new(offset + side, offset + side),
            DVec2::new(offset, offset + side),
        ])
    }

    /// Returns the number of vertices in the boundary.
    pub fn vertex_count(&self) -> usize {
        self.outer.len()
    }

    /// Signed area (positive for counter-clockwise winding).
    pub fn signed_area(&self) -> f64 {
        let n = self.outer.len();
        (0..n)
            .map(|i| {
                let a = self.outer[i];
                let b = self.outer[(i + 1) % n];
                a.perp_dot(b)
            })
            .sum::<f64>()
            * 0.5
    }

    /// Reverses the winding if needed so the boundary runs counter-clockwise.
    pub fn ensure_ccw(&mut self) {
        if self.signed_area() < 0.0 {
            self.outer.reverse();
        }
    }

    /// Drops consecutive vertices closer than `EPSILON`, including a
    /// closing vertex that repeats the first one.
    pub fn dedup(&mut self) {
        self.outer.dedup_by(|b, a| a.distance(*b) < EPSILON);
        while self.outer.len() > 1 {
            let first = self.outer[0];
            let last = self.outer[self.outer.len() - 1];
            if approx_zero(first.distance(last)) {
                self.outer.pop();
            } else {
                break;
            }
        }
    }

    /// Axis-aligned bounds as (min, max).
    pub fn bounds(&self) -> (DVec2, DVec2) {
        let mut min = DVec2::splat(f64::INFINITY);
        let mut max = DVec2::splat(f64::NEG_INFINITY);
        for v in &self.outer {
            min = min.min(*v);
            max = max.max(*v);
        }
        (min, max)
    }

    /// Width and height of the bounds.
    pub fn extent(&self) -> DVec2 {
        let (min, max) = self.bounds();
        max - min
    }

    /// Center of the bounding box.
    pub fn bounds_center(&self) -> DVec2 {
        let (min, max) = self.bounds();
        (min + max) * 0.5
    }

    /// Translates the polygon by the given offset.
    pub fn translate(&mut self, offset: DVec2) {
        for vertex in &mut self.outer {
            *vertex += offset;
        }
    }

    /// Scales the polygon uniformly about the origin.
    pub fn scale(&mut self, factor: f64) {
        for vertex in &mut self.outer {
            *vertex *= factor;
        }
    }

    /// Translates by the negated bounds center so the bounds are centered
    /// on the origin.
    pub fn recenter(&mut self) {
        let center = self.bounds_center();
        self.translate(-center);
    }
}
