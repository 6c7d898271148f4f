//! # Curve Flattening
//!
//! Samples parametric curve segments into polyline points.

use glam::DVec2;

/// A cubic Bézier segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub start: DVec2,
    pub control1: DVec2,
    pub control2: DVec2,
    pub end: DVec2,
}

impl CubicBezier {
    /// Evaluates the curve at `t` in `0..=1`.
    pub fn point_at(&self, t: f64) -> DVec2 {
        let s = 1.0 - t;
        self.start * (s * s * s)
            + self.control1 * (3.0 * s * s * t)
            + self.control2 * (3.0 * s * t * t)
            + self.end * (t * t * t)
    }

    /// Samples `segments` evenly spaced parameter steps, excluding the
    /// start point and ending exactly at `end`.
    pub fn flatten(&self, segments: u32) -> Vec<DVec2> {
        let segments = segments.max(1);
        (1..=segments)
            .map(|i| {
                if i == segments {
                    self.end
                } else {
                    self.point_at(i as f64 / segments as f64)
                }
            })
            .collect()
    }
}

/// Samples a circular arc from `start_angle` to `end_angle` (radians,
/// counter-clockwise when `end_angle > start_angle`), both ends included.
pub fn flatten_arc(
    center: DVec2,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
    segments: u32,
) -> Vec<DVec2> {
    let segments = segments.max(1);
    let sweep = end_angle - start_angle;
    (0..=segments)
        .map(|i| {
            let angle = start_angle + sweep * i as f64 / segments as f64;
            let (sin, cos) = angle.sin_cos();
            center + DVec2::new(cos, sin) * radius
        })
        .collect()
}
