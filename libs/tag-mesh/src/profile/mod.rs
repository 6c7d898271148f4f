//! # Profile Generation
//!
//! Closed 2D outlines for the supported tag shapes. Every outline is
//! centered on the origin, wound counter-clockwise, and scaled so its
//! larger planar dimension equals the requested size.

pub mod curves;


use crate::error::MeshError;
use crate::ops::extrude::Polygon2D;
use config::constants::{BONE_RADIUS_DIVISOR, CURVE_SEGMENTS, EPSILON};
use curves::{flatten_arc, CubicBezier};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;
use std::fmt;
use tracing::debug;

/// The four supported tag outlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    #[serde(rename = "circle", alias = "disc")]
    Disc,
    Bone,
    Heart,
    Square,
}

impl Shape {
    /// All shapes, in the order they are offered to users.
    pub const ALL: [Shape; 4] = [Shape::Disc, Shape::Bone, Shape::Heart, Shape::Square];

    /// Stable identifier used in settings and payloads.
    pub fn id(self) -> &'static str {
        match self {
            Shape::Disc => "circle",
            Shape::Bone => "bone",
            Shape::Heart => "heart",
            Shape::Square => "square",
        }
    }

    /// Parses an identifier; `disc` is accepted as an alias of `circle`.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "circle" | "disc" => Some(Shape::Disc),
            "bone" => Some(Shape::Bone),
            "heart" => Some(Shape::Heart),
            "square" => Some(Shape::Square),
            _ => None,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A planar outline ready for the solid builder.
#[derive(Debug, Clone, PartialEq)]
pub enum Profile {
    /// Implicit circle; built directly as a cylinder
    Disc { diameter: f64 },
    /// Explicit polygon outline
    Outline { shape: Shape, polygon: Polygon2D },
}

impl Profile {
    /// Shape this profile was generated for.
    pub fn shape(&self) -> Shape {
        match self {
            Profile::Disc { .. } => Shape::Disc,
            Profile::Outline { shape, .. } => *shape,
        }
    }

    /// Axis-aligned bounds `(min, max)`.
    pub fn bounds(&self) -> (DVec2, DVec2) {
        match self {
            Profile::Disc { diameter } => {
                let r = diameter / 2.0;
                (DVec2::splat(-r), DVec2::splat(r))
            }
            Profile::Outline { polygon, .. } => polygon.bounds(),
        }
    }

    /// Center of the bounds.
    pub fn bounds_center(&self) -> DVec2 {
        let (min, max) = self.bounds();
        (min + max) * 0.5
    }
}

/// Generates the outline for `shape` at `size` millimetres.
///
/// `size` is the diameter for a disc, the side for a square, and the
/// bounding span for bone and heart.
///
/// # Errors
///
/// Returns [`MeshError::InvalidParameter`] for a non-positive or
/// non-finite size.
///
/// # Example
///
/// ```rust
/// use tag_mesh::profile::{generate_profile, Shape};
///
/// let profile = generate_profile(Shape::Bone, 50.0).unwrap();
/// let (min, max) = profile.bounds();
/// assert!((max.x - min.x - 50.0).abs() < 1e-9);
/// ```
pub fn generate_profile(shape: Shape, size: f64) -> Result<Profile, MeshError> {
    if !size.is_finite() || size <= 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "Profile size must be positive: {size}"
        )));
    }

    let profile = match shape {
        Shape::Disc => Profile::Disc { diameter: size },
        Shape::Square => Profile::Outline {
            shape,
            polygon: Polygon2D::square(size, true),
        },
        Shape::Bone => Profile::Outline {
            shape,
            polygon: bone(size),
        },
        Shape::Heart => Profile::Outline {
            shape,
            polygon: heart(size)?,
        },
    };

    debug!(shape = %shape, size, "Generated profile");
    Ok(profile)
}

/// Two half-circle lobes joined by straight tangent edges.
fn bone(size: f64) -> Polygon2D {
    let radius = size / BONE_RADIUS_DIVISOR;
    let offset = size / 2.0 - radius;

    let mut points = flatten_arc(
        DVec2::new(offset, 0.0),
        radius,
        -FRAC_PI_2,
        FRAC_PI_2,
        CURVE_SEGMENTS,
    );
    points.extend(flatten_arc(
        DVec2::new(-offset, 0.0),
        radius,
        FRAC_PI_2,
        3.0 * FRAC_PI_2,
        CURVE_SEGMENTS,
    ));

    Polygon2D::new(points)
}

/// Heart outline traced on a 20-unit design grid, starting at the notch.
const HEART_START: DVec2 = DVec2::new(5.0, 5.0);
const HEART_SEGMENTS: [[DVec2; 3]; 6] = [
    [DVec2::new(5.0, 5.0), DVec2::new(4.0, 0.0), DVec2::new(0.0, 0.0)],
    [DVec2::new(-6.0, 0.0), DVec2::new(-6.0, 7.0), DVec2::new(-6.0, 7.0)],
    [DVec2::new(-6.0, 11.0), DVec2::new(-3.0, 15.4), DVec2::new(5.0, 19.0)],
    [DVec2::new(12.0, 15.4), DVec2::new(16.0, 11.0), DVec2::new(16.0, 7.0)],
    [DVec2::new(16.0, 7.0), DVec2::new(16.0, 0.0), DVec2::new(10.0, 0.0)],
    [DVec2::new(7.0, 0.0), DVec2::new(5.0, 5.0), DVec2::new(5.0, 5.0)],
];

fn heart(size: f64) -> Result<Polygon2D, MeshError> {
    let mut points = vec![HEART_START];
    let mut cursor = HEART_START;
    for [control1, control2, end] in HEART_SEGMENTS {
        let curve = CubicBezier {
            start: cursor,
            control1,
            control2,
            end,
        };
        points.extend(curve.flatten(CURVE_SEGMENTS));
        cursor = end;
    }

    // The design grid has the lobes along y = 0 and the tip at the top;
    // mirror so the tip points down, which also makes the winding CCW
    for p in &mut points {
        p.y = -p.y;
    }

    let mut polygon = Polygon2D::new(points);
    polygon.dedup();
    polygon.ensure_ccw();
    polygon.recenter();

    // Normalize so the larger extent is exactly `size`; the raw curve is wider than its grid
    let span = polygon.extent().max_element();
    if span <= EPSILON {
        return Err(MeshError::degenerate("Heart outline collapsed"));
    }
    polygon.scale(size / span);

    Ok(polygon)
}
