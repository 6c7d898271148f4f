//! # Configuration Constants
//!
//! Centralized constants for the QR tag pipeline. Geometry resolution,
//! supported parameter ranges, camera framing and material defaults are
//! defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Design ranges**: Supported tag size and thickness
//! - **Tessellation**: Disc segments, curve subdivision, bevel steps
//! - **Preview**: Camera framing and spin rate
//! - **Material**: Cosmetic surface defaults

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Smallest triangle area (mm²) accepted before a face counts as degenerate.
///
/// Zero-length bevel steps at extreme parameter combinations collapse
/// triangles below this area; the exporter refuses to write them.
pub const DEGENERATE_AREA_EPSILON: f64 = 1e-9;

/// Grid used to weld coincident vertices when checking closed surfaces.
pub const VERTEX_WELD_EPSILON: f64 = 1e-6;

// =============================================================================
// DESIGN RANGES
// =============================================================================

/// Inclusive range of accepted values for one design parameter.
///
/// # Example
///
/// ```rust
/// use config::constants::SupportedRange;
///
/// let range = SupportedRange::new(2.0, 10.0).unwrap();
/// assert!(range.contains(2.0));
/// assert!(!range.contains(10.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SupportedRange {
    /// Smallest accepted value.
    pub min: f64,
    /// Largest accepted value.
    pub max: f64,
}

impl SupportedRange {
    /// Builds a range, rejecting inverted or non-positive bounds.
    pub fn new(min: f64, max: f64) -> Result<Self, ConfigError> {
        if !min.is_finite() || min <= 0.0 {
            return Err(ConfigError::InvalidBound(min));
        }
        if !max.is_finite() || max < min {
            return Err(ConfigError::InvertedRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Returns true when `value` is finite and lies within the range.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }
}

/// Supported tag size in millimetres (diameter, side or bounding span).
pub const SIZE_RANGE: SupportedRange = SupportedRange {
    min: 30.0,
    max: 80.0,
};

/// Supported tag thickness in millimetres.
pub const THICKNESS_RANGE: SupportedRange = SupportedRange {
    min: 2.0,
    max: 10.0,
};

/// Size of a freshly opened design.
pub const DEFAULT_SIZE: f64 = 50.0;

/// Thickness of a freshly opened design.
pub const DEFAULT_THICKNESS: f64 = 4.0;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Angular resolution of the disc tag.
///
/// 64 segments keep the chord error of an 80 mm disc under 0.05 mm,
/// below typical nozzle tolerance.
pub const DISC_SEGMENTS: u32 = 64;

/// Smallest disc resolution a settings file may request.
pub const MIN_DISC_SEGMENTS: u32 = 64;

/// Line segments used to flatten one Bézier segment or one arc.
pub const CURVE_SEGMENTS: u32 = 12;

/// Depth of the edge bevel on both extrusion ends, in millimetres.
pub const BEVEL_DEPTH: f64 = 0.5;

/// Number of subdivisions along each bevel.
pub const BEVEL_SEGMENTS: u32 = 2;

/// Bone lobe radius is `size / BONE_RADIUS_DIVISOR`.
pub const BONE_RADIUS_DIVISOR: f64 = 8.0;

/// Upper bound on triangles emitted for a single tag.
pub const MAX_TRIANGLES: usize = 1_000_000;

// =============================================================================
// PREVIEW CONSTANTS
// =============================================================================

/// Vertical field of view of the preview camera, in degrees.
pub const DEFAULT_FIELD_OF_VIEW_DEG: f64 = 50.0;

/// Padding multiplier applied to the fitted camera distance.
pub const FRAMING_PADDING: f64 = 1.3;

/// Closest the preview camera is ever placed to the origin.
pub const MIN_CAMERA_DISTANCE: f64 = 75.0;

/// Camera distance before the first solid exists.
pub const INITIAL_CAMERA_DISTANCE: f64 = 150.0;

/// Near clip plane of the preview camera.
pub const CAMERA_NEAR: f64 = 0.1;

/// Far clip plane of the preview camera.
pub const CAMERA_FAR: f64 = 1000.0;

/// Cosmetic spin applied per rendered frame, in radians.
pub const SPIN_RADIANS_PER_FRAME: f64 = 0.005;

// =============================================================================
// CODE IMAGE & MATERIAL CONSTANTS
// =============================================================================

/// Pixel width requested from the code encoder.
pub const CODE_IMAGE_WIDTH: u32 = 512;

/// Quiet-zone margin (in modules) requested from the code encoder.
pub const CODE_IMAGE_MARGIN: u32 = 2;

/// Base color of the tag material (RGBA, linear).
pub const MATERIAL_BASE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Material roughness; favors a diffuse look.
pub const MATERIAL_ROUGHNESS: f32 = 0.6;

/// Material metalness.
pub const MATERIAL_METALNESS: f32 = 0.2;

// =============================================================================
// ERRORS
// =============================================================================

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when a lower bound is zero, negative or not finite.
    InvalidBound(f64),
    /// Raised when the upper bound is below the lower bound.
    InvertedRange {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidBound(value) => {
                write!(f, "range bound must be positive: {value}")
            }
            ConfigError::InvertedRange { min, max } => {
                write!(f, "range max {max} is below min {min}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
