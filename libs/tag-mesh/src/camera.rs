//! # Camera Framing
//!
//! Places the preview camera so the whole solid fits in view. The camera
//! sits on the world +Y axis looking down at the origin, with world -Z as
//! screen up, so a solid in the canonical pose is seen face on.

use crate::solid::Solid;
use config::constants::{
    CAMERA_FAR, CAMERA_NEAR, DEFAULT_FIELD_OF_VIEW_DEG, FRAMING_PADDING, INITIAL_CAMERA_DISTANCE,
    MIN_CAMERA_DISTANCE,
};
use glam::{DMat4, DVec3};

/// Inputs to the framing computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramingParams {
    /// Vertical field of view in degrees
    pub field_of_view_deg: f64,
    /// Multiplier applied to the fitted distance
    pub padding: f64,
    /// Distance floor
    pub min_distance: f64,
}

impl Default for FramingParams {
    fn default() -> Self {
        Self {
            field_of_view_deg: DEFAULT_FIELD_OF_VIEW_DEG,
            padding: FRAMING_PADDING,
            min_distance: MIN_CAMERA_DISTANCE,
        }
    }
}

/// Camera placement and projection for the preview surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub eye: DVec3,
    pub target: DVec3,
    pub up: DVec3,
    pub field_of_view_deg: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
}

impl ViewState {
    /// Axis the camera looks back along.
    pub const VIEW_AXIS: DVec3 = DVec3::Y;
    /// Screen-up direction in world space.
    pub const SCREEN_UP: DVec3 = DVec3::NEG_Z;

    /// View before any solid exists.
    pub fn initial(field_of_view_deg: f64, aspect: f64) -> Self {
        Self::at_distance(INITIAL_CAMERA_DISTANCE, field_of_view_deg, aspect)
    }

    fn at_distance(distance: f64, field_of_view_deg: f64, aspect: f64) -> Self {
        Self {
            eye: Self::VIEW_AXIS * distance,
            target: DVec3::ZERO,
            up: Self::SCREEN_UP,
            field_of_view_deg,
            aspect,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        }
    }

    /// Distance from the eye to the target.
    pub fn distance(&self) -> f64 {
        self.eye.distance(self.target)
    }

    /// Returns a copy with a new aspect ratio; placement is unchanged.
    pub fn with_aspect(mut self, aspect: f64) -> Self {
        self.aspect = aspect;
        self
    }

    /// Right-handed world-to-camera transform.
    pub fn view_matrix(&self) -> DMat4 {
        DMat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Right-handed perspective projection with a `-1..1` depth range.
    pub fn projection_matrix(&self) -> DMat4 {
        DMat4::perspective_rh_gl(
            self.field_of_view_deg.to_radians(),
            self.aspect,
            self.near,
            self.far,
        )
    }
}

/// Distance needed to fit a planar span of `max_dim` in view.
///
/// `(max_dim / 2) / tan(fov / 2)`, padded, and never below the floor.
pub fn fit_distance(max_dim: f64, params: &FramingParams) -> f64 {
    let half_fov = params.field_of_view_deg.to_radians() / 2.0;
    let fitted = (max_dim.max(0.0) / 2.0) / half_fov.tan();
    (fitted * params.padding).max(params.min_distance)
}

/// Frames `solid` for a surface with the given aspect ratio.
///
/// Uses the solid's rest-pose bounds, so spinning the solid does not
/// change the result. Thickness is ignored.
///
/// # Example
///
/// ```rust
/// use tag_mesh::camera::{frame, FramingParams};
/// use tag_mesh::profile::{generate_profile, Shape};
/// use tag_mesh::solid::{extrude, ExtrudeSettings};
///
/// let profile = generate_profile(Shape::Disc, 50.0).unwrap();
/// let solid = extrude(&profile, 4.0, &ExtrudeSettings::default()).unwrap();
/// let view = frame(&solid, &FramingParams::default(), 1.0);
/// assert!(view.distance() >= 75.0);
/// ```
pub fn frame(solid: &Solid, params: &FramingParams, aspect: f64) -> ViewState {
    let (min, max) = solid.rest_bounds();
    let extent = max - min;
    // Planar dimensions of a flat solid lie along world X and Z
    let max_dim = extent.x.max(extent.z);
    let distance = fit_distance(max_dim, params);
    ViewState::at_distance(distance, params.field_of_view_deg, aspect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{generate_profile, Shape};
    use crate::solid::{extrude, ExtrudeSettings};
    use approx::assert_relative_eq;
    use glam::DVec4;

    fn solid(shape: Shape, size: f64) -> Solid {
        let profile = generate_profile(shape, size).unwrap();
        extrude(&profile, 4.0, &ExtrudeSettings::default()).unwrap()
    }

    #[test]
    fn test_fit_distance_formula() {
        let params = FramingParams {
            field_of_view_deg: 90.0,
            padding: 1.0,
            min_distance: 0.0,
        };
        assert_relative_eq!(fit_distance(100.0, &params), 50.0, epsilon = 1e-9);
    }

    #[test]
    fn test_fit_distance_floor() {
        let params = FramingParams::default();
        assert_eq!(fit_distance(0.0, &params), 75.0);
        assert_eq!(fit_distance(1e-9, &params), 75.0);
        assert_eq!(fit_distance(-3.0, &params), 75.0);
    }

    #[test]
    fn test_fit_distance_monotonic() {
        let params = FramingParams::default();
        let mut last = 0.0;
        for step in 0..=400 {
            let d = fit_distance(step as f64 * 0.5, &params);
            assert!(d >= last);
            assert!(d >= params.min_distance);
            last = d;
        }
    }

    #[test]
    fn test_fit_distance_padding_above_floor() {
        let params = FramingParams::default();
        let raw = 100.0 / (25.0_f64).to_radians().tan();
        assert_relative_eq!(fit_distance(200.0, &params), raw * 1.3, epsilon = 1e-9);
    }

    #[test]
    fn test_frame_looks_at_origin_along_view_axis() {
        let view = frame(&solid(Shape::Square, 80.0), &FramingParams::default(), 1.5);
        assert_eq!(view.target, DVec3::ZERO);
        assert_relative_eq!(view.eye.normalize().dot(ViewState::VIEW_AXIS), 1.0, epsilon = 1e-12);
        assert_eq!(view.aspect, 1.5);
    }

    #[test]
    fn test_frame_ignores_spin() {
        let mut tag = solid(Shape::Bone, 80.0);
        let params = FramingParams::default();
        let before = frame(&tag, &params, 1.0);
        tag.rotate_about_up(0.7);
        assert_eq!(frame(&tag, &params, 1.0), before);
    }

    #[test]
    fn test_frame_small_tags_hit_floor() {
        let view = frame(&solid(Shape::Disc, 30.0), &FramingParams::default(), 1.0);
        assert_relative_eq!(view.distance(), 75.0, epsilon = 1e-9);
    }

    #[test]
    fn test_view_matrix_centers_target() {
        let view = frame(&solid(Shape::Heart, 50.0), &FramingParams::default(), 1.0);
        let clip = view.projection_matrix() * view.view_matrix() * DVec4::new(0.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(clip.x / clip.w, 0.0, epsilon = 1e-12);
        assert_relative_eq!(clip.y / clip.w, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_screen_up_is_native_plus_y() {
        // A point on the native +Y side of the tag projects above center
        let view = ViewState::initial(50.0, 1.0);
        let world = Solid::canonical_pose() * DVec3::new(0.0, 10.0, 0.0);
        let clip = view.projection_matrix() * view.view_matrix() * world.extend(1.0);
        assert!(clip.y / clip.w > 0.0);
    }
}
