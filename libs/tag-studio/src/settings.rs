//! # Studio Settings
//!
//! Runtime overrides for the tunables in [`config::constants`]. Every field
//! is optional in JSON and falls back to its constant.

use crate::error::StudioError;
use config::constants::{
    BEVEL_DEPTH, BEVEL_SEGMENTS, DEFAULT_FIELD_OF_VIEW_DEG, DISC_SEGMENTS, FRAMING_PADDING,
    MIN_CAMERA_DISTANCE, MIN_DISC_SEGMENTS, SPIN_RADIANS_PER_FRAME,
};
use serde::{Deserialize, Serialize};
use tag_mesh::ops::BevelParams;
use tag_mesh::{ExtrudeSettings, FramingParams};

/// Preview and tessellation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioSettings {
    pub field_of_view_deg: f64,
    pub framing_padding: f64,
    pub min_camera_distance: f64,
    pub disc_segments: u32,
    pub bevel_depth: f64,
    pub bevel_segments: u32,
    pub spin_radians_per_frame: f64,
}

impl Default for StudioSettings {
    fn default() -> Self {
        Self {
            field_of_view_deg: DEFAULT_FIELD_OF_VIEW_DEG,
            framing_padding: FRAMING_PADDING,
            min_camera_distance: MIN_CAMERA_DISTANCE,
            disc_segments: DISC_SEGMENTS,
            bevel_depth: BEVEL_DEPTH,
            bevel_segments: BEVEL_SEGMENTS,
            spin_radians_per_frame: SPIN_RADIANS_PER_FRAME,
        }
    }
}

impl StudioSettings {
    /// Parses and validates settings from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`StudioError::Settings`] for malformed JSON or values that
    /// fail [`StudioSettings::validate`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use tag_studio::StudioSettings;
    ///
    /// let settings = StudioSettings::from_json(r#"{ "field_of_view_deg": 40 }"#).unwrap();
    /// assert_eq!(settings.field_of_view_deg, 40.0);
    /// assert_eq!(settings.disc_segments, 64);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, StudioError> {
        let settings: Self =
            serde_json::from_str(json).map_err(|e| StudioError::settings(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Checks every field is usable.
    pub fn validate(&self) -> Result<(), StudioError> {
        if !(self.field_of_view_deg.is_finite()
            && self.field_of_view_deg > 0.0
            && self.field_of_view_deg < 180.0)
        {
            return Err(StudioError::settings(format!(
                "field_of_view_deg must be in (0, 180): {}",
                self.field_of_view_deg
            )));
        }
        if !self.framing_padding.is_finite() || self.framing_padding < 1.0 {
            return Err(StudioError::settings(format!(
                "framing_padding must be at least 1: {}",
                self.framing_padding
            )));
        }
        if !self.min_camera_distance.is_finite() || self.min_camera_distance <= 0.0 {
            return Err(StudioError::settings(format!(
                "min_camera_distance must be positive: {}",
                self.min_camera_distance
            )));
        }
        if self.disc_segments < MIN_DISC_SEGMENTS {
            return Err(StudioError::settings(format!(
                "disc_segments must be at least {MIN_DISC_SEGMENTS}: {}",
                self.disc_segments
            )));
        }
        if !self.bevel_depth.is_finite() || self.bevel_depth < 0.0 {
            return Err(StudioError::settings(format!(
                "bevel_depth must not be negative: {}",
                self.bevel_depth
            )));
        }
        if !self.spin_radians_per_frame.is_finite() {
            return Err(StudioError::settings("spin_radians_per_frame must be finite"));
        }
        Ok(())
    }

    pub fn framing(&self) -> FramingParams {
        FramingParams {
            field_of_view_deg: self.field_of_view_deg,
            padding: self.framing_padding,
            min_distance: self.min_camera_distance,
        }
    }

    pub fn extrude_settings(&self) -> ExtrudeSettings {
        ExtrudeSettings {
            bevel: BevelParams {
                depth: self.bevel_depth,
                segments: self.bevel_segments,
            },
            disc_segments: self.disc_segments,
        }
    }
}
