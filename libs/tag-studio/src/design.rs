//! # Design Configuration
//!
//! The user-chosen shape and dimensions for one tag. Values outside the
//! supported ranges are rejected rather than clamped.

use crate::error::StudioError;
use config::constants::{DEFAULT_SIZE, DEFAULT_THICKNESS, SIZE_RANGE, THICKNESS_RANGE};
use serde::{Deserialize, Serialize};
use tag_mesh::Shape;

/// Shape, thickness and size of a tag, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignConfig {
    pub shape: Shape,
    pub thickness: f64,
    pub size: f64,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            shape: Shape::Disc,
            thickness: DEFAULT_THICKNESS,
            size: DEFAULT_SIZE,
        }
    }
}

impl DesignConfig {
    /// Creates a validated design.
    ///
    /// # Errors
    ///
    /// Returns [`StudioError::Configuration`] if `thickness` or `size` is
    /// outside its supported range.
    pub fn new(shape: Shape, thickness: f64, size: f64) -> Result<Self, StudioError> {
        let design = Self {
            shape,
            thickness,
            size,
        };
        design.validate()?;
        Ok(design)
    }

    /// Parses a design from JSON such as
    /// `{"shape": "heart", "thickness": 4, "size": 50}`.
    ///
    /// # Errors
    ///
    /// Returns [`StudioError::Configuration`] for malformed JSON, an
    /// unknown shape identifier, or out-of-range dimensions.
    pub fn from_json(json: &str) -> Result<Self, StudioError> {
        let design: Self =
            serde_json::from_str(json).map_err(|e| StudioError::configuration(e.to_string()))?;
        design.validate()?;
        Ok(design)
    }

    /// Checks the dimensions against the supported ranges.
    pub fn validate(&self) -> Result<(), StudioError> {
        if !THICKNESS_RANGE.contains(self.thickness) {
            return Err(StudioError::configuration(format!(
                "thickness {} outside {}..={} mm",
                self.thickness, THICKNESS_RANGE.min, THICKNESS_RANGE.max
            )));
        }
        if !SIZE_RANGE.contains(self.size) {
            return Err(StudioError::configuration(format!(
                "size {} outside {}..={} mm",
                self.size, SIZE_RANGE.min, SIZE_RANGE.max
            )));
        }
        Ok(())
    }
}
