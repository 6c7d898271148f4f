//! # Studio Errors
//!
//! Error types for the tag studio pipeline.

use tag_mesh::MeshError;
use thiserror::Error;

/// Errors surfaced to callers of the studio.
#[derive(Debug, Error)]
pub enum StudioError {
    /// Design parameters out of range or an unknown shape
    #[error("Invalid configuration: {message}")]
    Configuration { message: String },

    /// The code encoder failed or produced no image
    #[error("Code image unavailable: {message}")]
    ImageUnavailable { message: String },

    /// A backend resource could not be released
    #[error(transparent)]
    ResourceRelease(#[from] ReleaseError),

    /// The solid could not be serialized
    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    /// Building the solid failed
    #[error("Solid generation failed: {0}")]
    Geometry(#[from] MeshError),

    /// Image bytes could not be decoded or encoded
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Studio settings are malformed or out of range
    #[error("Invalid settings: {message}")]
    Settings { message: String },

    /// The global logger was already installed
    #[error("Logging initialisation failed: {message}")]
    Logging { message: String },
}

impl StudioError {
    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates an image-unavailable error.
    pub fn image_unavailable(message: impl Into<String>) -> Self {
        Self::ImageUnavailable {
            message: message.into(),
        }
    }

    /// Creates a settings error.
    pub fn settings(message: impl Into<String>) -> Self {
        Self::Settings {
            message: message.into(),
        }
    }
}

/// Errors from [`crate::scene::TagScene::export_stl`].
#[derive(Debug, Error)]
pub enum ExportError {
    /// There is no live solid
    #[error("No solid to export")]
    NoSolid,

    /// Serialization of the live solid failed
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

/// A backend failed to free a buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to release {resource} {id}: {message}")]
pub struct ReleaseError {
    pub resource: &'static str,
    pub id: u64,
    pub message: String,
}
