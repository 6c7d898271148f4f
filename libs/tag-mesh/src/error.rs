//! # Mesh Errors
//!
//! Error types for profile, solid and export operations.

use thiserror::Error;

/// Errors that can occur during solid generation or export.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A parameter is outside the domain the generator can handle
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// Degenerate geometry (zero-area faces, collapsed outlines)
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Polygon triangulation failed
    #[error("Triangulation failed: {message}")]
    TriangulationFailed { message: String },

    /// Too many triangles
    #[error("Too many triangles: {count} (max: {max})")]
    TooManyTriangles { count: usize, max: usize },

    /// Writing the STL stream failed
    #[error("STL serialization failed: {0}")]
    Serialization(#[from] std::io::Error),
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates a triangulation failed error.
    pub fn triangulation_failed(message: impl Into<String>) -> Self {
        Self::TriangulationFailed {
            message: message.into(),
        }
    }
}
