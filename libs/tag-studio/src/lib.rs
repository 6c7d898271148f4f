//! # Tag Studio
//!
//! The stateful side of QR tag generation: validated designs, code
//! images, texturing and the owned preview scene.
//!
//! ## Architecture
//!
//! ```text
//! PetInfo → CodeEncoder → CodeImage ┐
//!                      DesignConfig ┴→ TagScene → SceneBackend
//!                                         └→ STL / PNG artifacts
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use image::{Rgba, RgbaImage};
//! use tag_studio::{CodeImage, DesignConfig, HeadlessBackend, Shape, StudioSettings, TagScene};
//!
//! let mut scene = TagScene::new(HeadlessBackend::new(), StudioSettings::default()).unwrap();
//! let image = CodeImage::from_rgba(RgbaImage::from_pixel(64, 64, Rgba([0, 0, 0, 255]))).unwrap();
//! let design = DesignConfig::new(Shape::Square, 2.0, 30.0).unwrap();
//!
//! scene.regenerate(design, image).unwrap();
//! let stl = scene.export_stl().unwrap();
//! assert!(stl.len() > 84);
//! ```

pub mod backend;
pub mod code_image;
pub mod design;
pub mod error;
pub mod logging;
pub mod payload;
pub mod scene;
pub mod settings;
pub mod spin;
pub mod texture;

pub use backend::{GeometryBuffers, HeadlessBackend, SceneBackend};
pub use code_image::{CodeEncoder, CodeImage, EncodeFailure, EncodeRequest};
pub use design::DesignConfig;
pub use error::{ExportError, ReleaseError, StudioError};
pub use logging::init_logging;
pub use payload::{artifact_names, ArtifactNames, PetInfo};
pub use scene::{Artifacts, TagScene};
pub use settings::StudioSettings;
pub use spin::SpinTask;
pub use tag_mesh::Shape;
pub use texture::{Material, TextureFilter};
