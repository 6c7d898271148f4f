//! # Code Image
//!
//! The raster produced by the external code encoder, plus the seam the
//! encoder plugs into. The original PNG bytes are kept for the image
//! artifact; the decoded pixels are used for texturing.

use crate::error::StudioError;
use config::constants::{CODE_IMAGE_MARGIN, CODE_IMAGE_WIDTH};
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::io::Cursor;
use thiserror::Error;

/// A decoded code image with its source PNG bytes.
#[derive(Debug, Clone)]
pub struct CodeImage {
    pixels: RgbaImage,
    png: Vec<u8>,
}

impl CodeImage {
    /// Decodes PNG bytes from the encoder.
    ///
    /// # Errors
    ///
    /// Returns [`StudioError::ImageUnavailable`] for empty input and
    /// [`StudioError::Image`] if the bytes are not a valid PNG.
    pub fn from_png_bytes(png: Vec<u8>) -> Result<Self, StudioError> {
        if png.is_empty() {
            return Err(StudioError::image_unavailable("encoder returned no bytes"));
        }

        let pixels = image::load_from_memory_with_format(&png, ImageFormat::Png)?.to_rgba8();
        if pixels.width() == 0 || pixels.height() == 0 {
            return Err(StudioError::image_unavailable("encoder returned an empty image"));
        }

        Ok(Self { pixels, png })
    }

    /// Wraps an in-memory raster, encoding it to PNG for the artifact.
    ///
    /// # Example
    ///
    /// ```rust
    /// use image::{Rgba, RgbaImage};
    /// use tag_studio::CodeImage;
    ///
    /// let raster = RgbaImage::from_pixel(8, 8, Rgba([255, 255, 255, 255]));
    /// let image = CodeImage::from_rgba(raster).unwrap();
    /// assert_eq!(image.dimensions(), (8, 8));
    /// assert!(image.png_bytes().starts_with(b"\x89PNG"));
    /// ```
    pub fn from_rgba(pixels: RgbaImage) -> Result<Self, StudioError> {
        if pixels.width() == 0 || pixels.height() == 0 {
            return Err(StudioError::image_unavailable("image has no pixels"));
        }

        let mut png = Vec::new();
        DynamicImage::ImageRgba8(pixels.clone()).write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
        Ok(Self { pixels, png })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// The PNG bytes exactly as received or encoded.
    pub fn png_bytes(&self) -> &[u8] {
        &self.png
    }
}

/// Rendering options passed to the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeRequest {
    /// Output width in pixels
    pub width: u32,
    /// Quiet zone in modules
    pub margin: u32,
}

impl Default for EncodeRequest {
    fn default() -> Self {
        Self {
            width: CODE_IMAGE_WIDTH,
            margin: CODE_IMAGE_MARGIN,
        }
    }
}

/// The encoder could not produce an image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct EncodeFailure {
    pub message: String,
}

impl EncodeFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Turns payload text into a PNG-encoded scannable code.
pub trait CodeEncoder {
    fn encode(&self, text: &str, request: &EncodeRequest) -> Result<Vec<u8>, EncodeFailure>;
}
