//! # Surface Texturer
//!
//! Binds the code image to a solid's top face as a material map.
//!
//! Top-face coordinates are converted to image space with
//! [`UvSpace::to_unit`] and the `v` axis flipped, since image rows run
//! top to bottom. Sampling defaults to bilinear so the code's fine
//! modules stay crisp at oblique angles.

use crate::backend::{MaterialHandle, SceneBackend, TextureHandle};
use crate::code_image::CodeImage;
use config::constants::{MATERIAL_BASE_COLOR, MATERIAL_METALNESS, MATERIAL_ROUGHNESS};
use glam::DVec2;
use image::imageops::{sample_bilinear, sample_nearest};
use image::Rgba;
use tag_mesh::{Solid, UvSpace};

/// Magnification and minification filter for the code texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextureFilter {
    Nearest,
    #[default]
    Linear,
}

/// Surface material for the tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub base_color: [f32; 4],
    pub roughness: f32,
    pub metalness: f32,
    pub filter: TextureFilter,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            base_color: MATERIAL_BASE_COLOR,
            roughness: MATERIAL_ROUGHNESS,
            metalness: MATERIAL_METALNESS,
            filter: TextureFilter::Linear,
        }
    }
}

/// Backend resources that make up one applied texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialBinding {
    pub texture: TextureHandle,
    pub material: MaterialHandle,
}

/// Uploads `image` and creates a material that maps it.
pub fn apply_texture<B: SceneBackend>(
    backend: &mut B,
    image: &CodeImage,
    material: &Material,
) -> MaterialBinding {
    let texture = backend.upload_texture(image, material.filter);
    let material = backend.create_material(material, texture);
    MaterialBinding { texture, material }
}

/// Converts a top-face coordinate to `(column, row)` fractions of the image.
pub fn image_coords(space: UvSpace, uv: DVec2) -> DVec2 {
    let unit = space.to_unit(uv).clamp(DVec2::ZERO, DVec2::ONE);
    DVec2::new(unit.x, 1.0 - unit.y)
}

/// Samples `image` at a top-face coordinate.
pub fn sample(image: &CodeImage, space: UvSpace, uv: DVec2, filter: TextureFilter) -> Option<Rgba<u8>> {
    let at = image_coords(space, uv);
    let (u, v) = (at.x as f32, at.y as f32);
    match filter {
        TextureFilter::Linear => sample_bilinear(image.pixels(), u, v),
        TextureFilter::Nearest => sample_nearest(image.pixels(), u, v),
    }
}

/// The image color under each top-face vertex of `solid`.
pub fn top_face_colors(solid: &Solid, image: &CodeImage, filter: TextureFilter) -> Vec<Option<Rgba<u8>>> {
    let uvs = solid.mesh().uvs();
    solid
        .top_face()
        .map(|i| sample(image, solid.uv_space(), uvs[i as usize], filter))
        .collect()
}
