//! # Scene Tests

use super::*;
use crate::backend::HeadlessBackend;
use crate::code_image::EncodeFailure;
use approx::assert_relative_eq;
use image::{Rgba, RgbaImage};
use std::cell::RefCell;
use tag_mesh::Shape;

fn image() -> CodeImage {
    CodeImage::from_rgba(RgbaImage::from_pixel(16, 16, Rgba([0, 0, 0, 255]))).unwrap()
}

fn scene() -> TagScene<HeadlessBackend> {
    TagScene::new(HeadlessBackend::new(), StudioSettings::default()).unwrap()
}

fn design(shape: Shape) -> DesignConfig {
    DesignConfig::new(shape, 4.0, 50.0).unwrap()
}

fn owner() -> PetInfo {
    PetInfo {
        pet_name: "Luna".into(),
        pet_type: "Perro".into(),
        owner_name: "Ana".into(),
        phone: "11 5555 0000".into(),
        ..PetInfo::default()
    }
}

/// Returns a fixed PNG and records what it was asked to encode.
struct RecordingEncoder {
    png: Vec<u8>,
    calls: RefCell<Vec<(String, EncodeRequest)>>,
}

impl CodeEncoder for RecordingEncoder {
    fn encode(&self, text: &str, request: &EncodeRequest) -> Result<Vec<u8>, EncodeFailure> {
        self.calls.borrow_mut().push((text.to_string(), *request));
        Ok(self.png.clone())
    }
}

struct FailingEncoder;

impl CodeEncoder for FailingEncoder {
    fn encode(&self, _: &str, _: &EncodeRequest) -> Result<Vec<u8>, EncodeFailure> {
        Err(EncodeFailure::new("payload too long"))
    }
}

#[test]
fn test_new_scene_is_empty() {
    let scene = scene();
    assert!(scene.solid().is_none());
    assert!(scene.png_artifact().is_none());
    assert!(!scene.is_spinning());
    assert_relative_eq!(scene.view().distance(), 150.0);
}

#[test]
fn test_new_rejects_invalid_settings() {
    let settings = StudioSettings {
        disc_segments: 8,
        ..StudioSettings::default()
    };
    assert!(TagScene::new(HeadlessBackend::new(), settings).is_err());
}

#[test]
fn test_regenerate_installs_solid_and_view() {
    let mut scene = scene();
    scene.regenerate(design(Shape::Heart), image()).unwrap();

    assert_eq!(scene.solid().map(Solid::shape), Some(Shape::Heart));
    assert_eq!(scene.backend().live_geometries(), 1);
    assert_eq!(scene.backend().live_textures(), 1);
    assert_eq!(scene.backend().live_materials(), 1);
    assert_eq!(scene.backend().view(), Some(scene.view()));

    let handle = scene.geometry_handle().unwrap();
    assert_eq!(scene.backend().transform(handle), Some(Solid::canonical_pose()));
}

#[test]
fn test_regenerate_binds_linear_texture() {
    let mut scene = scene();
    scene.regenerate(design(Shape::Disc), image()).unwrap();

    let binding = scene.material_binding().unwrap();
    let texture = scene.backend().texture(binding.texture).unwrap();
    assert_eq!((texture.width, texture.height), (16, 16));
    assert_eq!(texture.filter, crate::texture::TextureFilter::Linear);

    let (material, bound) = scene.backend().material(binding.material).unwrap();
    assert_eq!(*bound, binding.texture);
    assert_eq!(*material, Material::default());
}

#[test]
fn test_regenerate_replaces_previous_resources() {
    let mut scene = scene();
    scene.regenerate(design(Shape::Disc), image()).unwrap();
    let first = scene.geometry_handle().unwrap();

    scene.regenerate(design(Shape::Bone), image()).unwrap();
    let second = scene.geometry_handle().unwrap();

    assert_ne!(first, second);
    assert!(scene.backend().geometry(first).is_none());
    assert!(scene.backend().geometry(second).is_some());
    assert_eq!(scene.backend().live_geometries(), 1);
}

#[test]
fn test_regenerate_releases_before_upload() {
    let mut scene = scene();
    for shape in [Shape::Disc, Shape::Bone, Shape::Heart, Shape::Square] {
        scene.regenerate(design(shape), image()).unwrap();
    }
    // One geometry, one texture, one material
    assert_eq!(scene.backend().peak_live(), 3);
}

#[test]
fn test_invalid_design_keeps_previous_solid() {
    let mut scene = scene();
    scene.regenerate(design(Shape::Square), image()).unwrap();
    let handle = scene.geometry_handle();

    let bad = DesignConfig {
        shape: Shape::Heart,
        thickness: 4.0,
        size: 200.0,
    };
    let err = scene.regenerate(bad, image()).unwrap_err();
    assert!(matches!(err, StudioError::Configuration { .. }));
    assert_eq!(scene.geometry_handle(), handle);
    assert_eq!(scene.design().map(|d| d.shape), Some(Shape::Square));
}

#[test]
fn test_release_failure_does_not_block_replacement() {
    let mut scene = scene();
    scene.regenerate(design(Shape::Disc), image()).unwrap();
    scene.backend_mut().fail_releases(true);

    scene.regenerate(design(Shape::Heart), image()).unwrap();
    assert_eq!(scene.solid().map(Solid::shape), Some(Shape::Heart));
    // The rejected buffers are still live in the backend
    assert_eq!(scene.backend().live_geometries(), 2);
}

#[test]
fn test_resize_updates_aspect_only() {
    let mut scene = scene();
    scene.regenerate(design(Shape::Bone), image()).unwrap();
    let handle = scene.geometry_handle();
    let distance = scene.view().distance();

    scene.resize(800, 400);
    assert_relative_eq!(scene.view().aspect, 2.0);
    assert_relative_eq!(scene.view().distance(), distance);
    assert_eq!(scene.geometry_handle(), handle);
    assert_eq!(scene.backend().view().map(|v| v.aspect), Some(2.0));
}

#[test]
fn test_resize_ignores_zero_size() {
    let mut scene = scene();
    scene.resize(640, 480);
    scene.resize(0, 480);
    assert_relative_eq!(scene.view().aspect, 640.0 / 480.0);
}

#[test]
fn test_aspect_survives_regeneration() {
    let mut scene = scene();
    scene.resize(300, 150);
    scene.regenerate(design(Shape::Disc), image()).unwrap();
    assert_relative_eq!(scene.view().aspect, 2.0);
}

#[test]
fn test_tick_requires_mount_and_solid() {
    let mut scene = scene();
    scene.mount(100, 100);
    assert!(!scene.tick());

    scene.regenerate(design(Shape::Disc), image()).unwrap();
    assert!(scene.tick());
    let handle = scene.geometry_handle().unwrap();
    let spun = scene.backend().transform(handle).unwrap();
    assert_eq!(Some(spun), scene.solid().map(Solid::orientation));
    assert_ne!(spun, Solid::canonical_pose());

    scene.unmount();
    assert!(!scene.tick());
    assert!(!scene.is_spinning());
}

#[test]
fn test_spin_does_not_reframe() {
    let mut scene = scene();
    scene.regenerate(design(Shape::Square), image()).unwrap();
    let view = *scene.view();
    scene.mount(100, 100);
    for _ in 0..50 {
        scene.tick();
    }
    assert_eq!(scene.view().eye, view.eye);
}

#[test]
fn test_export_without_solid() {
    let mut scene = scene();
    let err = scene.export_stl().unwrap_err();
    assert!(matches!(err, StudioError::Export(ExportError::NoSolid)));
}

#[test]
fn test_export_keeps_spin_state() {
    let mut scene = scene();
    scene.regenerate(design(Shape::Bone), image()).unwrap();
    scene.mount(100, 100);
    scene.tick();
    let spun = scene.solid().map(Solid::orientation);

    let bytes = scene.export_stl().unwrap();
    assert!(bytes.len() > 84);
    assert_eq!(scene.solid().map(Solid::orientation), spun);
}

#[test]
fn test_generate_from_payload_encodes_composed_text() {
    let encoder = RecordingEncoder {
        png: image().png_bytes().to_vec(),
        calls: RefCell::new(Vec::new()),
    };
    let mut scene = scene();
    scene
        .generate_from_payload(design(Shape::Heart), &owner(), &encoder)
        .unwrap();

    let calls = encoder.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, owner().compose());
    assert_eq!(calls[0].1, EncodeRequest::default());
    assert_eq!(scene.png_artifact(), Some(encoder.png.as_slice()));
}

#[test]
fn test_generate_from_payload_requires_fields() {
    let encoder = RecordingEncoder {
        png: image().png_bytes().to_vec(),
        calls: RefCell::new(Vec::new()),
    };
    let info = PetInfo {
        phone: String::new(),
        ..owner()
    };
    let err = scene()
        .generate_from_payload(design(Shape::Disc), &info, &encoder)
        .unwrap_err();
    assert!(err.to_string().contains("phone"));
    assert!(encoder.calls.borrow().is_empty());
}

#[test]
fn test_encoder_failure_is_image_unavailable() {
    let mut scene = scene();
    let err = scene
        .generate_from_payload(design(Shape::Disc), &owner(), &FailingEncoder)
        .unwrap_err();
    assert!(matches!(err, StudioError::ImageUnavailable { .. }));
    assert_eq!(scene.backend().live_geometries(), 0);
}

#[test]
fn test_undecodable_encoder_output_is_image_unavailable() {
    let encoder = RecordingEncoder {
        png: b"garbage".to_vec(),
        calls: RefCell::new(Vec::new()),
    };
    let err = scene()
        .generate_from_payload(design(Shape::Disc), &owner(), &encoder)
        .unwrap_err();
    assert!(matches!(err, StudioError::ImageUnavailable { .. }));
}

#[test]
fn test_artifacts_named_after_pet() {
    let mut scene = scene();
    scene.regenerate(design(Shape::Square), image()).unwrap();
    let artifacts = scene.artifacts("Luna").unwrap();
    assert_eq!(artifacts.stl_name, "Luna-placa-qr.stl");
    assert_eq!(artifacts.png_name, "Luna-codigo-qr.png");
    assert_eq!(artifacts.png, image().png_bytes());
}

#[test]
fn test_clear_releases_everything() {
    let mut scene = scene();
    scene.regenerate(design(Shape::Heart), image()).unwrap();
    scene.clear();
    assert!(scene.solid().is_none());
    assert_eq!(scene.backend().live_geometries(), 0);
    assert_eq!(scene.backend().live_textures(), 0);
    assert_eq!(scene.backend().live_materials(), 0);
}
