//! Export is independent of the preview spin.

use image::{Rgba, RgbaImage};
use tag_studio::{CodeImage, DesignConfig, HeadlessBackend, Shape, StudioSettings, TagScene};

fn mounted_scene(shape: Shape) -> TagScene<HeadlessBackend> {
    let mut scene = TagScene::new(HeadlessBackend::new(), StudioSettings::default()).unwrap();
    let image = CodeImage::from_rgba(RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 255]))).unwrap();
    scene
        .regenerate(DesignConfig::new(shape, 3.0, 45.0).unwrap(), image)
        .unwrap();
    scene.mount(640, 480);
    scene
}

#[test]
fn export_is_byte_identical_across_spin() {
    for shape in [Shape::Disc, Shape::Bone, Shape::Heart, Shape::Square] {
        let mut scene = mounted_scene(shape);
        let first = scene.export_stl().unwrap();
        let again = scene.export_stl().unwrap();
        for _ in 0..137 {
            scene.tick();
        }
        let spun = scene.export_stl().unwrap();

        assert_eq!(first, again, "{shape}");
        assert_eq!(first, spun, "{shape}");
    }
}

#[test]
fn export_leaves_preview_transform_alone() {
    let mut scene = mounted_scene(Shape::Heart);
    for _ in 0..20 {
        scene.tick();
    }
    let handle = scene.geometry_handle().unwrap();
    let before = scene.backend().transform(handle);

    scene.export_stl().unwrap();
    assert_eq!(scene.backend().transform(handle), before);
    assert_eq!(scene.solid().map(|s| s.orientation()), before);
    assert!(scene.tick());
}

#[test]
fn exported_solid_lies_flat() {
    let mut scene = mounted_scene(Shape::Bone);
    for _ in 0..300 {
        scene.tick();
    }
    let heights = facet_heights(&scene.export_stl().unwrap());
    let (lo, hi) = heights
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), y| (lo.min(*y), hi.max(*y)));
    assert!((hi - lo - 3.0).abs() < 1e-4);
}

/// Y coordinate of every facet vertex in a binary STL.
fn facet_heights(stl: &[u8]) -> Vec<f32> {
    stl[84..]
        .chunks_exact(50)
        .flat_map(|facet| {
            (0..3).map(move |v| {
                let at = 12 + v * 12 + 4;
                f32::from_le_bytes([facet[at], facet[at + 1], facet[at + 2], facet[at + 3]])
            })
        })
        .collect()
}
