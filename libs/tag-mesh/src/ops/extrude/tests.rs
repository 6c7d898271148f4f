//! # Extrusion Tests
//!
//! Tests for the beveled sweep and the polygon helpers it relies on.

use super::*;
use crate::test_support::{is_closed, signed_volume};
use glam::DVec2;

#[test]
fn test_polygon2d_square() {
    let square = Polygon2D::square(10.0, false);
    assert_eq!(square.vertex_count(), 4);
    assert_eq!(square.outer[0], DVec2::new(0.0, 0.0));
    assert_eq!(square.outer[2], DVec2::new(10.0, 10.0));
}

#[test]
fn test_polygon2d_square_centered() {
    let square = Polygon2D::square(10.0, true);
    assert_eq!(square.outer[0], DVec2::new(-5.0, -5.0));
    assert_eq!(square.outer[2], DVec2::new(5.0, 5.0));
    assert!((square.signed_area() - 100.0).abs() < 1e-9);
}

#[test]
fn test_polygon2d_ensure_ccw() {
    let mut square = Polygon2D::square(2.0, true);
    square.outer.reverse();
    assert!(square.signed_area() < 0.0);
    square.ensure_ccw();
    assert!(square.signed_area() > 0.0);
}

#[test]
fn test_polygon2d_dedup_drops_closing_vertex() {
    let mut polygon = Polygon2D::new(vec![
        DVec2::ZERO,
        DVec2::X,
        DVec2::X,
        DVec2::ONE,
        DVec2::ZERO,
    ]);
    polygon.dedup();
    assert_eq!(polygon.outer, vec![DVec2::ZERO, DVec2::X, DVec2::ONE]);
}

#[test]
fn test_polygon2d_recenter() {
    let mut square = Polygon2D::square(4.0, false);
    square.recenter();
    assert_eq!(square.bounds_center(), DVec2::ZERO);
}

#[test]
fn test_bevel_extrude_dimensions_exact() {
    let square = Polygon2D::square(30.0, true);
    let (mesh, _) = bevel_extrude(&square, 2.0, &BevelParams::default()).unwrap();

    let (min, max) = mesh.bounding_box();
    assert!((max.x - min.x - 30.0).abs() < 1e-9);
    assert!((max.y - min.y - 30.0).abs() < 1e-9);
    assert!((max.z - min.z - 2.0).abs() < 1e-9);
    assert!((min.z + 1.0).abs() < 1e-9);
}

#[test]
fn test_bevel_extrude_closed_and_outward() {
    let square = Polygon2D::square(30.0, true);
    let (mesh, _) = bevel_extrude(&square, 2.0, &BevelParams::default()).unwrap();

    assert!(mesh.validate());
    assert!(is_closed(&mesh));
    // Slightly less than the full box because of the bevel
    let volume = signed_volume(&mesh);
    assert!(volume > 0.0);
    assert!(volume < 30.0 * 30.0 * 2.0);
    assert!(volume > 29.0 * 29.0 * 2.0);
}

#[test]
fn test_bevel_extrude_ring_count() {
    let square = Polygon2D::square(10.0, true);
    let params = BevelParams {
        depth: 0.5,
        segments: 2,
    };
    let (mesh, top) = bevel_extrude(&square, 4.0, &params).unwrap();

    // 6 rings of 5 (seam repeated) + two 4-vertex caps
    assert_eq!(mesh.vertex_count(), 6 * 5 + 8);
    // 5 ring gaps x 4 quads x 2 + 2 caps x 2
    assert_eq!(mesh.triangle_count(), 5 * 4 * 2 + 4);
    assert_eq!(top.len(), 4);
}

#[test]
fn test_bevel_extrude_cap_is_inset() {
    let square = Polygon2D::square(10.0, true);
    let (mesh, top) = bevel_extrude(&square, 4.0, &BevelParams::default()).unwrap();

    for i in top {
        let v = mesh.vertex(i);
        assert!((v.z - 2.0).abs() < 1e-9);
        assert!((v.x.abs() - 4.5).abs() < 1e-9);
    }
}

#[test]
fn test_bevel_extrude_top_uvs_unit_square() {
    let square = Polygon2D::square(10.0, true);
    let params = BevelParams {
        depth: 0.0,
        segments: 0,
    };
    let (mesh, top) = bevel_extrude(&square, 4.0, &params).unwrap();

    let uvs: Vec<DVec2> = top.map(|i| mesh.uvs()[i as usize]).collect();
    assert!(uvs.contains(&DVec2::new(0.0, 0.0)));
    assert!(uvs.contains(&DVec2::new(1.0, 1.0)));
}

#[test]
fn test_bevel_extrude_without_bevel_is_prism() {
    let square = Polygon2D::square(10.0, true);
    let params = BevelParams {
        depth: 0.0,
        segments: 2,
    };
    let (mesh, _) = bevel_extrude(&square, 4.0, &params).unwrap();
    assert!(is_closed(&mesh));
    assert!((signed_volume(&mesh) - 400.0).abs() < 1e-6);
}

#[test]
fn test_bevel_extrude_concave_outline() {
    let l_shape = Polygon2D::new(vec![
        DVec2::new(0.0, 0.0),
        DVec2::new(10.0, 0.0),
        DVec2::new(10.0, 4.0),
        DVec2::new(4.0, 4.0),
        DVec2::new(4.0, 10.0),
        DVec2::new(0.0, 10.0),
    ]);
    let (mesh, _) = bevel_extrude(&l_shape, 3.0, &BevelParams::default()).unwrap();
    assert!(mesh.validate());
    assert!(is_closed(&mesh));
    assert!(signed_volume(&mesh) > 0.0);
}

#[test]
fn test_bevel_extrude_invalid_height() {
    let square = Polygon2D::square(10.0, true);
    assert!(bevel_extrude(&square, 0.0, &BevelParams::default()).is_err());
}

#[test]
fn test_bevel_extrude_invalid_polygon() {
    let line = Polygon2D::new(vec![DVec2::ZERO, DVec2::X]);
    assert!(bevel_extrude(&line, 1.0, &BevelParams::default()).is_err());
}
