//! # Solid Builder
//!
//! Turns a [`Profile`] into a printable [`Solid`].
//!
//! Solids are built in a native frame with the outline in XY and the
//! thickness along Z. A solid's orientation maps that frame into the
//! world; the canonical pose lays it flat with the top face along +Y.
//! Orientation is display state only and never touches the vertices.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::ops::extrude::{bevel_extrude, BevelParams};
use crate::primitives::create_disc;
use crate::profile::{Profile, Shape};
use config::constants::{DISC_SEGMENTS, MAX_TRIANGLES};
use glam::{DQuat, DVec2, DVec3};
use std::f64::consts::FRAC_PI_2;
use std::ops::Range;
use tracing::debug;

/// Coordinate space of the top face's texture coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UvSpace {
    /// `0..=1` on both axes; image center at `(0.5, 0.5)`
    Unit,
    /// `-1..=1` on both axes; image center at `(0, 0)`
    Centered,
}

impl UvSpace {
    /// Converts a top-face coordinate into `0..=1` image space.
    pub fn to_unit(self, uv: DVec2) -> DVec2 {
        match self {
            UvSpace::Unit => uv,
            UvSpace::Centered => (uv + DVec2::ONE) * 0.5,
        }
    }
}

/// Tessellation settings for the solid builder.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtrudeSettings {
    pub bevel: BevelParams,
    pub disc_segments: u32,
}

impl Default for ExtrudeSettings {
    fn default() -> Self {
        Self {
            bevel: BevelParams::default(),
            disc_segments: DISC_SEGMENTS,
        }
    }
}

/// A printable tag solid with its display orientation.
#[derive(Debug, Clone)]
pub struct Solid {
    mesh: Mesh,
    shape: Shape,
    uv_space: UvSpace,
    top_face: Range<u32>,
    orientation: DQuat,
}

impl Solid {
    /// Rotation that lays a native-frame solid flat with its top along +Y.
    pub fn canonical_pose() -> DQuat {
        DQuat::from_rotation_x(-FRAC_PI_2)
    }

    /// Mesh in the native frame.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    #[cfg(test)]
    pub(crate) fn mesh_mut(&mut self) -> &mut Mesh {
        &mut self.mesh
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn uv_space(&self) -> UvSpace {
        self.uv_space
    }

    /// Vertex range of the textured top face.
    pub fn top_face(&self) -> Range<u32> {
        self.top_face.clone()
    }

    pub fn orientation(&self) -> DQuat {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: DQuat) {
        self.orientation = orientation;
    }

    /// Returns to the canonical pose.
    pub fn reset_orientation(&mut self) {
        self.orientation = Self::canonical_pose();
    }

    /// Spins the solid about the world up axis.
    pub fn rotate_about_up(&mut self, angle: f64) {
        self.orientation = (DQuat::from_rotation_y(angle) * self.orientation).normalize();
    }

    /// Vertex positions under the current orientation.
    pub fn world_vertices(&self) -> Vec<DVec3> {
        self.transformed_vertices(self.orientation)
    }

    /// World bounds under the canonical pose, ignoring any spin.
    pub fn rest_bounds(&self) -> (DVec3, DVec3) {
        bounds_of(&self.transformed_vertices(Self::canonical_pose()))
    }

    /// World bounds under the current orientation.
    pub fn world_bounds(&self) -> (DVec3, DVec3) {
        bounds_of(&self.world_vertices())
    }

    fn transformed_vertices(&self, rotation: DQuat) -> Vec<DVec3> {
        self.mesh.vertices().iter().map(|v| rotation * *v).collect()
    }
}

fn bounds_of(points: &[DVec3]) -> (DVec3, DVec3) {
    points.iter().fold(
        (DVec3::splat(f64::INFINITY), DVec3::splat(f64::NEG_INFINITY)),
        |(min, max), p| (min.min(*p), max.max(*p)),
    )
}

/// Builds the solid for a profile at the given thickness.
///
/// Discs become a cylinder whose top-face coordinates are remapped to
/// [`UvSpace::Centered`], so a square image lands undistorted on the
/// round face. Outlines are swept with a bevel and keep their planar
/// [`UvSpace::Unit`] coordinates.
///
/// The result is centered on the origin and starts in the canonical pose.
///
/// # Errors
///
/// Returns [`MeshError`] for a non-positive thickness, a profile the sweep
/// cannot handle, or degenerate output.
///
/// # Example
///
/// ```rust
/// use tag_mesh::profile::{generate_profile, Shape};
/// use tag_mesh::solid::{extrude, ExtrudeSettings};
///
/// let profile = generate_profile(Shape::Square, 30.0).unwrap();
/// let solid = extrude(&profile, 2.0, &ExtrudeSettings::default()).unwrap();
/// assert!(solid.mesh().validate());
/// ```
pub fn extrude(
    profile: &Profile,
    thickness: f64,
    settings: &ExtrudeSettings,
) -> Result<Solid, MeshError> {
    if !thickness.is_finite() || thickness <= 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "Thickness must be positive: {thickness}"
        )));
    }

    let (mut mesh, top_face, uv_space) = match profile {
        Profile::Disc { diameter } => {
            let (mut mesh, top) = create_disc(*diameter, thickness, settings.disc_segments)?;
            for uv in &mut mesh.uvs_mut()[top.start as usize..top.end as usize] {
                *uv = *uv * 2.0 - DVec2::ONE;
            }
            (mesh, top, UvSpace::Centered)
        }
        Profile::Outline { polygon, .. } => {
            let (mesh, top) = bevel_extrude(polygon, thickness, &settings.bevel)?;
            (mesh, top, UvSpace::Unit)
        }
    };

    if mesh.triangle_count() > MAX_TRIANGLES {
        return Err(MeshError::TooManyTriangles {
            count: mesh.triangle_count(),
            max: MAX_TRIANGLES,
        });
    }

    if let Some(index) = mesh.first_invalid_triangle() {
        return Err(MeshError::degenerate(format!(
            "Triangle {index} of the {} solid is degenerate",
            profile.shape()
        )));
    }

    mesh.center();
    mesh.compute_normals();

    debug!(
        shape = %profile.shape(),
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "Built solid"
    );

    Ok(Solid {
        mesh,
        shape: profile.shape(),
        uv_space,
        top_face,
        orientation: Solid::canonical_pose(),
    })
}
