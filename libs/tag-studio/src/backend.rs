//! # Scene Backend
//!
//! The capability set the studio needs from a rendering library: upload
//! buffers, bind materials, place the camera, and free resources. The
//! studio only ever talks to the backend it was given.

use crate::code_image::CodeImage;
use crate::error::ReleaseError;
use crate::texture::{Material, TextureFilter};
use glam::DQuat;
use std::collections::HashMap;
use tag_mesh::{Solid, ViewState};

/// Handle to uploaded geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeometryHandle(pub u64);

/// Handle to an uploaded texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u64);

/// Handle to a material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialHandle(pub u64);

/// Flat f32 buffers for a GPU upload.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryBuffers {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    pub positions: Vec<f32>,
    /// Optional vertex normals as [nx, ny, nz, ...]
    pub normals: Option<Vec<f32>>,
    /// Texture coordinates as [u, v, u, v, ...]
    pub uvs: Vec<f32>,
    /// Triangle indices as [i0, i1, i2, ...]
    pub indices: Vec<u32>,
    pub vertex_count: u32,
    pub triangle_count: u32,
}

impl GeometryBuffers {
    /// Copies a solid's native-frame mesh into upload buffers.
    pub fn from_solid(solid: &Solid) -> Self {
        let mesh = solid.mesh();
        Self {
            positions: mesh.flat_positions(),
            normals: mesh.flat_normals(),
            uvs: mesh.flat_uvs(),
            indices: mesh.flat_indices(),
            vertex_count: u32::try_from(mesh.vertex_count()).unwrap_or(u32::MAX),
            triangle_count: u32::try_from(mesh.triangle_count()).unwrap_or(u32::MAX),
        }
    }
}

/// Rendering capabilities used by [`crate::scene::TagScene`].
pub trait SceneBackend {
    fn upload_geometry(&mut self, buffers: GeometryBuffers) -> GeometryHandle;

    fn upload_texture(&mut self, image: &CodeImage, filter: TextureFilter) -> TextureHandle;

    fn create_material(&mut self, material: &Material, texture: TextureHandle) -> MaterialHandle;

    /// Places uploaded geometry in the world.
    fn set_transform(&mut self, geometry: GeometryHandle, orientation: DQuat);

    /// Updates camera placement and projection.
    fn set_view(&mut self, view: &ViewState);

    fn release_geometry(&mut self, geometry: GeometryHandle) -> Result<(), ReleaseError>;

    fn release_texture(&mut self, texture: TextureHandle) -> Result<(), ReleaseError>;

    fn release_material(&mut self, material: MaterialHandle) -> Result<(), ReleaseError>;
}

/// A texture as seen by [`HeadlessBackend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureInfo {
    pub width: u32,
    pub height: u32,
    pub filter: TextureFilter,
}

/// In-memory backend that records every call; used for tests and
/// offscreen tooling.
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    next_id: u64,
    geometries: HashMap<GeometryHandle, GeometryBuffers>,
    textures: HashMap<TextureHandle, TextureInfo>,
    materials: HashMap<MaterialHandle, (Material, TextureHandle)>,
    transforms: HashMap<GeometryHandle, DQuat>,
    view: Option<ViewState>,
    fail_releases: bool,
    peak_live: usize,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every release call fail, leaving the resource live.
    pub fn fail_releases(&mut self, fail: bool) {
        self.fail_releases = fail;
    }

    pub fn live_geometries(&self) -> usize {
        self.geometries.len()
    }

    pub fn live_textures(&self) -> usize {
        self.textures.len()
    }

    pub fn live_materials(&self) -> usize {
        self.materials.len()
    }

    /// Most geometry, texture and material buffers ever live at once.
    pub fn peak_live(&self) -> usize {
        self.peak_live
    }

    pub fn geometry(&self, handle: GeometryHandle) -> Option<&GeometryBuffers> {
        self.geometries.get(&handle)
    }

    pub fn texture(&self, handle: TextureHandle) -> Option<TextureInfo> {
        self.textures.get(&handle).copied()
    }

    pub fn material(&self, handle: MaterialHandle) -> Option<&(Material, TextureHandle)> {
        self.materials.get(&handle)
    }

    pub fn transform(&self, handle: GeometryHandle) -> Option<DQuat> {
        self.transforms.get(&handle).copied()
    }

    /// Last view passed to [`SceneBackend::set_view`].
    pub fn view(&self) -> Option<&ViewState> {
        self.view.as_ref()
    }

    fn next(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn record_peak(&mut self) {
        let live = self.geometries.len() + self.textures.len() + self.materials.len();
        self.peak_live = self.peak_live.max(live);
    }

    fn check_release(&self, resource: &'static str, id: u64, live: bool) -> Result<(), ReleaseError> {
        let message = if self.fail_releases {
            "release rejected"
        } else if !live {
            "unknown handle"
        } else {
            return Ok(());
        };
        Err(ReleaseError {
            resource,
            id,
            message: message.to_string(),
        })
    }
}

impl SceneBackend for HeadlessBackend {
    fn upload_geometry(&mut self, buffers: GeometryBuffers) -> GeometryHandle {
        let handle = GeometryHandle(self.next());
        self.geometries.insert(handle, buffers);
        self.record_peak();
        handle
    }

    fn upload_texture(&mut self, image: &CodeImage, filter: TextureFilter) -> TextureHandle {
        let handle = TextureHandle(self.next());
        let (width, height) = image.dimensions();
        self.textures.insert(
            handle,
            TextureInfo {
                width,
                height,
                filter,
            },
        );
        self.record_peak();
        handle
    }

    fn create_material(&mut self, material: &Material, texture: TextureHandle) -> MaterialHandle {
        let handle = MaterialHandle(self.next());
        self.materials.insert(handle, (*material, texture));
        self.record_peak();
        handle
    }

    fn set_transform(&mut self, geometry: GeometryHandle, orientation: DQuat) {
        self.transforms.insert(geometry, orientation);
    }

    fn set_view(&mut self, view: &ViewState) {
        self.view = Some(*view);
    }

    fn release_geometry(&mut self, geometry: GeometryHandle) -> Result<(), ReleaseError> {
        self.check_release("geometry", geometry.0, self.geometries.contains_key(&geometry))?;
        self.geometries.remove(&geometry);
        self.transforms.remove(&geometry);
        Ok(())
    }

    fn release_texture(&mut self, texture: TextureHandle) -> Result<(), ReleaseError> {
        self.check_release("texture", texture.0, self.textures.contains_key(&texture))?;
        self.textures.remove(&texture);
        Ok(())
    }

    fn release_material(&mut self, material: MaterialHandle) -> Result<(), ReleaseError> {
        self.check_release("material", material.0, self.materials.contains_key(&material))?;
        self.materials.remove(&material);
        Ok(())
    }
}
