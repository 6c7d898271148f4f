//! # Tag Scene
//!
//! Owned state for one preview surface: the live solid, its backend
//! resources, the camera and the spin task. All geometry changes go
//! through [`TagScene::regenerate`], which replaces the live solid
//! wholesale. A failed regeneration leaves the previous solid in place;
//! at most one solid's buffers are live in the backend at any time.

use crate::backend::{GeometryBuffers, GeometryHandle, SceneBackend};
use crate::code_image::{CodeEncoder, CodeImage, EncodeRequest};
use crate::design::DesignConfig;
use crate::error::{ExportError, StudioError};
use crate::payload::{artifact_names, PetInfo};
use crate::settings::StudioSettings;
use crate::spin::SpinTask;
use crate::texture::{apply_texture, Material, MaterialBinding};
use tag_mesh::{build_solid, export_binary, frame, Solid, ViewState};
use tracing::{debug, info, warn};

/// The solid currently on screen and the resources backing it.
#[derive(Debug)]
struct LiveSolid {
    solid: Solid,
    design: DesignConfig,
    image: CodeImage,
    geometry: GeometryHandle,
    binding: MaterialBinding,
}

/// Both downloadable files for the live tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub stl_name: String,
    pub stl: Vec<u8>,
    pub png_name: String,
    pub png: Vec<u8>,
}

/// Single-writer scene state bound to a [`SceneBackend`].
#[derive(Debug)]
pub struct TagScene<B: SceneBackend> {
    backend: B,
    settings: StudioSettings,
    material: Material,
    live: Option<LiveSolid>,
    view: ViewState,
    spin: SpinTask,
}

impl<B: SceneBackend> TagScene<B> {
    /// Creates an empty scene.
    ///
    /// # Errors
    ///
    /// Returns [`StudioError::Settings`] if `settings` fail validation.
    pub fn new(backend: B, settings: StudioSettings) -> Result<Self, StudioError> {
        settings.validate()?;
        let view = ViewState::initial(settings.field_of_view_deg, 1.0);
        let spin = SpinTask::new(settings.spin_radians_per_frame);
        Ok(Self {
            backend,
            settings,
            material: Material::default(),
            live: None,
            view,
            spin,
        })
    }

    /// Uses `material` for every later regeneration.
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn settings(&self) -> &StudioSettings {
        &self.settings
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn solid(&self) -> Option<&Solid> {
        self.live.as_ref().map(|live| &live.solid)
    }

    pub fn design(&self) -> Option<&DesignConfig> {
        self.live.as_ref().map(|live| &live.design)
    }

    pub fn code_image(&self) -> Option<&CodeImage> {
        self.live.as_ref().map(|live| &live.image)
    }

    pub fn geometry_handle(&self) -> Option<GeometryHandle> {
        self.live.as_ref().map(|live| live.geometry)
    }

    pub fn material_binding(&self) -> Option<MaterialBinding> {
        self.live.as_ref().map(|live| live.binding)
    }

    pub fn is_spinning(&self) -> bool {
        self.spin.is_running()
    }

    /// Rebuilds the live solid from `design` and `image`.
    ///
    /// The new solid is built first, so a rejected design or a geometry
    /// error leaves the scene unchanged. The previous solid's buffers are
    /// then released before the new ones are uploaded. Release failures
    /// are logged and do not stop the replacement.
    ///
    /// # Errors
    ///
    /// Returns [`StudioError::Configuration`] for an invalid design or
    /// [`StudioError::Geometry`] if the solid cannot be built.
    pub fn regenerate(&mut self, design: DesignConfig, image: CodeImage) -> Result<(), StudioError> {
        design.validate()?;

        let solid = build_solid(
            design.shape,
            design.size,
            design.thickness,
            &self.settings.extrude_settings(),
        )?;

        if let Some(previous) = self.live.take() {
            self.release(previous);
        }

        let geometry = self.backend.upload_geometry(GeometryBuffers::from_solid(&solid));
        let binding = apply_texture(&mut self.backend, &image, &self.material);
        self.backend.set_transform(geometry, solid.orientation());

        self.view = frame(&solid, &self.settings.framing(), self.view.aspect);
        self.backend.set_view(&self.view);

        info!(
            shape = %design.shape,
            size = design.size,
            thickness = design.thickness,
            distance = self.view.distance(),
            "Regenerated tag"
        );

        self.live = Some(LiveSolid {
            solid,
            design,
            image,
            geometry,
            binding,
        });
        Ok(())
    }

    /// Encodes `info` with `encoder` and regenerates from the result.
    ///
    /// # Errors
    ///
    /// Returns [`StudioError::Configuration`] for an invalid design or
    /// missing required fields, and [`StudioError::ImageUnavailable`] if
    /// the encoder fails or its output cannot be decoded. Nothing is
    /// rebuilt in either case.
    pub fn generate_from_payload<E: CodeEncoder + ?Sized>(
        &mut self,
        design: DesignConfig,
        info: &PetInfo,
        encoder: &E,
    ) -> Result<(), StudioError> {
        design.validate()?;

        let missing = info.missing_required();
        if !missing.is_empty() {
            return Err(StudioError::configuration(format!(
                "missing required fields: {}",
                missing.join(", ")
            )));
        }

        let png = encoder
            .encode(&info.compose(), &EncodeRequest::default())
            .map_err(|e| StudioError::image_unavailable(e.message))?;
        let image = CodeImage::from_png_bytes(png).map_err(|e| match e {
            StudioError::Image(err) => StudioError::image_unavailable(err.to_string()),
            other => other,
        })?;

        self.regenerate(design, image)
    }

    /// Serializes the live solid to binary STL in its canonical pose.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::NoSolid`] when nothing has been generated.
    pub fn export_stl(&mut self) -> Result<Vec<u8>, StudioError> {
        let live = self.live.as_mut().ok_or(ExportError::NoSolid)?;
        let bytes = export_binary(&mut live.solid).map_err(ExportError::from)?;
        Ok(bytes)
    }

    /// The code image's PNG bytes, unchanged.
    pub fn png_artifact(&self) -> Option<&[u8]> {
        self.live.as_ref().map(|live| live.image.png_bytes())
    }

    /// Both artifacts, named after `pet_name`.
    pub fn artifacts(&mut self, pet_name: &str) -> Result<Artifacts, StudioError> {
        let stl = self.export_stl()?;
        let png = self
            .png_artifact()
            .map(<[u8]>::to_vec)
            .ok_or(ExportError::NoSolid)?;
        let names = artifact_names(pet_name);
        Ok(Artifacts {
            stl_name: names.stl,
            stl,
            png_name: names.png,
            png,
        })
    }

    /// Updates the projection for a new surface size. Geometry is untouched.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            debug!(width, height, "Ignoring zero-sized surface");
            return;
        }
        self.view = self.view.with_aspect(f64::from(width) / f64::from(height));
        self.backend.set_view(&self.view);
        debug!(width, height, aspect = self.view.aspect, "Resized surface");
    }

    /// Attaches to a surface and starts the spin.
    pub fn mount(&mut self, width: u32, height: u32) {
        self.resize(width, height);
        self.spin.start();
    }

    /// Detaches from the surface and stops the spin.
    pub fn unmount(&mut self) {
        self.spin.stop();
    }

    /// Advances one frame. Returns true if the solid moved.
    pub fn tick(&mut self) -> bool {
        let Some(live) = self.live.as_mut() else {
            return false;
        };
        if !self.spin.advance(&mut live.solid) {
            return false;
        }
        self.backend
            .set_transform(live.geometry, live.solid.orientation());
        true
    }

    /// Releases the live solid, leaving the scene empty.
    pub fn clear(&mut self) {
        if let Some(previous) = self.live.take() {
            self.release(previous);
        }
    }

    fn release(&mut self, previous: LiveSolid) {
        let results = [
            self.backend.release_geometry(previous.geometry),
            self.backend.release_material(previous.binding.material),
            self.backend.release_texture(previous.binding.texture),
        ];
        for error in results.into_iter().filter_map(Result::err) {
            warn!(error = %error, "Failed to release previous tag resources");
        }
    }
}

#[cfg(test)]
mod tests;
