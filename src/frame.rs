//! Per-frame driver
//!
//! Ties the orbit camera, the draw layer selection and the slicer together:
//! one call per frame yields the matrices and slice geometry a renderer
//! needs. Slicing is skipped when no enabled layer uses it, or when
//! intersection updates are frozen; the last geometry is kept either way.

use volslice_core::{GeometrySink, SliceError, SliceGeometry, Slicer};
use volslice_math::mat4::{self, Mat4};

use crate::config::AppConfig;
use crate::layers::DrawLayers;
use crate::orbit::OrbitCamera;

/// Everything a renderer needs for one frame
#[derive(Debug)]
pub struct FrameOutput<'a> {
    /// Model-view matrix the slices were computed for
    pub model_view: Mat4,
    /// Projection times model-view
    pub mvp: Mat4,
    /// Current slice geometry
    pub geometry: &'a SliceGeometry,
    /// True when the geometry was recomputed this frame
    pub resliced: bool,
}

/// Drives the slicer from camera state once per frame
pub struct FrameDriver {
    pub camera: OrbitCamera,
    pub layers: DrawLayers,
    slice_count: u32,
    update_intersections: bool,
    slicer: Slicer,
    frame_index: u64,
}

impl FrameDriver {
    /// Driver set up from a loaded configuration
    pub fn new(config: &AppConfig) -> Self {
        Self {
            camera: OrbitCamera::new(&config.camera, &config.volume),
            layers: DrawLayers::from_config(&config.rendering),
            slice_count: config.volume.slice_count,
            update_intersections: config.volume.update_intersections,
            slicer: Slicer::new(),
            frame_index: 0,
        }
    }

    #[inline]
    pub fn slice_count(&self) -> u32 {
        self.slice_count
    }

    /// Change the slice count used from the next frame on
    pub fn set_slice_count(&mut self, slice_count: u32) {
        self.slice_count = slice_count;
    }

    /// Freeze or resume per-frame slicing
    pub fn set_update_intersections(&mut self, update: bool) {
        self.update_intersections = update;
    }

    #[inline]
    pub fn frames_run(&self) -> u64 {
        self.frame_index
    }

    /// Build this frame's matrices and, when needed, reslice the cube
    pub fn frame(&mut self, aspect: f32) -> Result<FrameOutput<'_>, SliceError> {
        self.frame_index += 1;

        let model_view = self.camera.model_view();
        let mvp = mat4::mul(self.camera.projection(aspect), model_view);

        let resliced = self.update_intersections && self.layers.needs_slices();
        if resliced {
            self.slicer.slice(model_view, self.slice_count)?;
        } else {
            log::trace!("Frame {}: slicing skipped", self.frame_index);
        }

        Ok(FrameOutput {
            model_view,
            mvp,
            geometry: self.slicer.geometry(),
            resliced,
        })
    }

    /// [`frame`](Self::frame), then upload freshly sliced geometry to `sink`
    pub fn frame_into<S: GeometrySink + ?Sized>(
        &mut self,
        aspect: f32,
        sink: &mut S,
    ) -> Result<FrameOutput<'_>, SliceError> {
        let output = self.frame(aspect)?;
        if output.resliced {
            output.geometry.emit(sink);
        }
        Ok(output)
    }
}
