//! The per-frame slicing pipeline
//!
//! edges -> view-space rays -> slice planes -> crossings per plane ->
//! ordered world-space polygon -> fan triangles -> flat lists.
//!
//! Output depends only on the edge table, the model-view matrix and the
//! slice count. [`Slicer`] keeps its buffers between frames so a running
//! renderer does not reallocate, but never reads last frame's contents.

use volslice_math::{mat4, Mat4, Vec3};

use crate::cube::CUBE_EDGES;
use crate::emitter::{GeometrySink, SliceGeometry};
use crate::error::SliceError;
use crate::intersect::{intersect_plane, MAX_POINTS_PER_PLANE};
use crate::planes::SlicePlanes;
use crate::polygon::CrossSection;
use crate::view::transform_edges;

/// Slice the unit cube seen through `model_view` with `slice_count` planes
pub fn slice_cube(model_view: Mat4, slice_count: u32) -> Result<SliceGeometry, SliceError> {
    let mut slicer = Slicer::new();
    slicer.slice(model_view, slice_count)?;
    Ok(slicer.into_geometry())
}

/// Reusable slicing pipeline
#[derive(Clone, Debug)]
pub struct Slicer {
    /// Crossings of the plane currently being processed
    scratch: Vec<Vec3>,
    geometry: SliceGeometry,
}

impl Default for Slicer {
    fn default() -> Self {
        Self::new()
    }
}

impl Slicer {
    /// Slicer over the `[-1, 1]^3` cube
    pub fn new() -> Self {
        Self {
            scratch: Vec::with_capacity(MAX_POINTS_PER_PLANE),
            geometry: SliceGeometry::new(),
        }
    }

    /// Result of the most recent successful [`slice`](Self::slice)
    #[inline]
    pub fn geometry(&self) -> &SliceGeometry {
        &self.geometry
    }

    /// Consume the slicer, keeping the last geometry
    pub fn into_geometry(self) -> SliceGeometry {
        self.geometry
    }

    /// Recompute the slice geometry for one frame.
    ///
    /// Inputs are checked before any geometry work: a zero slice count, a
    /// non-finite matrix or a singular matrix is reported and the previous
    /// geometry is left untouched.
    pub fn slice(&mut self, model_view: Mat4, slice_count: u32) -> Result<&SliceGeometry, SliceError> {
        if slice_count == 0 {
            return Err(SliceError::ZeroSliceCount);
        }
        if !mat4::is_finite(model_view) {
            return Err(SliceError::NonFiniteTransform);
        }
        let view_to_world = mat4::inverse(model_view).ok_or(SliceError::SingularTransform)?;

        let view = transform_edges(&CUBE_EDGES, model_view);
        let planes = SlicePlanes::new(view.depth, slice_count)?;
        log::trace!(
            "Slicing depth {:.4}..{:.4} into {} planes ({:.5} apart)",
            view.depth.min, view.depth.max, slice_count, planes.spacing()
        );

        self.geometry.reset(slice_count);

        for (index, plane) in planes.enumerate() {
            self.scratch.clear();
            intersect_plane(&view.rays, &plane, &mut self.scratch);

            match CrossSection::from_view_points(&mut self.scratch, plane.depth, view_to_world) {
                Some(section) => {
                    log::trace!(
                        "Plane {} at depth {:.4}: {} points, {} triangles",
                        index, plane.depth, section.point_count(), section.triangle_count()
                    );
                    self.geometry.push_section(&section);
                }
                None => log::trace!("Plane {} at depth {:.4}: no cross-section", index, plane.depth),
            }
        }

        log::debug!(
            "Sliced {} planes: {} points, {} triangles",
            slice_count,
            self.geometry.point_count(),
            self.geometry.triangle_count()
        );

        Ok(&self.geometry)
    }

    /// [`slice`](Self::slice), then hand the lists to `sink`.
    ///
    /// The sink is not called when slicing fails.
    pub fn slice_into<S: GeometrySink + ?Sized>(
        &mut self,
        model_view: Mat4,
        slice_count: u32,
        sink: &mut S,
    ) -> Result<&SliceGeometry, SliceError> {
        let geometry = self.slice(model_view, slice_count)?;
        geometry.emit(sink);
        Ok(geometry)
    }
}
