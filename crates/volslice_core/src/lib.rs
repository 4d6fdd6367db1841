//! View-aligned volume slicing
//!
//! This crate turns a model-view matrix and a slice count into the draw
//! geometry for view-aligned volume rendering: a stack of planes
//! perpendicular to the view axis, each cut against the volume's bounding
//! cube and triangulated.
//!
//! ## Pipeline
//!
//! - [`cube`] - The static 12-edge table of the `[-1, 1]^3` cube
//! - [`view`] - Edge rays and depth range in view space
//! - [`planes`] - Evenly spaced, band-centred slice planes
//! - [`intersect`] - Edge/plane crossings
//! - [`polygon`] - Angular ordering, world-space lift, fan triangulation
//! - [`emitter`] - Flat point/triangle lists and the [`GeometrySink`] boundary
//! - [`slicer`] - [`Slicer`] and [`slice_cube`], the whole frame in one call
//!
//! Nothing here knows about a graphics API. A renderer implements
//! [`GeometrySink`] and uploads what it is given.

pub mod cube;
pub mod view;
pub mod planes;
pub mod intersect;
pub mod polygon;
pub mod emitter;
pub mod slicer;
mod error;

pub use cube::{CubeEdge, CUBE_EDGES, CUBE_CORNERS, CUBE_FACE_INDICES, EDGE_COUNT};
pub use view::{ViewSpaceRay, ViewSpaceEdges, DepthRange, transform_edges};
pub use planes::{SlicePlane, SlicePlanes};
pub use polygon::CrossSection;
pub use emitter::{GeometrySink, PlaneSpan, SliceGeometry};
pub use slicer::{Slicer, slice_cube};
pub use error::SliceError;

// Re-export math types for convenience
pub use volslice_math::{Mat4, Vec2, Vec3};
