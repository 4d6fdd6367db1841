//! Geometry emission
//!
//! Cross-sections are concatenated in ascending plane depth into two flat
//! position lists: the polygon corners (for point-cloud debug draws) and the
//! fan triangles, three positions per triangle (for the textured volume).
//!
//! [`GeometrySink`] is the boundary to the rendering backend. The slicer
//! never touches buffer objects itself.

use volslice_math::Vec3;

use crate::intersect::MAX_POINTS_PER_PLANE;
use crate::polygon::CrossSection;

/// Receiver for each frame's slice geometry, implemented by a renderer
pub trait GeometrySink {
    /// Replace the point list; `points.len()` is the point count
    fn upload_points(&mut self, points: &[Vec3]);

    /// Replace the triangle list; every three positions form one triangle
    fn upload_triangles(&mut self, vertices: &[Vec3]);
}

/// Where one plane's geometry lives in the flat lists
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneSpan {
    /// View-space depth of the plane
    pub depth: f32,
    /// Index of the plane's first point in [`SliceGeometry::points`]
    pub first_point: usize,
    pub point_count: usize,
    /// Index of the plane's first triangle (not vertex)
    pub first_triangle: usize,
    pub triangle_count: usize,
}

/// Accumulated geometry for every slice of one frame
#[derive(Clone, Debug, Default)]
pub struct SliceGeometry {
    points: Vec<Vec3>,
    triangles: Vec<Vec3>,
    planes: Vec<PlaneSpan>,
}

impl SliceGeometry {
    /// Empty geometry
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty geometry with room for the worst case of `slice_count` planes
    pub fn with_capacity(slice_count: u32) -> Self {
        let mut geometry = Self::new();
        geometry.reset(slice_count);
        geometry
    }

    /// Clear all lists, keeping their allocations, and make room for
    /// `slice_count` planes
    pub fn reset(&mut self, slice_count: u32) {
        self.points.clear();
        self.triangles.clear();
        self.planes.clear();

        let planes = slice_count as usize;
        self.points.reserve(planes * MAX_POINTS_PER_PLANE);
        self.triangles.reserve(planes * MAX_POINTS_PER_PLANE * 3);
        self.planes.reserve(planes);
    }

    /// Append one plane's cross-section.
    ///
    /// Sections must arrive in non-decreasing depth; that order is what
    /// makes the triangle list draw back to front. Far from the origin
    /// neighbouring planes can round to the same f32 depth.
    pub fn push_section(&mut self, section: &CrossSection<'_>) {
        debug_assert!(
            self.planes.last().map_or(true, |last| last.depth <= section.depth),
            "sections must be pushed in non-decreasing depth"
        );

        let first_point = self.points.len();
        let first_triangle = self.triangle_count();

        self.points.extend_from_slice(section.points);
        let triangle_count = section.triangulate_into(&mut self.triangles);

        self.planes.push(PlaneSpan {
            depth: section.depth,
            first_point,
            point_count: section.point_count(),
            first_triangle,
            triangle_count,
        });
    }

    /// All polygon corners, plane by plane
    #[inline]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// All triangle vertices, three per triangle
    #[inline]
    pub fn triangles(&self) -> &[Vec3] {
        &self.triangles
    }

    /// One span per plane that produced geometry, in depth order
    #[inline]
    pub fn planes(&self) -> &[PlaneSpan] {
        &self.planes
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Length of the triangle list in positions
    #[inline]
    pub fn triangle_vertex_count(&self) -> usize {
        self.triangles.len()
    }

    /// True when no plane crossed the cube
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points of a single plane
    pub fn plane_points(&self, span: &PlaneSpan) -> &[Vec3] {
        &self.points[span.first_point..span.first_point + span.point_count]
    }

    /// Triangle vertices of a single plane
    pub fn plane_triangles(&self, span: &PlaneSpan) -> &[Vec3] {
        let start = span.first_triangle * 3;
        &self.triangles[start..start + span.triangle_count * 3]
    }

    /// Point list as raw bytes for a vertex buffer
    #[inline]
    pub fn point_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.points)
    }

    /// Triangle list as raw bytes for a vertex buffer
    #[inline]
    pub fn triangle_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.triangles)
    }

    /// Hand both lists to a renderer
    pub fn emit<S: GeometrySink + ?Sized>(&self, sink: &mut S) {
        sink.upload_points(&self.points);
        sink.upload_triangles(&self.triangles);
    }

    /// Take ownership of the two lists
    pub fn into_lists(self) -> (Vec<Vec3>, Vec<Vec3>) {
        (self.points, self.triangles)
    }
}
