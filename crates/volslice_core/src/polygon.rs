//! Cross-section polygons
//!
//! The crossings of one plane with the cube are the corners of a convex
//! polygon, but they arrive in edge-table order. They are put into a single
//! rotational order around their centroid, lifted back to world space, and
//! fanned into triangles around the lifted centroid.
//!
//! Sorting by angle gives the same winding for every slice, so the emitted
//! triangles all face the camera.

use std::cmp::Ordering;

use volslice_math::{mat4, Mat4, Vec2, Vec3};

/// Reference direction the angular order is measured against
pub const REFERENCE_AXIS: Vec2 = Vec2::X;

/// Average of the view-space xy coordinates, or `None` for an empty set
pub fn centroid_xy(points: &[Vec3]) -> Option<Vec2> {
    if points.is_empty() {
        return None;
    }

    let mut sum = Vec2::ZERO;
    for p in points {
        sum += p.xy();
    }
    Some(sum / points.len() as f32)
}

/// Signed angle that turns `(point.xy - centroid)` onto [`REFERENCE_AXIS`]
#[inline]
pub fn angle_from_reference(point: Vec3, centroid: Vec2) -> f32 {
    (point.xy() - centroid).oriented_angle_to(REFERENCE_AXIS)
}

/// Order two points by descending [`angle_from_reference`].
///
/// This walks the polygon counter-clockwise when viewed from +Z. Equal
/// angles compare equal, so a stable sort keeps them in discovery order.
pub fn angular_order(centroid: Vec2, a: Vec3, b: Vec3) -> Ordering {
    let angle_a = angle_from_reference(a, centroid);
    let angle_b = angle_from_reference(b, centroid);
    angle_b.total_cmp(&angle_a)
}

/// Append the fan `(points[i], points[i + 1], centroid)` to `out`.
///
/// Emits `points.len()` triangles for three or more points and nothing
/// otherwise. Only valid for convex, consistently ordered input.
pub fn fan_triangulate(points: &[Vec3], centroid: Vec3, out: &mut Vec<Vec3>) -> usize {
    let n = points.len();
    if n < 3 {
        return 0;
    }

    out.reserve(n * 3);
    for i in 0..n {
        out.push(points[i]);
        out.push(points[(i + 1) % n]);
        out.push(centroid);
    }
    n
}

/// The cross-section of one slice plane, in world space
#[derive(Debug, PartialEq)]
pub struct CrossSection<'a> {
    /// View-space depth of the plane
    pub depth: f32,
    /// Polygon corners in rotational order
    pub points: &'a [Vec3],
    /// Lifted centroid, the shared apex of the fan
    pub centroid: Vec3,
}

impl<'a> CrossSection<'a> {
    /// Order the view-space crossings of a plane at `depth` and lift them
    /// into world space in place.
    ///
    /// Returns `None` when there are no crossings, or when lifting produces
    /// a non-finite coordinate; either way the plane contributes nothing.
    pub fn from_view_points(
        points: &'a mut [Vec3],
        depth: f32,
        view_to_world: Mat4,
    ) -> Option<Self> {
        let centroid = centroid_xy(points)?;

        // sort_by is stable, ties keep edge-table order
        points.sort_by(|a, b| angular_order(centroid, *a, *b));

        for p in points.iter_mut() {
            *p = mat4::transform_point(view_to_world, *p);
        }
        let world_centroid = mat4::transform_point(view_to_world, centroid.extend(depth));

        if !world_centroid.is_finite() || !points.iter().all(|p| p.is_finite()) {
            return None;
        }

        Some(Self {
            depth,
            points,
            centroid: world_centroid,
        })
    }

    /// Number of polygon corners
    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Number of fan triangles this section produces
    #[inline]
    pub fn triangle_count(&self) -> usize {
        if self.points.len() >= 3 {
            self.points.len()
        } else {
            0
        }
    }

    /// True when the section is too small to enclose any area
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 3
    }

    /// Append this section's fan to `out`, returning the triangle count
    pub fn triangulate_into(&self, out: &mut Vec<Vec3>) -> usize {
        fan_triangulate(self.points, self.centroid, out)
    }
}
