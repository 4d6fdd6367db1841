//! Edge/plane intersection
//!
//! Solves `dot(origin + direction * t, n) == d` for each edge ray. Only
//! crossings strictly inside the edge count: `t == 0` or `t == 1` would
//! report a shared cube vertex once per incident edge.

use volslice_math::Vec3;

use crate::planes::SlicePlane;
use crate::view::ViewSpaceRay;

/// Most crossings a plane can have with a cube (hexagonal cross-section)
pub const MAX_POINTS_PER_PLANE: usize = 6;

/// Intersect a single edge ray with a slice plane.
///
/// Returns `None` when the ray is parallel to the plane, when the crossing
/// lies outside the open interval `(0, 1)`, or when the arithmetic does not
/// produce a finite point.
pub fn intersect_ray(ray: &ViewSpaceRay, plane: &SlicePlane) -> Option<Vec3> {
    let denom = ray.direction.dot(SlicePlane::NORMAL);
    if denom == 0.0 {
        return None;
    }

    let t = -plane.signed_distance(ray.origin) / denom;
    if !(t > 0.0 && t < 1.0) {
        return None;
    }

    let point = ray.at(t);
    point.is_finite().then_some(point)
}

/// Append every crossing of `rays` with `plane` to `out`, in ray order.
///
/// Returns the number of points appended.
pub fn intersect_plane(rays: &[ViewSpaceRay], plane: &SlicePlane, out: &mut Vec<Vec3>) -> usize {
    let before = out.len();
    out.extend(rays.iter().filter_map(|ray| intersect_ray(ray, plane)));
    out.len() - before
}
