//! View-space edge rays
//!
//! Each frame the cube edges are pushed through the model-view matrix and
//! re-expressed as rays: `origin + direction * t` covers the edge for
//! `t` in `[0, 1]`.

use volslice_math::{mat4, Mat4, Vec3};

use crate::cube::{CubeEdge, EDGE_COUNT};

/// A cube edge in view space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewSpaceRay {
    /// Transformed start endpoint (t = 0)
    pub origin: Vec3,
    /// Transformed end minus transformed start (t = 1 reaches the end)
    pub direction: Vec3,
}

impl ViewSpaceRay {
    /// Point at parameter `t`
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Transformed end endpoint
    #[inline]
    pub fn end(&self) -> Vec3 {
        self.at(1.0)
    }
}

/// Extent of the transformed cube along view-space Z
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepthRange {
    pub min: f32,
    pub max: f32,
}

impl DepthRange {
    /// Range that any depth will widen
    pub const EMPTY: Self = Self { min: f32::INFINITY, max: f32::NEG_INFINITY };

    /// Widen the range to include `depth`
    #[inline]
    pub fn include(&mut self, depth: f32) {
        self.min = self.min.min(depth);
        self.max = self.max.max(depth);
    }

    /// `max - min`
    #[inline]
    pub fn extent(&self) -> f32 {
        self.max - self.min
    }

    /// Depth halfway between the extremes
    #[inline]
    pub fn mid(&self) -> f32 {
        (self.min + self.max) * 0.5
    }
}

/// The edge table as seen from the camera for one frame
#[derive(Clone, Copy, Debug)]
pub struct ViewSpaceEdges {
    pub rays: [ViewSpaceRay; EDGE_COUNT],
    pub depth: DepthRange,
}

/// Transform every edge endpoint by `model_view`.
///
/// Produces one ray per edge plus the min/max view-space Z over all 24
/// transformed endpoints.
pub fn transform_edges(edges: &[CubeEdge; EDGE_COUNT], model_view: Mat4) -> ViewSpaceEdges {
    let mut depth = DepthRange::EMPTY;
    let mut rays = [ViewSpaceRay::default(); EDGE_COUNT];

    for (ray, edge) in rays.iter_mut().zip(edges) {
        let start = mat4::transform_point(model_view, edge.start);
        let end = mat4::transform_point(model_view, edge.end);
        depth.include(start.z);
        depth.include(end.z);

        *ray = ViewSpaceRay {
            origin: start,
            direction: end - start,
        };
    }

    ViewSpaceEdges { rays, depth }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::CUBE_EDGES;
    use volslice_math::mat4::{mul, plane_rotation, scale, translation, IDENTITY};

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_identity_rays_match_edges() {
        let view = transform_edges(&CUBE_EDGES, IDENTITY);
        for (ray, edge) in view.rays.iter().zip(&CUBE_EDGES) {
            assert_eq!(ray.origin, edge.start);
            assert_eq!(ray.end(), edge.end);
        }
        assert_eq!(view.depth, DepthRange { min: -1.0, max: 1.0 });
    }

    #[test]
    fn test_translation_shifts_depth() {
        let view = transform_edges(&CUBE_EDGES, translation(Vec3::new(0.0, 0.0, -5.0)));
        assert_eq!(view.depth.min, -6.0);
        assert_eq!(view.depth.max, -4.0);
        assert_eq!(view.depth.mid(), -5.0);
    }

    #[test]
    fn test_non_uniform_scale() {
        let view = transform_edges(&CUBE_EDGES, scale(Vec3::new(1.0, 1.0, 3.0)));
        assert_eq!(view.depth.extent(), 6.0);
        // Z edges stretch, the others keep their length
        let lengths: Vec<f32> = view.rays.iter().map(|r| r.direction.length()).collect();
        assert_eq!(lengths.iter().filter(|&&l| l == 6.0).count(), 4);
        assert_eq!(lengths.iter().filter(|&&l| l == 2.0).count(), 8);
    }

    #[test]
    fn test_rotation_widens_depth() {
        use std::f32::consts::FRAC_PI_4;

        // 45° about Y puts a vertical edge nearest the camera
        let view = transform_edges(&CUBE_EDGES, plane_rotation(FRAC_PI_4, 2, 0));
        let expected = 2.0f32.sqrt();
        assert!(approx_eq(view.depth.max, expected), "got {}", view.depth.max);
        assert!(approx_eq(view.depth.min, -expected), "got {}", view.depth.min);
    }

    #[test]
    fn test_rays_reach_transformed_endpoints() {
        let mv = mul(translation(Vec3::new(0.2, -0.4, -3.0)), plane_rotation(0.9, 1, 2));
        let view = transform_edges(&CUBE_EDGES, mv);
        for (ray, edge) in view.rays.iter().zip(&CUBE_EDGES) {
            let end = mat4::transform_point(mv, edge.end);
            assert!(approx_eq(ray.end().x, end.x));
            assert!(approx_eq(ray.end().y, end.y));
            assert!(approx_eq(ray.end().z, end.z));
        }
    }

    #[test]
    fn test_depth_range_include() {
        let mut range = DepthRange::EMPTY;
        range.include(2.0);
        range.include(-1.0);
        range.include(0.5);
        assert_eq!(range, DepthRange { min: -1.0, max: 2.0 });
        assert_eq!(range.extent(), 3.0);
    }
}
