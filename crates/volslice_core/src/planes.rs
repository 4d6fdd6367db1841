//! Slice plane generation
//!
//! The depth range is split into `N` equal bands and one plane is placed at
//! the centre of each band, so no plane ever lies on the nearest or farthest
//! cube vertex.

use volslice_math::Vec3;

use crate::error::SliceError;
use crate::view::DepthRange;

/// A plane perpendicular to the view axis at a signed view-space depth
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlicePlane {
    /// `d` in `dot(p, NORMAL) == d`
    pub depth: f32,
}

impl SlicePlane {
    /// Plane normal in view space
    pub const NORMAL: Vec3 = Vec3::Z;

    #[inline]
    pub fn new(depth: f32) -> Self {
        Self { depth }
    }

    /// Signed distance from `p` to the plane along the normal
    #[inline]
    pub fn signed_distance(&self, p: Vec3) -> f32 {
        p.dot(Self::NORMAL) - self.depth
    }
}

/// Evenly spaced slice planes in ascending depth order
#[derive(Clone, Debug)]
pub struct SlicePlanes {
    first: f32,
    spacing: f32,
    count: u32,
    next: u32,
}

impl SlicePlanes {
    /// Planes for `slice_count` bands across `range`.
    ///
    /// Fails with [`SliceError::ZeroSliceCount`] when `slice_count` is zero.
    pub fn new(range: DepthRange, slice_count: u32) -> Result<Self, SliceError> {
        if slice_count == 0 {
            return Err(SliceError::ZeroSliceCount);
        }

        let spacing = range.extent() / slice_count as f32;
        Ok(Self {
            first: range.min + spacing / 2.0,
            spacing,
            count: slice_count,
            next: 0,
        })
    }

    /// Distance between neighbouring planes
    #[inline]
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Total number of planes, including those already yielded
    #[inline]
    pub fn slice_count(&self) -> u32 {
        self.count
    }

    /// Depth of plane `k`
    #[inline]
    pub fn depth_at(&self, k: u32) -> f32 {
        self.first + k as f32 * self.spacing
    }
}

impl Iterator for SlicePlanes {
    type Item = SlicePlane;

    fn next(&mut self) -> Option<SlicePlane> {
        if self.next >= self.count {
            return None;
        }
        let plane = SlicePlane::new(self.depth_at(self.next));
        self.next += 1;
        Some(plane)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.count - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SlicePlanes {}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn unit_range() -> DepthRange {
        DepthRange { min: -1.0, max: 1.0 }
    }

    #[test]
    fn test_zero_slices_rejected() {
        let err = SlicePlanes::new(unit_range(), 0).unwrap_err();
        assert_eq!(err, SliceError::ZeroSliceCount);
    }

    #[test]
    fn test_single_slice_at_mid_depth() {
        let planes: Vec<_> = SlicePlanes::new(unit_range(), 1).unwrap().collect();
        assert_eq!(planes, vec![SlicePlane::new(0.0)]);

        let offset = DepthRange { min: -7.0, max: -3.0 };
        let planes: Vec<_> = SlicePlanes::new(offset, 1).unwrap().collect();
        assert_eq!(planes[0].depth, offset.mid());
    }

    #[test]
    fn test_two_slices_at_band_centres() {
        let depths: Vec<f32> = SlicePlanes::new(unit_range(), 2).unwrap()
            .map(|p| p.depth)
            .collect();
        assert_eq!(depths, vec![-0.5, 0.5]);
    }

    #[test]
    fn test_planes_evenly_spaced_and_increasing() {
        let range = DepthRange { min: -2.3, max: 1.7 };
        let planes = SlicePlanes::new(range, 37).unwrap();
        let spacing = planes.spacing();
        assert!((spacing - 4.0 / 37.0).abs() < EPSILON);

        let depths: Vec<f32> = planes.map(|p| p.depth).collect();
        assert_eq!(depths.len(), 37);
        for pair in depths.windows(2) {
            assert!(pair[1] > pair[0]);
            assert!((pair[1] - pair[0] - spacing).abs() < EPSILON);
        }
        // Half a band in from each end
        assert!((depths[0] - (range.min + spacing / 2.0)).abs() < EPSILON);
        assert!((depths[36] - (range.max - spacing / 2.0)).abs() < EPSILON);
    }

    #[test]
    fn test_planes_strictly_inside_range() {
        for n in [1, 2, 3, 16, 255, 512] {
            for plane in SlicePlanes::new(unit_range(), n).unwrap() {
                assert!(plane.depth > -1.0 && plane.depth < 1.0,
                    "plane at {} with {} slices", plane.depth, n);
            }
        }
    }

    #[test]
    fn test_exact_size() {
        let mut planes = SlicePlanes::new(unit_range(), 4).unwrap();
        assert_eq!(planes.len(), 4);
        planes.next();
        assert_eq!(planes.len(), 3);
        assert_eq!(planes.slice_count(), 4);
    }

    #[test]
    fn test_signed_distance() {
        let plane = SlicePlane::new(0.5);
        assert_eq!(plane.signed_distance(Vec3::new(3.0, -2.0, 1.0)), 0.5);
        assert_eq!(plane.signed_distance(Vec3::new(0.0, 0.0, 0.5)), 0.0);
    }
}
