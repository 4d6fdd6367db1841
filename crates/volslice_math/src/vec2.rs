//! 2D Vector type

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

/// 2D Vector with x, y components
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    pub const X: Self = Self { x: 1.0, y: 0.0 };
    pub const Y: Self = Self { x: 0.0, y: 1.0 };

    /// Create a new Vec2
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product (z component of the 3D cross product)
    #[inline]
    pub fn perp_dot(self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Length (magnitude)
    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Signed angle in radians that rotates `self` onto `other`, in `(-PI, PI]`
    ///
    /// Counter-clockwise is positive. Neither vector needs to be normalized;
    /// a zero vector yields an angle of zero.
    #[inline]
    pub fn oriented_angle_to(self, other: Self) -> f32 {
        self.perp_dot(other).atan2(self.dot(other))
    }

    /// Append a z component
    #[inline]
    pub fn extend(self, z: f32) -> crate::Vec3 {
        crate::Vec3::new(self.x, self.y, z)
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl std::ops::Div<f32> for Vec2 {
    type Output = Self;
    #[inline]
    fn div(self, scalar: f32) -> Self {
        Self::new(self.x / scalar, self.y / scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPSILON: f32 = 0.0001;

    #[test]
    fn test_perp_dot() {
        assert_eq!(Vec2::X.perp_dot(Vec2::Y), 1.0);
        assert_eq!(Vec2::Y.perp_dot(Vec2::X), -1.0);
    }

    #[test]
    fn test_oriented_angle_quadrants() {
        // +Y has to turn clockwise to reach +X
        assert!((Vec2::Y.oriented_angle_to(Vec2::X) + FRAC_PI_2).abs() < EPSILON);
        // -Y turns counter-clockwise to reach +X
        assert!((Vec2::new(0.0, -1.0).oriented_angle_to(Vec2::X) - FRAC_PI_2).abs() < EPSILON);
        // -X is half a turn away
        assert!((Vec2::new(-1.0, 0.0).oriented_angle_to(Vec2::X).abs() - PI).abs() < EPSILON);
    }

    #[test]
    fn test_oriented_angle_ignores_length() {
        let a = Vec2::new(3.0, 4.0).oriented_angle_to(Vec2::X);
        let b = Vec2::new(0.3, 0.4).oriented_angle_to(Vec2::X);
        assert!((a - b).abs() < EPSILON);
    }

    #[test]
    fn test_oriented_angle_zero_vector() {
        assert_eq!(Vec2::ZERO.oriented_angle_to(Vec2::X), 0.0);
    }

    #[test]
    fn test_extend() {
        let v = Vec2::new(1.0, 2.0).extend(3.0);
        assert_eq!(v, crate::Vec3::new(1.0, 2.0, 3.0));
    }
}
