//! 4x4 Matrix utilities for affine transformations
//!
//! Matrices are stored column-major as `m[column][row]`, the same layout a
//! GPU uniform expects, so they can be uploaded without transposing.

use crate::Vec3;

/// 4x4 matrix type (column-major)
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Create a rotation matrix in the plane spanned by two axes.
///
/// # Arguments
/// * `angle` - Rotation angle in radians
/// * `p1`, `p2` - Indices of the axes forming the rotation plane (0=X, 1=Y, 2=Z)
///
/// Rotates axis `p1` towards axis `p2`, so `plane_rotation(a, 1, 2)` is a
/// right-handed rotation about X and `plane_rotation(a, 2, 0)` one about Y.
///
/// # Example
/// ```
/// use volslice_math::mat4::plane_rotation;
/// // Rotate about the view axis
/// let roll = plane_rotation(0.5, 0, 1);
/// ```
pub fn plane_rotation(angle: f32, p1: usize, p2: usize) -> Mat4 {
    let cs = angle.cos();
    let sn = angle.sin();

    let mut m = IDENTITY;

    m[p1][p1] = cs;
    m[p2][p2] = cs;
    m[p1][p2] = sn;
    m[p2][p1] = -sn;

    m
}

/// Non-uniform scale matrix
pub fn scale(s: Vec3) -> Mat4 {
    let mut m = IDENTITY;
    m[0][0] = s.x;
    m[1][1] = s.y;
    m[2][2] = s.z;
    m
}

/// Translation matrix
pub fn translation(t: Vec3) -> Mat4 {
    let mut m = IDENTITY;
    m[3][0] = t.x;
    m[3][1] = t.y;
    m[3][2] = t.z;
    m
}

/// Multiply two 4x4 matrices: result = a * b
///
/// In column-major convention, this applies b first, then a.
#[allow(clippy::needless_range_loop)]
pub fn mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [[0.0f32; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[k][j] * b[i][k];
            }
        }
    }

    result
}

/// Transform a point (w = 1) and keep the xyz of the result.
///
/// No perspective divide: model-view matrices are affine.
pub fn transform_point(m: Mat4, p: Vec3) -> Vec3 {
    Vec3::new(
        m[0][0] * p.x + m[1][0] * p.y + m[2][0] * p.z + m[3][0],
        m[0][1] * p.x + m[1][1] * p.y + m[2][1] * p.z + m[3][1],
        m[0][2] * p.x + m[1][2] * p.y + m[2][2] * p.z + m[3][2],
    )
}

/// Transform a direction (w = 0); translation is ignored.
pub fn transform_vector(m: Mat4, v: Vec3) -> Vec3 {
    Vec3::new(
        m[0][0] * v.x + m[1][0] * v.y + m[2][0] * v.z,
        m[0][1] * v.x + m[1][1] * v.y + m[2][1] * v.z,
        m[0][2] * v.x + m[1][2] * v.y + m[2][2] * v.z,
    )
}

/// True when every element is finite
pub fn is_finite(m: Mat4) -> bool {
    m.iter().flatten().all(|v| v.is_finite())
}

/// Determinant of the full 4x4 matrix
pub fn determinant(m: Mat4) -> f32 {
    let c = Cofactors::new(m);
    c.determinant()
}

/// Invert a 4x4 matrix.
///
/// Returns `None` when the matrix is singular or the inverse is not finite.
pub fn inverse(m: Mat4) -> Option<Mat4> {
    let c = Cofactors::new(m);
    let det = c.determinant();
    if det == 0.0 || !det.is_finite() {
        return None;
    }
    let inv_det = 1.0 / det;

    let [[a00, a01, a02, a03], [a10, a11, a12, a13], [a20, a21, a22, a23], [a30, a31, a32, a33]] = m;
    let Cofactors { b00, b01, b02, b03, b04, b05, b06, b07, b08, b09, b10, b11 } = c;

    let result = [
        [
            (a11 * b11 - a12 * b10 + a13 * b09) * inv_det,
            (a02 * b10 - a01 * b11 - a03 * b09) * inv_det,
            (a31 * b05 - a32 * b04 + a33 * b03) * inv_det,
            (a22 * b04 - a21 * b05 - a23 * b03) * inv_det,
        ],
        [
            (a12 * b08 - a10 * b11 - a13 * b07) * inv_det,
            (a00 * b11 - a02 * b08 + a03 * b07) * inv_det,
            (a32 * b02 - a30 * b05 - a33 * b01) * inv_det,
            (a20 * b05 - a22 * b02 + a23 * b01) * inv_det,
        ],
        [
            (a10 * b10 - a11 * b08 + a13 * b06) * inv_det,
            (a01 * b08 - a00 * b10 - a03 * b06) * inv_det,
            (a30 * b04 - a31 * b02 + a33 * b00) * inv_det,
            (a21 * b02 - a20 * b04 - a23 * b00) * inv_det,
        ],
        [
            (a11 * b07 - a10 * b09 - a12 * b06) * inv_det,
            (a00 * b09 - a01 * b07 + a02 * b06) * inv_det,
            (a31 * b01 - a30 * b03 - a32 * b00) * inv_det,
            (a20 * b03 - a21 * b01 + a22 * b00) * inv_det,
        ],
    ];

    is_finite(result).then_some(result)
}

/// 2x2 sub-determinants shared by `determinant` and `inverse`
struct Cofactors {
    b00: f32,
    b01: f32,
    b02: f32,
    b03: f32,
    b04: f32,
    b05: f32,
    b06: f32,
    b07: f32,
    b08: f32,
    b09: f32,
    b10: f32,
    b11: f32,
}

impl Cofactors {
    fn new(m: Mat4) -> Self {
        let [[a00, a01, a02, a03], [a10, a11, a12, a13], [a20, a21, a22, a23], [a30, a31, a32, a33]] = m;
        Self {
            b00: a00 * a11 - a01 * a10,
            b01: a00 * a12 - a02 * a10,
            b02: a00 * a13 - a03 * a10,
            b03: a01 * a12 - a02 * a11,
            b04: a01 * a13 - a03 * a11,
            b05: a02 * a13 - a03 * a12,
            b06: a20 * a31 - a21 * a30,
            b07: a20 * a32 - a22 * a30,
            b08: a20 * a33 - a23 * a30,
            b09: a21 * a32 - a22 * a31,
            b10: a21 * a33 - a23 * a31,
            b11: a22 * a33 - a23 * a32,
        }
    }

    fn determinant(&self) -> f32 {
        self.b00 * self.b11 - self.b01 * self.b10 + self.b02 * self.b09
            + self.b03 * self.b08 - self.b04 * self.b07 + self.b05 * self.b06
    }
}

/// Right-handed look-at view matrix (camera looks down -Z)
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let f = (target - eye).normalized();
    let s = f.cross(up).normalized();
    let u = s.cross(f);

    [
        [s.x, u.x, -f.x, 0.0],
        [s.y, u.y, -f.y, 0.0],
        [s.z, u.z, -f.z, 0.0],
        [-s.dot(eye), -u.dot(eye), f.dot(eye), 1.0],
    ]
}

/// OpenGL-style perspective projection (clip z in [-1, 1])
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y / 2.0).tan();
    let nf = 1.0 / (near - far);

    [
        [f / aspect, 0.0, 0.0, 0.0],
        [0.0, f, 0.0, 0.0],
        [0.0, 0.0, (far + near) * nf, -1.0],
        [0.0, 0.0, 2.0 * far * near * nf, 0.0],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
    }

    fn mat_approx_eq(a: Mat4, b: Mat4) -> bool {
        for i in 0..4 {
            for j in 0..4 {
                if !approx_eq(a[i][j], b[i][j]) {
                    return false;
                }
            }
        }
        true
    }

    fn sample_model_view() -> Mat4 {
        let rotation = mul(plane_rotation(0.7, 2, 0), plane_rotation(-0.3, 1, 2));
        let placed = mul(translation(Vec3::new(0.5, -1.0, -3.0)), rotation);
        mul(placed, scale(Vec3::new(0.5, 2.0, 1.5)))
    }

    #[test]
    fn test_identity() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert!(vec_approx_eq(transform_point(IDENTITY, p), p));
    }

    #[test]
    fn test_plane_rotation_about_x() {
        use std::f32::consts::FRAC_PI_2;

        // 90° about X: Y goes to Z, Z goes to -Y
        let m = plane_rotation(FRAC_PI_2, 1, 2);
        assert!(vec_approx_eq(transform_vector(m, Vec3::Y), Vec3::Z),
            "Y should become Z, got {:?}", transform_vector(m, Vec3::Y));
        assert!(vec_approx_eq(transform_vector(m, Vec3::Z), -Vec3::Y));
        assert!(vec_approx_eq(transform_vector(m, Vec3::X), Vec3::X));
    }

    #[test]
    fn test_plane_rotation_about_y() {
        use std::f32::consts::FRAC_PI_2;

        // 90° about Y: Z goes to X
        let m = plane_rotation(FRAC_PI_2, 2, 0);
        assert!(vec_approx_eq(transform_vector(m, Vec3::Z), Vec3::X));
    }

    #[test]
    fn test_translation_only_moves_points() {
        let t = translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(transform_point(t, Vec3::ZERO), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(transform_vector(t, Vec3::X), Vec3::X);
    }

    #[test]
    fn test_mul_applies_right_first() {
        let s = scale(Vec3::splat(2.0));
        let t = translation(Vec3::new(1.0, 0.0, 0.0));
        // Scale then translate
        let p = transform_point(mul(t, s), Vec3::X);
        assert!(vec_approx_eq(p, Vec3::new(3.0, 0.0, 0.0)));
    }

    #[test]
    fn test_mul_composition() {
        use std::f32::consts::FRAC_PI_4;

        let r45 = plane_rotation(FRAC_PI_4, 0, 1);
        let r90 = plane_rotation(FRAC_PI_4 * 2.0, 0, 1);
        let composed = mul(r45, r45);
        assert!(mat_approx_eq(composed, r90));
    }

    #[test]
    fn test_inverse_identity() {
        assert_eq!(inverse(IDENTITY), Some(IDENTITY));
    }

    #[test]
    fn test_inverse_round_trip() {
        let m = sample_model_view();
        let inv = inverse(m).expect("sample transform should be invertible");
        assert!(mat_approx_eq(mul(m, inv), IDENTITY));
        assert!(mat_approx_eq(mul(inv, m), IDENTITY));

        let p = Vec3::new(0.25, -0.75, 0.5);
        let back = transform_point(inv, transform_point(m, p));
        assert!(vec_approx_eq(back, p), "expected {:?}, got {:?}", p, back);
    }

    #[test]
    fn test_inverse_singular() {
        let flat = scale(Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(determinant(flat), 0.0);
        assert!(inverse(flat).is_none());
    }

    #[test]
    fn test_determinant_of_scale() {
        let m = scale(Vec3::new(0.5, 2.0, 3.0));
        assert!(approx_eq(determinant(m), 3.0));
    }

    #[test]
    fn test_is_finite() {
        assert!(is_finite(IDENTITY));
        let mut m = IDENTITY;
        m[2][1] = f32::NAN;
        assert!(!is_finite(m));
    }

    #[test]
    fn test_look_at_places_target_ahead() {
        let view = look_at(Vec3::new(0.0, 0.0, 2.0), Vec3::ZERO, Vec3::Y);
        // Target ends up two units down -Z
        let target = transform_point(view, Vec3::ZERO);
        assert!(vec_approx_eq(target, Vec3::new(0.0, 0.0, -2.0)));
        // Up stays up
        assert!(vec_approx_eq(transform_vector(view, Vec3::Y), Vec3::Y));
    }

    #[test]
    fn test_perspective_matrix() {
        let proj = perspective(std::f32::consts::FRAC_PI_4, 1.0, 0.1, 100.0);
        assert!(proj[0][0] != 0.0);
        assert!(proj[1][1] != 0.0);
        assert_eq!(proj[2][3], -1.0);
    }
}
