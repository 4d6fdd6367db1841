//! Orbit camera
//!
//! The eye sits `distance` units out along +Z, is tilted about X by the
//! vertical angle and then swung about Y by the horizontal angle. It always
//! looks at the origin with +Y up. Angles are kept in degrees, the unit the
//! mouse sensitivity is expressed in.

use volslice_math::mat4::{self, Mat4};
use volslice_math::Vec3;

use crate::config::{CameraConfig, VolumeConfig};

/// Closest the eye may zoom toward the origin
pub const MIN_DISTANCE: f32 = 0.1;

/// Camera orbiting the volume at the origin
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    /// Horizontal angle about Y, in degrees
    pub angle_h: f32,
    /// Vertical angle about X, in degrees, within `±pitch_limit`
    angle_v: f32,
    distance: f32,
    pitch_limit: f32,
    mouse_sensitivity: f32,
    wheel_sensitivity: f32,
    fov: f32,
    near: f32,
    far: f32,
    model_scale: f32,
}

impl OrbitCamera {
    /// Camera from the configured start angles and settings
    pub fn new(camera: &CameraConfig, volume: &VolumeConfig) -> Self {
        let pitch_limit = camera.pitch_limit.abs();
        Self {
            angle_h: camera.start_angle_h,
            angle_v: camera.start_angle_v.clamp(-pitch_limit, pitch_limit),
            distance: camera.distance.max(MIN_DISTANCE),
            pitch_limit,
            mouse_sensitivity: camera.mouse_sensitivity,
            wheel_sensitivity: camera.wheel_sensitivity,
            fov: camera.fov,
            near: camera.near,
            far: camera.far,
            model_scale: volume.model_scale,
        }
    }

    #[inline]
    pub fn angle_v(&self) -> f32 {
        self.angle_v
    }

    #[inline]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Apply a mouse drag of `(dx, dy)` pixels
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.angle_h += self.mouse_sensitivity * dx;
        self.angle_v = (self.angle_v + self.mouse_sensitivity * dy)
            .clamp(-self.pitch_limit, self.pitch_limit);
    }

    /// Apply `steps` wheel notches; positive moves the eye away
    pub fn zoom(&mut self, steps: f32) {
        self.distance = (self.distance + steps * self.wheel_sensitivity).max(MIN_DISTANCE);
    }

    /// World-space eye position
    pub fn eye(&self) -> Vec3 {
        let tilt = mat4::plane_rotation(self.angle_v.to_radians(), 1, 2);
        let swing = mat4::plane_rotation(self.angle_h.to_radians(), 2, 0);
        let start = Vec3::new(0.0, 0.0, self.distance);
        mat4::transform_vector(swing, mat4::transform_vector(tilt, start))
    }

    /// World-to-view matrix
    pub fn view(&self) -> Mat4 {
        mat4::look_at(self.eye(), Vec3::ZERO, Vec3::Y)
    }

    /// View matrix composed with the model scale of the cube
    pub fn model_view(&self) -> Mat4 {
        mat4::mul(self.view(), mat4::scale(Vec3::splat(self.model_scale)))
    }

    /// Perspective projection for a viewport of the given aspect ratio
    pub fn projection(&self, aspect: f32) -> Mat4 {
        mat4::perspective(self.fov.to_radians(), aspect, self.near, self.far)
    }
}
