//! Vector and Matrix Library
//!
//! This crate provides the small set of linear algebra types the volume
//! slicer needs.
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D vector, used for in-plane angular ordering
//! - [`Vec3`] - 3D vector with x, y, z components
//! - [`Mat4`] - 4x4 column-major matrix for affine transforms

mod vec2;
mod vec3;
pub mod mat4;

pub use vec2::Vec2;
pub use vec3::Vec3;
pub use mat4::Mat4;
