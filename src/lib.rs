//! volslice - view-aligned volume slicing
//!
//! Application layer over [`volslice_core`]: layered configuration, an orbit
//! camera, draw layer selection and a per-frame driver.

pub mod config;
pub mod frame;
pub mod layers;
pub mod orbit;

pub use config::{AppConfig, ConfigError};
pub use frame::{FrameDriver, FrameOutput};
pub use layers::DrawLayers;
pub use orbit::OrbitCamera;
