//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`VSL_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Smallest accepted slice count
pub const MIN_SLICE_COUNT: u32 = 1;
/// Largest accepted slice count
pub const MAX_SLICE_COUNT: u32 = 512;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Slicing configuration
    #[serde(default)]
    pub volume: VolumeConfig,
    /// Orbit camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`VSL_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load and validate configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Optional
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // VSL_VOLUME__SLICE_COUNT=64 -> volume.slice_count = 64
        figment = figment.merge(Env::prefixed("VSL_").split("__"));

        let config: AppConfig = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that deserialize fine but cannot drive a frame
    pub fn validate(&self) -> Result<(), ConfigError> {
        let slices = self.volume.slice_count;
        if !(MIN_SLICE_COUNT..=MAX_SLICE_COUNT).contains(&slices) {
            return Err(ConfigError::invalid(format!(
                "volume.slice_count must be in {}..={}, got {}",
                MIN_SLICE_COUNT, MAX_SLICE_COUNT, slices
            )));
        }
        if !(self.volume.model_scale > 0.0) {
            return Err(ConfigError::invalid(format!(
                "volume.model_scale must be positive, got {}",
                self.volume.model_scale
            )));
        }
        if !(self.camera.distance > 0.0) {
            return Err(ConfigError::invalid(format!(
                "camera.distance must be positive, got {}",
                self.camera.distance
            )));
        }
        if !(self.camera.near > 0.0 && self.camera.near < self.camera.far) {
            return Err(ConfigError::invalid(format!(
                "camera clip planes need 0 < near < far, got near {} far {}",
                self.camera.near, self.camera.far
            )));
        }
        Ok(())
    }
}

/// Slicing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeConfig {
    /// Number of view-aligned slice planes
    pub slice_count: u32,
    /// Recompute slices every frame; false freezes the last result
    pub update_intersections: bool,
    /// Uniform scale applied to the unit cube before viewing
    pub model_scale: f32,
}

impl Default for VolumeConfig {
    fn default() -> Self {
        Self {
            slice_count: 256,
            update_intersections: true,
            model_scale: 0.5,
        }
    }
}

/// Orbit camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Distance from the eye to the origin
    pub distance: f32,
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Degrees of orbit per unit of mouse motion
    pub mouse_sensitivity: f32,
    /// Distance change per wheel step
    pub wheel_sensitivity: f32,
    /// Maximum vertical orbit angle in degrees
    pub pitch_limit: f32,
    /// Starting horizontal angle in degrees
    pub start_angle_h: f32,
    /// Starting vertical angle in degrees
    pub start_angle_v: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            distance: 2.0,
            fov: 60.0,
            near: 1.0,
            far: 50.0,
            mouse_sensitivity: 0.1,
            wheel_sensitivity: 0.1,
            pitch_limit: 85.0,
            start_angle_h: 0.0,
            start_angle_v: 0.0,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Samples below this opacity are discarded
    pub alpha_threshold: f32,
    /// Opacity multiplier for volume samples
    pub alpha_scale: f32,
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Draw the shaded bounding cube
    pub draw_cube: bool,
    /// Draw the cube edges
    pub draw_edges: bool,
    /// Draw slice polygon corners
    pub draw_points: bool,
    /// Draw slice triangles as wireframe
    pub draw_geometry: bool,
    /// Draw the textured slice stack
    pub draw_volume: bool,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            alpha_threshold: 0.2,
            alpha_scale: 1.0,
            background_color: [0.15, 0.15, 0.20, 1.0],
            draw_cube: false,
            draw_edges: true,
            draw_points: false,
            draw_geometry: false,
            draw_volume: true,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Frames the headless driver runs before exiting
    pub frames: u32,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            frames: 1,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub enum ConfigError {
    /// A source could not be read or deserialized
    Load(String),
    /// Values loaded but are out of range
    Invalid(String),
}

impl ConfigError {
    fn invalid(message: String) -> Self {
        ConfigError::Invalid(message)
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError::Load(e.to_string())
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Load(message) => write!(f, "Configuration error: {}", message),
            ConfigError::Invalid(message) => write!(f, "Invalid configuration: {}", message),
        }
    }
}

impl std::error::Error for ConfigError {}
