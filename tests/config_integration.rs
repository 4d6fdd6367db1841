//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use std::fs;
use std::path::PathBuf;

use serial_test::serial;
use volslice::config::{AppConfig, ConfigError};
use volslice::{DrawLayers, FrameDriver};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("volslice-config-{}-{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("VSL_VOLUME__SLICE_COUNT", "64");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("VSL_VOLUME__SLICE_COUNT");
    assert_eq!(config.volume.slice_count, 64);
}

#[test]
#[serial]
fn test_default_file_matches_builtin_defaults() {
    let config = AppConfig::load().unwrap();
    let builtin = AppConfig::default();
    assert_eq!(config.volume.slice_count, builtin.volume.slice_count);
    assert_eq!(config.camera.distance, builtin.camera.distance);
    assert_eq!(config.rendering.background_color, builtin.rendering.background_color);
    assert_eq!(DrawLayers::from_config(&config.rendering), DrawLayers::default());
}

#[test]
#[serial]
fn test_user_file_overrides_default() {
    let dir = scratch_dir("user");
    fs::write(dir.join("default.toml"), "[volume]\nslice_count = 128\n").unwrap();
    fs::write(dir.join("user.toml"), "[volume]\nslice_count = 32\n[camera]\nfov = 45.0\n").unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    assert_eq!(config.volume.slice_count, 32);
    assert_eq!(config.camera.fov, 45.0);
    assert_eq!(config.camera.far, 50.0);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    let config = AppConfig::load_from("does/not/exist").unwrap();
    assert_eq!(config.volume.slice_count, 256);
}

#[test]
#[serial]
fn test_out_of_range_slice_count_rejected() {
    std::env::set_var("VSL_VOLUME__SLICE_COUNT", "1000");
    let result = AppConfig::load();
    std::env::remove_var("VSL_VOLUME__SLICE_COUNT");
    assert!(matches!(result, Err(ConfigError::Invalid(_))));
}

#[test]
#[serial]
fn test_malformed_value_rejected() {
    std::env::set_var("VSL_CAMERA__DISTANCE", "far away");
    let result = AppConfig::load();
    std::env::remove_var("VSL_CAMERA__DISTANCE");
    assert!(matches!(result, Err(ConfigError::Load(_))));
}

#[test]
#[serial]
fn test_loaded_config_drives_a_frame() {
    std::env::set_var("VSL_VOLUME__SLICE_COUNT", "8");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("VSL_VOLUME__SLICE_COUNT");

    let mut driver = FrameDriver::new(&config);
    let output = driver.frame(1.0).unwrap();
    assert_eq!(output.geometry.planes().len(), 8);
    assert!(output.geometry.planes().iter().all(|span| span.point_count >= 3));
}
