//! volslice - view-aligned volume slicing
//!
//! Headless driver: loads the configuration, orbits the camera around the
//! volume for a number of frames and reports the slice geometry of each.

use std::process::ExitCode;

use volslice::{AppConfig, FrameDriver};

/// Aspect ratio of the notional viewport
const ASPECT: f32 = 16.0 / 9.0;

/// Mouse motion fed to the camera between frames, in pixels
const ORBIT_STEP: (f32, f32) = (25.0, 4.0);

fn main() -> ExitCode {
    // Load configuration before logging so its level can be the default
    let loaded = AppConfig::load();
    let level = match &loaded {
        Ok(config) => config.debug.log_level.clone(),
        Err(_) => "info".to_string(),
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    log::info!("Starting volslice");

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    log::info!(
        "Slicing with {} planes over {} frames",
        config.volume.slice_count, config.debug.frames
    );

    let mut driver = FrameDriver::new(&config);
    for _ in 0..config.debug.frames {
        let frame_number = driver.frames_run() + 1;
        let output = match driver.frame(ASPECT) {
            Ok(output) => output,
            Err(e) => {
                log::error!("Frame {} failed: {}", frame_number, e);
                return ExitCode::FAILURE;
            }
        };

        log::info!(
            "Frame {}: {} planes, {} points, {} triangles{}",
            frame_number,
            output.geometry.planes().len(),
            output.geometry.point_count(),
            output.geometry.triangle_count(),
            if output.resliced { "" } else { " (frozen)" }
        );

        driver.camera.orbit(ORBIT_STEP.0, ORBIT_STEP.1);
    }

    ExitCode::SUCCESS
}
