//! Game settings
//!
//! Loaded once at startup from an optional JSON file. Missing fields fall
//! back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Tuning;

/// Environment variable naming the settings file
pub const SETTINGS_ENV: &str = "BLOCK_BREAKER_SETTINGS";

/// Why a settings file was rejected
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("cannot read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frame pacing target
    pub target_fps: u32,
    /// Lives at the start of each run
    pub starting_lives: u8,
    /// Paddle speed (pixels/s)
    pub paddle_speed: f32,
    /// Ball speed per axis (pixels/s)
    pub ball_speed: f32,
    /// Longest frame delta fed to the simulation (seconds)
    pub max_frame_dt: f32,
    /// Frames the headless demo runs before stopping
    pub demo_frames: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_fps: TARGET_FPS,
            starting_lives: STARTING_LIVES,
            paddle_speed: PADDLE_SPEED,
            ball_speed: BALL_SPEED,
            max_frame_dt: 0.1,
            demo_frames: 60 * 60,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from the file named by `BLOCK_BREAKER_SETTINGS`, or defaults
    pub fn load() -> Result<Self, SettingsError> {
        match std::env::var_os(SETTINGS_ENV) {
            Some(path) => Self::load_path(Path::new(&path)),
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Read a settings file, logging a rejection before returning it
    pub fn load_path(path: &Path) -> Result<Self, SettingsError> {
        match Self::from_file(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                Ok(settings)
            }
            Err(e) => {
                log::warn!("Rejected settings file {}: {e}", path.display());
                Err(e)
            }
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let invalid = |field, reason| Err(SettingsError::Invalid { field, reason });

        if self.target_fps == 0 {
            return invalid("target_fps", "must be at least 1");
        }
        if self.starting_lives == 0 {
            return invalid("starting_lives", "must be at least 1");
        }
        if !(self.paddle_speed.is_finite() && self.paddle_speed > 0.0) {
            return invalid("paddle_speed", "must be a positive number");
        }
        if !(self.ball_speed.is_finite() && self.ball_speed > 0.0) {
            return invalid("ball_speed", "must be a positive number");
        }
        if !(self.max_frame_dt.is_finite() && self.max_frame_dt > 0.0) {
            return invalid("max_frame_dt", "must be a positive number");
        }
        if self.demo_frames == 0 {
            return invalid("demo_frames", "must be at least 1");
        }
        Ok(())
    }

    /// Nominal seconds per frame
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.target_fps as f32
    }

    /// Gameplay balance derived from these settings
    pub fn tuning(&self) -> Tuning {
        Tuning {
            paddle_speed: self.paddle_speed,
            ball_speed: self.ball_speed,
            starting_lives: self.starting_lives,
        }
    }
}
