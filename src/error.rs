//! Configuration errors
//!
//! The simulation itself cannot fail; only loading and validating settings
//! can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    /// Without a slot nothing can ever cross the boundary
    #[error("at least one lane is required")]
    NoLanes,

    #[error("the level table is empty")]
    NoLevels,

    #[error("level {level} spawns zero-length tokens")]
    EmptyTokens { level: usize },

    #[error("level {level} has a wave quota of zero")]
    ZeroQuota { level: usize },

    #[error("level {level} has an invalid speed range {min}..{max}")]
    SpeedRange { level: usize, min: f64, max: f64 },

    #[error("jump height must be positive, got {0}")]
    JumpHeight(f64),
}
