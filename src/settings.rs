//! Game settings
//!
//! Geometry and level balance, read from JSON. Every field has a default, so
//! a file only needs the values it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;
use crate::sim::level::{Level, LevelTable};

/// Parameters of the generated level table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelCurve {
    pub level_count: u32,
    pub base_text_length: usize,
    /// Letters added per level
    pub text_length_step: usize,
    pub base_wave_quota: u32,
    /// Tokens added to the quota per level
    pub wave_quota_step: u32,
    /// Shared by every level
    pub min_speed: f64,
    pub base_max_speed: f64,
    /// Top speed added per level
    pub max_speed_step: f64,
}

impl Default for LevelCurve {
    fn default() -> Self {
        Self {
            level_count: MAX_LEVELS,
            base_text_length: BASE_TEXT_LENGTH,
            text_length_step: 1,
            base_wave_quota: BASE_WAVE_QUOTA,
            wave_quota_step: WAVE_QUOTA_STEP,
            min_speed: MIN_SPEED,
            base_max_speed: BASE_MAX_SPEED,
            max_speed_step: MAX_SPEED_STEP,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Crossing this row ends the run
    pub boundary_y: f64,
    /// Size of one visible hop
    pub jump_height: f64,
    /// Row tokens start from
    pub spawn_y: f64,
    /// x of each falling slot; the slot count is `lanes.len()`
    pub lanes: Vec<f64>,
    pub curve: LevelCurve,
    /// Explicit table, replaces `curve` when set
    pub levels: Option<Vec<Level>>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            boundary_y: BOUNDARY_Y,
            jump_height: DEFAULT_JUMP_HEIGHT,
            spawn_y: SPAWN_Y,
            lanes: LANES.to_vec(),
            curve: LevelCurve::default(),
            levels: None,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from `path` if given, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Using default settings: {}", e);
                Self::default()
            }
        }
    }

    /// The level table these settings describe
    pub fn level_table(&self) -> LevelTable {
        match &self.levels {
            Some(levels) => LevelTable::new(levels.clone()),
            None => {
                let c = &self.curve;
                LevelTable::linear(
                    c.level_count,
                    c.base_text_length,
                    c.text_length_step,
                    c.base_wave_quota,
                    c.wave_quota_step,
                    c.min_speed,
                    c.base_max_speed,
                    c.max_speed_step,
                )
            }
        }
    }

    /// Reject configurations the simulation cannot run sensibly
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.lanes.is_empty() {
            return Err(SettingsError::NoLanes);
        }
        if !(self.jump_height > 0.0 && self.jump_height.is_finite()) {
            return Err(SettingsError::JumpHeight(self.jump_height));
        }

        let table = self.level_table();
        if table.is_empty() {
            return Err(SettingsError::NoLevels);
        }

        for (i, level) in table.iter().enumerate() {
            let level_no = i + 1;
            if level.text_length == 0 {
                return Err(SettingsError::EmptyTokens { level: level_no });
            }
            if level.wave_quota == 0 {
                return Err(SettingsError::ZeroQuota { level: level_no });
            }
            let finite = level.min_speed.is_finite() && level.max_speed.is_finite();
            if !finite || level.min_speed < 0.0 || level.min_speed > level.max_speed {
                return Err(SettingsError::SpeedRange {
                    level: level_no,
                    min: level.min_speed,
                    max: level.max_speed,
                });
            }
        }

        Ok(())
    }
}
