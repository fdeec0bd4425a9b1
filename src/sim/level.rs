//! Difficulty levels
//!
//! The table is built once at startup and never mutated.

use serde::{Deserialize, Serialize};

/// One difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// Inclusive lower bound of a token's fall speed (pixels/frame)
    pub min_speed: f64,
    /// Exclusive upper bound of a token's fall speed
    pub max_speed: f64,
    /// Exact letter count of tokens spawned at this level
    pub text_length: usize,
    /// Tokens to clear before the level is done
    pub wave_quota: u32,
}

/// Ordered, easiest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelTable {
    levels: Vec<Level>,
}

impl LevelTable {
    pub fn new(levels: Vec<Level>) -> Self {
        Self { levels }
    }

    /// Linear difficulty curve: each level adds `text_length_step` letters,
    /// `wave_quota_step` tokens and `max_speed_step` of top speed.
    #[allow(clippy::too_many_arguments)]
    pub fn linear(
        count: u32,
        base_text_length: usize,
        text_length_step: usize,
        base_wave_quota: u32,
        wave_quota_step: u32,
        min_speed: f64,
        base_max_speed: f64,
        max_speed_step: f64,
    ) -> Self {
        let levels = (0..count)
            .map(|i| Level {
                min_speed,
                max_speed: base_max_speed + i as f64 * max_speed_step,
                text_length: base_text_length + i as usize * text_length_step,
                wave_quota: base_wave_quota + i * wave_quota_step,
            })
            .collect();
        Self { levels }
    }

    pub fn get(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    pub fn first(&self) -> Option<&Level> {
        self.levels.first()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }
}

impl Default for LevelTable {
    /// The shipped five-level table
    fn default() -> Self {
        use crate::consts::*;
        Self::linear(
            MAX_LEVELS,
            BASE_TEXT_LENGTH,
            1,
            BASE_WAVE_QUOTA,
            WAVE_QUOTA_STEP,
            MIN_SPEED,
            BASE_MAX_SPEED,
            MAX_SPEED_STEP,
        )
    }
}
