//! Game state and core simulation types
//!
//! Everything the frame tick reads or writes lives here, including the RNG,
//! so a run is fully determined by its settings, seed and key presses.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::level::{Level, LevelTable};
use super::text::{generate_text, random_speed};
use super::token::Token;
use crate::settings::Settings;

/// Top-level phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the confirm key
    NotStarted,
    /// Tokens are falling
    Playing,
    /// A token crossed the boundary
    Over,
    /// Every level was cleared
    Won,
}

impl GamePhase {
    /// Over and Won only leave through a restart
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Over | GamePhase::Won)
    }
}

/// Complete game state (deterministic)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Source of every token text and speed
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Index into `levels`
    pub level_index: usize,
    /// Kills left in this level. Can dip below zero when several slots die
    /// on the frame that uses up the quota; only meaningful while Playing.
    pub waves_remaining: i32,
    /// Fixed pool of falling slots, updated in index order
    pub tokens: Vec<Token>,
    pub levels: LevelTable,
    /// Loss row
    pub boundary_y: f64,
    pub jump_height: f64,
    /// Simulation frame counter
    pub frame: u64,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(settings: &Settings, seed: u64) -> Self {
        let mut state = Self::with_rng(settings, Pcg32::seed_from_u64(seed));
        state.seed = seed;
        state
    }

    /// Create a game state drawing from an existing RNG
    pub fn with_rng(settings: &Settings, rng: Pcg32) -> Self {
        let levels = settings.level_table();
        let tokens = settings
            .lanes
            .iter()
            .map(|&x| Token::new(x, settings.spawn_y))
            .collect();

        let mut state = Self {
            seed: 0,
            rng,
            phase: GamePhase::NotStarted,
            level_index: 0,
            waves_remaining: 0,
            tokens,
            levels,
            boundary_y: settings.boundary_y,
            jump_height: settings.jump_height,
            frame: 0,
        };

        state.waves_remaining = state.first_quota();
        state.spawn_all();
        state
    }

    /// Parameters of the level being played, if the index is in range
    pub fn current_level(&self) -> Option<&Level> {
        self.levels.get(self.level_index)
    }

    /// 1-based level number for display
    pub fn level_number(&self) -> usize {
        self.level_index + 1
    }

    fn first_quota(&self) -> i32 {
        self.levels.first().map_or(0, |l| l.wave_quota as i32)
    }

    /// True once the quota is used up; the level advances on the next frame.
    ///
    /// The counter reaching zero triggers the advance; it need not go negative.
    pub fn level_cleared(&self) -> bool {
        self.waves_remaining <= 0
    }

    /// Give slot `index` fresh text and speed for the current level
    pub fn spawn_slot(&mut self, index: usize) {
        let Some(level) = self.current_level().copied() else {
            return;
        };
        let text = generate_text(&mut self.rng, level.text_length);
        let speed = random_speed(&mut self.rng, level.min_speed, level.max_speed);
        let jump_height = self.jump_height;

        if let Some(token) = self.tokens.get_mut(index) {
            log::debug!("Slot {} spawned {:?} at speed {:.3}", index, text, speed);
            token.reset(&text, speed, jump_height);
        }
    }

    /// Respawn every slot, in slot order
    pub fn spawn_all(&mut self) {
        for i in 0..self.tokens.len() {
            self.spawn_slot(i);
        }
    }

    /// Move to the next level, or to Won after the last one.
    ///
    /// Slots parked by the previous level come back with the new level's
    /// parameters; slots still falling keep their text and position.
    pub fn advance_level(&mut self) {
        self.level_index += 1;

        let Some(level) = self.current_level().copied() else {
            log::info!("All {} levels cleared on frame {}", self.levels.len(), self.frame);
            self.phase = GamePhase::Won;
            return;
        };

        log::info!(
            "Level {}: length={}, quota={}, speed={:.2}..{:.2}",
            self.level_number(),
            level.text_length,
            level.wave_quota,
            level.min_speed,
            level.max_speed
        );
        self.waves_remaining = level.wave_quota as i32;

        for i in 0..self.tokens.len() {
            if self.tokens[i].killed {
                self.spawn_slot(i);
            }
        }
    }

    /// Back to the first level with every slot regenerated
    pub fn restart(&mut self) {
        log::info!("Restarting from {:?} on level {}", self.phase, self.level_number());
        self.level_index = 0;
        self.waves_remaining = self.first_quota();
        self.spawn_all();
        self.phase = GamePhase::Playing;
    }
}
