//! Reverse Typist - a falling-word typing game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (tokens, levels, game state, frame tick)
//! - `input`: Key table and per-frame letter sampling
//! - `view`: Read-only snapshot and draw commands for a renderer
//! - `settings`: Data-driven game balance and geometry

pub mod error;
pub mod input;
pub mod settings;
pub mod sim;
pub mod view;

pub use error::SettingsError;
pub use input::Key;
pub use settings::{LevelCurve, Settings};

/// Game configuration constants
pub mod consts {
    /// Logical screen size
    pub const GAME_WIDTH: f64 = 480.0;
    pub const GAME_HEIGHT: f64 = 800.0;

    /// Tokens move in hops of this many pixels
    pub const DEFAULT_JUMP_HEIGHT: f64 = 40.0;
    /// Row a token is reset to when it spawns
    pub const SPAWN_Y: f64 = 40.0;
    /// Crossing this row ends the run
    pub const BOUNDARY_Y: f64 = 700.0;
    /// One falling slot per lane
    pub const LANES: [f64; 2] = [60.0, 300.0];

    /// Level curve defaults
    pub const MAX_LEVELS: u32 = 5;
    pub const BASE_TEXT_LENGTH: usize = 3;
    pub const BASE_WAVE_QUOTA: u32 = 10;
    pub const WAVE_QUOTA_STEP: u32 = 5;
    pub const MIN_SPEED: f64 = 0.5;
    pub const BASE_MAX_SPEED: f64 = 0.8;
    pub const MAX_SPEED_STEP: f64 = 0.1;
}
