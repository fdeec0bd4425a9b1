//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One `tick` per frame, no clocks
//! - Seeded RNG only
//! - Stable iteration order (by slot index)
//! - No rendering or platform dependencies

pub mod autoplay;
pub mod level;
pub mod state;
pub mod text;
pub mod tick;
pub mod token;

pub use level::{Level, LevelTable};
pub use state::{GamePhase, GameState};
pub use text::{ALPHABET, generate_text, random_speed};
pub use tick::{TickInput, tick};
pub use token::{Token, quantize};
