//! Per-frame simulation tick
//!
//! Core game loop that advances simulation deterministically, one call per
//! rendered frame.

use super::autoplay;
use super::state::{GamePhase, GameState};
use crate::input::{CONFIRM_KEY, Key, sample_letter};

/// Input for a single frame (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Keys held this frame, in the platform's stable order
    pub pressed: Vec<Key>,
    /// Idle/demo mode - the autoplayer types instead of the player
    pub idle_mode: bool,
}

impl TickInput {
    pub fn keys(pressed: &[Key]) -> Self {
        Self {
            pressed: pressed.to_vec(),
            ..Default::default()
        }
    }

    pub fn confirm() -> Self {
        Self::keys(&[CONFIRM_KEY])
    }

    pub fn is_confirm(&self) -> bool {
        self.pressed.contains(&CONFIRM_KEY)
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    let input = if input.idle_mode {
        TickInput::keys(&autoplay::next_keys(state))
    } else {
        input.clone()
    };

    state.frame += 1;

    match state.phase {
        GamePhase::NotStarted => {
            if input.is_confirm() {
                log::info!("Session started (seed {})", state.seed);
                state.phase = GamePhase::Playing;
            }
        }
        GamePhase::Playing => play_frame(state, &input),
        GamePhase::Over | GamePhase::Won => {
            if input.is_confirm() {
                state.restart();
            }
        }
    }
}

fn play_frame(state: &mut GameState, input: &TickInput) {
    // Quota used up on an earlier frame: switch levels before anything moves
    if state.level_cleared() {
        state.advance_level();
        if state.phase == GamePhase::Won {
            return;
        }
    }

    let typed = sample_letter(&input.pressed);

    for i in 0..state.tokens.len() {
        // Parked until the next level respawns it
        if state.tokens[i].killed {
            continue;
        }

        // First token over the line ends the run; later slots are not updated
        if state.tokens[i].is_past_boundary(state.boundary_y) {
            log::info!(
                "Game over on level {}: {:?} crossed y={} on frame {}",
                state.level_number(),
                state.tokens[i].text(),
                state.boundary_y,
                state.frame
            );
            state.phase = GamePhase::Over;
            return;
        }

        if state.tokens[i].update(typed) {
            state.waves_remaining -= 1;
            log::debug!(
                "Slot {} cleared {:?}, {} left",
                i,
                state.tokens[i].text(),
                state.waves_remaining
            );
            if state.waves_remaining > 0 {
                state.spawn_slot(i);
            }
        }
    }
}
