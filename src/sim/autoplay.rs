//! Demo typist
//!
//! Plays the game for idle/demo mode: always works on the token nearest the
//! boundary and presses exactly the letter it needs.

use super::state::{GamePhase, GameState};
use crate::input::{CONFIRM_KEY, Key};

/// Keys the autoplayer holds this frame
pub fn next_keys(state: &GameState) -> Vec<Key> {
    match state.phase {
        GamePhase::NotStarted | GamePhase::Over | GamePhase::Won => vec![CONFIRM_KEY],
        GamePhase::Playing => {
            let target = state
                .tokens
                .iter()
                .filter(|t| !t.killed)
                .max_by(|a, b| a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal));

            match target {
                // An empty token dies to any letter
                Some(token) => match token.next_letter() {
                    Some(letter) => Key::from_char(letter).into_iter().collect(),
                    None => vec![Key::A],
                },
                None => Vec::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn test_confirms_outside_play() {
        let mut state = GameState::new(&Settings::default(), 1);
        assert_eq!(next_keys(&state), vec![Key::Enter]);
        state.phase = GamePhase::Over;
        assert_eq!(next_keys(&state), vec![Key::Enter]);
    }

    #[test]
    fn test_targets_lowest_token() {
        let mut state = GameState::new(&Settings::default(), 1);
        state.phase = GamePhase::Playing;
        state.tokens[0].reset("abc", 0.5, 40.0);
        state.tokens[1].reset("xyz", 0.5, 40.0);
        state.tokens[1].y = 200.0;
        assert_eq!(next_keys(&state), vec![Key::Z]);

        state.tokens[1].killed = true;
        assert_eq!(next_keys(&state), vec![Key::C]);
    }
}
