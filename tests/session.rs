use reverse_typist::Settings;
use reverse_typist::sim::{GamePhase, GameState, TickInput, tick};
use reverse_typist::view::{Snapshot, compose};

fn autoplay() -> TickInput {
    TickInput {
        idle_mode: true,
        ..Default::default()
    }
}

fn run_until_terminal(state: &mut GameState, input: &TickInput, max_frames: u64) {
    for _ in 0..max_frames {
        tick(state, input);
        if state.phase.is_terminal() {
            return;
        }
    }
}

#[test]
fn test_autoplay_clears_every_level() {
    let mut state = GameState::new(&Settings::default(), 2024);
    let mut levels_seen = vec![state.level_index];

    for _ in 0..20_000 {
        tick(&mut state, &autoplay());
        if levels_seen.last() != Some(&state.level_index) {
            levels_seen.push(state.level_index);
        }
        if state.phase.is_terminal() {
            break;
        }
    }

    assert_eq!(state.phase, GamePhase::Won);
    assert_eq!(levels_seen, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_nobody_typing_loses() {
    let mut state = GameState::new(&Settings::default(), 7);
    tick(&mut state, &TickInput::confirm());

    // Slowest possible token covers 660px at 0.5px per frame
    run_until_terminal(&mut state, &TickInput::default(), 1400);

    assert_eq!(state.phase, GamePhase::Over);
    assert_eq!(state.level_index, 0);
    assert!(state.tokens.iter().any(|t| t.y >= 700.0));
}

#[test]
fn test_restart_after_loss_plays_again() {
    let mut state = GameState::new(&Settings::default(), 31);
    tick(&mut state, &TickInput::confirm());
    run_until_terminal(&mut state, &TickInput::default(), 1400);
    assert_eq!(state.phase, GamePhase::Over);

    tick(&mut state, &TickInput::confirm());
    assert_eq!(state.phase, GamePhase::Playing);
    assert_eq!(state.waves_remaining, 10);
    assert!(state.tokens.iter().all(|t| t.y == 40.0 && !t.killed));

    run_until_terminal(&mut state, &autoplay(), 20_000);
    assert_eq!(state.phase, GamePhase::Won);
}

#[test]
fn test_single_level_from_json() {
    let settings = Settings::from_json(
        r#"{
            "lanes": [240],
            "levels": [
                { "min_speed": 1.0, "max_speed": 1.0, "text_length": 4, "wave_quota": 3 }
            ]
        }"#,
    )
    .unwrap();
    let mut state = GameState::new(&settings, 3);
    assert_eq!(state.tokens.len(), 1);
    assert_eq!(state.tokens[0].speed, 1.0);

    run_until_terminal(&mut state, &autoplay(), 1000);
    assert_eq!(state.phase, GamePhase::Won);

    let cmds = compose(&Snapshot::capture(&state));
    assert!(cmds.iter().any(|c| matches!(
        c,
        reverse_typist::view::DrawCommand::Text { text, .. } if text == "you won"
    )));
}
