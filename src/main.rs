//! Reverse Typist entry point
//!
//! Wires settings and a seed into a fresh game and runs the headless frame
//! loop. A windowed frontend would replace the loop body with real key
//! polling and draw `view::compose` output.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use reverse_typist::Settings;
use reverse_typist::sim::{GamePhase, GameState, TickInput, tick};
use reverse_typist::view::Snapshot;

#[derive(Debug, Parser)]
#[command(name = "reverse-typist", about = "Type the falling strings backwards")]
struct Args {
    /// JSON settings file
    #[arg(long)]
    config: Option<PathBuf>,
    /// RNG seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,
    /// Stop after this many frames
    #[arg(long, default_value_t = 60_000)]
    frames: u64,
    /// Let the demo typist play; with `--autoplay false` nobody types
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    autoplay: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let settings = Settings::load_or_default(args.config.as_deref());

    let seed = args.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    });
    log::info!("Reverse Typist (headless) starting with seed {}", seed);

    let mut state = GameState::new(&settings, seed);
    let mut last_phase = state.phase;

    // The title screen still needs the confirm key when nobody types
    tick(&mut state, &TickInput::confirm());

    let input = TickInput {
        idle_mode: args.autoplay,
        ..Default::default()
    };
    while state.frame < args.frames {
        tick(&mut state, &input);

        if state.phase != last_phase {
            log::info!("{:?} -> {:?} on frame {}", last_phase, state.phase, state.frame);
            last_phase = state.phase;
        }
        if state.phase.is_terminal() {
            break;
        }
    }

    match serde_json::to_string_pretty(&Snapshot::capture(&state)) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    }

    if state.phase == GamePhase::Won {
        println!("you won in {} frames", state.frame);
    } else {
        println!("reached level {} in {} frames", state.level_number(), state.frame);
    }
    ExitCode::SUCCESS
}
