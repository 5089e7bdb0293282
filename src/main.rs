//! Duel Arcade headless driver
//!
//! Runs the cores without a renderer:
//! - `duel-arcade pong [seconds]` simulates idle paddles and reports the score
//! - `duel-arcade tictactoe <cell>...` plays the given cells in order
//!
//! Settings come from the JSON file named by `DUEL_ARCADE_SETTINGS`, if set.

use std::path::PathBuf;
use std::process::ExitCode;

use duel_arcade::Settings;
use duel_arcade::consts::*;
use duel_arcade::pong::{PongEvent, PongState, tick};
use duel_arcade::tictactoe::{PlayOutcome, Round};

/// Simulated time per rendered frame (a 60 Hz display)
const FRAME_DT: f32 = 1.0 / 60.0;

/// Host-side fixed-timestep driver for the Pong core
struct PongSession {
    state: PongState,
    accumulator: f32,
}

impl PongSession {
    fn new(settings: &Settings) -> Self {
        Self {
            state: PongState::new(&settings.pong, settings.seed),
            accumulator: 0.0,
        }
    }

    /// Run as many simulation ticks as the frame time covers
    fn update(&mut self, dt: f32) -> Vec<PongEvent> {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut events = Vec::new();
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            events.extend(tick(&mut self.state, SIM_DT));
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        events
    }
}

fn load_settings() -> Settings {
    match std::env::var_os("DUEL_ARCADE_SETTINGS") {
        Some(path) => Settings::load_from(&PathBuf::from(path)),
        None => Settings::default(),
    }
}

fn run_pong(settings: &Settings, seconds: f32) {
    let mut session = PongSession::new(settings);
    let frames = (seconds / FRAME_DT).round() as u32;
    log::info!("Simulating {} frames of Pong (seed {})", frames, settings.seed);

    let mut points = 0;
    for _ in 0..frames {
        points += session
            .update(FRAME_DT)
            .iter()
            .filter(|e| matches!(e, PongEvent::Scored(_)))
            .count();
    }

    let (score1, score2) = session.state.scores();
    log::info!("{} points over {} ticks", points, session.state.time_ticks);
    println!("Player 1: {}  Player 2: {}", score1, score2);
}

fn run_tictactoe(settings: &Settings, cells: &[usize]) {
    let mut round = Round::new(settings.round);

    for &cell in cells {
        if let PlayOutcome::Rejected(reason) = round.play(cell) {
            log::warn!("Cell {} not played: {:?}", cell, reason);
        }
    }

    print!("{}", round.board());
    println!("{:?}", round.board().status());
}

/// Simulated duration from the command line; must be positive and finite
fn parse_seconds(arg: &str) -> Option<f32> {
    arg.parse::<f32>()
        .ok()
        .filter(|s| s.is_finite() && *s > 0.0)
}

fn usage() -> ExitCode {
    eprintln!("usage: duel-arcade pong [seconds] | duel-arcade tictactoe <cell>...");
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let settings = load_settings();

    match args.first().map(String::as_str) {
        Some("pong") => {
            let seconds = match args.get(1).map(|s| parse_seconds(s)) {
                None => 10.0,
                Some(Some(s)) => s,
                Some(None) => return usage(),
            };
            run_pong(&settings, seconds);
        }
        Some("tictactoe") => {
            let cells: Result<Vec<usize>, _> = args[1..].iter().map(|s| s.parse()).collect();
            match cells {
                Ok(cells) => run_tictactoe(&settings, &cells),
                Err(_) => return usage(),
            }
        }
        _ => return usage(),
    }

    ExitCode::SUCCESS
}
