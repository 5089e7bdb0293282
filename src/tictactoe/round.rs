//! Round flow around a [`Board`]
//!
//! Once a round ends, input is locked and a fresh board is started after a
//! short pause so the presentation layer can play its win/tie effect.

use serde::{Deserialize, Serialize};

use super::board::{Board, PlayOutcome, Player, Rejection, Status};
use super::grid::GridGeometry;

/// Pause lengths before the next round starts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    /// Seconds between a win and the next round
    pub win_delay: f32,
    /// Seconds between a tie and the next round
    pub tie_delay: f32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            win_delay: 2.0,
            tie_delay: 1.0,
        }
    }
}

/// In-session results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tally {
    pub wins_one: u32,
    pub wins_two: u32,
    pub ties: u32,
}

impl Tally {
    fn record(&mut self, status: Status) {
        match status {
            Status::Won(Player::One) => self.wins_one += 1,
            Status::Won(Player::Two) => self.wins_two += 1,
            Status::Tied => self.ties += 1,
            Status::InProgress => {}
        }
    }

    pub fn rounds(&self) -> u32 {
        self.wins_one + self.wins_two + self.ties
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    board: Board,
    config: RoundConfig,
    tally: Tally,
    /// Seconds left before the next board; `Some` only after the round ended
    restart_in: Option<f32>,
}

impl Round {
    pub fn new(config: RoundConfig) -> Self {
        Self {
            board: Board::new(),
            config,
            tally: Tally::default(),
            restart_in: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Whether moves are currently accepted
    pub fn accepting_moves(&self) -> bool {
        self.restart_in.is_none()
    }

    /// Play at a cell and schedule the next round if this one just ended
    pub fn play(&mut self, index: usize) -> PlayOutcome {
        if !self.accepting_moves() {
            return PlayOutcome::Rejected(Rejection::GameOver);
        }

        let outcome = self.board.play(index);
        match outcome {
            PlayOutcome::Applied(status @ Status::Won(player)) => {
                log::info!("Player {} wins", player);
                self.finish(status, self.config.win_delay);
            }
            PlayOutcome::Applied(status @ Status::Tied) => {
                log::info!("Round tied");
                self.finish(status, self.config.tie_delay);
            }
            PlayOutcome::Applied(Status::InProgress) => {}
            PlayOutcome::Rejected(reason) => {
                log::debug!("Move at {} rejected: {:?}", index, reason);
            }
        }
        outcome
    }

    /// Play at the cell under a pointer position. Clicks on grid lines or
    /// outside the board return `None` and change nothing.
    pub fn click(&mut self, grid: &GridGeometry, x: f32, y: f32) -> Option<PlayOutcome> {
        let index = grid.cell_at(x, y)?;
        Some(self.play(index))
    }

    /// Count down the restart pause. Returns true when a new board begins.
    pub fn advance(&mut self, dt: f32) -> bool {
        let Some(remaining) = self.restart_in.as_mut() else {
            return false;
        };

        *remaining -= dt;
        if *remaining > 0.0 {
            return false;
        }

        self.new_game();
        true
    }

    /// Start a fresh board immediately; the tally is kept
    pub fn new_game(&mut self) {
        self.board.reset();
        self.restart_in = None;
    }

    fn finish(&mut self, status: Status, delay: f32) {
        self.tally.record(status);
        self.restart_in = Some(delay);
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new(RoundConfig::default())
    }
}
