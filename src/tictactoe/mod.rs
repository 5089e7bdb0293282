//! Tic-tac-toe rules and round flow
//!
//! Win and tie are queryable status values; rejected moves are returned, not
//! raised, since misclicks on taken cells are routine.

pub mod board;
pub mod grid;
pub mod round;

pub use board::{Board, CELLS, PlayOutcome, Player, Rejection, Status, status_of};
pub use grid::GridGeometry;
pub use round::{Round, RoundConfig, Tally};
