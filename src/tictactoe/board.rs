//! Tic-tac-toe rules engine

use std::fmt;

use serde::{Deserialize, Serialize};

/// Board cells, row-major from the bottom-left corner.
/// ```text
/// 6 | 7 | 8
/// ---------
/// 3 | 4 | 5
/// ---------
/// 0 | 1 | 2
/// ```
pub const CELLS: usize = 9;

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Moves first, plays X
    One,
    /// Plays O
    Two,
}

impl Player {
    pub fn opposite(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    InProgress,
    Won(Player),
    Tied,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::InProgress)
    }
}

/// Why a move was not applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// Cell already holds a mark
    Occupied,
    /// Game already won or tied
    GameOver,
    /// Index outside 0..9
    OutOfBounds,
}

/// Result of [`Board::play`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayOutcome {
    /// Mark placed; carries the status after the move
    Applied(Status),
    /// Nothing changed
    Rejected(Rejection),
}

impl PlayOutcome {
    pub fn is_applied(self) -> bool {
        matches!(self, PlayOutcome::Applied(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Player>; CELLS],
    turn: Player,
    last_turn: Player,
    status: Status,
}

impl Board {
    /// Empty board, player one to move
    pub fn new() -> Self {
        Self {
            cells: [None; CELLS],
            turn: Player::One,
            last_turn: Player::Two,
            status: Status::InProgress,
        }
    }

    /// Board from an arbitrary position, or `None` if the position cannot
    /// arise from alternating play: player one must have the same number of
    /// marks as player two or one more, at most one player may own a line,
    /// and that player must be the one who moved last.
    ///
    /// Whose turn it is follows from the mark counts.
    pub fn from_cells(cells: [Option<Player>; CELLS]) -> Option<Self> {
        let ones = cells.iter().filter(|c| **c == Some(Player::One)).count();
        let twos = cells.iter().filter(|c| **c == Some(Player::Two)).count();
        let last_turn = match ones.checked_sub(twos) {
            Some(0) => Player::Two,
            Some(1) => Player::One,
            _ => return None,
        };

        let mut owners = LINES.iter().filter_map(|&line| line_owner(&cells, line));
        if let Some(winner) = owners.next() {
            if winner != last_turn || owners.any(|other| other != winner) {
                return None;
            }
        }

        Some(Self {
            cells,
            turn: last_turn.opposite(),
            last_turn,
            status: status_of(&cells),
        })
    }

    /// Place the current player's mark at `index`
    pub fn play(&mut self, index: usize) -> PlayOutcome {
        if index >= CELLS {
            return PlayOutcome::Rejected(Rejection::OutOfBounds);
        }
        if self.status.is_terminal() {
            return PlayOutcome::Rejected(Rejection::GameOver);
        }
        if self.cells[index].is_some() {
            return PlayOutcome::Rejected(Rejection::Occupied);
        }

        self.cells[index] = Some(self.turn);
        std::mem::swap(&mut self.turn, &mut self.last_turn);
        self.status = self.evaluate_termination();

        PlayOutcome::Applied(self.status)
    }

    /// Status implied by the marks on the board. A full board with a line is
    /// a win, not a tie.
    pub fn evaluate_termination(&self) -> Status {
        status_of(&self.cells)
    }

    /// The first completed line, if any
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        LINES
            .into_iter()
            .find(|&line| line_owner(&self.cells, line).is_some())
    }

    /// Start over with an empty board
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn cell(&self, index: usize) -> Option<Player> {
        self.cells.get(index).copied().flatten()
    }

    pub fn cells(&self) -> &[Option<Player>; CELLS] {
        &self.cells
    }

    /// Player to move next
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Player who moved last
    pub fn last_turn(&self) -> Player {
        self.last_turn
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_winner(&self) -> bool {
        matches!(self.status, Status::Won(_))
    }

    pub fn is_tie(&self) -> bool {
        self.status == Status::Tied
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Indices of all empty cells
    pub fn open_cells(&self) -> impl Iterator<Item = usize> + '_ {
        (0..CELLS).filter(|&i| self.cells[i].is_none())
    }
}

/// Player holding all three cells of `line`
fn line_owner(cells: &[Option<Player>; CELLS], [a, b, c]: [usize; 3]) -> Option<Player> {
    let owner = cells[a]?;
    (cells[b] == Some(owner) && cells[c] == Some(owner)).then_some(owner)
}

/// Status of any arrangement of marks; the winner is the owner of the first
/// completed line
pub fn status_of(cells: &[Option<Player>; CELLS]) -> Status {
    if let Some(winner) = LINES.iter().find_map(|&line| line_owner(cells, line)) {
        Status::Won(winner)
    } else if cells.iter().all(Option::is_some) {
        Status::Tied
    } else {
        Status::InProgress
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Top row first so the layout matches the screen
        for row in (0..3).rev() {
            if row < 2 {
                writeln!(f, "-----------")?;
            }
            for col in 0..3 {
                if col > 0 {
                    write!(f, "|")?;
                }
                match self.cells[row * 3 + col] {
                    Some(player) => write!(f, " {} ", player)?,
                    None => write!(f, "   ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Option<Player> = Some(Player::One);
    const O: Option<Player> = Some(Player::Two);
    const E: Option<Player> = None;

    #[test]
    fn test_initial_board() {
        let board = Board::new();
        assert_eq!(board.turn(), Player::One);
        assert_eq!(board.last_turn(), Player::Two);
        assert_eq!(board.status(), Status::InProgress);
        assert_eq!(board.open_cells().count(), 9);
    }

    #[test]
    fn test_play_alternates_turns() {
        let mut board = Board::new();

        assert_eq!(board.play(4), PlayOutcome::Applied(Status::InProgress));
        assert_eq!(board.cell(4), Some(Player::One));
        assert_eq!(board.turn(), Player::Two);
        assert_eq!(board.last_turn(), Player::One);

        board.play(0);
        assert_eq!(board.cell(0), Some(Player::Two));
        assert_eq!(board.turn(), Player::One);
    }

    #[test]
    fn test_row_win_detected() {
        assert_eq!(
            status_of(&[X, X, X, E, E, E, E, E, E]),
            Status::Won(Player::One)
        );

        let board = Board::from_cells([X, X, X, O, O, E, E, E, E]).unwrap();
        assert_eq!(board.evaluate_termination(), Status::Won(Player::One));
        assert_eq!(board.winning_line(), Some([0, 1, 2]));
    }

    #[test]
    fn test_winner_is_line_owner() {
        assert_eq!(
            status_of(&[O, O, O, X, X, X, X, E, E]),
            Status::Won(Player::Two)
        );
        assert_eq!(
            status_of(&[X, O, E, X, O, E, E, O, X]),
            Status::Won(Player::Two)
        );
    }

    #[test]
    fn test_from_cells_rejects_impossible_positions() {
        // Count difference outside 0..=1
        assert_eq!(Board::from_cells([X, X, X, X, E, E, E, E, E]), None);
        assert_eq!(Board::from_cells([O, E, E, E, E, E, E, E, E]), None);
        // Both players own a line
        assert_eq!(Board::from_cells([O, O, O, X, X, X, X, E, E]), None);
        // Winner did not make the last move
        assert_eq!(Board::from_cells([X, X, X, O, O, O, E, E, E]), None);
        assert_eq!(Board::from_cells([O, O, O, X, X, E, X, X, E]), None);
    }

    #[test]
    fn test_from_cells_player_two_win() {
        let board = Board::from_cells([O, O, O, X, X, E, X, E, E]).unwrap();
        assert_eq!(board.status(), Status::Won(Player::Two));
        assert_eq!(board.last_turn(), Player::Two);
        assert_eq!(board.winning_line(), Some([0, 1, 2]));
    }

    #[test]
    fn test_win_by_play() {
        let mut board = Board::new();
        for cell in [0, 3, 1, 4] {
            board.play(cell);
        }

        assert_eq!(board.play(2), PlayOutcome::Applied(Status::Won(Player::One)));
        assert!(board.is_winner());
        assert!(!board.is_tie());
    }

    #[test]
    fn test_player_two_wins_diagonal() {
        let mut board = Board::new();
        for cell in [0, 2, 1, 4, 3] {
            board.play(cell);
        }

        assert_eq!(board.play(6), PlayOutcome::Applied(Status::Won(Player::Two)));
        assert_eq!(board.winning_line(), Some([2, 4, 6]));
    }

    #[test]
    fn test_full_board_without_line_is_tie() {
        // O X X
        // X O O
        // X O X
        let mut board = Board::new();
        for cell in [0, 1, 2, 4, 3, 5, 7, 6] {
            assert!(board.play(cell).is_applied());
        }

        assert_eq!(board.play(8), PlayOutcome::Applied(Status::Tied));
        assert!(board.is_tie());
        assert!(!board.is_winner());
    }

    #[test]
    fn test_full_board_with_line_is_win() {
        let board = Board::from_cells([X, O, X, O, X, O, O, X, X]).unwrap();
        assert_eq!(board.status(), Status::Won(Player::One));
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut board = Board::new();
        board.play(4);
        let before = board.clone();

        assert_eq!(board.play(4), PlayOutcome::Rejected(Rejection::Occupied));
        assert_eq!(board, before);
        assert_eq!(board.turn(), Player::Two);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut board = Board::new();
        assert_eq!(board.play(9), PlayOutcome::Rejected(Rejection::OutOfBounds));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_terminal_lock_until_reset() {
        let mut board = Board::from_cells([X, X, X, O, O, E, E, E, E]).unwrap();
        assert!(board.is_terminal());
        assert_eq!(board.play(5), PlayOutcome::Rejected(Rejection::GameOver));
        assert_eq!(board.cell(5), None);

        let mut tied = Board::from_cells([X, O, X, X, X, O, O, X, O]).unwrap();
        assert_eq!(tied.status(), Status::Tied);
        assert_eq!(tied.play(0), PlayOutcome::Rejected(Rejection::GameOver));

        board.reset();
        assert_eq!(board, Board::new());
        assert!(board.play(5).is_applied());
    }

    #[test]
    fn test_from_cells_infers_turn() {
        let board = Board::from_cells([X, E, E, E, O, E, E, E, X]).unwrap();
        assert_eq!(board.turn(), Player::Two);
        assert_eq!(board.last_turn(), Player::One);

        let board = Board::from_cells([X, E, E, E, O, E, E, E, E]).unwrap();
        assert_eq!(board.turn(), Player::One);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.play(0);
        board.play(8);

        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "   |   | O ");
        assert_eq!(lines[4], " X |   |   ");
    }
}
