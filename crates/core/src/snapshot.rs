use arrayvec::ArrayVec;

use crate::board::{Line, LINE_COUNT};
use crate::types::{Cell, Player, Status, CELL_COUNT, N};

/// Read-only view of a game handed to the renderer each frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Row-major board cells.
    pub board: [Cell; CELL_COUNT],
    pub status: Status,
    pub current_player: Player,
    pub move_count: u32,
    pub episode_id: u32,
    /// Completed lines; non-empty only when a player has won.
    pub winning_lines: ArrayVec<Line, LINE_COUNT>,
}

impl GameSnapshot {
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        if row >= N || col >= N {
            return Cell::Empty;
        }
        self.board[row * N + col]
    }

    /// True if the cell at (row, col) lies on a completed line.
    pub fn on_winning_line(&self, row: usize, col: usize) -> bool {
        self.winning_lines
            .iter()
            .any(|line| line.contains(row, col))
    }

    pub fn is_running(&self) -> bool {
        self.status.is_running()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [Cell::Empty; CELL_COUNT],
            status: Status::Running,
            current_player: Player::X,
            move_count: 0,
            episode_id: 0,
            winning_lines: ArrayVec::new(),
        }
    }
}
