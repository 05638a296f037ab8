//! Win/tie evaluation.
//!
//! Everything here is a pure function of a board snapshot. The game state
//! calls [`evaluate_outcome`] right after each accepted move; the renderer uses
//! [`winning_lines`] to emphasize the marks that decided the game.

use arrayvec::ArrayVec;

use crate::board::{Board, Line, LINE_COUNT};
use crate::types::{Player, Status};

/// The player owning every cell of `line`, if one does.
pub fn line_winner(board: &Board, line: Line) -> Option<Player> {
    let cells = board.line(line);
    let first = cells[0].player()?;
    cells
        .iter()
        .all(|cell| cell.player() == Some(first))
        .then_some(first)
}

/// Every completed line on the board, in evaluation order.
pub fn winning_lines(board: &Board) -> ArrayVec<Line, LINE_COUNT> {
    Line::all()
        .into_iter()
        .filter(|&line| line_winner(board, line).is_some())
        .collect()
}

/// Decide the status of a board.
///
/// Rows, then columns, then both diagonals are checked for a player owning the
/// whole line. With no line completed, a full board is a tie; otherwise the
/// game is still running. Only the mover's mark changes per move, so at most
/// one player can own lines at a time.
pub fn evaluate_outcome(board: &Board) -> Status {
    if let Some(winner) = Line::all()
        .into_iter()
        .find_map(|line| line_winner(board, line))
    {
        return Status::won_by(winner);
    }

    if board.is_full() {
        Status::Tie
    } else {
        Status::Running
    }
}
