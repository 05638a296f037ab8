//! Board module - manages the game grid
//!
//! The board is an N x N grid where each cell is empty or holds one player's mark.
//! Uses a flat array in row-major order (index = row * N + col).
//! Coordinates: (row, col) where row ranges 0..N (top to bottom), col ranges 0..N (left to right)

use crate::types::{Cell, Player, CELL_COUNT, N};

/// A straight line of N cells that wins the game when filled by one player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    Row(usize),
    Column(usize),
    /// (0, 0) to (N-1, N-1)
    MainDiagonal,
    /// (0, N-1) to (N-1, 0)
    AntiDiagonal,
}

/// Number of distinct lines on the board (rows, columns, two diagonals)
pub const LINE_COUNT: usize = 2 * N + 2;

impl Line {
    /// All lines in evaluation order: rows, then columns, then diagonals
    pub fn all() -> [Line; LINE_COUNT] {
        std::array::from_fn(|i| match i {
            i if i < N => Line::Row(i),
            i if i < 2 * N => Line::Column(i - N),
            i if i == 2 * N => Line::MainDiagonal,
            _ => Line::AntiDiagonal,
        })
    }

    /// Coordinates (row, col) of the cells on this line
    pub fn cells(&self) -> [(usize, usize); N] {
        match *self {
            Line::Row(r) => std::array::from_fn(|c| (r, c)),
            Line::Column(c) => std::array::from_fn(|r| (r, c)),
            Line::MainDiagonal => std::array::from_fn(|i| (i, i)),
            Line::AntiDiagonal => std::array::from_fn(|i| (i, N - 1 - i)),
        }
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells().contains(&(row, col))
    }
}

/// The game board - N x N cells using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Create from a flat row-major array
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    pub fn index(row: usize, col: usize) -> Option<usize> {
        if row >= N || col >= N {
            return None;
        }
        Some(row * N + col)
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Put `player`'s mark on an empty cell
    ///
    /// Returns false, leaving the board untouched, if the cell is out of bounds
    /// or already marked. A marked cell only changes through [`Board::clear`].
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> bool {
        match Self::index(row, col) {
            Some(idx) if self.cells[idx].is_empty() => {
                self.cells[idx] = Cell::from(player);
                true
            }
            _ => false,
        }
    }

    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// The N cells along `line`
    pub fn line(&self, line: Line) -> [Cell; N] {
        line.cells().map(|(r, c)| self.cells[r * N + c])
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
