//! Game state module - manages the complete game state
//!
//! This module ties the board and the outcome evaluator together. It handles
//! click translation, move validation, turn switching and the reset that
//! follows a decided game.

use crate::board::Board;
use crate::outcome::{evaluate_outcome, winning_lines};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// What a click did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A mark was placed; `status` is the evaluation right after the move.
    Placed {
        row: usize,
        col: usize,
        player: Player,
        status: Status,
    },
    /// The target cell was already marked; nothing changed.
    Occupied,
    /// The click landed outside the surface; nothing changed.
    OutOfBounds,
    /// The game was decided, so the click started a new one.
    Reset,
}

/// Translate a surface pixel position into (row, col).
///
/// Uses integer division by the cell size. Positions off the surface map to
/// `None`.
pub fn pixel_to_cell(pos: PixelPos) -> Option<(usize, usize)> {
    if pos.x < 0 || pos.y < 0 || pos.x >= SCREEN_WIDTH_PX || pos.y >= SCREEN_HEIGHT_PX {
        return None;
    }
    let row = (pos.y / CELL_HEIGHT_PX) as usize;
    let col = (pos.x / CELL_WIDTH_PX) as usize;
    (row < N && col < N).then_some((row, col))
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: Status,
    /// Accepted moves in the current game.
    move_count: u32,
    /// Monotonic game id (increments on reset).
    episode_id: u32,
}

impl GameState {
    /// Create a game ready for X's first move
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: Status::Running,
            move_count: 0,
            episode_id: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move. Only meaningful while the game is running.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Return to the initial configuration: empty board, X to move, running.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = Player::X;
        self.status = Status::Running;
        self.move_count = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
    }

    /// Apply a pointer release at surface pixel (x, y).
    ///
    /// While the game is decided any click resets it and places nothing.
    /// Otherwise the click is translated to a cell and played as a move.
    pub fn apply_click(&mut self, x: i32, y: i32) -> ClickOutcome {
        self.apply_click_at(PixelPos::new(x, y))
    }

    pub fn apply_click_at(&mut self, pos: PixelPos) -> ClickOutcome {
        if self.status.is_terminal() {
            self.reset();
            return ClickOutcome::Reset;
        }

        match pixel_to_cell(pos) {
            Some((row, col)) => self.apply_move(row, col),
            None => ClickOutcome::OutOfBounds,
        }
    }

    /// Play the current player's mark at (row, col).
    ///
    /// Occupied and out-of-range cells leave the state untouched. After an
    /// accepted move the board is evaluated once; the turn passes to the other
    /// player only if the game is still running.
    pub fn apply_move(&mut self, row: usize, col: usize) -> ClickOutcome {
        if self.status.is_terminal() {
            self.reset();
            return ClickOutcome::Reset;
        }

        let player = self.current_player;
        if Board::index(row, col).is_none() {
            return ClickOutcome::OutOfBounds;
        }
        if !self.board.is_empty_at(row, col) {
            return ClickOutcome::Occupied;
        }

        let placed = self.board.place(row, col, player);
        debug_assert!(placed);
        self.move_count += 1;

        self.status = evaluate_outcome(&self.board);
        if self.status.is_running() {
            self.current_player = player.other();
        }

        ClickOutcome::Placed {
            row,
            col,
            player,
            status: self.status,
        }
    }

    /// Consume one tick of pointer input.
    ///
    /// Returns `None` when the button was not released since the last tick.
    pub fn update<I: InputSource>(&mut self, input: &mut I) -> Option<ClickOutcome> {
        if !input.just_released() {
            return None;
        }
        Some(self.apply_click_at(input.cursor_position()))
    }

    /// Write a read-only view of the game into `out`, reusing its storage.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = *self.board.cells();
        out.status = self.status;
        out.current_player = self.current_player;
        out.move_count = self.move_count;
        out.episode_id = self.episode_id;
        out.winning_lines.clear();
        if self.status.winner().is_some() {
            out.winning_lines = winning_lines(&self.board);
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
