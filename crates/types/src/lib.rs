//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board and Surface Dimensions
//!
//! The game is played on an `N x N` grid drawn onto a fixed virtual pixel
//! surface:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `N` | 3 | Cells per row and per column |
//! | `SCREEN_WIDTH_PX` | 480 | Surface width in virtual pixels |
//! | `SCREEN_HEIGHT_PX` | 480 | Surface height in virtual pixels |
//! | `CELL_WIDTH_PX` | 160 | Width of one board cell |
//! | `CELL_HEIGHT_PX` | 160 | Height of one board cell |
//!
//! Pointer coordinates are always expressed in virtual pixels. The terminal
//! renderer decides how many character cells make up the surface and exposes
//! that decision as a [`ScreenMap`].
//!
//! # Examples
//!
//! ```
//! use tui_tictactoe_types::{Cell, Player, Status, CELL_WIDTH_PX, N};
//!
//! let player = Player::from_str("x").unwrap();
//! assert_eq!(player.other(), Player::O);
//! assert_eq!(Cell::from(player), Cell::PlayerX);
//!
//! assert_eq!(Status::won_by(Player::O), Status::PlayerOWon);
//! assert_eq!(Status::PlayerOWon.winner(), Some(Player::O));
//!
//! assert_eq!(N, 3);
//! assert_eq!(CELL_WIDTH_PX, 160);
//! ```

use std::fmt;

/// Cells per row and per column.
pub const N: usize = 3;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = N * N;

/// Virtual surface width in pixels.
pub const SCREEN_WIDTH_PX: i32 = 480;

/// Virtual surface height in pixels.
pub const SCREEN_HEIGHT_PX: i32 = 480;

/// Width of one board cell in virtual pixels.
pub const CELL_WIDTH_PX: i32 = SCREEN_WIDTH_PX / N as i32;

/// Height of one board cell in virtual pixels.
pub const CELL_HEIGHT_PX: i32 = SCREEN_HEIGHT_PX / N as i32;

/// Input poll interval in milliseconds (16ms ≈ 60 FPS).
pub const TICK_MS: u32 = 16;

/// Title shown in the terminal title bar.
pub const WINDOW_TITLE: &str = "Tic Tac Toe game";


/// The two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The opponent of this player.
    pub fn other(&self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Parse a player from its mark (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_tictactoe_types::Player;
    ///
    /// assert_eq!(Player::from_str("X"), Some(Player::X));
    /// assert_eq!(Player::from_str("o"), Some(Player::O));
    /// assert_eq!(Player::from_str("z"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "x" => Some(Player::X),
            "o" => Some(Player::O),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A cell on the game board
///
/// Board cells only ever hold one of these three values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    PlayerX,
    PlayerO,
}

impl Cell {
    /// The player whose mark occupies this cell, if any.
    pub fn player(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerX => Some(Player::X),
            Cell::PlayerO => Some(Player::O),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::PlayerX,
            Player::O => Cell::PlayerO,
        }
    }
}

/// Phase/outcome of a game
///
/// - **Running**: moves are accepted
/// - **PlayerXWon** / **PlayerOWon**: a line was completed (terminal)
/// - **Tie**: the board filled up with no line completed (terminal)
///
/// The only way out of a terminal status is a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Running,
    PlayerXWon,
    PlayerOWon,
    Tie,
}

impl Status {
    /// The winning status for `player`.
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::X => Status::PlayerXWon,
            Player::O => Status::PlayerOWon,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, Status::Running)
    }

    /// True once the game is decided (win or tie).
    pub fn is_terminal(&self) -> bool {
        !self.is_running()
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            Status::PlayerXWon => Some(Player::X),
            Status::PlayerOWon => Some(Player::O),
            Status::Running | Status::Tie => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Running => "running",
            Status::PlayerXWon => "playerXWon",
            Status::PlayerOWon => "playerOWon",
            Status::Tie => "tie",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pointer position in virtual surface pixels.
///
/// Signed so that positions left of or above the surface stay representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelPos {
    pub x: i32,
    pub y: i32,
}

impl PixelPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Placement of the virtual surface on the terminal grid.
///
/// Produced by the renderer, consumed by input handling, so both sides agree on
/// which terminal character cell corresponds to which virtual pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenMap {
    pub origin_x: u16,
    pub origin_y: u16,
    /// Surface width in terminal columns.
    pub width: u16,
    /// Surface height in terminal rows.
    pub height: u16,
}

impl ScreenMap {
    pub const fn new(origin_x: u16, origin_y: u16, width: u16, height: u16) -> Self {
        Self {
            origin_x,
            origin_y,
            width,
            height,
        }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.origin_x
            && row >= self.origin_y
            && column - self.origin_x < self.width
            && row - self.origin_y < self.height
    }

    /// Map the centre of a terminal cell to virtual pixels.
    ///
    /// Cells outside the surface map outside `[0, SCREEN_*_PX)`. An empty map
    /// sends every position to `(-1, -1)`.
    pub fn to_pixel(&self, column: u16, row: u16) -> PixelPos {
        if self.width == 0 || self.height == 0 {
            return PixelPos::new(-1, -1);
        }
        PixelPos::new(
            scale_axis(column, self.origin_x, self.width, SCREEN_WIDTH_PX),
            scale_axis(row, self.origin_y, self.height, SCREEN_HEIGHT_PX),
        )
    }
}

fn scale_axis(pos: u16, origin: u16, span: u16, surface_px: i32) -> i32 {
    let offset = pos as i32 - origin as i32;
    let span = span as i32;
    // Centre of the character cell; div_euclid keeps negative offsets negative.
    ((2 * offset + 1) * surface_px).div_euclid(2 * span)
}

/// A source of pointer input polled once per tick.
///
/// `just_released` reports whether the primary button was released since the
/// previous call and consumes that edge.
pub trait InputSource {
    fn just_released(&mut self) -> bool;

    fn cursor_position(&self) -> PixelPos;
}
