//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the whole Tic-Tac-Toe rule set: the board, the
//! win/tie evaluator and the click-driven state machine. It has **zero
//! dependencies** on rendering, input devices or I/O, making it:
//!
//! - **Deterministic**: the same clicks always produce the same game
//! - **Testable**: every rule is exercised without a terminal
//! - **Portable**: any renderer can paint a [`GameSnapshot`]
//!
//! # Module Structure
//!
//! - [`board`]: N x N board with row-major storage and line enumeration
//! - [`outcome`]: pure win/tie evaluation over a board
//! - [`game_state`]: current player, status, click handling and reset
//! - [`snapshot`]: read-only view handed to the renderer
//!
//! # State Machine
//!
//! ```text
//! Running --move completes a line--> PlayerXWon | PlayerOWon
//! Running --move fills the board---> Tie
//! PlayerXWon | PlayerOWon | Tie --any click--> Running (reset)
//! ```
//!
//! # Example
//!
//! ```
//! use tui_tictactoe_core::{ClickOutcome, GameState};
//! use tui_tictactoe_types::{Player, Status};
//!
//! let mut game = GameState::new();
//!
//! // Click the centre of the top-left cell.
//! let outcome = game.apply_click(80, 80);
//! assert!(matches!(outcome, ClickOutcome::Placed { row: 0, col: 0, .. }));
//! assert_eq!(game.current_player(), Player::O);
//!
//! // Clicking the same cell again changes nothing.
//! assert_eq!(game.apply_click(10, 10), ClickOutcome::Occupied);
//! assert_eq!(game.status(), Status::Running);
//! ```

pub mod board;
pub mod game_state;
pub mod outcome;
pub mod snapshot;

pub use tui_tictactoe_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Line, LINE_COUNT};
pub use game_state::{pixel_to_cell, ClickOutcome, GameState};
pub use outcome::{evaluate_outcome, line_winner, winning_lines};
pub use snapshot::GameSnapshot;
