//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids widget/layout libraries and instead renders into a
//! simple framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Paint a read-only snapshot, never mutate game state
//! - Own the terminal-to-surface geometry so input and drawing agree

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{grid_color, player_color, status_text, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
