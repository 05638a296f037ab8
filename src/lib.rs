//! Terminal Tic-Tac-Toe (workspace facade crate).
//!
//! The game logic, input mapping and renderer live in dedicated crates under
//! `crates/`; this package re-exports them as
//! `tui_tictactoe::{core,input,term,types}` and carries the runtime
//! configuration used by the binary.

pub mod config;
pub mod logging;

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_input as input;
pub use tui_tictactoe_term as term;
pub use tui_tictactoe_types as types;

pub use config::Config;
