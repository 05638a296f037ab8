//! Terminal input module (core-facing).
//!
//! This module is intentionally independent of any UI framework. It turns
//! `crossterm` mouse events into the pointer contract the core consumes
//! ([`crate::types::InputSource`]) and maps the few keys the driver cares about.

pub mod map;
pub mod pointer;

pub use tui_tictactoe_types as types;

pub use map::{is_primary_release, should_quit};
pub use pointer::PointerTracker;
