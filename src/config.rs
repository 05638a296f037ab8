//! Runtime configuration from environment variables.
//!
//! Board and surface geometry are fixed constants; only presentation and
//! diagnostics can be tuned. Missing or unparsable values fall back to defaults.

use std::env;
use std::path::PathBuf;

use crate::term::game_view::{MAX_CELL_CHARS, MIN_CELL_CHARS};
use crate::types::TICK_MS;

pub const ENV_LOG_PATH: &str = "TICTACTOE_LOG_PATH";
pub const ENV_CELL_WIDTH: &str = "TICTACTOE_CELL_WIDTH";
pub const ENV_CELL_HEIGHT: &str = "TICTACTOE_CELL_HEIGHT";
pub const ENV_TICK_MS: &str = "TICTACTOE_TICK_MS";

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log file; `None` disables logging (stdout is the game surface).
    pub log_path: Option<PathBuf>,
    /// Terminal columns per board cell.
    pub cell_width: u16,
    /// Terminal rows per board cell.
    pub cell_height: u16,
    /// Input poll interval.
    pub tick_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_path: None,
            cell_width: 12,
            cell_height: 6,
            tick_ms: TICK_MS,
        }
    }
}

impl Config {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let log_path = lookup(ENV_LOG_PATH)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let cell_width = lookup(ENV_CELL_WIDTH)
            .and_then(|s| s.trim().parse::<u16>().ok())
            .map(|v| v.clamp(MIN_CELL_CHARS, MAX_CELL_CHARS))
            .unwrap_or(defaults.cell_width);

        let cell_height = lookup(ENV_CELL_HEIGHT)
            .and_then(|s| s.trim().parse::<u16>().ok())
            .map(|v| v.clamp(MIN_CELL_CHARS, MAX_CELL_CHARS))
            .unwrap_or(defaults.cell_height);

        let tick_ms = lookup(ENV_TICK_MS)
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|&v| v > 0)
            .unwrap_or(defaults.tick_ms);

        Self {
            log_path,
            cell_width,
            cell_height,
            tick_ms,
        }
    }
}
