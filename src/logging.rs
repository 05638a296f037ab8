//! File-backed tracing setup.
//!
//! The terminal is the game surface, so log lines go to a file. `RUST_LOG`
//! selects the filter, defaulting to `info`.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber writing to `path`.
///
/// Returns `Ok(false)` if a subscriber was already installed.
pub fn init(path: &Path) -> Result<bool> {
    let log_file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .is_ok();

    Ok(installed)
}
