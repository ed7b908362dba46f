//! Log setup.
//!
//! The terminal belongs to the game while it runs, so logs only ever go to a
//! file, and only when one is requested.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Install a global subscriber writing plain-text logs to `path`.
pub fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("failed to install log subscriber")
}
