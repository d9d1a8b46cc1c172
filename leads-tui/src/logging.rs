//! Tracing setup. Output goes to a file because the terminal belongs to
//! the UI while the dashboard runs.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::DashboardConfig;

/// Build the filter: `RUST_LOG` wins, otherwise the configured level for
/// this crate and the binary.
pub fn filter_for(config: &DashboardConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    let level = config.log_level.to_ascii_lowercase();
    EnvFilter::try_new(format!("leads_tui={level},leads_dashboard={level}"))
        .with_context(|| format!("build log filter for level '{level}'"))
}

/// Install the global subscriber, appending to the configured log file.
pub fn init(config: &DashboardConfig) -> Result<()> {
    if let Some(parent) = config.log_file.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .with_context(|| format!("open log file {}", config.log_file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter_for(config)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("install tracing subscriber: {e}"))
}
