//! File-backed tracing setup.
//!
//! The terminal belongs to the TUI, so events never go to stdout/stderr.
//! If the log file cannot be opened, logging is simply disabled.
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use bb_base::config::AppConfig;
use bb_base::config::constants::DEFAULT_LOG_FILTER;

/// Parse the configured filter, falling back to the default directive
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global subscriber. Returns the log path when logging is active.
pub fn init(config: &AppConfig) -> Option<PathBuf> {
    let path = config.log_path();
    fs::create_dir_all(path.parent()?).ok()?;
    let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;

    let file_layer = fmt::layer().with_ansi(false).with_target(true).with_writer(Arc::new(file));

    tracing_subscriber::registry().with(build_filter(&config.log_filter)).with(file_layer).try_init().ok()?;

    Some(path)
}
