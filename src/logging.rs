use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{Config, DEFAULT_LOG_FILTER};

/// Install the global subscriber. Output only ever goes to a file: the
/// terminal belongs to the game board while it runs.
pub fn init_tracing(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let Some(path) = config.log_file.as_deref() else {
        tracing_subscriber::registry().with(env_filter).init();
        return;
    };

    match open_log_file(path) {
        Ok(file) => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(env_filter)
                .init();
            tracing::info!(path = %path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::registry().with(env_filter).init();
            tracing::warn!(path = %path.display(), error = %e, "failed to open log file");
        }
    }
}

fn open_log_file(path: &Path) -> std::io::Result<fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
