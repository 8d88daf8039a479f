//! File logging for the terminal UI.
//!
//! The terminal is owned by the UI, so log records go to a file through a
//! `fern` dispatch. When logging is disabled no logger is installed and the
//! `log` macros compile down to cheap no-ops.

use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Location of the log file: `<data_local_dir>/todomvc/todomvc.log`
pub fn get_log_file_path() -> Result<PathBuf> {
    let dir = dirs::data_local_dir()
        .context("Could not determine local data directory")?
        .join(APP_DIR_NAME);
    Ok(dir.join(LOG_FILE_NAME))
}

/// Build the dispatch for `config` without installing it.
///
/// Returns `None` when logging is disabled.
pub fn build_dispatch(config: &LoggingConfig, path: &std::path::Path) -> Result<Option<fern::Dispatch>> {
    if !config.enabled {
        return Ok(None);
    }

    let level = config
        .level_filter()
        .with_context(|| format!("Invalid logging level '{}'", config.level))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {:<5} {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(file);

    Ok(Some(dispatch))
}

/// Install the global logger described by `config`.
///
/// Returns the log file path when a logger was installed.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    let path = get_log_file_path()?;
    match build_dispatch(config, &path)? {
        Some(dispatch) => {
            dispatch.apply().context("Logger already initialised")?;
            log::info!("logging to {}", path.display());
            Ok(Some(path))
        }
        None => Ok(None),
    }
}
