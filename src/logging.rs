//! Logger setup
//!
//! `log` facade backed by `env_logger`. The TUI owns the terminal, so in that
//! mode records either go to a file or are dropped.

use anyhow::{Context, Result};
use log::LevelFilter;
use std::env;
use std::fs::File;
use std::path::Path;

/// Map `-v` occurrences to a level filter
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialize logging
///
/// - `verbosity`: number of `-v` flags
/// - `log_file`: write records there instead of stderr
/// - `terminal_owned`: the TUI is running; without a log file nothing is logged
///
/// `RUST_LOG` overrides the level when set.
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub fn init_logger(verbosity: u8, log_file: Option<&Path>, terminal_owned: bool) -> Result<()> {
    if terminal_owned && log_file.is_none() {
        return Ok(());
    }

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for(verbosity))
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        builder
            .target(env_logger::Target::Pipe(Box::new(file)))
            .format_timestamp_millis();
    }

    // A logger may already be installed (e.g. by tests); keep the first one
    if builder.try_init().is_ok() {
        log::debug!("logger initialized at {:?}", level_for(verbosity));
    }

    Ok(())
}
