//! Logger setup shared by both binaries.
//!
//! `RUST_LOG` overrides the default `warn` level. The game owns the terminal
//! while it runs, so it can send records to a file instead of stderr.

use crate::error::{Error, Result};
use std::fs::OpenOptions;
use std::path::Path;

pub const DEFAULT_LEVEL: log::LevelFilter = log::LevelFilter::Warn;

/// Initialise `env_logger`, writing to `log_file` when given.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(DEFAULT_LEVEL).parse_default_env();

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| Error::Logging(format!("{}: {}", path.display(), e)))?;
        builder
            .target(env_logger::Target::Pipe(Box::new(file)))
            .write_style(env_logger::WriteStyle::Never);
    }

    builder.try_init().map_err(|e| Error::Logging(e.to_string()))
}
