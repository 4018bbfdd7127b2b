//! Logging setup
//!
//! Uses the `log` facade with `env_logger`. `RUST_LOG` picks the level. The
//! TUI owns the terminal, so interactive modes either log to a file or not
//! at all.

use env_logger::{Builder, Env, Target};
use std::fs::File;
use std::path::Path;

/// Where log records should go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink<'a> {
    /// Standard error, for non-interactive commands
    Stderr,
    /// Append to a file
    File(&'a Path),
    /// Drop everything
    Disabled,
}

impl<'a> LogSink<'a> {
    /// Choose a sink from the `--log-file` option and the command kind
    #[must_use]
    pub const fn select(log_file: Option<&'a Path>, interactive: bool) -> Self {
        match (log_file, interactive) {
            (Some(path), _) => Self::File(path),
            (None, true) => Self::Disabled,
            (None, false) => Self::Stderr,
        }
    }
}

/// Install the global logger
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub fn init(sink: LogSink<'_>) -> std::io::Result<()> {
    let default_level = match sink {
        LogSink::File(_) => "info",
        LogSink::Stderr | LogSink::Disabled => "warn",
    };
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_level));

    match sink {
        LogSink::Stderr => {
            builder.target(Target::Stderr);
        }
        LogSink::File(path) => {
            let file = File::options().create(true).append(true).open(path)?;
            builder.target(Target::Pipe(Box::new(file)));
        }
        LogSink::Disabled => return Ok(()),
    }

    // A second init (e.g. from tests) keeps the first logger
    let _ = builder.try_init();
    Ok(())
}
