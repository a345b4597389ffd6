//! Log subscriber setup for the command-line tool
//!
//! `RUST_LOG` takes precedence; otherwise the level follows `--quiet` and the
//! number of `-v` flags. Output goes to stderr so placements on stdout stay
//! machine readable.

use crate::io::error::{CliffError, Result};
use tracing_subscriber::EnvFilter;

/// Filter directive for the requested verbosity
pub const fn level_for(verbosity: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global log subscriber
///
/// # Errors
///
/// Returns [`CliffError::Logging`] if a global subscriber is already set
pub fn init_logging(verbosity: u8, quiet: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity, quiet)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| CliffError::Logging {
            reason: e.to_string(),
        })
}
