//! Diagnostic logging setup.
//!
//! Logs go to stderr so they never mix with results on stdout. The level
//! comes only from the `--verbose` count.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Map a `-v` count to a `tracing` level name.
fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global `tracing` subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(verbosity: u8) -> Result<()> {
    let filter = EnvFilter::new(format!("jwt_lens={}", level_for(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialise logging: {e}"))
}
