//! Diagnostic logging to stderr.
//!
//! Stdout is reserved for the `Replacing ...` lines, so every tracing event
//! goes to stderr.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a full `EnvFilter` directive.
pub const LOG_ENV: &str = "SYSROOT_RELINK_LOG";

/// Filter used when `LOG_ENV` is unset.
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Install the global tracing subscriber.
///
/// Set `SYSROOT_RELINK_LOG=debug` to see every skipped link.
pub fn init_logging() -> Result<()> {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {e}"))
}
