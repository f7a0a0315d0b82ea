//! Log subscriber setup.
//!
//! Logs go to stderr so stdout carries only command output.

use std::io::Write;

use tracing_subscriber::EnvFilter;

use crate::SeedctlError;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "SEEDCTL_LOG";

/// Filter used when [`LOG_ENV`] is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Build the filter from [`LOG_ENV`], falling back to [`DEFAULT_FILTER`].
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns [`SeedctlError::Logging`] when a subscriber is already installed.
pub fn init_logging() -> Result<(), SeedctlError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| SeedctlError::Logging(err.to_string()))
}

/// Write `err` to `out` for failures that happen before a subscriber is
/// installed, when `tracing` macros would go nowhere.
///
/// # Errors
///
/// Returns the error from writing to `out`.
pub fn report_unlogged<W: Write>(err: &SeedctlError, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "seedctl: {err}")
}
