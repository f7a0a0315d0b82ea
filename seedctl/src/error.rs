//! Error types for `seedctl`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use seed_compose::SeedError;
use thiserror::Error;

/// Errors surfaced by `seedctl`.
#[derive(Debug, Error)]
pub enum SeedctlError {
    /// Settings could not be extracted from the configured layers.
    #[error("invalid configuration: {0}")]
    Config(#[from] Box<figment::Error>),

    /// An explicitly requested configuration file does not exist.
    #[error("configuration file {0} not found")]
    ConfigNotFound(Utf8PathBuf),

    /// `apply` was requested without an applier program.
    #[error("no applier configured; set applier.program or SEEDCTL_APPLIER__PROGRAM")]
    NoApplier,

    /// Seed loading, resolution or application failed.
    #[error(transparent)]
    Seed(#[from] Arc<SeedError>),

    /// Writing output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// The log subscriber could not be installed.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

impl From<figment::Error> for SeedctlError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}
