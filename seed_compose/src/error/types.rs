//! Primary error enum for seed composition flows.

use camino::Utf8PathBuf;
use std::sync::Arc;
use thiserror::Error;

use super::aggregate::AggregatedErrors;
use crate::model::QualifiedName;

/// Errors that can occur while composing seeds.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SeedError {
    /// A declared dependency did not resolve in the seed store.
    #[error("seed '{requester}' depends on '{reference}' ({dependency}), which was not found")]
    MissingDependency {
        /// Reference exactly as declared by the requesting seed.
        reference: String,
        /// The reference qualified against the requester's namespace.
        dependency: QualifiedName,
        /// Seed that declared the dependency.
        requester: QualifiedName,
    },

    /// The seed a resolution was asked to start from is not in the store.
    #[error("seed '{name}' not found")]
    SeedNotFound {
        /// Qualified name that was looked up.
        name: QualifiedName,
    },

    /// A specification violated a structural rule.
    #[error("{path}: {message}")]
    Validation {
        /// Path to the offending entity, for example `domain "x", project "y"`.
        path: String,
        /// Human-readable description of the violated rule.
        message: String,
    },

    /// A seed's own specification failed validation during resolution.
    #[error("seed '{seed}' is invalid: {source}")]
    InvalidSeed {
        /// Seed whose specification was rejected.
        seed: QualifiedName,
        /// The underlying validation failure.
        #[source]
        source: Arc<SeedError>,
    },

    /// The external applier reported a failed completion.
    #[error("applier for seed '{seed}' failed (status {status}): {message}")]
    ApplierFailure {
        /// Seed whose consolidated document was being applied.
        seed: QualifiedName,
        /// Exit status reported by the applier, `-1` when unavailable.
        status: i32,
        /// Output captured from the applier.
        message: String,
    },

    /// The external applier could not be started or fed its input.
    #[error("failed to run applier '{program}': {source}")]
    ApplierIo {
        /// Program that was being executed.
        program: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Error originating from a seed document on disk.
    #[error("seed file error in '{path}': {source}")]
    File {
        /// Path that triggered the failure.
        path: Utf8PathBuf,
        /// Underlying error reported while reading or parsing.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Two seed documents declared the same qualified name.
    #[error("seed '{name}' declared again in '{path}'")]
    DuplicateSeed {
        /// Qualified name declared twice.
        name: QualifiedName,
        /// File containing the second declaration.
        path: Utf8PathBuf,
    },

    /// Error while extracting structured values from providers.
    #[error("failed to gather seed values: {0}")]
    Gathering(#[from] Box<figment::Error>),

    /// Failure serialising a consolidated document.
    #[error("failed to serialise consolidated specification: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Multiple errors occurred during a single operation.
    #[error("{count} seed errors:\n{0}", count = .0.len())]
    Aggregate(Box<AggregatedErrors>),
}
