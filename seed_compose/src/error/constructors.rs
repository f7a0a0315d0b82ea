//! Constructors and helpers for `SeedError`.

use std::sync::Arc;

use camino::Utf8Path;

use super::{AggregatedErrors, SeedError};
use crate::model::QualifiedName;

impl SeedError {
    /// Tries to build a [`SeedError`] from an iterator of errors.
    ///
    /// Returns `None` when no errors are supplied, the inner error when a
    /// single uniquely owned [`Arc`] is supplied, and [`Self::Aggregate`]
    /// otherwise.
    #[must_use]
    pub fn try_aggregate<I, E>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Arc<Self>>,
    {
        let mut arcs: Vec<Arc<Self>> = errors.into_iter().map(Into::into).collect();
        if arcs.is_empty() {
            return None;
        }
        Some(if arcs.len() == 1 {
            let last = arcs.pop()?;
            match Arc::try_unwrap(last) {
                Ok(err) => err,
                Err(shared) => Self::Aggregate(Box::new(AggregatedErrors::from(vec![shared]))),
            }
        } else {
            Self::Aggregate(Box::new(AggregatedErrors::from(arcs)))
        })
    }

    /// Construct a validation error for the entity at `path`.
    #[must_use]
    pub fn validation(path: impl Into<String>, message: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::Validation {
            path: path.into(),
            message: message.into(),
        })
    }

    /// Construct a missing-dependency error.
    #[must_use]
    pub fn missing_dependency(
        reference: impl Into<String>,
        dependency: QualifiedName,
        requester: QualifiedName,
    ) -> Arc<Self> {
        Arc::new(Self::MissingDependency {
            reference: reference.into(),
            dependency,
            requester,
        })
    }

    /// Construct a [`SeedError::File`] for a seed document path.
    #[must_use]
    pub fn file(
        path: &Utf8Path,
        err: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Arc<Self> {
        Arc::new(Self::File {
            path: path.to_path_buf(),
            source: err.into(),
        })
    }

    /// Returns the dependency that could not be found, if this error is a
    /// [`SeedError::MissingDependency`].
    #[must_use]
    pub const fn missing_dependency_name(&self) -> Option<&QualifiedName> {
        match self {
            Self::MissingDependency { dependency, .. } => Some(dependency),
            _ => None,
        }
    }
}
