//! Several `SeedError` values reported by one operation, grouped for display
//! by the file or seed they concern.

use std::{fmt, sync::Arc};

use camino::Utf8Path;

use super::SeedError;
use crate::model::QualifiedName;

/// Failures gathered while loading a seed directory or validating every seed
/// in it.
///
/// Display groups the failures under the seed file or seed they concern, in
/// the order each subject was first reported:
///
/// ```
/// use seed_compose::{QualifiedName, SeedError};
///
/// let err = SeedError::try_aggregate([
///     SeedError::InvalidSeed {
///         seed: QualifiedName::new("ops", "app"),
///         source: SeedError::validation("specification", "role with empty name"),
///     },
///     SeedError::SeedNotFound { name: QualifiedName::new("ops", "base") },
/// ]);
/// if let Some(SeedError::Aggregate(errors)) = err {
///     assert_eq!(errors.len(), 2);
///     assert!(errors.to_string().starts_with(
///         "seed 'ops/app':\n  - specification: role with empty name\n"
///     ));
/// }
/// ```
#[derive(Debug, Default)]
pub struct AggregatedErrors {
    errors: Vec<Arc<SeedError>>,
}

impl AggregatedErrors {
    /// The gathered errors in the order they were reported.
    #[must_use]
    pub const fn errors(&self) -> &[Arc<SeedError>] {
        self.errors.as_slice()
    }

    /// Number of gathered errors.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether nothing was gathered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors grouped by subject, subjects in first-reported order.
    fn grouped(&self) -> Vec<(Subject<'_>, Vec<&SeedError>)> {
        let mut groups: Vec<(Subject<'_>, Vec<&SeedError>)> = Vec::new();
        for err in &self.errors {
            let subject = Subject::of(err.as_ref());
            if let Some((_, members)) = groups.iter_mut().find(|(s, _)| *s == subject) {
                members.push(err.as_ref());
                continue;
            }
            groups.push((subject, vec![err.as_ref()]));
        }
        groups
    }
}

impl From<Vec<Arc<SeedError>>> for AggregatedErrors {
    fn from(errors: Vec<Arc<SeedError>>) -> Self {
        Self { errors }
    }
}

impl fmt::Display for AggregatedErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (subject, members) in self.grouped() {
            if !first {
                writeln!(f)?;
            }
            first = false;
            let indent = match subject {
                Subject::Unattributed => "",
                Subject::File(path) => {
                    writeln!(f, "file '{path}':")?;
                    "  "
                }
                Subject::Seed(name) => {
                    writeln!(f, "seed '{name}':")?;
                    "  "
                }
            };
            for (i, err) in members.into_iter().enumerate() {
                if i > 0 {
                    writeln!(f)?;
                }
                write!(f, "{indent}- ")?;
                write_detail(f, err, indent)?;
            }
        }
        Ok(())
    }
}

/// What a single failure is about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Subject<'a> {
    File(&'a Utf8Path),
    Seed(&'a QualifiedName),
    Unattributed,
}

impl<'a> Subject<'a> {
    fn of(err: &'a SeedError) -> Self {
        match err {
            SeedError::File { path, .. } | SeedError::DuplicateSeed { path, .. } => Self::File(path),
            SeedError::InvalidSeed { seed, .. } | SeedError::ApplierFailure { seed, .. } => {
                Self::Seed(seed)
            }
            SeedError::MissingDependency { requester, .. } => Self::Seed(requester),
            SeedError::SeedNotFound { name } => Self::Seed(name),
            _ => Self::Unattributed,
        }
    }
}

/// Write `err` under its subject heading, dropping the prefix the heading
/// already names. Continuation lines stay aligned with the first.
fn write_detail(f: &mut fmt::Formatter<'_>, err: &SeedError, indent: &str) -> fmt::Result {
    let text = match err {
        SeedError::File { source, .. } => source.to_string(),
        SeedError::InvalidSeed { source, .. } => source.to_string(),
        other => other.to_string(),
    };
    for (i, line) in text.trim_end().lines().enumerate() {
        if i > 0 {
            write!(f, "\n{indent}  ")?;
        }
        f.write_str(line)?;
    }
    Ok(())
}
