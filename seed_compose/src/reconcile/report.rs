//! Per-seed outcomes of handling an event.

use std::sync::Arc;

use crate::SeedError;
use crate::model::QualifiedName;

/// What happened to one seed while handling an event.
#[derive(Clone, Debug)]
pub enum Outcome {
    /// The seed resolved and the applier accepted it.
    Applied {
        /// Seeds merged, dependency-first.
        merged: Vec<QualifiedName>,
    },
    /// The seed is parked until `missing` is upserted.
    Waiting {
        /// Dependency that was not stored.
        missing: QualifiedName,
    },
    /// Resolution or hand-off failed; not retried.
    Failed(Arc<SeedError>),
    /// The seed was removed from the store.
    Removed,
}

impl Outcome {
    /// Whether the seed was applied.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Outcomes in processing order.
#[derive(Clone, Debug, Default)]
pub struct ReconcileReport {
    entries: Vec<(QualifiedName, Outcome)>,
}

impl ReconcileReport {
    pub(super) fn push(&mut self, name: QualifiedName, outcome: Outcome) {
        self.entries.push((name, outcome));
    }

    pub(super) fn extend(&mut self, other: Self) {
        self.entries.extend(other.entries);
    }

    /// Whether `name` has an entry.
    #[must_use]
    pub fn contains(&self, name: &QualifiedName) -> bool {
        self.entries.iter().any(|(entry, _)| entry == name)
    }

    /// The latest outcome recorded for `name`.
    #[must_use]
    pub fn outcome(&self, name: &QualifiedName) -> Option<&Outcome> {
        self.entries
            .iter()
            .rev()
            .find(|(entry, _)| entry == name)
            .map(|(_, outcome)| outcome)
    }

    /// Names of applied seeds in processing order.
    #[must_use]
    pub fn applied(&self) -> Vec<&QualifiedName> {
        self.entries
            .iter()
            .filter(|(_, outcome)| outcome.is_applied())
            .map(|(name, _)| name)
            .collect()
    }

    /// Iterate over `(name, outcome)` pairs in processing order.
    pub fn iter(&self) -> impl Iterator<Item = (&QualifiedName, &Outcome)> {
        self.entries.iter().map(|(name, outcome)| (name, outcome))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was processed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
