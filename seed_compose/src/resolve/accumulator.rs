//! Per-resolution state: the in-progress specification and visited seeds.

use std::collections::HashSet;

use crate::model::{QualifiedName, Specification};

/// Transient state owned by one resolution.
///
/// Holds the specification merged so far, the set of seeds already folded in,
/// the stack of seeds whose dependencies are still being walked, and the order
/// in which seeds were merged.
#[derive(Debug, Default)]
pub struct Accumulator {
    spec: Specification,
    visited: HashSet<QualifiedName>,
    in_progress: Vec<QualifiedName>,
    trail: Vec<QualifiedName>,
}

impl Accumulator {
    /// Create an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `name` has already been merged.
    #[must_use]
    pub fn is_visited(&self, name: &QualifiedName) -> bool {
        self.visited.contains(name)
    }

    /// Whether `name` is still walking its dependencies.
    #[must_use]
    pub fn is_in_progress(&self, name: &QualifiedName) -> bool {
        self.in_progress.contains(name)
    }

    /// Specification merged so far.
    #[must_use]
    pub const fn specification(&self) -> &Specification {
        &self.spec
    }

    /// Seeds merged so far, in merge order.
    #[must_use]
    pub fn trail(&self) -> &[QualifiedName] {
        &self.trail
    }

    pub(super) fn enter(&mut self, name: &QualifiedName) {
        self.in_progress.push(name.clone());
    }

    pub(super) fn leave(&mut self) {
        self.in_progress.pop();
    }

    pub(super) fn mark_visited(&mut self, name: &QualifiedName) {
        self.visited.insert(name.clone());
    }

    pub(super) fn record_merge(&mut self, name: &QualifiedName) {
        self.trail.push(name.clone());
    }

    pub(super) const fn specification_mut(&mut self) -> &mut Specification {
        &mut self.spec
    }

    /// Finish the resolution.
    #[must_use]
    pub fn into_resolution(self) -> Resolution {
        Resolution {
            spec: self.spec,
            merged: self.trail,
        }
    }
}

/// Outcome of a successful resolution.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolution {
    spec: Specification,
    merged: Vec<QualifiedName>,
}

impl Resolution {
    /// The consolidated specification.
    #[must_use]
    pub const fn specification(&self) -> &Specification {
        &self.spec
    }

    /// Seeds merged, dependency-first.
    #[must_use]
    pub fn merged(&self) -> &[QualifiedName] {
        &self.merged
    }

    /// Take ownership of the consolidated specification.
    #[must_use]
    pub fn into_specification(self) -> Specification {
        self.spec
    }
}
