//! Depth-first dependency resolution.
//!
//! A resolution walks a seed's dependencies in declaration order, merging each
//! exactly once into a private [`Accumulator`], and merges the seed itself
//! last. The resulting element order therefore reflects a dependency-first
//! traversal rooted at the requested seed.
//!
//! A seed is marked visited only once its own dependencies have been walked.
//! Re-entering a seed that is still walking its dependencies (a cycle such as
//! `A -> B -> A`) is skipped silently apart from a warning; the merge may then
//! lack content the cycle would have contributed.

mod accumulator;

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::merge::Merge;
use crate::model::{QualifiedName, Seed};
use crate::store::SeedStore;
use crate::validate::validate;
use crate::{SeedError, SeedResult};

pub use accumulator::{Accumulator, Resolution};

/// Resolves seeds against a [`SeedStore`].
#[derive(Debug)]
pub struct Resolver<'s, S: ?Sized> {
    store: &'s S,
}

impl<'s, S: SeedStore + ?Sized> Resolver<'s, S> {
    /// Create a resolver reading from `store`.
    #[must_use]
    pub const fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Resolve the seed stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::SeedNotFound`] when `name` is not stored, and any
    /// error [`Resolver::resolve`] reports.
    pub fn resolve_name(&self, name: &QualifiedName) -> SeedResult<Resolution> {
        let seed = self
            .store
            .lookup(name)
            .ok_or_else(|| Arc::new(SeedError::SeedNotFound { name: name.clone() }))?;
        self.resolve(&seed)
    }

    /// Resolve `seed` and its transitive dependencies into one specification.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::MissingDependency`] when a dependency is not
    /// stored and [`SeedError::InvalidSeed`] when a seed fails validation.
    /// Nothing partial is returned on error.
    pub fn resolve(&self, seed: &Seed) -> SeedResult<Resolution> {
        let mut acc = Accumulator::new();
        self.resolve_into(&mut acc, seed)?;
        let resolution = acc.into_resolution();
        info!(
            seed = %seed.qualified_name(),
            merged = resolution.merged().len(),
            "resolved seed"
        );
        Ok(resolution)
    }

    /// Fold `seed` and its dependencies into `acc`.
    ///
    /// # Errors
    ///
    /// See [`Resolver::resolve`]. `acc` must be discarded after an error.
    pub fn resolve_into(&self, acc: &mut Accumulator, seed: &Seed) -> SeedResult<()> {
        let name = seed.qualified_name();
        if acc.is_visited(name) {
            return Ok(());
        }
        if acc.is_in_progress(name) {
            warn!(seed = %name, "seed re-entered while resolving its dependencies; skipping");
            return Ok(());
        }

        acc.enter(name);
        let walked = self.visit_dependencies(acc, seed);
        acc.leave();
        walked?;

        acc.mark_visited(name);
        validate(seed.spec()).map_err(|source| {
            Arc::new(SeedError::InvalidSeed {
                seed: name.clone(),
                source,
            })
        })?;
        acc.specification_mut().merge(seed.spec().clone());
        acc.record_merge(name);
        debug!(seed = %name, "merged seed specification");
        Ok(())
    }

    fn visit_dependencies(&self, acc: &mut Accumulator, seed: &Seed) -> SeedResult<()> {
        for (reference, dependency) in seed.qualified_dependencies() {
            let Some(found) = self.store.lookup(&dependency) else {
                return Err(SeedError::missing_dependency(
                    reference,
                    dependency,
                    seed.qualified_name().clone(),
                ));
            };
            self.resolve_into(acc, &found)?;
        }
        Ok(())
    }
}
