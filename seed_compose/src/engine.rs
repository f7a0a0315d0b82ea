//! Resolution followed by hand-off.

use std::sync::Arc;

use tracing::info;

use crate::apply::{Applier, ConsolidatedDocument};
use crate::model::{QualifiedName, Seed};
use crate::resolve::{Resolution, Resolver};
use crate::store::SeedStore;
use crate::{SeedError, SeedResult};

/// Couples a [`SeedStore`] with an [`Applier`].
#[derive(Debug)]
pub struct Engine<S, A> {
    store: S,
    applier: A,
}

impl<S: SeedStore, A: Applier> Engine<S, A> {
    /// Create an engine over `store` handing documents to `applier`.
    #[must_use]
    pub const fn new(store: S, applier: A) -> Self {
        Self { store, applier }
    }

    /// The backing store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// The applier documents are handed to.
    #[must_use]
    pub const fn applier(&self) -> &A {
        &self.applier
    }

    /// Resolve the seed stored under `name` and render it.
    ///
    /// # Errors
    ///
    /// Returns any resolution or serialisation error.
    pub fn render(&self, name: &QualifiedName) -> SeedResult<ConsolidatedDocument> {
        let resolution = Resolver::new(&self.store).resolve_name(name)?;
        ConsolidatedDocument::render(name, resolution.specification())
    }

    /// Resolve the seed stored under `name` and apply it.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::SeedNotFound`] when `name` is not stored, and any
    /// error [`Engine::resolve_and_apply`] reports.
    pub fn apply(&self, name: &QualifiedName) -> SeedResult<Resolution> {
        let seed = self
            .store
            .lookup(name)
            .ok_or_else(|| Arc::new(SeedError::SeedNotFound { name: name.clone() }))?;
        self.resolve_and_apply(&seed)
    }

    /// Resolve `seed` and hand the consolidated document to the applier.
    ///
    /// # Errors
    ///
    /// Returns the first resolution, serialisation or applier error.
    pub fn resolve_and_apply(&self, seed: &Seed) -> SeedResult<Resolution> {
        let resolution = Resolver::new(&self.store).resolve(seed)?;
        let document =
            ConsolidatedDocument::render(seed.qualified_name(), resolution.specification())?;
        self.applier.apply(&document)?;
        info!(seed = %seed.qualified_name(), "seed resolved and applied");
        Ok(resolution)
    }
}
