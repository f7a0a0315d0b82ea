//! Seed storage and loading.
//!
//! [`SeedStore`] is the read-only lookup the resolver depends on.
//! [`MemoryStore`] is the shipped implementation; [`SeedLoader`] fills one from
//! seed documents on disk.

mod document;
mod loader;
mod memory;
mod parser;
mod yaml;

use std::sync::Arc;

use crate::model::{QualifiedName, Seed};

pub use document::{SeedDocument, SeedMetadata, SeedSpec};
pub use loader::{SEED_EXTENSIONS, SeedLoader};
pub use memory::MemoryStore;
pub use yaml::SaphyrYaml;

/// Read-only lookup of the latest seed stored under a qualified name.
pub trait SeedStore: Send + Sync {
    /// Return the seed stored under `name`, if any.
    fn lookup(&self, name: &QualifiedName) -> Option<Arc<Seed>>;
}

impl<S: SeedStore + ?Sized> SeedStore for Arc<S> {
    fn lookup(&self, name: &QualifiedName) -> Option<Arc<Seed>> {
        (**self).lookup(name)
    }
}

impl<S: SeedStore + ?Sized> SeedStore for &S {
    fn lookup(&self, name: &QualifiedName) -> Option<Arc<Seed>> {
        (**self).lookup(name)
    }
}
