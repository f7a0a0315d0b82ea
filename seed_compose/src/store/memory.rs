//! In-memory seed store.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::SeedStore;
use crate::model::{QualifiedName, Seed};

/// Thread-safe map from qualified name to the latest seed.
///
/// Readers share the lock, so independent resolutions may run concurrently.
#[derive(Debug, Default)]
pub struct MemoryStore {
    seeds: RwLock<HashMap<QualifiedName, Arc<Seed>>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `seed`, returning the seed it replaced.
    pub fn insert(&self, seed: Seed) -> Option<Arc<Seed>> {
        let name = seed.qualified_name().clone();
        self.seeds.write().insert(name, Arc::new(seed))
    }

    /// Remove the seed stored under `name`.
    pub fn remove(&self, name: &QualifiedName) -> Option<Arc<Seed>> {
        self.seeds.write().remove(name)
    }

    /// Whether a seed is stored under `name`.
    #[must_use]
    pub fn contains(&self, name: &QualifiedName) -> bool {
        self.seeds.read().contains_key(name)
    }

    /// Number of stored seeds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seeds.read().len()
    }

    /// Whether the store holds no seeds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seeds.read().is_empty()
    }

    /// Stored names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<QualifiedName> {
        let mut names: Vec<_> = self.seeds.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Stored seeds ordered by name.
    #[must_use]
    pub fn seeds(&self) -> Vec<Arc<Seed>> {
        let mut seeds: Vec<_> = self.seeds.read().values().cloned().collect();
        seeds.sort_by(|a, b| a.qualified_name().cmp(b.qualified_name()));
        seeds
    }
}

impl SeedStore for MemoryStore {
    fn lookup(&self, name: &QualifiedName) -> Option<Arc<Seed>> {
        self.seeds.read().get(name).cloned()
    }
}

impl FromIterator<Seed> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = Seed>>(iter: I) -> Self {
        let store = Self::new();
        for seed in iter {
            store.insert(seed);
        }
        store
    }
}

impl Extend<Seed> for MemoryStore {
    fn extend<I: IntoIterator<Item = Seed>>(&mut self, iter: I) {
        let seeds = self.seeds.get_mut();
        for seed in iter {
            seeds.insert(seed.qualified_name().clone(), Arc::new(seed));
        }
    }
}
