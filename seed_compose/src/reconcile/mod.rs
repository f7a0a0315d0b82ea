//! Event-driven re-resolution of seeds.
//!
//! Each [`SeedEvent`] updates the [`MemoryStore`] and, for upserts, resolves
//! and applies the changed seed. A resolution that fails because a dependency
//! is not stored yet parks the requester until that dependency is upserted, at
//! which point it is resolved again. Other failures are reported once and not
//! retried.

mod report;

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::SeedError;
use crate::apply::Applier;
use crate::engine::Engine;
use crate::model::{QualifiedName, Seed};
use crate::store::{MemoryStore, SeedStore};

pub use report::{Outcome, ReconcileReport};

/// A change to the seed collection.
#[derive(Clone, Debug, PartialEq)]
pub enum SeedEvent {
    /// A seed was created or replaced.
    Upserted(Seed),
    /// The seed with this name was removed.
    Deleted(QualifiedName),
}

impl SeedEvent {
    /// Name of the seed the event concerns.
    #[must_use]
    pub const fn name(&self) -> &QualifiedName {
        match self {
            Self::Upserted(seed) => seed.qualified_name(),
            Self::Deleted(name) => name,
        }
    }
}

/// Keeps a store in step with incoming events and applies affected seeds.
#[derive(Debug)]
pub struct Reconciler<A> {
    engine: Engine<MemoryStore, A>,
    waiting: BTreeMap<QualifiedName, BTreeSet<QualifiedName>>,
}

impl<A: Applier> Reconciler<A> {
    /// Create a reconciler with an empty store.
    #[must_use]
    pub fn new(applier: A) -> Self {
        Self::with_store(MemoryStore::new(), applier)
    }

    /// Create a reconciler over an already populated store.
    ///
    /// Seeds already in `store` are not applied until an event names them.
    #[must_use]
    pub const fn with_store(store: MemoryStore, applier: A) -> Self {
        Self {
            engine: Engine::new(store, applier),
            waiting: BTreeMap::new(),
        }
    }

    /// The store events are applied to.
    #[must_use]
    pub const fn store(&self) -> &MemoryStore {
        self.engine.store()
    }

    /// The applier resolved documents are handed to.
    #[must_use]
    pub const fn applier(&self) -> &A {
        self.engine.applier()
    }

    /// Seeds parked until `dependency` is upserted, in name order.
    #[must_use]
    pub fn waiting_on(&self, dependency: &QualifiedName) -> Vec<QualifiedName> {
        self.waiting
            .get(dependency)
            .map(|requesters| requesters.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Process one event and report what happened to every seed it touched.
    pub fn handle(&mut self, event: SeedEvent) -> ReconcileReport {
        let mut report = ReconcileReport::default();
        match event {
            SeedEvent::Upserted(seed) => {
                let name = seed.qualified_name().clone();
                self.engine.store().insert(seed);
                self.reconcile(&name, &mut report);
                let waiters = self.waiting.remove(&name).unwrap_or_default();
                if !waiters.is_empty() {
                    info!(seed = %name, waiters = waiters.len(), "re-triggering waiting seeds");
                }
                for waiter in waiters {
                    if !report.contains(&waiter) {
                        self.reconcile(&waiter, &mut report);
                    }
                }
            }
            SeedEvent::Deleted(name) => {
                if self.engine.store().remove(&name).is_none() {
                    debug!(seed = %name, "deleted seed was not stored");
                }
                self.forget(&name);
                report.push(name, Outcome::Removed);
            }
        }
        report
    }

    /// Process events in order, concatenating their reports.
    pub fn handle_all<I>(&mut self, events: I) -> ReconcileReport
    where
        I: IntoIterator<Item = SeedEvent>,
    {
        let mut report = ReconcileReport::default();
        for event in events {
            report.extend(self.handle(event));
        }
        report
    }

    fn reconcile(&mut self, name: &QualifiedName, report: &mut ReconcileReport) {
        self.forget(name);
        let Some(seed) = self.engine.store().lookup(name) else {
            debug!(seed = %name, "seed vanished before it could be reconciled");
            return;
        };
        let outcome = match self.engine.resolve_and_apply(&seed) {
            Ok(resolution) => Outcome::Applied {
                merged: resolution.merged().to_vec(),
            },
            Err(err) => self.park_or_fail(name, err),
        };
        report.push(name.clone(), outcome);
    }

    fn park_or_fail(&mut self, name: &QualifiedName, err: Arc<SeedError>) -> Outcome {
        let Some(missing) = err.missing_dependency_name().cloned() else {
            warn!(seed = %name, error = %err, "seed reconciliation failed");
            return Outcome::Failed(err);
        };
        info!(seed = %name, missing = %missing, "seed waiting for dependency");
        self.waiting
            .entry(missing.clone())
            .or_default()
            .insert(name.clone());
        Outcome::Waiting { missing }
    }

    fn forget(&mut self, requester: &QualifiedName) {
        self.waiting.retain(|_, requesters| {
            requesters.remove(requester);
            !requesters.is_empty()
        });
    }
}
