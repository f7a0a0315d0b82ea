//! Shared scenario state for the behavioural suite.

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use seed_compose::{MemoryStore, Reconciler, Resolution, Seed, SeedResult};
use test_helpers::{RecordingApplier, SeedDir};

/// State shared between the steps of one scenario.
#[derive(Debug, Default, ScenarioState)]
pub struct SeedWorld {
    /// Seeds declared by `Given` steps, in declaration order.
    pub seeds: Slot<Vec<Seed>>,
    /// Outcome of the last resolution.
    pub resolution: Slot<SeedResult<Resolution>>,
    /// Reconciler driven by event steps.
    pub reconciler: Slot<Reconciler<RecordingApplier>>,
    /// Directory seed files are written into.
    pub seed_dir: Slot<SeedDir>,
    /// Outcome of the last directory load.
    pub loaded: Slot<SeedResult<MemoryStore>>,
}

/// Creates an empty world for each scenario.
#[fixture]
pub fn seed_world() -> SeedWorld {
    SeedWorld::default()
}
