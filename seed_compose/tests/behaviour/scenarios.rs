//! Binds the feature files to the step registry.

use crate::fixtures::{SeedWorld, seed_world};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/resolution.feature",
    fixtures = [seed_world: SeedWorld]
);
scenarios!(
    "tests/features/reconcile.feature",
    fixtures = [seed_world: SeedWorld]
);
scenarios!(
    "tests/features/loading.feature",
    fixtures = [seed_world: SeedWorld]
);
