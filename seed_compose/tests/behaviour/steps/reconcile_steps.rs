//! Steps covering event reconciliation.

use anyhow::{Result, anyhow, ensure};
use rstest_bdd_macros::{given, then, when};
use seed_compose::{Reconciler, SeedEvent};
use test_helpers::text::{list, unquote};
use test_helpers::{RecordingApplier, SeedBuilder};

use super::{qualified, qualified_list};
use crate::fixtures::SeedWorld;

#[given("a reconciler with a recording applier")]
fn reconciler(seed_world: &SeedWorld) -> Result<()> {
    ensure!(seed_world.reconciler.is_empty(), "reconciler already created");
    seed_world
        .reconciler
        .set(Reconciler::new(RecordingApplier::new()));
    Ok(())
}

#[when("the seed {name} depending on {dependencies} is upserted")]
fn upsert(seed_world: &SeedWorld, name: String, dependencies: String) -> Result<()> {
    let mut reconciler = seed_world
        .reconciler
        .take()
        .ok_or_else(|| anyhow!("reconciler not created"))?;
    let seed = list(&dependencies)
        .into_iter()
        .fold(SeedBuilder::new(unquote(&name)), |builder, dependency| {
            builder.depends_on(dependency)
        })
        .build();
    reconciler.handle(SeedEvent::Upserted(seed));
    seed_world.reconciler.set(reconciler);
    Ok(())
}

#[when("the seed {name} is deleted")]
fn delete(seed_world: &SeedWorld, name: String) -> Result<()> {
    let mut reconciler = seed_world
        .reconciler
        .take()
        .ok_or_else(|| anyhow!("reconciler not created"))?;
    reconciler.handle(SeedEvent::Deleted(qualified(&name)));
    seed_world.reconciler.set(reconciler);
    Ok(())
}

#[then("{name} is waiting for {dependency}")]
fn waiting(seed_world: &SeedWorld, name: String, dependency: String) -> Result<()> {
    let waiters = seed_world
        .reconciler
        .with_ref(|reconciler| reconciler.waiting_on(&qualified(&dependency)))
        .ok_or_else(|| anyhow!("reconciler not created"))?;
    ensure!(
        waiters.contains(&qualified(&name)),
        "{name} is not waiting; waiters: {waiters:?}"
    );
    Ok(())
}

#[then("the applied seeds are {names}")]
fn applied(seed_world: &SeedWorld, names: String) -> Result<()> {
    let actual = seed_world
        .reconciler
        .with_ref(|reconciler| reconciler.applier().seeds())
        .ok_or_else(|| anyhow!("reconciler not created"))?;
    let expected = qualified_list(&names);
    ensure!(actual == expected, "expected {expected:?}, got {actual:?}");
    Ok(())
}
