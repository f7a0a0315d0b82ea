//! Steps covering dependency resolution.

use anyhow::{Result, anyhow, ensure};
use rstest_bdd_macros::{given, then, when};
use seed_compose::{MemoryStore, Resolver, SeedError};
use test_helpers::SeedBuilder;
use test_helpers::text::{list, unquote};

use super::{qualified, qualified_list};
use crate::fixtures::SeedWorld;

fn declare(seed_world: &SeedWorld, name: &str, dependencies: &str, roles: &str) {
    let mut builder = SeedBuilder::new(unquote(name));
    for dependency in list(dependencies) {
        builder = builder.depends_on(dependency);
    }
    for role in list(roles) {
        builder = builder.role(role);
    }
    seed_world
        .seeds
        .get_or_insert_with(Vec::new)
        .push(builder.build());
}

#[given("a standalone seed {name} with roles {roles}")]
fn seed_with_roles(seed_world: &SeedWorld, name: String, roles: String) {
    declare(seed_world, &name, "", &roles);
}

#[given("a seed {name} depending on {dependencies} with roles {roles}")]
fn seed_with_dependencies(
    seed_world: &SeedWorld,
    name: String,
    dependencies: String,
    roles: String,
) {
    declare(seed_world, &name, &dependencies, &roles);
}

#[when("{name} is resolved")]
fn resolve(seed_world: &SeedWorld, name: String) -> Result<()> {
    ensure!(seed_world.resolution.is_empty(), "resolution already ran");
    let store: MemoryStore = seed_world.seeds.take().unwrap_or_default().into_iter().collect();
    let result = Resolver::new(&store).resolve_name(&qualified(&name));
    seed_world.resolution.set(result);
    Ok(())
}

#[then("the consolidated roles are {roles}")]
fn consolidated_roles(seed_world: &SeedWorld, roles: String) -> Result<()> {
    let actual = seed_world
        .resolution
        .with_ref(|result| {
            result
                .as_ref()
                .map(|resolution| resolution.specification().roles.clone())
                .map_err(|err| anyhow!("resolution failed: {err}"))
        })
        .ok_or_else(|| anyhow!("no resolution recorded"))??;
    let expected = list(&roles);
    ensure!(actual == expected, "expected roles {expected:?}, got {actual:?}");
    Ok(())
}

#[then("the merge order is {names}")]
fn merge_order(seed_world: &SeedWorld, names: String) -> Result<()> {
    let actual = seed_world
        .resolution
        .with_ref(|result| {
            result
                .as_ref()
                .map(|resolution| resolution.merged().to_vec())
                .map_err(|err| anyhow!("resolution failed: {err}"))
        })
        .ok_or_else(|| anyhow!("no resolution recorded"))??;
    let expected = qualified_list(&names);
    ensure!(actual == expected, "expected order {expected:?}, got {actual:?}");
    Ok(())
}

#[then("the resolution fails because {dependency} is missing for {requester}")]
fn missing_dependency(seed_world: &SeedWorld, dependency: String, requester: String) -> Result<()> {
    let result = seed_world
        .resolution
        .take()
        .ok_or_else(|| anyhow!("no resolution recorded"))?;
    let err = result
        .err()
        .ok_or_else(|| anyhow!("expected the resolution to fail"))?;
    match err.as_ref() {
        SeedError::MissingDependency {
            reference,
            requester: actual_requester,
            ..
        } => {
            ensure!(reference == unquote(&dependency), "unexpected reference {reference}");
            ensure!(
                actual_requester == &qualified(&requester),
                "unexpected requester {actual_requester}"
            );
            Ok(())
        }
        other => Err(anyhow!("unexpected error: {other}")),
    }
}
