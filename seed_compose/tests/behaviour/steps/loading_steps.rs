//! Steps covering seed directory loading.

use anyhow::{Result, anyhow, ensure};
use rstest_bdd_macros::{given, then, when};
use seed_compose::{SeedError, SeedLoader};
use test_helpers::SeedDir;
use test_helpers::text::unquote;

use super::qualified_list;
use crate::fixtures::SeedWorld;

#[given("a seed file {file} containing {contents}")]
fn seed_file(seed_world: &SeedWorld, file: String, contents: String) -> Result<()> {
    if seed_world.seed_dir.is_empty() {
        seed_world.seed_dir.set(SeedDir::new()?);
    }
    let body = unquote(&contents).replace("\\\"", "\"");
    seed_world
        .seed_dir
        .with_ref(|dir| dir.write(unquote(&file), &body))
        .ok_or_else(|| anyhow!("seed directory missing"))??;
    Ok(())
}

#[when("the seed directory is loaded")]
fn load(seed_world: &SeedWorld) -> Result<()> {
    let result = seed_world
        .seed_dir
        .with_ref(|dir| SeedLoader::default().load_dir(dir.path()))
        .ok_or_else(|| anyhow!("seed directory missing"))?;
    seed_world.loaded.set(result);
    Ok(())
}

#[then("the store holds {names}")]
fn store_holds(seed_world: &SeedWorld, names: String) -> Result<()> {
    let result = seed_world
        .loaded
        .take()
        .ok_or_else(|| anyhow!("directory not loaded"))?;
    let store = result.map_err(|err| anyhow!("load failed: {err}"))?;
    let expected = {
        let mut sorted = qualified_list(&names);
        sorted.sort();
        sorted
    };
    ensure!(store.names() == expected, "store holds {:?}", store.names());
    Ok(())
}

#[then("loading fails with {count} errors")]
fn loading_fails(seed_world: &SeedWorld, count: usize) -> Result<()> {
    let result = seed_world
        .loaded
        .take()
        .ok_or_else(|| anyhow!("directory not loaded"))?;
    let err = result
        .err()
        .ok_or_else(|| anyhow!("expected the load to fail"))?;
    match err.as_ref() {
        SeedError::Aggregate(errors) => {
            ensure!(errors.len() == count, "expected {count} errors, got {errors}");
            Ok(())
        }
        other => Err(anyhow!("expected aggregated errors, got {other}")),
    }
}
