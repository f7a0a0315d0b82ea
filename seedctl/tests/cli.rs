//! Integration tests running the `seedctl` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use rstest::{fixture, rstest};
use test_helpers::SeedDir;

#[fixture]
fn seeds() -> SeedDir {
    let dir = SeedDir::new().expect("create seed directory");
    dir.write("regions.toml", "[[spec.regions]]\nid = \"eu-de-1\"\n")
        .expect("write regions");
    dir.write(
        "keystone.yaml",
        "spec:\n  dependencies: [regions]\n  roles: [admin]\n",
    )
    .expect("write keystone");
    dir
}

fn seedctl(dir: &SeedDir) -> Command {
    let mut cmd = Command::cargo_bin("seedctl").expect("seedctl binary is built");
    cmd.current_dir(dir.path())
        .env_remove("SEEDCTL_SEED_DIR")
        .env_remove("SEEDCTL_DEFAULT_NAMESPACE")
        .env("SEEDCTL_LOG", "warn")
        .arg("--seed-dir")
        .arg(dir.path().as_str());
    cmd
}

#[rstest]
fn render_writes_json_to_stdout(seeds: SeedDir) {
    seedctl(&seeds)
        .args(["render", "keystone"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"eu-de-1\""))
        .stdout(predicate::str::contains("\"admin\""));
}

#[rstest]
fn render_reports_missing_seed(seeds: SeedDir) {
    seedctl(&seeds)
        .args(["render", "ghost"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("default/ghost"));
}

#[rstest]
fn validate_succeeds_for_a_clean_directory(seeds: SeedDir) {
    seedctl(&seeds)
        .arg("validate")
        .assert()
        .success()
        .stdout("2 seeds valid\n");
}

#[rstest]
fn namespace_flag_changes_the_default_namespace(seeds: SeedDir) {
    seedctl(&seeds)
        .args(["--namespace", "ops", "render", "keystone"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"eu-de-1\""));
}

#[rstest]
fn apply_without_applier_fails(seeds: SeedDir) {
    seedctl(&seeds)
        .env_remove("SEEDCTL_APPLIER__PROGRAM")
        .args(["apply", "keystone"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no applier configured"));
}
