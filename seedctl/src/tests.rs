//! Tests for command dispatch.

use anyhow::{Result, anyhow, ensure};
use camino::Utf8PathBuf;
use rstest::{fixture, rstest};
use test_helpers::SeedDir;

use super::*;
use crate::config::ApplierSettings;

#[fixture]
fn seeds() -> SeedDir {
    let dir = SeedDir::new().expect("create seed directory");
    dir.write("base.yaml", "spec:\n  roles: [admin]\n")
        .expect("write base");
    dir.write(
        "app.yaml",
        "metadata:\n  namespace: ops\nspec:\n  dependencies: [default/base]\n  roles: [member]\n",
    )
    .expect("write app");
    dir
}

fn settings(dir: &SeedDir) -> Settings {
    Settings {
        seed_dir: Utf8PathBuf::from(dir.path()),
        ..Settings::default()
    }
}

fn run_to_string(settings: &Settings, command: &Command) -> Result<String> {
    let mut out = Vec::new();
    run_with(settings, command, &mut out).map_err(|err| anyhow!("{err}"))?;
    Ok(String::from_utf8(out)?)
}

#[rstest]
fn render_prints_the_consolidated_document(seeds: SeedDir) -> Result<()> {
    let output = run_to_string(
        &settings(&seeds),
        &Command::Render {
            seed: "ops/app".into(),
        },
    )?;
    let value: serde_json::Value = serde_json::from_str(&output)?;
    ensure!(value == serde_json::json!({"roles": ["admin", "member"]}), "{output}");
    Ok(())
}

#[rstest]
fn render_qualifies_bare_names_with_the_default_namespace(seeds: SeedDir) -> Result<()> {
    let output = run_to_string(
        &settings(&seeds),
        &Command::Render {
            seed: "base".into(),
        },
    )?;
    ensure!(output.contains("admin"));
    Ok(())
}

#[rstest]
fn apply_without_program_is_rejected(seeds: SeedDir) {
    let mut out = Vec::new();
    let result = run_with(
        &settings(&seeds),
        &Command::Apply {
            seed: "ops/app".into(),
        },
        &mut out,
    );
    assert!(matches!(result, Err(SeedctlError::NoApplier)));
}

#[cfg(unix)]
#[rstest]
fn apply_pipes_into_the_configured_program(seeds: SeedDir) -> Result<()> {
    let target = seeds.path().join("applied.out");
    let configured = Settings {
        applier: ApplierSettings {
            program: Some("sh".into()),
            args: vec!["-c".into(), "cat > \"$0\"".into(), target.to_string()],
        },
        ..settings(&seeds)
    };
    let output = run_to_string(
        &configured,
        &Command::Apply {
            seed: "ops/app".into(),
        },
    )?;
    ensure!(output.trim() == "applied ops/app (2 seeds merged)", "{output}");
    let applied: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&target)?)?;
    ensure!(applied["roles"] == serde_json::json!(["admin", "member"]));
    Ok(())
}

#[rstest]
fn validate_counts_valid_seeds(seeds: SeedDir) -> Result<()> {
    let output = run_to_string(&settings(&seeds), &Command::Validate)?;
    ensure!(output.trim() == "2 seeds valid", "{output}");
    Ok(())
}

#[rstest]
fn validate_reports_every_invalid_seed(seeds: SeedDir) -> Result<()> {
    seeds.write("bad-region.yaml", "spec:\n  regions:\n    - id: \"\"\n")?;
    seeds.write("bad-role.yaml", "spec:\n  roles: [\"\"]\n")?;
    let mut out = Vec::new();
    let err = run_with(&settings(&seeds), &Command::Validate, &mut out)
        .expect_err("two seeds are invalid");
    let seed_err = match err {
        SeedctlError::Seed(seed_err) => seed_err,
        other => return Err(anyhow!("unexpected error: {other}")),
    };
    let SeedError::Aggregate(errors) = seed_err.as_ref() else {
        return Err(anyhow!("expected aggregate, got {seed_err}"));
    };
    ensure!(errors.len() == 2, "{errors}");
    ensure!(out.is_empty());
    Ok(())
}
