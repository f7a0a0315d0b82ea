//! Library interface for the `seedctl` command-line tool.
//!
//! [`run`] executes parsed [`Args`] against the layered [`Settings`], writing
//! command output to the supplied writer. Logging goes through `tracing`;
//! [`logging::init_logging`] installs a stderr subscriber for the binary.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;

use std::io::Write;
use std::sync::Arc;

use seed_compose::{
    CommandApplier, ConsolidatedDocument, Engine, QualifiedName, Resolver, SeedError, SeedLoader,
    validate,
};
use tracing::info;

pub use cli::{Args, Command};
pub use config::Settings;
pub use error::SeedctlError;

/// Load settings for `args` and run the requested command.
///
/// # Errors
///
/// Returns the first configuration, seed or output error.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<(), SeedctlError> {
    let settings = Settings::load(args)?;
    run_with(&settings, &args.command, out)
}

/// Run `command` with already loaded settings.
///
/// # Errors
///
/// Returns the first seed or output error, or [`SeedctlError::NoApplier`]
/// when `apply` runs without an applier program.
pub fn run_with<W: Write>(
    settings: &Settings,
    command: &Command,
    out: &mut W,
) -> Result<(), SeedctlError> {
    let loader = SeedLoader::new(settings.default_namespace.as_str());
    match command {
        Command::Render { seed } => {
            let store = loader.load_dir(&settings.seed_dir)?;
            let name = QualifiedName::qualify(seed, loader.default_namespace());
            let resolution = Resolver::new(&store).resolve_name(&name)?;
            let document = ConsolidatedDocument::render(&name, resolution.specification())?;
            writeln!(out, "{document}")?;
        }
        Command::Apply { seed } => {
            let program = settings
                .applier
                .program
                .as_deref()
                .ok_or(SeedctlError::NoApplier)?;
            let applier = CommandApplier::new(program).with_args(settings.applier.args.iter().cloned());
            let store = loader.load_dir(&settings.seed_dir)?;
            let name = QualifiedName::qualify(seed, loader.default_namespace());
            let resolution = Engine::new(store, applier).apply(&name)?;
            writeln!(
                out,
                "applied {name} ({} seeds merged)",
                resolution.merged().len()
            )?;
        }
        Command::Validate => {
            let store = loader.load_dir(&settings.seed_dir)?;
            let seeds = store.seeds();
            let failures: Vec<Arc<SeedError>> = seeds
                .iter()
                .filter_map(|seed| {
                    validate(seed.spec()).err().map(|source| {
                        Arc::new(SeedError::InvalidSeed {
                            seed: seed.qualified_name().clone(),
                            source,
                        })
                    })
                })
                .collect();
            if let Some(err) = SeedError::try_aggregate(failures) {
                return Err(Arc::new(err).into());
            }
            info!(seeds = seeds.len(), dir = %settings.seed_dir, "seed directory is valid");
            writeln!(out, "{} seeds valid", seeds.len())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
