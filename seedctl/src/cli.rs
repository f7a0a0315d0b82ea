//! Command-line interface definitions for `seedctl`.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

/// Parsed CLI arguments for `seedctl`.
#[derive(Debug, Parser)]
#[command(name = "seedctl")]
#[command(about = "Resolve seed dependencies and render or apply the merged specification")]
#[command(version)]
pub struct Args {
    /// Configuration file to read instead of the discovered one.
    #[arg(long, value_name = "path", global = true)]
    pub config: Option<Utf8PathBuf>,
    /// Directory holding seed documents.
    #[arg(long, value_name = "path", global = true)]
    pub seed_dir: Option<Utf8PathBuf>,
    /// Namespace for seeds and references without one.
    #[arg(long, value_name = "namespace", global = true)]
    pub namespace: Option<String>,
    /// Action to run.
    #[command(subcommand)]
    pub command: Command,
}

/// `seedctl` actions.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Resolve a seed and print the consolidated document.
    Render {
        /// Seed to resolve, `name` or `namespace/name`.
        seed: String,
    },
    /// Resolve a seed and pipe the document to the configured applier.
    Apply {
        /// Seed to resolve, `name` or `namespace/name`.
        seed: String,
    },
    /// Check every seed in the directory against the structural rules.
    Validate,
}
