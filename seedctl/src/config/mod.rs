//! Layered `seedctl` settings.
//!
//! Layers, lowest precedence first:
//!
//! 1. built-in defaults;
//! 2. a TOML file: `--config`, else `.seedctl.toml` in the working directory,
//!    else `seedctl/config.toml` under the user configuration directory;
//! 3. `SEEDCTL_*` environment variables, with `__` separating nested keys
//!    (`SEEDCTL_APPLIER__PROGRAM`);
//! 4. command-line flags.

use camino::{Utf8Path, Utf8PathBuf};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::SeedctlError;
use crate::cli::Args;

/// Prefix of environment variables read as settings.
pub const ENV_PREFIX: &str = "SEEDCTL_";

/// Configuration file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = ".seedctl.toml";

/// Settings driving a `seedctl` run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Directory holding seed documents.
    pub seed_dir: Utf8PathBuf,
    /// Namespace for seeds and references without one.
    pub default_namespace: String,
    /// External program receiving applied documents.
    #[serde(default)]
    pub applier: ApplierSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed_dir: Utf8PathBuf::from("seeds"),
            default_namespace: seed_compose::DEFAULT_NAMESPACE.to_owned(),
            applier: ApplierSettings::default(),
        }
    }
}

/// The program `seedctl apply` pipes documents into.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplierSettings {
    /// Program to run; `apply` fails when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
    /// Arguments passed to the program.
    #[serde(default)]
    pub args: Vec<String>,
}

impl Settings {
    /// Load settings for `args` from every layer.
    ///
    /// # Errors
    ///
    /// Returns [`SeedctlError::ConfigNotFound`] when `--config` names a
    /// missing file and [`SeedctlError::Config`] when a layer cannot be
    /// extracted.
    pub fn load(args: &Args) -> Result<Self, SeedctlError> {
        let file = config_file(args.config.as_deref())?;
        Self::figment(file.as_deref(), args)
            .extract()
            .map_err(SeedctlError::from)
    }

    /// Assemble the layered figment without extracting it.
    #[must_use]
    pub fn figment(file: Option<&Utf8Path>, args: &Args) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = file {
            debug!(path = %path, "reading configuration file");
            figment = figment.merge(Toml::file(path.as_std_path()));
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));
        if let Some(seed_dir) = &args.seed_dir {
            figment = figment.merge(Serialized::default("seed_dir", seed_dir));
        }
        if let Some(namespace) = &args.namespace {
            figment = figment.merge(Serialized::default("default_namespace", namespace));
        }
        figment
    }
}

/// Pick the configuration file to read, if any.
///
/// # Errors
///
/// Returns [`SeedctlError::ConfigNotFound`] when `explicit` does not exist.
pub fn config_file(explicit: Option<&Utf8Path>) -> Result<Option<Utf8PathBuf>, SeedctlError> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(SeedctlError::ConfigNotFound(path.to_path_buf()));
        }
        return Ok(Some(path.to_path_buf()));
    }
    let local = Utf8Path::new(LOCAL_CONFIG_FILE);
    if local.is_file() {
        return Ok(Some(local.to_path_buf()));
    }
    Ok(user_config_file().filter(|path| path.is_file()))
}

fn user_config_file() -> Option<Utf8PathBuf> {
    let dir = dirs::config_dir()?;
    let utf8 = Utf8PathBuf::from_path_buf(dir).ok()?;
    Some(utf8.join("seedctl").join("config.toml"))
}
