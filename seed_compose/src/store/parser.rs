//! Format dispatch for seed documents.

use camino::Utf8Path;
use figment::{
    Figment,
    providers::{Format, Json, Toml},
};

use super::document::SeedDocument;
use super::yaml::SaphyrYaml;
use crate::{SeedError, SeedResult};

/// Whether `path` carries an extension the loader understands.
pub(super) fn is_seed_file(path: &Utf8Path) -> bool {
    extension(path).is_some_and(|ext| super::SEED_EXTENSIONS.contains(&ext.as_str()))
}

fn extension(path: &Utf8Path) -> Option<String> {
    path.extension().map(str::to_ascii_lowercase)
}

/// Parse `data` read from `path` according to its extension.
///
/// # Errors
///
/// Returns [`SeedError::File`] when the contents do not parse or do not match
/// the seed document shape.
pub(super) fn parse_seed_document(path: &Utf8Path, data: &str) -> SeedResult<SeedDocument> {
    let figment = match extension(path).as_deref() {
        Some("yaml" | "yml") => Figment::from(SaphyrYaml::string(path.to_path_buf(), data)),
        Some("json") => {
            serde_json::from_str::<serde_json::Value>(data).map_err(|e| SeedError::file(path, e))?;
            Figment::from(Json::string(data))
        }
        Some("toml") => {
            // Surface TOML syntax errors with this file's context before figment parses it again.
            toml::from_str::<toml::Value>(data).map_err(|e| SeedError::file(path, e))?;
            Figment::from(Toml::string(data))
        }
        _ => {
            return Err(SeedError::file(
                path,
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "unsupported seed document extension",
                ),
            ));
        }
    };
    figment
        .extract::<SeedDocument>()
        .map_err(|e| SeedError::file(path, e))
}
