//! Loading seed documents from disk into a [`MemoryStore`].

use std::collections::HashMap;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8::Dir};
use tracing::{debug, info, warn};

use super::memory::MemoryStore;
use super::parser::{is_seed_file, parse_seed_document};
use crate::model::{QualifiedName, Seed};
use crate::{DEFAULT_NAMESPACE, SeedError, SeedResult};

/// File extensions recognised as seed documents.
pub const SEED_EXTENSIONS: [&str; 4] = ["yaml", "yml", "toml", "json"];

/// Reads seed documents, applying a default namespace where none is declared.
#[derive(Clone, Debug)]
pub struct SeedLoader {
    default_namespace: String,
}

impl Default for SeedLoader {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}

impl SeedLoader {
    /// Create a loader using `default_namespace` for documents without one.
    #[must_use]
    pub fn new(default_namespace: impl Into<String>) -> Self {
        Self {
            default_namespace: default_namespace.into(),
        }
    }

    /// Namespace applied to documents that omit `metadata.namespace`.
    #[must_use]
    pub fn default_namespace(&self) -> &str {
        &self.default_namespace
    }

    /// Parse seed document text as if it had been read from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::File`] when the text does not parse.
    pub fn parse(&self, path: &Utf8Path, contents: &str) -> SeedResult<Seed> {
        let document = parse_seed_document(path, contents)?;
        let stem = path.file_stem().unwrap_or_default();
        Ok(document.into_seed(stem, &self.default_namespace))
    }

    /// Read and parse a single seed document.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::File`] when the file cannot be read or parsed.
    pub fn load_file(&self, path: &Utf8Path) -> SeedResult<Seed> {
        let parent = path
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        let file_name = path.file_name().ok_or_else(|| {
            SeedError::file(
                path,
                std::io::Error::other("cannot determine file name for seed path"),
            )
        })?;
        let dir = Dir::open_ambient_dir(parent, ambient_authority())
            .map_err(|e| SeedError::file(path, e))?;
        let contents = dir
            .read_to_string(file_name)
            .map_err(|e| SeedError::file(path, e))?;
        self.parse(path, &contents)
    }

    /// Load every seed document directly inside `dir_path`.
    ///
    /// Files are processed in name order and files with other extensions are
    /// skipped. Every document is attempted before failures are reported.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::File`] when the directory cannot be read. When one
    /// or more documents fail, returns those failures aggregated, including
    /// [`SeedError::DuplicateSeed`] for names declared twice and entries whose
    /// name is not UTF-8.
    pub fn load_dir(&self, dir_path: &Utf8Path) -> SeedResult<MemoryStore> {
        let dir = Dir::open_ambient_dir(dir_path, ambient_authority())
            .map_err(|e| SeedError::file(dir_path, e))?;
        let mut errors: Vec<Arc<SeedError>> = Vec::new();
        let files = seed_files(&dir, dir_path, &mut errors)?;

        let mut seeds = Vec::with_capacity(files.len());
        let mut origins: HashMap<QualifiedName, Utf8PathBuf> = HashMap::new();

        for file_name in files {
            let path = dir_path.join(&file_name);
            let seed = match dir
                .read_to_string(&file_name)
                .map_err(|e| SeedError::file(&path, e))
                .and_then(|contents| self.parse(&path, &contents))
            {
                Ok(seed) => seed,
                Err(err) => {
                    errors.push(err);
                    continue;
                }
            };
            let name = seed.qualified_name().clone();
            if origins.contains_key(&name) {
                errors.push(Arc::new(SeedError::DuplicateSeed { name, path }));
                continue;
            }
            debug!(seed = %name, path = %path, "loaded seed document");
            origins.insert(name, path);
            seeds.push(seed);
        }

        if let Some(err) = SeedError::try_aggregate(errors) {
            return Err(Arc::new(err));
        }
        info!(dir = %dir_path, seeds = seeds.len(), "loaded seed directory");
        Ok(seeds.into_iter().collect())
    }
}

/// Seed file names in `dir`, sorted. Entries that cannot be inspected are
/// pushed onto `errors` and skipped.
fn seed_files(
    dir: &Dir,
    dir_path: &Utf8Path,
    errors: &mut Vec<Arc<SeedError>>,
) -> SeedResult<Vec<String>> {
    let mut files = Vec::new();
    for entry_result in dir.entries().map_err(|e| SeedError::file(dir_path, e))? {
        let name = match entry_result.and_then(|entry| {
            let file_name = entry.file_name()?;
            entry.file_type().map(|file_type| (file_name, file_type))
        }) {
            Ok((name, file_type)) if file_type.is_file() => name,
            Ok(_) => continue,
            Err(err) => {
                errors.push(SeedError::file(dir_path, err));
                continue;
            }
        };
        if is_seed_file(Utf8Path::new(&name)) {
            files.push(name);
        } else {
            warn!(path = %dir_path.join(&name), "skipping file without a seed extension");
        }
    }
    files.sort();
    Ok(files)
}
