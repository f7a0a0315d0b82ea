//! Temporary seed directories.

use std::fs;

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// A temporary directory that seed documents can be written into.
///
/// The directory is removed when the value is dropped.
#[derive(Debug)]
pub struct SeedDir {
    _tmp: TempDir,
    path: Utf8PathBuf,
}

impl SeedDir {
    /// Create an empty directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or its path is not
    /// UTF-8.
    pub fn new() -> Result<Self> {
        let tmp = TempDir::new().context("create seed directory")?;
        let path = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf())
            .map_err(|p| anyhow!("seed directory {} is not UTF-8", p.display()))?;
        Ok(Self { _tmp: tmp, path })
    }

    /// Directory path.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Write `contents` to `file_name` inside the directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write(&self, file_name: &str, contents: &str) -> Result<Utf8PathBuf> {
        let target = self.path.join(file_name);
        fs::write(&target, contents).with_context(|| format!("write {target}"))?;
        Ok(target)
    }
}
