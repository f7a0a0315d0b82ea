//! Figment provider reading seed documents with `serde-saphyr`.

use std::collections::BTreeMap;

use camino::Utf8PathBuf;
use figment::{
    Metadata, Profile, Provider,
    error::Kind,
    value::{Dict, Value as FigmentValue},
};
use serde_saphyr::Options;

/// Figment provider over an in-memory YAML seed document.
///
/// Booleans are parsed strictly, so `enabled: yes` is a string rather than
/// `true`.
#[derive(Debug, Clone)]
pub struct SaphyrYaml {
    path: Utf8PathBuf,
    contents: String,
}

impl SaphyrYaml {
    /// Wrap `contents` read from `path`; the path only labels errors.
    #[must_use]
    pub fn string(path: impl Into<Utf8PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }

    fn parse_value(&self) -> Result<FigmentValue, serde_saphyr::Error> {
        serde_saphyr::from_str_with_options(
            &self.contents,
            Options {
                strict_booleans: true,
                ..Options::default()
            },
        )
    }
}

impl Provider for SaphyrYaml {
    fn metadata(&self) -> Metadata {
        Metadata::from("seed YAML", self.path.as_std_path())
    }

    fn data(&self) -> Result<BTreeMap<Profile, Dict>, figment::Error> {
        let value = self.parse_value().map_err(|err| {
            figment::Error::from(Kind::Message(format!(
                "failed to parse {}: {err}",
                self.path
            )))
        })?;
        let actual = value.to_actual();
        let dict = value
            .into_dict()
            .ok_or_else(|| figment::Error::from(Kind::InvalidType(actual, "map".into())))?;
        Ok(Profile::Default.collect(dict))
    }
}
