//! Serialised form of a resolved specification.

use std::fmt;

use crate::model::{QualifiedName, Specification};
use crate::{SeedResult, SeedResultExt};

/// Pretty-printed JSON of a consolidated specification, tagged with the seed
/// it was resolved from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsolidatedDocument {
    seed: QualifiedName,
    body: String,
}

impl ConsolidatedDocument {
    /// Serialise `spec`, omitting unset fields and empty collections.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SeedError::Serialization`] when serialisation fails.
    pub fn render(seed: &QualifiedName, spec: &Specification) -> SeedResult<Self> {
        let body = serde_json::to_string_pretty(spec).into_seed()?;
        Ok(Self {
            seed: seed.clone(),
            body,
        })
    }

    /// Seed the document was resolved from.
    #[must_use]
    pub const fn seed(&self) -> &QualifiedName {
        &self.seed
    }

    /// The JSON text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.body
    }

    /// Take the JSON text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.body
    }
}

impl fmt::Display for ConsolidatedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.body)
    }
}
