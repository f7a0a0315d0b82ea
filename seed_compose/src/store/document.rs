//! On-disk seed document shape.

use serde::{Deserialize, Serialize};

use crate::model::{QualifiedName, Seed, Specification};

/// A seed as written in a YAML, TOML or JSON file.
///
/// ```yaml
/// metadata:
///   name: keystone
///   namespace: monsoon3
/// spec:
///   dependencies: [regions]
///   roles: [admin, member]
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedDocument {
    /// Identity overrides; both fields are optional.
    #[serde(default)]
    pub metadata: SeedMetadata,
    /// Dependencies and the specification body.
    pub spec: SeedSpec,
}

/// Optional identity of a seed document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedMetadata {
    /// Seed name; defaults to the file stem.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Seed namespace; defaults to the loader's default namespace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

/// The `spec` body of a seed document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedSpec {
    /// Dependency references, bare or `namespace/name`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
    /// Everything else under `spec`.
    #[serde(flatten)]
    pub specification: Specification,
}

impl SeedDocument {
    /// Turn the document into a [`Seed`], filling missing identity fields.
    #[must_use]
    pub fn into_seed(self, fallback_name: &str, default_namespace: &str) -> Seed {
        let Self { metadata, spec } = self;
        let name = metadata
            .name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| fallback_name.to_owned());
        let namespace = metadata
            .namespace
            .filter(|namespace| !namespace.is_empty())
            .unwrap_or_else(|| default_namespace.to_owned());
        Seed::new(QualifiedName::new(namespace, name), spec.specification)
            .with_dependencies(spec.dependencies)
    }
}
