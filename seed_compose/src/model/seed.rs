//! Seeds: named specification fragments with dependencies.

use super::{QualifiedName, Specification};

/// One named, storable fragment of configuration.
///
/// A seed is immutable once built; stores hand out shared references and the
/// resolver only ever reads them.
#[derive(Clone, Debug, PartialEq)]
pub struct Seed {
    name: QualifiedName,
    dependencies: Vec<String>,
    spec: Specification,
}

impl Seed {
    /// Create a seed without dependencies.
    #[must_use]
    pub const fn new(name: QualifiedName, spec: Specification) -> Self {
        Self {
            name,
            dependencies: Vec::new(),
            spec,
        }
    }

    /// Replace the dependency references, keeping declaration order.
    #[must_use]
    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }

    /// Identity of this seed.
    #[must_use]
    pub const fn qualified_name(&self) -> &QualifiedName {
        &self.name
    }

    /// Dependency references exactly as declared.
    #[must_use]
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    /// Dependency references qualified against this seed's namespace, paired
    /// with the raw reference.
    pub fn qualified_dependencies(&self) -> impl Iterator<Item = (&str, QualifiedName)> {
        self.dependencies.iter().map(|reference| {
            (
                reference.as_str(),
                QualifiedName::qualify(reference, self.name.namespace()),
            )
        })
    }

    /// The seed's own specification.
    #[must_use]
    pub const fn spec(&self) -> &Specification {
        &self.spec
    }
}
