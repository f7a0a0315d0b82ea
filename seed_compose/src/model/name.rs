//! Fully-qualified seed identities.

use std::fmt;

/// Separator between namespace and name in a qualified seed reference.
pub const NAMESPACE_SEPARATOR: char = '/';

/// Identity of a seed: `namespace/name`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QualifiedName {
    namespace: String,
    name: String,
}

impl QualifiedName {
    /// Build a qualified name from its parts.
    #[must_use]
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Qualify a dependency reference.
    ///
    /// References that already contain a namespace separator are split at the
    /// first separator and used as-is. Bare names take `default_namespace`.
    ///
    /// ```
    /// use seed_compose::QualifiedName;
    ///
    /// let bare = QualifiedName::qualify("keystone", "monsoon3");
    /// assert_eq!(bare.to_string(), "monsoon3/keystone");
    ///
    /// let explicit = QualifiedName::qualify("shared/roles", "monsoon3");
    /// assert_eq!(explicit.namespace(), "shared");
    /// ```
    #[must_use]
    pub fn qualify(reference: &str, default_namespace: &str) -> Self {
        reference.split_once(NAMESPACE_SEPARATOR).map_or_else(
            || Self::new(default_namespace, reference),
            |(namespace, name)| Self::new(namespace, name),
        )
    }

    /// Namespace component.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Name component.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{NAMESPACE_SEPARATOR}{}", self.namespace, self.name)
    }
}
