//! Entity paths used to locate validation failures.

use std::fmt;

/// Location of an entity inside a specification, for example
/// `domain "x", project "y"`.
#[derive(Clone, Debug, Default)]
pub(super) struct EntityPath(Vec<String>);

impl EntityPath {
    /// Path of a child entity of `kind` named `name`.
    pub(super) fn child(&self, kind: &str, name: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(format!("{kind} \"{name}\""));
        Self(segments)
    }
}

impl fmt::Display for EntityPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("specification");
        }
        f.write_str(&self.0.join(", "))
    }
}
