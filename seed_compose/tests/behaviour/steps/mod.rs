//! Step definitions, grouped by feature.

mod loading_steps;
mod reconcile_steps;
mod resolution_steps;

use seed_compose::{DEFAULT_NAMESPACE, QualifiedName};
use test_helpers::text::{list, unquote};

/// Qualify a quoted placeholder against the default namespace.
fn qualified(value: &str) -> QualifiedName {
    QualifiedName::qualify(unquote(value), DEFAULT_NAMESPACE)
}

/// Qualify every entry of a quoted, comma-separated placeholder.
fn qualified_list(value: &str) -> Vec<QualifiedName> {
    list(value)
        .iter()
        .map(|item| QualifiedName::qualify(item, DEFAULT_NAMESPACE))
        .collect()
}
