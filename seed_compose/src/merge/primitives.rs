//! Field- and collection-level merge rules shared by every entity.

use std::collections::BTreeMap;

use super::{Keyed, Merge};

/// Overwrite `target` when `incoming` is set; leave it untouched otherwise.
pub fn overwrite_if_set<T>(target: &mut Option<T>, incoming: Option<T>) {
    if incoming.is_some() {
        *target = incoming;
    }
}

/// Overwrite a required string field when `incoming` is non-empty.
pub fn overwrite_non_empty(target: &mut String, incoming: String) {
    if !incoming.is_empty() {
        *target = incoming;
    }
}

/// Union `incoming` into `target`, keeping first-seen order and skipping
/// values already present.
pub fn merge_set<T: PartialEq>(target: &mut Vec<T>, incoming: Vec<T>) {
    for value in incoming {
        if !target.contains(&value) {
            target.push(value);
        }
    }
}

/// Shallow key union: every incoming key overwrites the target's value.
pub fn merge_map<V>(target: &mut BTreeMap<String, V>, incoming: BTreeMap<String, V>) {
    target.extend(incoming);
}

/// Merge a list using `same` to decide whether two entries are one entity.
///
/// A matched incoming entry is merged into the first matching target entry;
/// unmatched entries are appended in incoming order.
pub fn merge_matching<T, F>(target: &mut Vec<T>, incoming: Vec<T>, same: F)
where
    T: Merge,
    F: Fn(&T, &T) -> bool,
{
    for item in incoming {
        if let Some(existing) = target.iter_mut().find(|existing| same(existing, &item)) {
            existing.merge(item);
            continue;
        }
        target.push(item);
    }
}

/// Merge a list by each entry's [`Keyed::key`].
pub fn merge_keyed<T: Keyed + Merge>(target: &mut Vec<T>, incoming: Vec<T>) {
    merge_matching(target, incoming, |existing, item| existing.key() == item.key());
}
