//! Key-based deep merging of specification fragments.
//!
//! Each entity type states explicitly which incoming fields override the
//! accumulator ([`Merge`]) and which fields identify it inside a list
//! ([`Keyed`]). Lists are merged by identity key: matches merge in place,
//! misses are appended in incoming order.
//!
//! # Example
//!
//! ```rust
//! use seed_compose::merge::Merge;
//! use seed_compose::Specification;
//!
//! let mut acc = Specification { roles: vec!["a".into(), "b".into()], ..Specification::default() };
//! acc.merge(Specification { roles: vec!["b".into(), "c".into()], ..Specification::default() });
//! assert_eq!(acc.roles, ["a", "b", "c"]);
//! ```

mod entities;
mod primitives;

pub use primitives::{merge_keyed, merge_map, merge_matching, merge_set, overwrite_if_set, overwrite_non_empty};

/// Folds an incoming value into `self` in place.
///
/// Implementations must be idempotent: merging the same value twice leaves
/// `self` as it was after the first merge.
pub trait Merge {
    /// Merge `incoming` into `self`.
    fn merge(&mut self, incoming: Self);
}

/// Names the identity key of an entity inside a keyed list.
pub trait Keyed {
    /// Borrowed identity key.
    type Key<'a>: PartialEq
    where
        Self: 'a;

    /// Returns the identity key.
    fn key(&self) -> Self::Key<'_>;
}
