//! Declarative seed composition.
//!
//! A *seed* is a named fragment of identity-domain configuration (roles,
//! regions, services, domains and everything nested below them) that may
//! depend on other seeds. This crate resolves a seed's dependency graph
//! depth-first, validates every fragment, deep-merges them into one
//! [`Specification`] and hands the result to an [`Applier`].
//!
//! ```
//! use seed_compose::{MemoryStore, QualifiedName, Resolver, Seed, Specification};
//!
//! let base = Specification {
//!     roles: vec!["admin".into()],
//!     ..Specification::default()
//! };
//! let extra = Specification {
//!     roles: vec!["member".into(), "admin".into()],
//!     ..Specification::default()
//! };
//! let store: MemoryStore = [
//!     Seed::new(QualifiedName::new("ops", "base"), base),
//!     Seed::new(QualifiedName::new("ops", "app"), extra).with_dependencies(["base"]),
//! ]
//! .into_iter()
//! .collect();
//!
//! let resolution = Resolver::new(&store)
//!     .resolve_name(&QualifiedName::new("ops", "app"))
//!     .expect("resolution succeeds");
//! assert_eq!(resolution.specification().roles, ["admin", "member"]);
//! ```

use std::sync::Arc;

pub mod apply;
mod engine;
mod error;
pub mod merge;
pub mod model;
pub mod reconcile;
pub mod resolve;
mod result_ext;
pub mod store;
pub mod validate;

pub use apply::{Applier, CommandApplier, ConsolidatedDocument};
pub use engine::Engine;
pub use error::{AggregatedErrors, SeedError};
pub use merge::{Keyed, Merge};
pub use model::{QualifiedName, Seed, Specification};
pub use reconcile::{Outcome, ReconcileReport, Reconciler, SeedEvent};
pub use resolve::{Accumulator, Resolution, Resolver};
pub use result_ext::SeedResultExt;
pub use store::{MemoryStore, SeedLoader, SeedStore};
pub use validate::validate;

/// Default namespace applied to seeds that do not declare one.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Result alias shared by every fallible operation in this crate.
///
/// Errors are reference counted so a single failure can be reported through
/// several layers (for example inside [`SeedError::InvalidSeed`] or an
/// [`AggregatedErrors`] list) without cloning.
pub type SeedResult<T> = Result<T, Arc<SeedError>>;
