//! Error types produced while loading, resolving, and applying seeds.

mod aggregate;
mod constructors;
mod conversions;
mod types;

pub use aggregate::AggregatedErrors;
pub use types::SeedError;
