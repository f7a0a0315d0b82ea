//! Test helpers shared across the seed-compose workspace.
//!
//! Integration and behavioural suites use these to build seeds, write seed
//! directories, capture applied documents and isolate environment state.

pub mod applier;
pub mod figment;
pub mod seed_dir;
pub mod seeds;
pub mod text;

pub use applier::RecordingApplier;
pub use seed_dir::SeedDir;
pub use seeds::SeedBuilder;
