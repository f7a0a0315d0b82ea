//! Behavioural tests for seed composition using `rstest-bdd`.
//!
//! Step implementations live under [`steps`]; [`scenarios`] binds the feature
//! files in `tests/features` to the shared [`fixtures::SeedWorld`].

mod fixtures;
mod scenarios;
mod steps;
