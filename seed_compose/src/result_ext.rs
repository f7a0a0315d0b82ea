//! Extension for mapping foreign errors into `SeedResult` concisely.
//!
//! Replaces repeated `.map_err(|e| Arc::new(SeedError::from(e)))` chains when a
//! foreign error already converts into [`SeedError`].
//!
//! # Examples
//!
//! ```
//! use seed_compose::{SeedResult, SeedResultExt};
//!
//! fn render() -> SeedResult<String> {
//!     serde_json::to_string(&["admin", "member"]).into_seed()
//! }
//! # assert_eq!(render().ok().as_deref(), Some(r#"["admin","member"]"#));
//! ```

use std::sync::Arc;

use crate::{SeedError, SeedResult};

/// Maps any `Result<T, E>` with `E: Into<SeedError>` into a `SeedResult<T>`.
pub trait SeedResultExt<T, E> {
    /// Convert the error side into a shared [`SeedError`].
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into `Arc<SeedError>`.
    fn into_seed(self) -> SeedResult<T>;
}

impl<T, E> SeedResultExt<T, E> for Result<T, E>
where
    E: Into<SeedError>,
{
    fn into_seed(self) -> SeedResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}
