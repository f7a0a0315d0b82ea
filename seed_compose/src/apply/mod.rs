//! Hand-off of a consolidated specification to whatever executes it.

mod command;
mod document;

use crate::SeedResult;

pub use command::CommandApplier;
pub use document::ConsolidatedDocument;

/// Receives a consolidated document and reports whether applying it worked.
///
/// The engine hands the document over wholesale and never retries.
pub trait Applier {
    /// Apply `document`.
    ///
    /// # Errors
    ///
    /// Implementations report failures as [`crate::SeedError`] values,
    /// typically [`crate::SeedError::ApplierFailure`].
    fn apply(&self, document: &ConsolidatedDocument) -> SeedResult<()>;
}

impl<A: Applier + ?Sized> Applier for &A {
    fn apply(&self, document: &ConsolidatedDocument) -> SeedResult<()> {
        (**self).apply(document)
    }
}

impl<A: Applier + ?Sized> Applier for Box<A> {
    fn apply(&self, document: &ConsolidatedDocument) -> SeedResult<()> {
        (**self).apply(document)
    }
}
