//! An [`Applier`] that records documents instead of executing them.

use std::sync::Arc;

use parking_lot::Mutex;
use seed_compose::{Applier, ConsolidatedDocument, QualifiedName, SeedError, SeedResult};

/// Records every document it receives, optionally failing each hand-off.
#[derive(Debug, Default)]
pub struct RecordingApplier {
    documents: Mutex<Vec<ConsolidatedDocument>>,
    failure: Option<(i32, String)>,
}

impl RecordingApplier {
    /// An applier that accepts everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An applier that records the document and then reports `status`.
    #[must_use]
    pub fn failing(status: i32, message: impl Into<String>) -> Self {
        Self {
            documents: Mutex::default(),
            failure: Some((status, message.into())),
        }
    }

    /// Documents received so far.
    #[must_use]
    pub fn documents(&self) -> Vec<ConsolidatedDocument> {
        self.documents.lock().clone()
    }

    /// Seeds whose documents were received, in order.
    #[must_use]
    pub fn seeds(&self) -> Vec<QualifiedName> {
        self.documents
            .lock()
            .iter()
            .map(|doc| doc.seed().clone())
            .collect()
    }

    /// The most recent document parsed as JSON.
    #[must_use]
    pub fn last_json(&self) -> Option<serde_json::Value> {
        self.documents
            .lock()
            .last()
            .and_then(|doc| serde_json::from_str(doc.as_str()).ok())
    }
}

impl Applier for RecordingApplier {
    fn apply(&self, document: &ConsolidatedDocument) -> SeedResult<()> {
        self.documents.lock().push(document.clone());
        self.failure.as_ref().map_or(Ok(()), |(status, message)| {
            Err(Arc::new(SeedError::ApplierFailure {
                seed: document.seed().clone(),
                status: *status,
                message: message.clone(),
            }))
        })
    }
}
