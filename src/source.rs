//! Record source seam
//!
//! The engine computes over a snapshot of candidate records. Where that
//! snapshot comes from — and any coarse pre-filter such as "records
//! owned by actor X" — is the persistence layer's concern, reached
//! through the `RecordSource` trait. A snapshot must be internally
//! consistent: no half-written record is ever visible. Two snapshots
//! taken at different times may differ; the engine makes no cross-call
//! consistency promise.

use thiserror::Error;

use crate::record::Record;

/// Failure to produce a snapshot.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct SourceError {
    message: String,
}

impl SourceError {
    /// Creates a source error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Enumerates candidate records for one list call.
pub trait RecordSource {
    /// Returns an internally consistent snapshot of candidate records.
    fn snapshot(&self) -> Result<Vec<Record>, SourceError>;
}

/// In-memory record source; every call snapshots the current contents.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    records: Vec<Record>,
}

impl InMemorySource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record.
    pub fn insert(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when the source holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordSource for InMemorySource {
    fn snapshot(&self) -> Result<Vec<Record>, SourceError> {
        Ok(self.records.clone())
    }
}
