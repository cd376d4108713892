//! Engine error type
//!
//! A list call either returns a complete `PageResult` or fails with a
//! typed error; there is no partial success. Out-of-range pages and
//! empty filter matches are results, not errors.

use thiserror::Error;

use crate::query::ValidationError;
use crate::source::SourceError;

/// Errors a list call can fail with.
#[derive(Debug, Clone, Error)]
pub enum QueryError {
    /// Request rejected before any record access
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Record source failed to produce a snapshot
    #[error("record source error: {0}")]
    Source(#[from] SourceError),
}

impl QueryError {
    /// Returns true when the failure is a client-side validation reject.
    pub fn is_validation(&self) -> bool {
        matches!(self, QueryError::Validation(_))
    }

    /// Returns the inner validation error, if any.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            QueryError::Validation(err) => Some(err),
            QueryError::Source(_) => None,
        }
    }
}

/// Result type for engine operations
pub type QueryResult<T> = Result<T, QueryError>;
