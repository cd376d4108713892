//! Validation error taxonomy
//!
//! Error codes:
//! - PQ_INVALID_LIMIT (REJECT)
//! - PQ_INVALID_PAGE (REJECT)
//! - PQ_INVALID_FILTER_FIELD (REJECT)
//! - PQ_INVALID_SORT_FIELD (REJECT)
//!
//! All are local validation failures detected before any record access.
//! None are retried internally; retry, if any, is a caller decision.

use std::fmt;
use thiserror::Error;

/// Severity levels for validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Client request rejected; no query execution occurred
    Reject,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
        }
    }
}

/// Structurally invalid query input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Limit below 1 or above the configured ceiling
    #[error("invalid limit {limit}: must be between 1 and {max}")]
    InvalidLimit { limit: i64, max: u64 },

    /// Page below 1
    #[error("invalid page {page}: must be at least 1")]
    InvalidPage { page: i64 },

    /// Filter references an undeclared field, or a condition that does
    /// not apply to the field's type
    #[error("invalid filter field '{field}': {reason}")]
    InvalidFilterField { field: String, reason: String },

    /// Sort references an undeclared field
    #[error("invalid sort field '{field}': {reason}")]
    InvalidSortField { field: String, reason: String },
}

impl ValidationError {
    /// Create an invalid limit error
    pub fn invalid_limit(limit: i64, max: u64) -> Self {
        Self::InvalidLimit { limit, max }
    }

    /// Create an invalid page error
    pub fn invalid_page(page: i64) -> Self {
        Self::InvalidPage { page }
    }

    /// Create an invalid filter field error
    pub fn invalid_filter_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFilterField {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid sort field error
    pub fn invalid_sort_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSortField {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the string error code
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::InvalidLimit { .. } => "PQ_INVALID_LIMIT",
            ValidationError::InvalidPage { .. } => "PQ_INVALID_PAGE",
            ValidationError::InvalidFilterField { .. } => "PQ_INVALID_FILTER_FIELD",
            ValidationError::InvalidSortField { .. } => "PQ_INVALID_SORT_FIELD",
        }
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        Severity::Reject
    }

    /// Returns the offending field name if applicable
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::InvalidFilterField { field, .. }
            | ValidationError::InvalidSortField { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationError>;
