//! Result types for list execution

use serde::{Deserialize, Serialize};

use crate::record::Record;

use super::slicer::Pagination;

/// Complete result of a list query: one page of records plus metadata.
///
/// Serializes to the `{ "data": [...], "pagination": {...} }` shape the
/// HTTP layer returns verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult {
    /// Records of the requested page, in result order
    pub data: Vec<Record>,
    /// Pagination metadata
    pub pagination: Pagination,
}

impl PageResult {
    /// Returns true if the page holds no records.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of records in this page. Never exceeds the limit.
    pub fn len(&self) -> usize {
        self.data.len()
    }
}
