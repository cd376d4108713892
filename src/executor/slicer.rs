//! Page slicing for list execution
//!
//! Extracts the requested contiguous slice from the ordered, filtered
//! records and computes the pagination metadata. An out-of-range page is
//! a normal result (empty data, full metadata), never an error.

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Pagination metadata returned with every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Requested page number, 1-based
    pub current: u64,
    /// Requested page size
    pub limit: u64,
    /// Total records matching the filter, independent of page/limit
    pub records: u64,
    /// Total pages: ceil(records / limit); 0 when nothing matched
    pub pages: u64,
}

/// Slices ordered records into pages
pub struct PageSlicer;

impl PageSlicer {
    /// Extracts page `page` of size `limit` from the ordered records.
    ///
    /// Callers pass validated inputs (`page >= 1`, `limit >= 1`).
    /// Metadata is returned unconditionally, even for pages past the
    /// end of the result set.
    pub fn slice(ordered: Vec<Record>, page: u64, limit: u64) -> (Vec<Record>, Pagination) {
        let records = ordered.len() as u64;
        let pages = if records == 0 {
            0
        } else {
            records.div_ceil(limit)
        };

        let pagination = Pagination {
            current: page,
            limit,
            records,
            pages,
        };

        let start = (page - 1).saturating_mul(limit);
        if start >= records {
            return (Vec::new(), pagination);
        }

        let data: Vec<Record> = ordered
            .into_iter()
            .skip(start as usize)
            .take(limit as usize)
            .collect();

        (data, pagination)
    }
}
