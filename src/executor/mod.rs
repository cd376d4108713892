//! List execution subsystem
//!
//! Consumes a validated query and a record snapshot, produces one page
//! of results with pagination metadata.
//!
//! # Execution Flow (strict order)
//!
//! 1. Validate query against schema and configuration
//! 2. Filter records strictly according to the filter spec
//! 3. Sort matches into a total order (semantic key + id tie-break)
//! 4. Slice the requested page and compute metadata
//!
//! # Invariants
//!
//! - Deterministic: same inputs, same `PageResult`
//! - Read-only: input records are never mutated
//! - Complete result or typed error; no partial success

mod engine;
mod errors;
mod filters;
mod result;
mod slicer;
mod sorter;
mod values;

pub use engine::QueryEngine;
pub use errors::{QueryError, QueryResult};
pub use filters::ConditionFilter;
pub use result::PageResult;
pub use slicer::{PageSlicer, Pagination};
pub use sorter::ResultSorter;
