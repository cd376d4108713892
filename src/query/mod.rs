//! Query subsystem
//!
//! The caller-facing query model and its validation.
//!
//! # Design Principles
//!
//! - Invalid input is rejected before any record access; bounds are
//!   never silently clamped
//! - Validation is data-driven against the listing schema: one check
//!   covers every field and condition combination
//! - Deterministic: same query, same schema, same verdict

mod ast;
mod errors;
mod validate;

pub use ast::{Condition, FilterSpec, ListQuery, PageRequest, SortDirection, SortSpec};
pub use errors::{Severity, ValidationError, ValidationResult};
pub use validate::QueryValidator;
