//! Listing schema subsystem
//!
//! Schemas are mandatory: every list query is validated against the
//! schema of its listing before any record is touched.
//!
//! # Design Principles
//!
//! - Field names and condition applicability are data-driven: the tagged
//!   `FieldType` decides what each field supports
//! - No coercion: operand types must match declared field types exactly
//! - Deterministic validation order (lexicographic by field name)

mod registry;
mod types;

pub use registry::SchemaRegistry;
pub use types::{FieldType, ListSchema};
