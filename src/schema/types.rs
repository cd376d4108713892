//! Listing schema type definitions
//!
//! A listing schema names the fields a caller may filter and sort on, and
//! assigns each a semantic type. Condition applicability is data-driven:
//! the tagged type decides which conditions apply, so the validator needs
//! no per-field special cases.
//!
//! Supported types:
//! - string: UTF-8 string (lexical ordering, substring search)
//! - int: 64-bit signed integer
//! - float: 64-bit floating point
//! - bool: Boolean
//! - datetime: RFC 3339 timestamp, compared as an instant

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::query::SortSpec;

/// Semantic field types for filterable/sortable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// 64-bit signed integer
    Int,
    /// 64-bit floating point
    Float,
    /// Boolean
    Bool,
    /// RFC 3339 timestamp, compared as an instant
    #[serde(rename = "datetime")]
    DateTime,
}

impl FieldType {
    /// Returns the type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Int => "int",
            FieldType::Float => "float",
            FieldType::Bool => "bool",
            FieldType::DateTime => "datetime",
        }
    }

    /// Substring search applies to strings only.
    pub fn supports_contains(&self) -> bool {
        matches!(self, FieldType::String)
    }

    /// Range bounds apply to the ordered types.
    pub fn supports_range(&self) -> bool {
        matches!(
            self,
            FieldType::String | FieldType::Int | FieldType::Float | FieldType::DateTime
        )
    }

    /// Checks that a condition operand has this type. No coercion: a
    /// string operand never matches an int field, and a datetime
    /// operand must parse as RFC 3339. Float fields accept any JSON
    /// number; int fields only integral numbers.
    pub fn accepts(&self, operand: &Value) -> bool {
        match self {
            FieldType::String => operand.is_string(),
            FieldType::Int => operand.as_i64().is_some(),
            FieldType::Float => operand.is_number(),
            FieldType::Bool => operand.is_boolean(),
            FieldType::DateTime => operand
                .as_str()
                .is_some_and(|s| chrono::DateTime::parse_from_rfc3339(s).is_ok()),
        }
    }
}

/// Schema for one listing: the allowed filter/sort fields and the sort
/// applied when a query specifies none.
///
/// Fields are kept in a `BTreeMap` so validation walks them in a fixed
/// lexicographic order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListSchema {
    /// Listing name (e.g. "threads", "posts")
    pub name: String,
    /// Allowed field names and their semantic types
    pub fields: BTreeMap<String, FieldType>,
    /// Sort applied when the query carries no sort spec.
    /// When absent, records are ordered by id ascending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_sort: Option<SortSpec>,
}

impl ListSchema {
    /// Creates a new listing schema.
    pub fn new(name: impl Into<String>, fields: BTreeMap<String, FieldType>) -> Self {
        Self {
            name: name.into(),
            fields,
            default_sort: None,
        }
    }

    /// Sets the default sort.
    pub fn with_default_sort(mut self, sort: SortSpec) -> Self {
        self.default_sort = Some(sort);
        self
    }

    /// Looks up the declared type of a field.
    pub fn field_type(&self, field: &str) -> Option<FieldType> {
        self.fields.get(field).copied()
    }

    /// Returns true if the field is declared.
    pub fn has_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Validates the schema structure itself (not a query).
    pub fn validate_structure(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("Schema name must not be empty".into());
        }

        if let Some(sort) = &self.default_sort {
            if !self.has_field(&sort.field) {
                return Err(format!(
                    "Default sort references undeclared field '{}'",
                    sort.field
                ));
            }
        }

        Ok(())
    }
}
