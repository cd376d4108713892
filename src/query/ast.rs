//! Query AST structures
//!
//! Defines the caller-supplied query representation: per-field filter
//! conditions, a sort directive, and the page request. All types are
//! transient request values; the engine never retains them.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A single per-field match condition.
///
/// Serialized in the externally tagged form callers send over the wire:
/// `{"exact": v}`, `{"contains": "s"}`, `{"range": {"from": v, "to": v}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    /// Equality in the field's semantic type (datetimes compare as
    /// instants, not as raw text)
    Exact(Value),
    /// Case-preserving substring test; string fields only. An empty
    /// search string matches every string value.
    Contains(String),
    /// Inclusive range; an absent bound leaves that side unbounded.
    /// A null field value never matches a range with any bound set.
    Range {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from: Option<Value>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        to: Option<Value>,
    },
}

impl Condition {
    /// Returns the condition name for error messages.
    pub fn op_name(&self) -> &'static str {
        match self {
            Condition::Exact(_) => "exact",
            Condition::Contains(_) => "contains",
            Condition::Range { .. } => "range",
        }
    }
}

/// Per-field filter conditions, combined with AND semantics.
///
/// An absent field name means "no constraint on that field". Conditions
/// are kept in a `BTreeMap` so validation and evaluation walk them in a
/// fixed lexicographic order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSpec {
    conditions: BTreeMap<String, Condition>,
}

impl FilterSpec {
    /// Creates an empty filter (matches every record).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the condition for a field, replacing any previous one.
    pub fn set(&mut self, field: impl Into<String>, condition: Condition) {
        self.conditions.insert(field.into(), condition);
    }

    /// Returns the condition for a field, if any.
    pub fn get(&self, field: &str) -> Option<&Condition> {
        self.conditions.get(field)
    }

    /// Iterates conditions in lexicographic field order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Condition)> {
        self.conditions.iter()
    }

    /// Returns true when no field is constrained.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Number of constrained fields.
    pub fn len(&self) -> usize {
        self.conditions.len()
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Sort specification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// Field to sort by
    pub field: String,
    /// Sort direction
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// Requested page of the result set.
///
/// Carried as signed integers so out-of-bounds requests (`limit = 0`,
/// `page = -1`) survive deserialization and are rejected by validation
/// instead of being silently clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number, 1-based
    pub page: i64,
    /// Page size; must be between 1 and the configured ceiling
    pub limit: i64,
}

impl PageRequest {
    pub fn new(page: i64, limit: i64) -> Self {
        Self { page, limit }
    }
}

/// A complete list query: filter + sort + page request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListQuery {
    /// Per-field filter conditions (AND semantics)
    #[serde(default, skip_serializing_if = "FilterSpec::is_empty")]
    pub filter: FilterSpec,
    /// Sort directive; falls back to the schema default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortSpec>,
    /// Requested page
    pub page: PageRequest,
}

impl ListQuery {
    /// Creates a query for the given page with no filter and no sort.
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            filter: FilterSpec::new(),
            sort: None,
            page: PageRequest::new(page, limit),
        }
    }

    /// Adds an exact-match condition.
    pub fn filter_exact(mut self, field: impl Into<String>, value: Value) -> Self {
        self.filter.set(field, Condition::Exact(value));
        self
    }

    /// Adds a substring condition.
    pub fn filter_contains(mut self, field: impl Into<String>, needle: impl Into<String>) -> Self {
        self.filter.set(field, Condition::Contains(needle.into()));
        self
    }

    /// Adds an inclusive range condition.
    pub fn filter_range(
        mut self,
        field: impl Into<String>,
        from: Option<Value>,
        to: Option<Value>,
    ) -> Self {
        self.filter.set(field, Condition::Range { from, to });
        self
    }

    /// Sets the sort directive.
    pub fn sort_by(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_builder() {
        let query = ListQuery::new(2, 25)
            .filter_exact("status", json!("open"))
            .filter_contains("title", "rust")
            .sort_by(SortSpec::desc("created_at"));

        assert_eq!(query.page, PageRequest::new(2, 25));
        assert_eq!(query.filter.len(), 2);
        assert_eq!(
            query.filter.get("status"),
            Some(&Condition::Exact(json!("open")))
        );
        assert_eq!(query.sort, Some(SortSpec::desc("created_at")));
    }

    #[test]
    fn test_filter_iteration_is_lexicographic() {
        let query = ListQuery::new(1, 10)
            .filter_exact("zeta", json!(1))
            .filter_exact("alpha", json!(2))
            .filter_exact("mid", json!(3));

        let order: Vec<&str> = query.filter.iter().map(|(f, _)| f.as_str()).collect();
        assert_eq!(order, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_condition_wire_shape() {
        let exact: Condition = serde_json::from_value(json!({"exact": "open"})).unwrap();
        assert_eq!(exact, Condition::Exact(json!("open")));

        let contains: Condition = serde_json::from_value(json!({"contains": "rust"})).unwrap();
        assert_eq!(contains, Condition::Contains("rust".into()));

        let range: Condition = serde_json::from_value(json!({"range": {"from": 1}})).unwrap();
        assert_eq!(
            range,
            Condition::Range {
                from: Some(json!(1)),
                to: None,
            }
        );
    }

    #[test]
    fn test_condition_op_names() {
        assert_eq!(Condition::Exact(json!(1)).op_name(), "exact");
        assert_eq!(Condition::Contains(String::new()).op_name(), "contains");
        assert_eq!(Condition::Range { from: None, to: None }.op_name(), "range");
    }

    #[test]
    fn test_setting_field_twice_replaces_condition() {
        let query = ListQuery::new(1, 10)
            .filter_exact("status", json!("open"))
            .filter_exact("status", json!("closed"));

        assert_eq!(query.filter.len(), 1);
        assert_eq!(
            query.filter.get("status"),
            Some(&Condition::Exact(json!("closed")))
        );
    }
}
