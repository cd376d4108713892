//! Query validator
//!
//! Validates a list query against its listing schema and the engine
//! configuration before any record is read.
//!
//! Validation semantics:
//! - Limit must be within [1, max_limit]; page must be >= 1
//! - Every filtered field must be declared in the schema
//! - Conditions must apply to the field's type (no `contains` on a bool)
//! - Condition operands must match the field's type (no coercion)
//! - Sort field must be declared
//!
//! Check order is fixed: limit, page, filter fields (lexicographic),
//! sort field. The first failure wins and nothing is executed.

use crate::config::QueryConfig;
use crate::schema::ListSchema;

use super::ast::{Condition, FilterSpec, ListQuery, PageRequest, SortSpec};
use super::errors::{ValidationError, ValidationResult};

/// Validates queries against a schema and configured limits.
///
/// The validator does not touch records and is deterministic.
pub struct QueryValidator<'a> {
    schema: &'a ListSchema,
    config: &'a QueryConfig,
}

impl<'a> QueryValidator<'a> {
    /// Creates a validator for the given schema and configuration.
    pub fn new(schema: &'a ListSchema, config: &'a QueryConfig) -> Self {
        Self { schema, config }
    }

    /// Validates a complete list query.
    pub fn validate(&self, query: &ListQuery) -> ValidationResult<()> {
        self.validate_page_request(&query.page)?;
        self.validate_filter(&query.filter)?;
        if let Some(sort) = &query.sort {
            self.validate_sort(sort)?;
        }
        Ok(())
    }

    /// Checks pagination bounds. Violations are rejected, never clamped.
    fn validate_page_request(&self, page: &PageRequest) -> ValidationResult<()> {
        if page.limit < 1 || page.limit as u64 > self.config.max_limit {
            return Err(ValidationError::invalid_limit(
                page.limit,
                self.config.max_limit,
            ));
        }
        if page.page < 1 {
            return Err(ValidationError::invalid_page(page.page));
        }
        Ok(())
    }

    /// Checks every filter condition against the schema, in
    /// lexicographic field order.
    fn validate_filter(&self, filter: &FilterSpec) -> ValidationResult<()> {
        for (field, condition) in filter.iter() {
            let field_type = self.schema.field_type(field).ok_or_else(|| {
                ValidationError::invalid_filter_field(field, "not a filterable field")
            })?;

            match condition {
                Condition::Exact(operand) => {
                    // exact applies to every type; null matches null
                    if !operand.is_null() && !field_type.accepts(operand) {
                        return Err(ValidationError::invalid_filter_field(
                            field,
                            format!(
                                "exact operand does not match field type '{}'",
                                field_type.type_name()
                            ),
                        ));
                    }
                }
                Condition::Contains(_) => {
                    if !field_type.supports_contains() {
                        return Err(ValidationError::invalid_filter_field(
                            field,
                            format!(
                                "contains is not applicable to field type '{}'",
                                field_type.type_name()
                            ),
                        ));
                    }
                }
                Condition::Range { from, to } => {
                    if !field_type.supports_range() {
                        return Err(ValidationError::invalid_filter_field(
                            field,
                            format!(
                                "range is not applicable to field type '{}'",
                                field_type.type_name()
                            ),
                        ));
                    }
                    for bound in [from, to].into_iter().flatten() {
                        if !field_type.accepts(bound) {
                            return Err(ValidationError::invalid_filter_field(
                                field,
                                format!(
                                    "range bound does not match field type '{}'",
                                    field_type.type_name()
                                ),
                            ));
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Checks the sort field against the schema.
    fn validate_sort(&self, sort: &SortSpec) -> ValidationResult<()> {
        if !self.schema.has_field(&sort.field) {
            return Err(ValidationError::invalid_sort_field(
                &sort.field,
                "not a sortable field",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{ListQuery, SortSpec, ValidationError};
    use crate::schema::{FieldType, ListSchema};
    use serde_json::json;
    use std::collections::BTreeMap;

    fn schema() -> ListSchema {
        let mut fields = BTreeMap::new();
        fields.insert("title".into(), FieldType::String);
        fields.insert("votes".into(), FieldType::Int);
        fields.insert("pinned".into(), FieldType::Bool);
        fields.insert("created_at".into(), FieldType::DateTime);
        ListSchema::new("threads", fields)
    }

    fn validate(query: &ListQuery) -> ValidationResult<()> {
        let schema = schema();
        let config = QueryConfig::default();
        QueryValidator::new(&schema, &config).validate(query)
    }

    #[test]
    fn test_valid_query_passes() {
        let query = ListQuery::new(1, 20)
            .filter_exact("title", json!("hello"))
            .filter_range("votes", Some(json!(0)), None)
            .sort_by(SortSpec::desc("created_at"));

        assert!(validate(&query).is_ok());
    }

    #[test]
    fn test_limit_bounds_rejected() {
        for limit in [0, -1, 1001] {
            let err = validate(&ListQuery::new(1, limit)).unwrap_err();
            assert!(matches!(err, ValidationError::InvalidLimit { .. }), "limit {}", limit);
        }
        assert!(validate(&ListQuery::new(1, 1000)).is_ok());
        assert!(validate(&ListQuery::new(1, 1)).is_ok());
    }

    #[test]
    fn test_page_bounds_rejected() {
        for page in [0, -1] {
            let err = validate(&ListQuery::new(page, 10)).unwrap_err();
            assert!(matches!(err, ValidationError::InvalidPage { .. }), "page {}", page);
        }
    }

    #[test]
    fn test_limit_checked_before_page() {
        let err = validate(&ListQuery::new(-1, 0)).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidLimit { .. }));
    }

    #[test]
    fn test_unknown_filter_field_rejected() {
        let query = ListQuery::new(1, 10).filter_exact("body", json!("x"));
        let err = validate(&query).unwrap_err();
        assert_eq!(err.field(), Some("body"));
        assert!(matches!(err, ValidationError::InvalidFilterField { .. }));
    }

    #[test]
    fn test_contains_on_bool_rejected() {
        let query = ListQuery::new(1, 10).filter_contains("pinned", "tru");
        let err = validate(&query).unwrap_err();
        assert!(err.to_string().contains("not applicable"));
    }

    #[test]
    fn test_range_on_bool_rejected() {
        let query = ListQuery::new(1, 10).filter_range("pinned", Some(json!(false)), None);
        assert!(validate(&query).is_err());
    }

    #[test]
    fn test_operand_type_mismatch_rejected() {
        let query = ListQuery::new(1, 10).filter_exact("votes", json!("ten"));
        let err = validate(&query).unwrap_err();
        assert!(err.to_string().contains("int"));

        let query = ListQuery::new(1, 10).filter_range(
            "created_at",
            Some(json!("not a timestamp")),
            None,
        );
        assert!(validate(&query).is_err());
    }

    #[test]
    fn test_exact_null_operand_allowed() {
        let query = ListQuery::new(1, 10).filter_exact("votes", json!(null));
        assert!(validate(&query).is_ok());
    }

    #[test]
    fn test_unknown_sort_field_rejected() {
        let query = ListQuery::new(1, 10).sort_by(SortSpec::asc("score"));
        let err = validate(&query).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidSortField { .. }));
        assert_eq!(err.field(), Some("score"));
    }

    #[test]
    fn test_custom_max_limit() {
        let schema = schema();
        let config = QueryConfig::new(50);
        let validator = QueryValidator::new(&schema, &config);

        assert!(validator.validate(&ListQuery::new(1, 50)).is_ok());
        assert!(validator.validate(&ListQuery::new(1, 51)).is_err());
    }
}
