//! Condition filtering for list execution
//!
//! Filters records strictly according to the filter spec. All conditions
//! must match (AND semantics). Pure function of its inputs; no side
//! effects, no coercion.

use crate::query::{Condition, FilterSpec};
use crate::record::Record;
use crate::schema::ListSchema;

use super::values::{compare_values, values_equal};
use std::cmp::Ordering;

/// Evaluates filter conditions against records
pub struct ConditionFilter;

impl ConditionFilter {
    /// Checks if a record matches every condition in the filter.
    ///
    /// Fields absent from the filter are unconstrained.
    pub fn matches(record: &Record, filter: &FilterSpec, schema: &ListSchema) -> bool {
        filter
            .iter()
            .all(|(field, condition)| Self::matches_condition(record, field, condition, schema))
    }

    /// Checks a single condition against one record field.
    fn matches_condition(
        record: &Record,
        field: &str,
        condition: &Condition,
        schema: &ListSchema,
    ) -> bool {
        // Undeclared fields are rejected in validation; a record can
        // never match them.
        let Some(field_type) = schema.field_type(field) else {
            return false;
        };

        let value = record.get(field);

        match condition {
            Condition::Exact(expected) => {
                if expected.is_null() || value.is_null() {
                    return expected.is_null() && value.is_null();
                }
                values_equal(field_type, value, expected)
            }
            Condition::Contains(needle) => value
                .as_str()
                .is_some_and(|s| s.contains(needle.as_str())),
            Condition::Range { from, to } => {
                if from.is_none() && to.is_none() {
                    return true;
                }
                // Null never matches a bounded range
                if value.is_null() {
                    return false;
                }
                if let Some(from) = from {
                    match compare_values(field_type, value, from) {
                        Some(Ordering::Less) | None => return false,
                        _ => {}
                    }
                }
                if let Some(to) = to {
                    match compare_values(field_type, value, to) {
                        Some(Ordering::Greater) | None => return false,
                        _ => {}
                    }
                }
                true
            }
        }
    }
}
