//! Typed value semantics shared by filtering and sorting
//!
//! All comparisons go through the field's declared type: strings compare
//! lexically, numbers numerically, datetimes as instants. Values stored
//! in a record that do not fit their declared type are treated as null;
//! the engine never panics on dirty data.

use chrono::{DateTime, FixedOffset};
use serde_json::Value;
use std::cmp::Ordering;

use crate::schema::FieldType;

/// Parses an RFC 3339 timestamp. Dirty values degrade to `None`.
pub(crate) fn parse_datetime(value: &Value) -> Option<DateTime<FixedOffset>> {
    value
        .as_str()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
}

/// Returns true when a stored value fits its declared type. Null and
/// ill-typed values are both "null" for matching and ordering purposes.
pub(crate) fn is_typed(field_type: FieldType, value: &Value) -> bool {
    match field_type {
        FieldType::String => value.is_string(),
        FieldType::Int | FieldType::Float => value.is_number(),
        FieldType::Bool => value.is_boolean(),
        FieldType::DateTime => parse_datetime(value).is_some(),
    }
}

/// Semantic equality in the field's declared type.
///
/// Both sides must fit the type; otherwise there is no match.
pub(crate) fn values_equal(field_type: FieldType, actual: &Value, expected: &Value) -> bool {
    compare_values(field_type, actual, expected) == Some(Ordering::Equal)
}

/// Semantic ordering in the field's declared type.
///
/// Returns `None` when either side does not fit the type.
pub(crate) fn compare_values(field_type: FieldType, a: &Value, b: &Value) -> Option<Ordering> {
    match field_type {
        FieldType::String => Some(a.as_str()?.cmp(b.as_str()?)),
        FieldType::Bool => Some(a.as_bool()?.cmp(&b.as_bool()?)),
        FieldType::Int | FieldType::Float => compare_numbers(a, b),
        FieldType::DateTime => Some(parse_datetime(a)?.cmp(&parse_datetime(b)?)),
    }
}

/// Numeric comparison: integer when both sides are integral, floating
/// point otherwise. JSON numbers are never NaN, so the float comparison
/// is total.
fn compare_numbers(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => {
            if let (Some(ai), Some(bi)) = (a.as_i64(), b.as_i64()) {
                return Some(ai.cmp(&bi));
            }
            let (af, bf) = (a.as_f64()?, b.as_f64()?);
            af.partial_cmp(&bf)
        }
        _ => None,
    }
}
