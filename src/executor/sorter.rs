//! Result sorting for list execution
//!
//! Orders matching records deterministically: primary key is the sort
//! field in its semantic type, secondary key is the record id ascending.
//! The tie-break makes the order total, so pagination is repeatable even
//! when many records share a sort value.

use std::cmp::Ordering;

use crate::query::{SortDirection, SortSpec};
use crate::record::Record;
use crate::schema::{FieldType, ListSchema};

use super::values::{compare_values, is_typed};

/// Sorts matching records
pub struct ResultSorter;

impl ResultSorter {
    /// Sorts records by the sort spec, tie-breaking by id ascending.
    ///
    /// Nulls (and stored values that do not fit the declared type) order
    /// before every typed value. Direction applies to the primary key
    /// only; the id tie-break is always ascending.
    pub fn sort(records: &mut [Record], sort: &SortSpec, schema: &ListSchema) {
        let field_type = schema.field_type(&sort.field);

        records.sort_by(|a, b| {
            let primary = Self::compare_field(a, b, &sort.field, field_type);
            let primary = match sort.direction {
                SortDirection::Asc => primary,
                SortDirection::Desc => primary.reverse(),
            };
            primary.then_with(|| a.id.cmp(&b.id))
        });
    }

    /// Orders records by id ascending; the default when a query carries
    /// no sort spec and the schema declares no default.
    pub fn sort_by_id(records: &mut [Record]) {
        records.sort_by(|a, b| a.id.cmp(&b.id));
    }

    /// Compares one field of two records in its semantic type.
    fn compare_field(
        a: &Record,
        b: &Record,
        field: &str,
        field_type: Option<FieldType>,
    ) -> Ordering {
        let Some(field_type) = field_type else {
            return Ordering::Equal;
        };

        let (av, bv) = (a.get(field), b.get(field));
        let (a_typed, b_typed) = (is_typed(field_type, av), is_typed(field_type, bv));

        match (a_typed, b_typed) {
            (false, false) => Ordering::Equal,
            (false, true) => Ordering::Less,
            (true, false) => Ordering::Greater,
            // Both typed, so the semantic comparison is total
            (true, true) => compare_values(field_type, av, bv).unwrap_or(Ordering::Equal),
        }
    }
}
