//! List query engine
//!
//! Composes validation, filtering, sorting and slicing into the single
//! `list` operation, in strict order:
//!
//! 1. Validate the query against schema and configuration
//! 2. Filter every candidate record (AND across conditions)
//! 3. Sort matches (query sort, else schema default, else id ascending)
//! 4. Slice the requested page and compute metadata
//!
//! The engine holds no mutable state: a call never mutates the input
//! records, and identical inputs against an unchanged record set yield
//! an identical `PageResult`.

use crate::config::QueryConfig;
use crate::observability::{Event, Logger};
use crate::query::{ListQuery, QueryValidator};
use crate::record::Record;
use crate::schema::ListSchema;
use crate::source::RecordSource;

use super::errors::QueryResult;
use super::filters::ConditionFilter;
use super::result::PageResult;
use super::slicer::PageSlicer;
use super::sorter::ResultSorter;

/// Paginated query engine for one listing.
pub struct QueryEngine<'a> {
    schema: &'a ListSchema,
    config: QueryConfig,
}

impl<'a> QueryEngine<'a> {
    /// Creates an engine with default configuration.
    pub fn new(schema: &'a ListSchema) -> Self {
        Self::with_config(schema, QueryConfig::default())
    }

    /// Creates an engine with the given configuration.
    pub fn with_config(schema: &'a ListSchema, config: QueryConfig) -> Self {
        Self { schema, config }
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> QueryConfig {
        self.config
    }

    /// Runs a list query over a snapshot of candidate records.
    ///
    /// Either a complete `PageResult` is returned or the query is
    /// rejected; out-of-range pages and empty matches are results.
    pub fn list(&self, records: &[Record], query: &ListQuery) -> QueryResult<PageResult> {
        if let Err(err) = QueryValidator::new(self.schema, &self.config).validate(query) {
            let reason = err.to_string();
            Logger::warn(
                Event::ListRejected.name(),
                &[
                    ("code", err.code()),
                    ("listing", self.schema.name.as_str()),
                    ("reason", reason.as_str()),
                ],
            );
            return Err(err.into());
        }

        let scanned = records.len();

        // Filter
        let mut matches: Vec<Record> = records
            .iter()
            .filter(|record| ConditionFilter::matches(record, &query.filter, self.schema))
            .cloned()
            .collect();

        // Sort: query sort, schema default, id order
        match query.sort.as_ref().or(self.schema.default_sort.as_ref()) {
            Some(sort) => ResultSorter::sort(&mut matches, sort, self.schema),
            None => ResultSorter::sort_by_id(&mut matches),
        }

        // Slice; bounds were validated, so the casts are exact
        let (data, pagination) =
            PageSlicer::slice(matches, query.page.page as u64, query.page.limit as u64);

        let matched = pagination.records.to_string();
        let page = pagination.current.to_string();
        let returned = data.len().to_string();
        let scanned = scanned.to_string();
        Logger::trace(
            Event::ListComplete.name(),
            &[
                ("listing", self.schema.name.as_str()),
                ("matched", matched.as_str()),
                ("page", page.as_str()),
                ("returned", returned.as_str()),
                ("scanned", scanned.as_str()),
            ],
        );

        Ok(PageResult { data, pagination })
    }

    /// Runs a list query over a fresh snapshot from a record source.
    pub fn list_from<S: RecordSource>(&self, source: &S, query: &ListQuery) -> QueryResult<PageResult> {
        let snapshot = source.snapshot()?;
        self.list(&snapshot, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::SortSpec;
    use crate::schema::FieldType;
    use crate::source::InMemorySource;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn schema() -> ListSchema {
        let mut fields = BTreeMap::new();
        fields.insert("title".into(), FieldType::String);
        fields.insert("status".into(), FieldType::String);
        fields.insert("votes".into(), FieldType::Int);
        fields.insert("created_at".into(), FieldType::DateTime);
        ListSchema::new("threads", fields)
    }

    fn thread(id: &str, status: &str, votes: i64, created_at: &str) -> Record {
        Record::from_value(
            id,
            json!({
                "title": format!("thread {}", id),
                "status": status,
                "votes": votes,
                "created_at": created_at,
            }),
        )
    }

    fn fixture() -> Vec<Record> {
        vec![
            thread("t1", "open", 5, "2024-01-01T00:00:00Z"),
            thread("t2", "open", 2, "2024-01-02T00:00:00Z"),
            thread("t3", "closed", 9, "2024-01-03T00:00:00Z"),
            thread("t4", "open", 2, "2024-01-04T00:00:00Z"),
            thread("t5", "closed", 1, "2024-01-05T00:00:00Z"),
        ]
    }

    #[test]
    fn test_full_pipeline() {
        let schema = schema();
        let engine = QueryEngine::new(&schema);
        let records = fixture();

        let query = ListQuery::new(1, 2)
            .filter_exact("status", json!("open"))
            .sort_by(SortSpec::desc("votes"));

        let result = engine.list(&records, &query).unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result.data[0].id, "t1"); // votes 5
        assert_eq!(result.data[1].id, "t2"); // votes 2, tie-break before t4
        assert_eq!(result.pagination.records, 3);
        assert_eq!(result.pagination.pages, 2);
    }

    #[test]
    fn test_validation_precedes_execution() {
        let schema = schema();
        let engine = QueryEngine::new(&schema);

        let result = engine.list(&fixture(), &ListQuery::new(1, 0));
        assert!(result.unwrap_err().is_validation());
    }

    #[test]
    fn test_input_records_not_mutated() {
        let schema = schema();
        let engine = QueryEngine::new(&schema);
        let records = fixture();
        let before = records.clone();

        let query = ListQuery::new(1, 2).sort_by(SortSpec::desc("votes"));
        engine.list(&records, &query).unwrap();

        assert_eq!(records, before);
    }

    #[test]
    fn test_idempotent_across_calls() {
        let schema = schema();
        let engine = QueryEngine::new(&schema);
        let records = fixture();

        let query = ListQuery::new(2, 2)
            .filter_range("votes", Some(json!(1)), Some(json!(9)))
            .sort_by(SortSpec::asc("created_at"));

        let first = engine.list(&records, &query).unwrap();
        let second = engine.list(&records, &query).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_default_sort_is_id_order() {
        let schema = schema();
        let engine = QueryEngine::new(&schema);
        let mut records = fixture();
        records.reverse();

        let result = engine.list(&records, &ListQuery::new(1, 10)).unwrap();
        let ids: Vec<&str> = result.data.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["t1", "t2", "t3", "t4", "t5"]);
    }

    #[test]
    fn test_schema_default_sort_applies() {
        let schema = schema().with_default_sort(SortSpec::desc("votes"));
        let engine = QueryEngine::new(&schema);

        let result = engine.list(&fixture(), &ListQuery::new(1, 1)).unwrap();
        assert_eq!(result.data[0].id, "t3"); // votes 9
    }

    #[test]
    fn test_no_match_is_empty_result_not_error() {
        let schema = schema();
        let engine = QueryEngine::new(&schema);

        let query = ListQuery::new(1, 10).filter_exact("status", json!("archived"));
        let result = engine.list(&fixture(), &query).unwrap();

        assert!(result.is_empty());
        assert_eq!(result.pagination.records, 0);
        assert_eq!(result.pagination.pages, 0);
        assert_eq!(result.pagination.current, 1);
    }

    #[test]
    fn test_list_from_source() {
        let schema = schema();
        let engine = QueryEngine::new(&schema);

        let mut source = InMemorySource::new();
        for record in fixture() {
            source.insert(record);
        }

        let result = engine.list_from(&source, &ListQuery::new(1, 3)).unwrap();
        assert_eq!(result.len(), 3);
        assert_eq!(result.pagination.records, 5);
    }
}
