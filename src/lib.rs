//! pagequery - a strict, deterministic paginated query engine
//!
//! Every record-listing endpoint answers the same question: of the
//! candidate records, which match the filter, in what order, and which
//! contiguous page does the caller get? This crate answers it once:
//! `QueryEngine::list(records, query)` validates the query against a
//! listing schema, filters, sorts with a total order, and slices the
//! requested page with its pagination metadata.
//!
//! ```
//! use pagequery::{FieldType, ListQuery, ListSchema, QueryEngine, Record, SortSpec};
//! use serde_json::json;
//! use std::collections::BTreeMap;
//!
//! let mut fields = BTreeMap::new();
//! fields.insert("status".to_string(), FieldType::String);
//! fields.insert("created_at".to_string(), FieldType::DateTime);
//! let schema = ListSchema::new("threads", fields);
//!
//! let records = vec![
//!     Record::from_value("t1", json!({"status": "open", "created_at": "2024-01-01T00:00:00Z"})),
//!     Record::from_value("t2", json!({"status": "open", "created_at": "2024-01-02T00:00:00Z"})),
//! ];
//!
//! let query = ListQuery::new(1, 10)
//!     .filter_exact("status", json!("open"))
//!     .sort_by(SortSpec::desc("created_at"));
//!
//! let page = QueryEngine::new(&schema).list(&records, &query).unwrap();
//! assert_eq!(page.data[0].id, "t2");
//! assert_eq!(page.pagination.records, 2);
//! ```

pub mod config;
pub mod executor;
pub mod observability;
pub mod query;
pub mod record;
pub mod schema;
pub mod source;

pub use config::{QueryConfig, DEFAULT_MAX_LIMIT};
pub use executor::{PageResult, Pagination, QueryEngine, QueryError, QueryResult};
pub use query::{
    Condition, FilterSpec, ListQuery, PageRequest, SortDirection, SortSpec, ValidationError,
};
pub use record::Record;
pub use schema::{FieldType, ListSchema, SchemaRegistry};
pub use source::{InMemorySource, RecordSource, SourceError};
