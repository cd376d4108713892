//! Record model for the query engine
//!
//! A record is an opaque entity: a unique identifier plus a flat map of
//! named scalar fields. The engine only reads records; it never mutates
//! them and never writes them back.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

static NULL: Value = Value::Null;

/// A single record exposed to the query engine.
///
/// Field values are scalars (string, number, boolean, RFC 3339 datetime
/// string) or null. An absent field reads as null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Unique record identifier
    pub id: String,
    /// Named scalar fields
    pub fields: Map<String, Value>,
}

impl Record {
    /// Creates a record from an id and a field map.
    pub fn new(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Creates a record from an id and any JSON value.
    ///
    /// Non-object bodies produce an empty field map.
    pub fn from_value(id: impl Into<String>, body: Value) -> Self {
        let fields = match body {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self::new(id, fields)
    }

    /// Returns the record identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Looks up a field value. A missing field reads as null.
    pub fn get(&self, field: &str) -> &Value {
        self.fields.get(field).unwrap_or(&NULL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_lookup() {
        let record = Record::from_value("r1", json!({"name": "Alice", "age": 30}));

        assert_eq!(record.get("name"), &json!("Alice"));
        assert_eq!(record.get("age"), &json!(30));
    }

    #[test]
    fn test_missing_field_reads_as_null() {
        let record = Record::from_value("r1", json!({"name": "Alice"}));

        assert!(record.get("age").is_null());
    }

    #[test]
    fn test_non_object_body_yields_empty_fields() {
        let record = Record::from_value("r1", json!([1, 2, 3]));

        assert!(record.fields.is_empty());
        assert!(record.get("anything").is_null());
    }

    #[test]
    fn test_serde_round_trip() {
        let record = Record::from_value("r1", json!({"status": "open"}));
        let text = serde_json::to_string(&record).unwrap();
        let parsed: Record = serde_json::from_str(&text).unwrap();

        assert_eq!(parsed, record);
    }
}
