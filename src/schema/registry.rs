//! Registry of listing schemas
//!
//! The entity definition layer registers one schema per listing; the
//! engine looks schemas up by name. Registration is the only mutation;
//! lookups are read-only and deterministic.

use std::collections::BTreeMap;

use crate::observability::{Event, Logger};

use super::types::ListSchema;

/// Holds all registered listing schemas, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: BTreeMap<String, ListSchema>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            schemas: BTreeMap::new(),
        }
    }

    /// Registers a schema after structural validation.
    ///
    /// Re-registering a name replaces the previous schema.
    pub fn register(&mut self, schema: ListSchema) -> Result<(), String> {
        schema.validate_structure()?;

        let field_count = schema.fields.len().to_string();
        Logger::info(
            Event::SchemaRegistered.name(),
            &[
                ("fields", field_count.as_str()),
                ("listing", schema.name.as_str()),
            ],
        );

        self.schemas.insert(schema.name.clone(), schema);
        Ok(())
    }

    /// Loads a registry from a JSON array of schema documents.
    pub fn from_json(text: &str) -> Result<Self, String> {
        let schemas: Vec<ListSchema> =
            serde_json::from_str(text).map_err(|e| format!("Invalid schema document: {}", e))?;

        let mut registry = Self::new();
        for schema in schemas {
            registry.register(schema)?;
        }
        Ok(registry)
    }

    /// Looks up a schema by listing name.
    pub fn get(&self, name: &str) -> Option<&ListSchema> {
        self.schemas.get(name)
    }

    /// Returns true if a listing is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// Number of registered schemas.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Returns true when no schema is registered.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
