//! Engine configuration
//!
//! Policy knobs that deployments tune; loaded from JSON alongside the
//! listing schemas.

use serde::{Deserialize, Serialize};

/// Default ceiling for `PageRequest::limit`.
pub const DEFAULT_MAX_LIMIT: u64 = 1000;

/// Engine policy configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Ceiling for `PageRequest::limit`; requests above it are rejected
    #[serde(default = "default_max_limit")]
    pub max_limit: u64,
}

fn default_max_limit() -> u64 {
    DEFAULT_MAX_LIMIT
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            max_limit: DEFAULT_MAX_LIMIT,
        }
    }
}

impl QueryConfig {
    /// Creates a configuration with the given limit ceiling.
    pub fn new(max_limit: u64) -> Self {
        Self { max_limit }
    }

    /// Loads configuration from a JSON document.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ceiling() {
        assert_eq!(QueryConfig::default().max_limit, 1000);
    }

    #[test]
    fn test_from_json() {
        let config = QueryConfig::from_json(r#"{"max_limit": 200}"#).unwrap();
        assert_eq!(config.max_limit, 200);
    }

    #[test]
    fn test_from_json_defaults_missing_fields() {
        let config = QueryConfig::from_json("{}").unwrap();
        assert_eq!(config, QueryConfig::default());
    }
}
