//! Observable events
//!
//! Events are explicit and typed; their names appear verbatim in log
//! lines.

use std::fmt;

/// Observable events in the query engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A listing schema was registered
    SchemaRegistered,
    /// A list query was rejected in validation
    ListRejected,
    /// A list query completed
    ListComplete,
}

impl Event {
    /// Returns the event name used in log output
    pub fn name(&self) -> &'static str {
        match self {
            Event::SchemaRegistered => "SCHEMA_REGISTERED",
            Event::ListRejected => "LIST_REJECTED",
            Event::ListComplete => "LIST_COMPLETE",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Event::SchemaRegistered.name(), "SCHEMA_REGISTERED");
        assert_eq!(Event::ListRejected.name(), "LIST_REJECTED");
        assert_eq!(Event::ListComplete.name(), "LIST_COMPLETE");
    }

    #[test]
    fn test_event_display() {
        assert_eq!(Event::ListComplete.to_string(), "LIST_COMPLETE");
    }
}
