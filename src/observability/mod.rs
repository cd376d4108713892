//! Observability subsystem
//!
//! Structured logging for the query lifecycle.
//!
//! # Principles
//!
//! 1. Observability is read-only; no side effects on execution
//! 2. No async or background threads
//! 3. Deterministic output (fixed key order, one line per event)

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};
