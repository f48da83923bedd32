//! Observability for the adapters
//!
//! Structured JSON-lines logging with typed events.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. Logging never fails the caller
//! 3. Payload values are never logged
//!
//! # Usage
//!
//! ```ignore
//! use formgate::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::PayloadRejected, &[("error_count", "2")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

#[cfg(test)]
pub(crate) use logger::capture_log;

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
