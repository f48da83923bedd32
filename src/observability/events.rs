//! Observable events
//!
//! Events are explicit and typed. The validation engine itself emits
//! nothing; only the adapters log.

use std::fmt;

use super::logger::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Configuration loaded and checked
    ConfigLoaded,
    /// HTTP listener bound, ready for requests
    Serving,
    /// Payload validated and normalized
    PayloadAccepted,
    /// Payload rejected with validation errors
    PayloadRejected,
    /// Transport body missing or not JSON
    BodyUnreadable,
    /// HTTP server stopped with an error
    ServerFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::Serving => "FORMGATE_SERVING",
            Event::PayloadAccepted => "PAYLOAD_ACCEPTED",
            Event::PayloadRejected => "PAYLOAD_REJECTED",
            Event::BodyUnreadable => "BODY_UNREADABLE",
            Event::ServerFailed => "SERVER_FAILED",
        }
    }

    /// Default severity for the event
    pub fn severity(&self) -> Severity {
        match self {
            Event::ConfigLoaded | Event::Serving | Event::PayloadAccepted => Severity::Info,
            Event::PayloadRejected | Event::BodyUnreadable => Severity::Warn,
            Event::ServerFailed => Severity::Fatal,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
