//! Boundary mapping shared by the HTTP and CLI adapters
//!
//! Adapters parse their transport into a raw JSON value, hand it to the
//! engine, and render the result through [`Envelope`].

mod response;

pub use response::{Envelope, Status};

use serde_json::Value;

use crate::pipeline::Validator;

/// Parses a raw transport body and runs the engine.
///
/// Empty (all-whitespace) bodies are reported as a missing payload and
/// unparseable bodies as a root format error.
pub fn evaluate_body(validator: &Validator, body: &[u8]) -> Envelope {
    match parse_body(body) {
        Ok(input) => Envelope::from_result(validator.validate(&input)),
        Err(envelope) => envelope,
    }
}

/// Parses a transport body into a raw payload.
///
/// On failure returns the root-error envelope to send back. Parser
/// diagnostics are dropped.
pub fn parse_body(body: &[u8]) -> Result<Value, Envelope> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(Envelope::missing());
    }
    serde_json::from_slice(body).map_err(|_| Envelope::unparseable())
}
