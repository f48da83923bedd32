//! Boundary response envelope
//!
//! - Valid   → `{"valid": true, "normalized": {...}}`, status Ok
//! - Invalid → `{"valid": false, "errors": [...]}`, status Rejected
//!
//! Only the field/message/code triple ever crosses the boundary.

use serde::Serialize;
use serde_json::Value;

use crate::normalize::NormalizedOutput;
use crate::pipeline::{ValidationErrors, ValidationResult};
use crate::schema::ValidationError;

/// Transport-independent status class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// 200-equivalent
    Ok,
    /// 400-equivalent
    Rejected,
}

impl Status {
    /// HTTP status code for this class
    pub fn http_code(&self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::Rejected => 400,
        }
    }
}

/// Serialized response body
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Envelope {
    Accepted {
        valid: bool,
        normalized: NormalizedOutput,
    },
    Rejected {
        valid: bool,
        errors: ValidationErrors,
    },
}

impl Envelope {
    /// Maps an engine result onto the wire envelope
    pub fn from_result(result: ValidationResult) -> Self {
        match result {
            ValidationResult::Valid(normalized) => Envelope::Accepted {
                valid: true,
                normalized,
            },
            ValidationResult::Invalid(errors) => Envelope::Rejected {
                valid: false,
                errors,
            },
        }
    }

    /// Envelope for a body the transport could not parse
    pub fn unparseable() -> Self {
        Envelope::Rejected {
            valid: false,
            errors: ValidationErrors::root(ValidationError::unparseable_payload()),
        }
    }

    /// Envelope for an empty transport body
    pub fn missing() -> Self {
        Envelope::Rejected {
            valid: false,
            errors: ValidationErrors::root(ValidationError::missing_payload()),
        }
    }

    pub fn status(&self) -> Status {
        match self {
            Envelope::Accepted { .. } => Status::Ok,
            Envelope::Rejected { .. } => Status::Rejected,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.status() == Status::Ok
    }

    /// Number of errors carried (zero when accepted)
    pub fn error_count(&self) -> usize {
        match self {
            Envelope::Accepted { .. } => 0,
            Envelope::Rejected { errors, .. } => errors.len(),
        }
    }

    /// Convert to a JSON value
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| Self::fallback_value())
    }

    /// Convert to a single-line JSON string
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| Self::fallback_value().to_string())
    }

    // Serialization of plain strings and numbers cannot fail; this keeps the
    // boundary total without a panic path.
    fn fallback_value() -> Value {
        serde_json::json!({ "valid": false, "errors": [] })
    }
}
