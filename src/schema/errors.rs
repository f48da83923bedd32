//! Validation error types
//!
//! Error codes (closed set):
//! - REQUIRED
//! - TYPE_INVALID
//! - FORMAT_INVALID
//! - MIN_VALUE
//! - UNKNOWN_FIELD
//! - LENGTH_INVALID
//!
//! Validation failures are data. Nothing in this module is a Rust error type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Field name used for payload-wide errors.
pub const ROOT_FIELD: &str = "__root__";

/// Machine-readable validation error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Required field (or payload) absent
    Required,
    /// Value has the wrong primitive type
    TypeInvalid,
    /// Value does not match the expected format
    FormatInvalid,
    /// Numeric value below the allowed minimum
    MinValue,
    /// Key not in the closed field set
    UnknownField,
    /// String value has the wrong length
    LengthInvalid,
}

impl ErrorCode {
    /// Every code, in declaration order.
    pub const ALL: [ErrorCode; 6] = [
        ErrorCode::Required,
        ErrorCode::TypeInvalid,
        ErrorCode::FormatInvalid,
        ErrorCode::MinValue,
        ErrorCode::UnknownField,
        ErrorCode::LengthInvalid,
    ];

    /// Returns the wire representation of the code
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::Required => "REQUIRED",
            ErrorCode::TypeInvalid => "TYPE_INVALID",
            ErrorCode::FormatInvalid => "FORMAT_INVALID",
            ErrorCode::MinValue => "MIN_VALUE",
            ErrorCode::UnknownField => "UNKNOWN_FIELD",
            ErrorCode::LengthInvalid => "LENGTH_INVALID",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A single validation failure.
///
/// `field` is a known field name, an unknown key (for `UNKNOWN_FIELD`),
/// or [`ROOT_FIELD`] for payload-wide errors.
///
/// Only the engine builds errors. They serialize for the wire but cannot be
/// read back:
///
/// ```compile_fail
/// let raw = r#"{"field":"x","message":"m","code":"REQUIRED"}"#;
/// let _: formgate::ValidationError = serde_json::from_str(raw).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    field: String,
    message: String,
    code: ErrorCode,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code,
        }
    }

    /// Payload absent entirely
    pub fn missing_payload() -> Self {
        Self::new(ROOT_FIELD, ErrorCode::Required, "payload is required")
    }

    /// Payload present but not an object
    pub fn payload_not_object(actual: &str) -> Self {
        Self::new(
            ROOT_FIELD,
            ErrorCode::TypeInvalid,
            format!("payload must be a JSON object, got {}", actual),
        )
    }

    /// Transport body could not be parsed as JSON
    pub fn unparseable_payload() -> Self {
        Self::new(
            ROOT_FIELD,
            ErrorCode::FormatInvalid,
            "request body is not valid JSON",
        )
    }

    pub fn missing_field(field: &str) -> Self {
        Self::new(field, ErrorCode::Required, format!("{} is required", field))
    }

    pub fn type_mismatch(field: &str, expected: &str, actual: &str) -> Self {
        Self::new(
            field,
            ErrorCode::TypeInvalid,
            format!("{} must be a {}, got {}", field, expected, actual),
        )
    }

    pub fn unknown_field(key: &str) -> Self {
        Self::new(key, ErrorCode::UnknownField, format!("unknown field '{}'", key))
    }

    /// Returns the field the error is attached to
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the human-readable message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the error code
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Returns whether this is a payload-wide error
    pub fn is_root(&self) -> bool {
        self.field == ROOT_FIELD
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.field, self.message)
    }
}
