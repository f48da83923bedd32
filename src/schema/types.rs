//! Field contract definitions
//!
//! The accepted field set is closed and fixed at build time:
//! - email: required string
//! - age: required number (integer checked by the rule engine)
//! - country: optional string

use serde_json::{Number, Value};

use crate::normalize::Transform;
use crate::rules::Check;

/// Primitive types accepted by the structural layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// UTF-8 string
    Text,
    /// Any JSON number
    Number,
}

impl FieldKind {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldKind::Text => "string",
            FieldKind::Number => "number",
        }
    }

    /// Exact type match, no coercion.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            FieldKind::Text => value.is_string(),
            FieldKind::Number => value.is_number(),
        }
    }
}

/// Static description of one accepted field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name as it appears in the payload
    pub name: &'static str,
    /// Whether field must be present
    pub required: bool,
    /// Expected primitive type
    pub kind: FieldKind,
    /// Semantic checks, evaluated in order
    pub checks: &'static [Check],
    /// Canonicalizing transform applied to valid payloads
    pub transform: Transform,
}

/// The closed field set, in error-ordering order.
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "email",
        required: true,
        kind: FieldKind::Text,
        checks: &[Check::NotBlank, Check::EmailAddress],
        transform: Transform::TrimLowercase,
    },
    FieldSpec {
        name: "age",
        required: true,
        kind: FieldKind::Number,
        checks: &[Check::WholeNumber, Check::AtLeast(18)],
        transform: Transform::Integer,
    },
    FieldSpec {
        name: "country",
        required: false,
        kind: FieldKind::Text,
        checks: &[Check::ExactLength(2), Check::AsciiAlphabetic],
        transform: Transform::TrimUppercase,
    },
];

/// Looks up a field spec by name.
pub fn field_spec(name: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|spec| spec.name == name)
}

/// Position of a known field in [`FIELDS`].
pub fn field_position(name: &str) -> Option<usize> {
    FIELDS.iter().position(|spec| spec.name == name)
}

/// Integer form of a JSON number with no fractional component.
///
/// Floats such as `21.0`, `1e2` or `-0` count when they fit in an `i64`;
/// `-0` becomes `0`.
pub fn whole_number(value: &Value) -> Option<Number> {
    let n = match value {
        Value::Number(n) => n,
        _ => return None,
    };
    if n.is_i64() || n.is_u64() {
        return Some(n.clone());
    }

    let f = n.as_f64()?;
    // i64::MAX as f64 rounds up to 2^63, hence the exclusive upper bound
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(Number::from(f as i64))
    } else {
        None
    }
}

/// Returns the JSON type name for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
