//! Normalizer
//!
//! Canonicalizes a fully valid payload in a single pass. Runs only after
//! validation produced zero errors, so it performs no checks and cannot fail.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::schema::{whole_number, FIELDS};

/// Canonicalizing transform attached to a field spec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Whole numbers in integer form (`21.0` becomes `21`)
    Integer,
    /// Trim surrounding whitespace, then lowercase
    TrimLowercase,
    /// Trim surrounding whitespace, then uppercase
    TrimUppercase,
}

impl Transform {
    /// Applies the transform. Values of another type pass through untouched.
    pub fn apply(&self, value: &Value) -> Value {
        match (self, value) {
            (Transform::Integer, Value::Number(_)) => {
                whole_number(value).map_or_else(|| value.clone(), Value::Number)
            }
            (Transform::TrimLowercase, Value::String(s)) => Value::String(s.trim().to_lowercase()),
            (Transform::TrimUppercase, Value::String(s)) => Value::String(s.trim().to_uppercase()),
            _ => value.clone(),
        }
    }
}

/// Canonical form of a valid payload.
///
/// Holds exactly the contract fields present in the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedOutput(Map<String, Value>);

impl NormalizedOutput {
    pub fn email(&self) -> Option<&str> {
        self.0.get("email").and_then(Value::as_str)
    }

    pub fn age(&self) -> Option<i64> {
        self.0.get("age").and_then(Value::as_i64)
    }

    pub fn country(&self) -> Option<&str> {
        self.0.get("country").and_then(Value::as_str)
    }

    /// Returns the underlying field map
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

/// Produces the canonical output for a validated payload.
///
/// `serde_json::Map` keeps keys sorted, so the output reads
/// `age`, `country`, `email` regardless of field order.
pub fn normalize(input: &Map<String, Value>) -> NormalizedOutput {
    let mut out = Map::new();
    for spec in FIELDS {
        if let Some(value) = input.get(spec.name) {
            out.insert(spec.name.to_string(), spec.transform.apply(value));
        }
    }
    NormalizedOutput(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {}", other),
        }
    }

    #[test]
    fn test_normalizes_every_field() {
        let input = object(json!({ "email": " User@Example.com ", "age": 21, "country": " us " }));
        let out = normalize(&input);
        assert_eq!(out.email(), Some("user@example.com"));
        assert_eq!(out.age(), Some(21));
        assert_eq!(out.country(), Some("US"));
    }

    #[test]
    fn test_absent_country_stays_absent() {
        let input = object(json!({ "email": "a@b.com", "age": 40 }));
        let out = normalize(&input);
        assert_eq!(out.country(), None);
        assert!(!out.as_map().contains_key("country"));
        assert_eq!(out.as_map().len(), 2);
    }

    #[test]
    fn test_idempotent() {
        let input = object(json!({ "email": " MiXed@Case.Org", "age": 99, "country": "de " }));
        let once = normalize(&input);
        let twice = normalize(once.as_map());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_integer_transform_drops_float_form() {
        assert_eq!(Transform::Integer.apply(&json!(21)), json!(21));
        assert_eq!(Transform::Integer.apply(&json!(21.0)), json!(21));
        assert!(Transform::Integer.apply(&json!(1e2)).is_i64());
        assert_eq!(Transform::Integer.apply(&json!("21")), json!("21"));
        assert_eq!(Transform::TrimLowercase.apply(&json!(7)), json!(7));
    }

    #[test]
    fn test_float_age_normalizes_to_integer() {
        let input = object(json!({ "email": "a@b.com", "age": 30.0 }));
        let out = normalize(&input);
        assert_eq!(out.age(), Some(30));
        assert!(out.as_map()["age"].is_i64());
        assert_eq!(out.into_value(), json!({ "email": "a@b.com", "age": 30 }));
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let input = object(json!({ "email": "a@b.com", "age": 18 }));
        let value = serde_json::to_value(normalize(&input)).unwrap();
        assert_eq!(value, json!({ "email": "a@b.com", "age": 18 }));
    }
}
