//! Structural validator
//!
//! Checks, per declared field:
//! - Required fields are present
//! - Field types exactly match (no coercion, null is a type error)
//! - No undeclared keys exist
//!
//! A non-object payload produces a single root error and nothing else runs.
//! Fields that fail here are withheld from the rule engine.

use serde_json::{Map, Value};

use super::errors::ValidationError;
use super::types::{field_spec, json_type_name, FieldSpec, FIELDS};

/// A field that passed structural checks, with its raw value.
#[derive(Debug, Clone, Copy)]
pub struct CheckedField<'a> {
    pub spec: &'static FieldSpec,
    pub value: &'a Value,
}

/// Output of the structural pass
#[derive(Debug, Default)]
pub struct StructuralReport<'a> {
    /// Structural errors, in discovery order
    pub errors: Vec<ValidationError>,
    /// Fields eligible for semantic evaluation
    pub accepted: Vec<CheckedField<'a>>,
    /// The payload object, when the root was well-formed
    pub object: Option<&'a Map<String, Value>>,
}

/// Runs the structural checks against a raw payload.
pub fn check_structure(input: &Value) -> StructuralReport<'_> {
    let obj = match input {
        Value::Object(obj) => obj,
        Value::Null => {
            return StructuralReport {
                errors: vec![ValidationError::missing_payload()],
                ..Default::default()
            }
        }
        other => {
            return StructuralReport {
                errors: vec![ValidationError::payload_not_object(json_type_name(other))],
                ..Default::default()
            }
        }
    };

    let mut report = StructuralReport {
        object: Some(obj),
        ..Default::default()
    };

    for key in obj.keys() {
        if field_spec(key).is_none() {
            report.errors.push(ValidationError::unknown_field(key));
        }
    }

    for spec in FIELDS {
        match obj.get(spec.name) {
            Some(value) if spec.kind.matches(value) => {
                report.accepted.push(CheckedField { spec, value });
            }
            Some(value) => {
                report.errors.push(ValidationError::type_mismatch(
                    spec.name,
                    spec.kind.type_name(),
                    json_type_name(value),
                ));
            }
            None if spec.required => {
                report.errors.push(ValidationError::missing_field(spec.name));
            }
            None => {}
        }
    }

    report
}
