//! Rule engine
//!
//! Evaluates every check of every structurally accepted field. Checks for a
//! field run in declaration order; a failing gate ends that field's run.

use crate::schema::{CheckedField, ValidationError};

/// Evaluates semantic checks for the accepted fields.
pub fn evaluate(accepted: &[CheckedField<'_>]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for field in accepted {
        for check in field.spec.checks {
            if let Some(err) = check.apply(field.spec.name, field.value) {
                errors.push(err);
                if check.is_gate() {
                    break;
                }
            }
        }
    }

    errors
}
