//! Orchestrator
//!
//! Start → structural checks → semantic rules → aggregation, then one step
//! to a terminal state:
//! - no errors: Valid, normalizer runs on the original payload
//! - any error: Invalid, normalizer never runs
//!
//! The validator holds only immutable configuration and is safe to share
//! across threads.

use serde_json::Value;

use crate::aggregate::{aggregate, ErrorOrdering};
use crate::normalize::normalize;
use crate::rules;
use crate::schema::{check_structure, ValidationError};

use super::result::{ValidationErrors, ValidationResult};

/// Validation engine entry point
#[derive(Debug, Clone, Default)]
pub struct Validator {
    ordering: ErrorOrdering,
}

impl Validator {
    /// Creates a validator with the default error ordering.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator with a custom error ordering.
    pub fn with_ordering(ordering: ErrorOrdering) -> Self {
        Self { ordering }
    }

    /// Validates a raw payload and normalizes it when valid.
    ///
    /// `Value::Null` stands for an absent payload.
    pub fn validate(&self, input: &Value) -> ValidationResult {
        let report = check_structure(input);
        let semantic = rules::evaluate(&report.accepted);
        let errors = aggregate(report.errors, semantic, &self.ordering);

        match (ValidationErrors::new(errors), report.object) {
            (Some(errors), _) => ValidationResult::Invalid(errors),
            (None, Some(object)) => ValidationResult::Valid(normalize(object)),
            // a non-object root always carries a root error
            (None, None) => {
                ValidationResult::Invalid(ValidationErrors::root(ValidationError::missing_payload()))
            }
        }
    }
}

/// Validates with the default ordering.
pub fn validate(input: &Value) -> ValidationResult {
    Validator::new().validate(input)
}
