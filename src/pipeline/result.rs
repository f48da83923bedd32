//! Validation outcome types

use serde::Serialize;

use crate::normalize::NormalizedOutput;
use crate::schema::ValidationError;

/// Ordered, non-empty error sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Wraps an error list. Returns `None` for an empty list.
    pub fn new(errors: Vec<ValidationError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    /// A single root error
    pub fn root(error: ValidationError) -> Self {
        Self(vec![error])
    }

    pub fn as_slice(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Result of validating one payload. Exactly one variant is produced.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    /// No validator raised an error
    Valid(NormalizedOutput),
    /// At least one error, in deterministic order
    Invalid(ValidationErrors),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    pub fn normalized(&self) -> Option<&NormalizedOutput> {
        match self {
            ValidationResult::Valid(out) => Some(out),
            ValidationResult::Invalid(_) => None,
        }
    }

    /// Returns the errors; empty for a valid result.
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            ValidationResult::Valid(_) => &[],
            ValidationResult::Invalid(errors) => errors.as_slice(),
        }
    }
}
