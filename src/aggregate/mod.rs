//! Error aggregation
//!
//! Collects structural and semantic errors into one ordered sequence.
//! No duplicate suppression: distinct errors on one field all survive.

mod ordering;

pub use ordering::{ErrorOrdering, OrderingError, DEFAULT_CODE_PRIORITY};

use crate::schema::ValidationError;

/// Concatenates both error streams and sorts them deterministically.
pub fn aggregate(
    structural: Vec<ValidationError>,
    semantic: Vec<ValidationError>,
    ordering: &ErrorOrdering,
) -> Vec<ValidationError> {
    let mut errors = structural;
    errors.extend(semantic);
    ordering.sort(&mut errors);
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ErrorCode;

    #[test]
    fn test_streams_are_merged_and_ordered() {
        let structural = vec![
            ValidationError::unknown_field("extra"),
            ValidationError::type_mismatch("age", "number", "string"),
        ];
        let semantic = vec![ValidationError::new(
            "email",
            ErrorCode::FormatInvalid,
            "email must be a valid email address",
        )];

        let errors = aggregate(structural, semantic, &ErrorOrdering::default());
        let fields: Vec<_> = errors.iter().map(|e| e.field()).collect();
        assert_eq!(fields, vec!["email", "age", "extra"]);
    }

    #[test]
    fn test_empty_streams_stay_empty() {
        assert!(aggregate(Vec::new(), Vec::new(), &ErrorOrdering::default()).is_empty());
    }
}
