//! Validation Invariant Tests
//!
//! End-to-end behavior of the engine through the public API:
//! - Valid and Invalid are exclusive and exhaustive
//! - Invalid always carries at least one error
//! - Error ordering is a pure function of the input
//! - Normalization is idempotent
//! - Required and unknown-field detection are independent

use formgate::{validate, ErrorCode, ValidationResult, Validator};
use serde_json::{json, Value};

// =============================================================================
// Helper Functions
// =============================================================================

fn error_pairs(result: &ValidationResult) -> Vec<(String, ErrorCode)> {
    result
        .errors()
        .iter()
        .map(|e| (e.field().to_string(), e.code()))
        .collect()
}

fn sample_inputs() -> Vec<Value> {
    vec![
        json!({ "email": " User@Example.com ", "age": 21, "country": " us " }),
        json!({ "age": 21 }),
        json!({ "email": "user@example.com", "age": 17 }),
        json!({ "email": "user@example.com", "age": 21, "country": "usa" }),
        json!({ "email": "not-an-email", "age": "21" }),
        json!({ "email": "a@b.com", "age": 18, "extra": 1 }),
        json!({ "zz": 1, "aa": 2, "country": "1", "email": "", "age": 12.5 }),
        json!([]),
        json!(null),
        json!("payload"),
        json!({}),
    ]
}

// =============================================================================
// Scenario Tests
// =============================================================================

#[test]
fn test_scenario_valid_payload_is_normalized() {
    let result = validate(&json!({ "email": " User@Example.com ", "age": 21, "country": " us " }));
    match result {
        ValidationResult::Valid(out) => {
            assert_eq!(
                out.into_value(),
                json!({ "email": "user@example.com", "age": 21, "country": "US" })
            );
        }
        ValidationResult::Invalid(errors) => panic!("unexpected errors: {:?}", errors),
    }
}

#[test]
fn test_scenario_missing_email() {
    let result = validate(&json!({ "age": 21 }));
    assert_eq!(error_pairs(&result), vec![("email".to_string(), ErrorCode::Required)]);
}

#[test]
fn test_scenario_underage() {
    let result = validate(&json!({ "email": "user@example.com", "age": 17 }));
    assert_eq!(error_pairs(&result), vec![("age".to_string(), ErrorCode::MinValue)]);
}

#[test]
fn test_scenario_country_too_long() {
    let result = validate(&json!({ "email": "user@example.com", "age": 21, "country": "usa" }));
    assert_eq!(
        error_pairs(&result),
        vec![("country".to_string(), ErrorCode::LengthInvalid)]
    );
}

#[test]
fn test_scenario_email_errors_precede_age_errors() {
    let result = validate(&json!({ "email": "not-an-email", "age": "21" }));
    assert_eq!(
        error_pairs(&result),
        vec![
            ("email".to_string(), ErrorCode::FormatInvalid),
            ("age".to_string(), ErrorCode::TypeInvalid),
        ]
    );
}

#[test]
fn test_scenario_unknown_field() {
    let result = validate(&json!({ "email": "a@b.com", "age": 18, "extra": 1 }));
    assert_eq!(
        error_pairs(&result),
        vec![("extra".to_string(), ErrorCode::UnknownField)]
    );
}

// =============================================================================
// Property Tests
// =============================================================================

/// Invalid iff errors exist; Valid iff none.
#[test]
fn test_outcomes_are_exclusive_and_exhaustive() {
    for input in sample_inputs() {
        let result = validate(&input);
        match &result {
            ValidationResult::Valid(out) => {
                assert!(result.errors().is_empty());
                assert!(!out.as_map().is_empty());
            }
            ValidationResult::Invalid(errors) => {
                assert!(!errors.is_empty());
                assert!(result.normalized().is_none());
            }
        }
    }
}

/// Same input, byte-identical ordered errors.
#[test]
fn test_error_order_is_deterministic() {
    let validator = Validator::new();
    for input in sample_inputs() {
        let first = serde_json::to_string(validator.validate(&input).errors()).unwrap();
        for _ in 0..50 {
            let again = serde_json::to_string(validator.validate(&input).errors()).unwrap();
            assert_eq!(first, again);
        }
    }
}

#[test]
fn test_normalization_is_idempotent() {
    let input = json!({ "email": "  MIXED@Case.ORG ", "age": 64, "country": " fr" });
    let once = validate(&input).normalized().cloned().unwrap().into_value();
    let twice = validate(&once).normalized().cloned().unwrap().into_value();
    assert_eq!(once, twice);
}

#[test]
fn test_integral_float_age_is_an_integer() {
    for raw in [r#"{"email":"a@b.com","age":21.0}"#, r#"{"email":"a@b.com","age":2.1e1}"#] {
        let input: Value = serde_json::from_str(raw).unwrap();
        let out = validate(&input).normalized().cloned().unwrap();
        assert_eq!(out.age(), Some(21));
        assert!(out.as_map()["age"].is_i64());
    }

    let zero: Value = serde_json::from_str(r#"{"email":"a@b.com","age":-0}"#).unwrap();
    assert_eq!(error_pairs(&validate(&zero)), vec![("age".to_string(), ErrorCode::MinValue)]);
}

#[test]
fn test_required_and_unknown_are_independent() {
    let result = validate(&json!({ "age": 30, "foo": true }));
    assert_eq!(
        error_pairs(&result),
        vec![
            ("email".to_string(), ErrorCode::Required),
            ("foo".to_string(), ErrorCode::UnknownField),
        ]
    );
}

/// Every error field is a known field, an offending key, or the root.
#[test]
fn test_error_fields_are_well_formed() {
    for input in sample_inputs() {
        let keys: Vec<String> = input
            .as_object()
            .map(|o| o.keys().cloned().collect())
            .unwrap_or_default();
        for err in validate(&input).errors() {
            let known = ["email", "age", "country", "__root__"].contains(&err.field());
            let offending = err.code() == ErrorCode::UnknownField && keys.contains(&err.field().to_string());
            assert!(known || offending, "unexpected field {}", err.field());
        }
    }
}

// =============================================================================
// Ordering Tests
// =============================================================================

#[test]
fn test_full_ordering_across_fields_and_unknown_keys() {
    let result = validate(&json!({
        "zz": 1,
        "aa": 2,
        "country": "1",
        "email": "",
        "age": 12.5
    }));
    assert_eq!(
        error_pairs(&result),
        vec![
            ("email".to_string(), ErrorCode::FormatInvalid),
            ("age".to_string(), ErrorCode::TypeInvalid),
            ("country".to_string(), ErrorCode::FormatInvalid),
            ("country".to_string(), ErrorCode::LengthInvalid),
            ("aa".to_string(), ErrorCode::UnknownField),
            ("zz".to_string(), ErrorCode::UnknownField),
        ]
    );
}

#[test]
fn test_non_object_payload_yields_single_root_error() {
    for input in [json!([1]), json!(3), json!("x"), json!(false)] {
        let result = validate(&input);
        assert_eq!(
            error_pairs(&result),
            vec![("__root__".to_string(), ErrorCode::TypeInvalid)]
        );
    }
}

#[test]
fn test_empty_object_reports_both_required_fields() {
    let result = validate(&json!({}));
    assert_eq!(
        error_pairs(&result),
        vec![
            ("email".to_string(), ErrorCode::Required),
            ("age".to_string(), ErrorCode::Required),
        ]
    );
}

// =============================================================================
// Concurrency
// =============================================================================

#[test]
fn test_shared_validator_across_threads() {
    let validator = std::sync::Arc::new(Validator::new());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let validator = validator.clone();
            std::thread::spawn(move || {
                let age = 10 + i * 2;
                let result = validator.validate(&json!({ "email": "a@b.com", "age": age }));
                (age, result.is_valid())
            })
        })
        .collect();

    for handle in handles {
        let (age, valid) = handle.join().unwrap();
        assert_eq!(valid, age >= 18);
    }
}
