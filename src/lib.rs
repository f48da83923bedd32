//! formgate - strict, deterministic payload validation and normalization
//!
//! The engine is a pure function from a raw JSON value to a
//! [`ValidationResult`]: either the normalized payload or an ordered,
//! non-empty list of machine-readable errors.
//!
//! ```
//! use formgate::{validate, ValidationResult};
//! use serde_json::json;
//!
//! let result = validate(&json!({ "email": " User@Example.com ", "age": 21 }));
//! match result {
//!     ValidationResult::Valid(out) => assert_eq!(out.email(), Some("user@example.com")),
//!     ValidationResult::Invalid(errors) => panic!("unexpected errors: {:?}", errors),
//! }
//! ```

pub mod aggregate;
pub mod api;
pub mod cli;
pub mod http_server;
pub mod normalize;
pub mod observability;
pub mod pipeline;
pub mod rules;
pub mod schema;

pub use normalize::NormalizedOutput;
pub use pipeline::{validate, ValidationErrors, ValidationResult, Validator};
pub use schema::{ErrorCode, ValidationError, ROOT_FIELD};
