//! Field contract and structural validation
//!
//! # Design Principles
//!
//! - Closed field set, declared once as data
//! - No nulls, defaults, or coercion
//! - Unknown keys are reported, never dropped
//! - Deterministic validation

mod errors;
mod types;
mod validator;

pub use errors::{ErrorCode, ValidationError, ROOT_FIELD};
pub use types::{
    field_position, field_spec, json_type_name, whole_number, FieldKind, FieldSpec, FIELDS,
};
pub use validator::{check_structure, CheckedField, StructuralReport};
