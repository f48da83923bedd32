//! Deterministic error ordering
//!
//! Primary key: field rank. `__root__` first, then known fields in
//! `FIELDS` order, then any other key lexicographically.
//! Secondary key: code priority, configurable.

use std::cmp::Ordering;

use thiserror::Error;

use crate::schema::{field_position, ErrorCode, ValidationError, FIELDS};

/// Default within-field priority, highest first.
pub const DEFAULT_CODE_PRIORITY: [ErrorCode; 6] = [
    ErrorCode::Required,
    ErrorCode::TypeInvalid,
    ErrorCode::FormatInvalid,
    ErrorCode::LengthInvalid,
    ErrorCode::MinValue,
    ErrorCode::UnknownField,
];

/// Rejected code priority lists
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderingError {
    #[error("code priority lists {0} more than once")]
    DuplicateCode(ErrorCode),

    #[error("code priority is missing {0}")]
    MissingCode(ErrorCode),
}

/// Sort order applied to aggregated errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorOrdering {
    code_priority: [ErrorCode; 6],
}

impl Default for ErrorOrdering {
    fn default() -> Self {
        Self {
            code_priority: DEFAULT_CODE_PRIORITY,
        }
    }
}

impl ErrorOrdering {
    /// Builds an ordering from an explicit priority list.
    ///
    /// The list must name each of the six codes exactly once.
    pub fn with_code_priority(priority: &[ErrorCode]) -> Result<Self, OrderingError> {
        let mut seen: Vec<ErrorCode> = Vec::with_capacity(ErrorCode::ALL.len());
        for code in priority {
            if seen.contains(code) {
                return Err(OrderingError::DuplicateCode(*code));
            }
            seen.push(*code);
        }

        if let Some(missing) = ErrorCode::ALL.iter().find(|code| !seen.contains(code)) {
            return Err(OrderingError::MissingCode(*missing));
        }

        let mut code_priority = DEFAULT_CODE_PRIORITY;
        code_priority.copy_from_slice(&seen);
        Ok(Self { code_priority })
    }

    /// Returns the priority list, highest first
    pub fn code_priority(&self) -> &[ErrorCode] {
        &self.code_priority
    }

    fn code_rank(&self, code: ErrorCode) -> usize {
        self.code_priority
            .iter()
            .position(|c| *c == code)
            .unwrap_or(self.code_priority.len())
    }

    /// Total order over errors.
    pub fn compare(&self, a: &ValidationError, b: &ValidationError) -> Ordering {
        field_rank(a)
            .cmp(&field_rank(b))
            .then_with(|| unknown_key(a).cmp(unknown_key(b)))
            .then_with(|| self.code_rank(a.code()).cmp(&self.code_rank(b.code())))
    }

    /// Stable sort of `errors` into their deterministic order.
    pub fn sort(&self, errors: &mut [ValidationError]) {
        errors.sort_by(|a, b| self.compare(a, b));
    }
}

fn field_rank(err: &ValidationError) -> usize {
    if err.is_root() {
        return 0;
    }
    match field_position(err.field()) {
        Some(pos) => pos + 1,
        None => FIELDS.len() + 1,
    }
}

/// Tiebreak key, only meaningful for keys outside the field set.
fn unknown_key(err: &ValidationError) -> &str {
    if err.is_root() || field_position(err.field()).is_some() {
        ""
    } else {
        err.field()
    }
}
