//! Declarative semantic checks
//!
//! String checks operate on the trimmed value and count Unicode scalar
//! values. Number checks see the integer form of the JSON number, so `21.0`
//! is the integer 21.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::schema::{whole_number, ErrorCode, ValidationError};

/// `local@label(.label)+`, no whitespace, exactly one `@`.
static EMAIL_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").ok());

/// A single semantic rule attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Trimmed string must not be empty (gate)
    NotBlank,
    /// Trimmed string must look like an email address
    EmailAddress,
    /// Number must have no fractional component (gate)
    WholeNumber,
    /// Number must be at least the given bound
    AtLeast(i64),
    /// Trimmed string must have exactly this many characters
    ExactLength(usize),
    /// Trimmed string must contain only A-Z, either case
    AsciiAlphabetic,
}

impl Check {
    /// When a gate fails, later checks for the field are meaningless and skipped.
    pub fn is_gate(&self) -> bool {
        matches!(self, Check::NotBlank | Check::WholeNumber)
    }

    /// The code this check reports on failure.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Check::NotBlank | Check::EmailAddress | Check::AsciiAlphabetic => {
                ErrorCode::FormatInvalid
            }
            Check::WholeNumber => ErrorCode::TypeInvalid,
            Check::AtLeast(_) => ErrorCode::MinValue,
            Check::ExactLength(_) => ErrorCode::LengthInvalid,
        }
    }

    /// Evaluates the check. `None` means the value passes.
    ///
    /// A value of the wrong primitive type passes vacuously; the structural
    /// layer owns type errors.
    pub fn apply(&self, field: &str, value: &Value) -> Option<ValidationError> {
        let passed = match self {
            Check::NotBlank => text(value).map_or(true, |s| !s.is_empty()),
            Check::EmailAddress => text(value).map_or(true, is_email_address),
            Check::WholeNumber => !value.is_number() || whole_number(value).is_some(),
            Check::AtLeast(min) => match whole_number(value) {
                // u64 beyond i64::MAX
                Some(n) => n.as_i64().map_or(true, |n| n >= *min),
                // not a number, or a fraction the gate already rejected
                None => true,
            },
            Check::ExactLength(len) => text(value).map_or(true, |s| s.chars().count() == *len),
            Check::AsciiAlphabetic => {
                text(value).map_or(true, |s| s.chars().all(|c| c.is_ascii_alphabetic()))
            }
        };

        if passed {
            None
        } else {
            Some(ValidationError::new(field, self.error_code(), self.message(field)))
        }
    }

    fn message(&self, field: &str) -> String {
        match self {
            Check::NotBlank => format!("{} must not be blank", field),
            Check::EmailAddress => format!("{} must be a valid email address", field),
            Check::WholeNumber => format!("{} must be an integer", field),
            Check::AtLeast(min) => format!("{} must be at least {}", field, min),
            Check::ExactLength(len) => format!("{} must be exactly {} characters", field, len),
            Check::AsciiAlphabetic => format!("{} must contain only letters A-Z", field),
        }
    }
}

fn text(value: &Value) -> Option<&str> {
    value.as_str().map(str::trim)
}

fn is_email_address(candidate: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .map_or(false, |pattern| pattern.is_match(candidate))
}
