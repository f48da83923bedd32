//! Validate-then-normalize pipeline
//!
//! The engine is a pure, synchronous function of its input: no I/O, no
//! clocks, no randomness, no state carried between calls.

mod orchestrator;
mod result;

pub use orchestrator::{validate, Validator};
pub use result::{ValidationErrors, ValidationResult};
