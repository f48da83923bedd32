//! Semantic rules for structurally valid fields
//!
//! Rules are plain data attached to each field spec, so the full rule set
//! lives in one table and each check can be tested on its own.

mod checks;
mod engine;

pub use checks::Check;
pub use engine::evaluate;
