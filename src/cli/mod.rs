//! CLI module for formgate
//!
//! Provides command-line interface for:
//! - check: validate one payload
//! - batch: validate newline-delimited payloads
//! - serve: run the HTTP adapter

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{batch_lines, check_bytes, run, run_command, Outcome};
pub use config::Config;
pub use errors::{CliError, CliResult};
pub use io::{read_input, write_envelope};
