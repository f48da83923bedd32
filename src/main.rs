//! formgate CLI entry point
//!
//! Parses arguments, dispatches to the CLI module and maps the outcome to an
//! exit code:
//! - 0: accepted (or server shut down cleanly)
//! - 1: configuration, I/O or startup error (printed to stderr)
//! - 2: at least one payload rejected

use formgate::cli;

fn main() {
    match cli::run() {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
