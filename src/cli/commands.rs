//! CLI command implementations
//!
//! `check` and `batch` run the engine in-process and print envelopes.
//! `serve` hands the same engine to the HTTP adapter.

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::api::{self, Envelope};
use crate::http_server::HttpServer;
use crate::observability::{log_event_with_fields, Event};
use crate::pipeline::Validator;

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{read_input, write_envelope};

/// How a successful command run should exit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every payload was valid (or nothing was validated)
    Accepted,
    /// At least one payload was rejected
    Rejected,
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Accepted => 0,
            Outcome::Rejected => 2,
        }
    }

    fn of(envelope: &Envelope) -> Self {
        if envelope.is_valid() {
            Outcome::Accepted
        } else {
            Outcome::Rejected
        }
    }
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<Outcome> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<Outcome> {
    match cmd {
        Command::Check { file, config } => check(file.as_deref(), config.as_deref()),
        Command::Batch { config } => batch(config.as_deref()),
        Command::Serve { config, port } => serve(config.as_deref(), port),
    }
}

/// Validate one payload from a file or stdin
pub fn check(file: Option<&Path>, config_path: Option<&Path>) -> CliResult<Outcome> {
    let validator = Config::load_or_default(config_path)?.validator()?;
    let body = read_input(file)?;
    check_bytes(&validator, &body, &mut io::stdout().lock())
}

/// Validate `body` and write its envelope to `out`
pub fn check_bytes<W: Write>(validator: &Validator, body: &[u8], out: &mut W) -> CliResult<Outcome> {
    let envelope = api::evaluate_body(validator, body);
    write_envelope(out, &envelope)?;
    Ok(Outcome::of(&envelope))
}

/// Validate newline-delimited payloads from stdin
pub fn batch(config_path: Option<&Path>) -> CliResult<Outcome> {
    let validator = Config::load_or_default(config_path)?.validator()?;
    let stdin = io::stdin();
    batch_lines(&validator, stdin.lock(), &mut io::stdout().lock())
}

/// One envelope per non-blank input line, in input order
///
/// Lines are split on raw bytes; a line that is not UTF-8 is just another
/// unparseable payload.
pub fn batch_lines<R: BufRead, W: Write>(
    validator: &Validator,
    input: R,
    out: &mut W,
) -> CliResult<Outcome> {
    let mut outcome = Outcome::Accepted;

    for line in input.split(b'\n') {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        let envelope = api::evaluate_body(validator, &line);
        write_envelope(out, &envelope)?;
        if !envelope.is_valid() {
            outcome = Outcome::Rejected;
        }
    }

    Ok(outcome)
}

/// Serve the validation endpoint until interrupted
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<Outcome> {
    let mut config = Config::load_or_default(config_path)?;
    if let Some(port) = port {
        if port == 0 {
            return Err(CliError::config("port must be > 0"));
        }
        config.server.port = port;
    }

    let validator = config.validator()?;
    let port_str = config.server.port.to_string();
    log_event_with_fields(Event::ConfigLoaded, &[("port", port_str.as_str())]);

    let server = HttpServer::with_config(config.server, validator);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async { server.start().await }).map_err(|e| {
        let reason = e.to_string();
        log_event_with_fields(Event::ServerFailed, &[("reason", reason.as_str())]);
        CliError::boot_failed(format!("HTTP server failed: {}", e))
    })?;

    Ok(Outcome::Accepted)
}
