//! CLI-specific error types
//!
//! Validation failures are not CLI errors; they are printed as envelopes.
//! These cover configuration, I/O and startup only.

use std::io;

use thiserror::Error;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file missing, malformed or inconsistent
    #[error("FORMGATE_CLI_CONFIG_ERROR: {0}")]
    Config(String),

    /// stdin/stdout/file failure
    #[error("FORMGATE_CLI_IO_ERROR: {0}")]
    Io(#[from] io::Error),

    /// Output serialization failure
    #[error("FORMGATE_CLI_IO_ERROR: JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Runtime or listener could not start
    #[error("FORMGATE_CLI_BOOT_FAILED: {0}")]
    BootFailed(String),
}

impl CliError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::BootFailed(msg.into())
    }

    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "FORMGATE_CLI_CONFIG_ERROR",
            Self::Io(_) | Self::Json(_) => "FORMGATE_CLI_IO_ERROR",
            Self::BootFailed(_) => "FORMGATE_CLI_BOOT_FAILED",
        }
    }
}
