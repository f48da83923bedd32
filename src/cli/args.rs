//! CLI argument definitions using clap
//!
//! Commands:
//! - formgate check [--file <path>] [--config <path>]
//! - formgate batch [--config <path>]
//! - formgate serve [--config <path>] [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// formgate - strict payload validation and normalization
#[derive(Parser, Debug)]
#[command(name = "formgate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate one JSON payload and print the result envelope
    Check {
        /// Read the payload from this file instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,

        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate newline-delimited JSON payloads from stdin
    Batch {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Serve the validation endpoint over HTTP
    Serve {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port override
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check_with_file() {
        let cli = Cli::try_parse_from(["formgate", "check", "--file", "payload.json"]).unwrap();
        match cli.command {
            Command::Check { file, config } => {
                assert_eq!(file, Some(PathBuf::from("payload.json")));
                assert!(config.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_serve_port() {
        let cli = Cli::try_parse_from(["formgate", "serve", "--port", "9000"]).unwrap();
        assert!(matches!(cli.command, Command::Serve { port: Some(9000), .. }));
    }

    #[test]
    fn test_unknown_subcommand_rejected() {
        assert!(Cli::try_parse_from(["formgate", "frobnicate"]).is_err());
    }
}
