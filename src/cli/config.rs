//! Configuration file
//!
//! JSON, every key optional:
//!
//! ```json
//! {
//!   "host": "0.0.0.0",
//!   "port": 8080,
//!   "max_body_bytes": 65536,
//!   "cors_origins": [],
//!   "code_priority": ["REQUIRED", "TYPE_INVALID", "FORMAT_INVALID",
//!                     "LENGTH_INVALID", "MIN_VALUE", "UNKNOWN_FIELD"]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::aggregate::{ErrorOrdering, DEFAULT_CODE_PRIORITY};
use crate::http_server::HttpServerConfig;
use crate::pipeline::Validator;
use crate::schema::ErrorCode;

use super::errors::{CliError, CliResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Listener settings
    #[serde(flatten)]
    pub server: HttpServerConfig,

    /// Within-field error priority, highest first
    #[serde(default = "default_code_priority")]
    pub code_priority: Vec<ErrorCode>,
}

fn default_code_priority() -> Vec<ErrorCode> {
    DEFAULT_CODE_PRIORITY.to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: HttpServerConfig::default(),
            code_priority: default_code_priority(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config(format!("Failed to read config: {}", e)))?;

        Self::from_json(&content)
    }

    /// Load from `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse and check configuration text
    pub fn from_json(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.server.port == 0 {
            return Err(CliError::config("port must be > 0"));
        }

        if self.server.max_body_bytes == 0 {
            return Err(CliError::config("max_body_bytes must be > 0"));
        }

        self.ordering()?;

        Ok(())
    }

    /// Error ordering described by `code_priority`
    pub fn ordering(&self) -> CliResult<ErrorOrdering> {
        ErrorOrdering::with_code_priority(&self.code_priority)
            .map_err(|e| CliError::config(format!("Invalid code_priority: {}", e)))
    }

    /// Engine configured from this file
    pub fn validator(&self) -> CliResult<Validator> {
        Ok(Validator::with_ordering(self.ordering()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.ordering().unwrap(), ErrorOrdering::default());
    }

    #[test]
    fn test_flattened_server_keys() {
        let config = Config::from_json(r#"{"port": 9001, "max_body_bytes": 1024}"#).unwrap();
        assert_eq!(config.server.port, 9001);
        assert_eq!(config.server.max_body_bytes, 1024);
    }

    #[test]
    fn test_zero_port_rejected() {
        let err = Config::from_json(r#"{"port": 0}"#).unwrap_err();
        assert!(err.to_string().contains("port"));
    }

    #[test]
    fn test_zero_body_limit_rejected() {
        assert!(Config::from_json(r#"{"max_body_bytes": 0}"#).is_err());
    }

    #[test]
    fn test_incomplete_code_priority_rejected() {
        let err = Config::from_json(r#"{"code_priority": ["REQUIRED"]}"#).unwrap_err();
        assert_eq!(err.code(), "FORMGATE_CLI_CONFIG_ERROR");
        assert!(err.to_string().contains("code_priority"));
    }

    #[test]
    fn test_unknown_code_name_rejected() {
        assert!(Config::from_json(r#"{"code_priority": ["NOPE"]}"#).is_err());
    }

    #[test]
    fn test_custom_code_priority() {
        let config = Config::from_json(
            r#"{"code_priority": ["UNKNOWN_FIELD", "MIN_VALUE", "LENGTH_INVALID",
                                 "FORMAT_INVALID", "TYPE_INVALID", "REQUIRED"]}"#,
        )
        .unwrap();
        let ordering = config.ordering().unwrap();
        assert_eq!(ordering.code_priority()[0], ErrorCode::UnknownField);
    }
}
