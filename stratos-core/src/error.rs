//! Error types for the Stratos core library.
//!
//! The flow itself has almost nothing that can fail: empty and busy
//! submissions are modeled as non-error outcomes on the controller, and
//! catalog misses are `Option`s rendered gracefully. What remains is
//! configuration loading, serialization, and CLI-boundary lookups.
//!
//! # Error Codes Reference
//!
//! | Code Range | Category | Description |
//! |------------|----------|-------------|
//! | E1001-E1099 | Config | Config file, env, and validation errors |
//! | E2001-E2099 | Session | Builder session state errors |
//! | E3001-E3099 | Catalog | Agent/strategy lookup errors |
//! | E9001-E9099 | General | Internal, IO, serialization errors |

use std::fmt;

use thiserror::Error;
use tracing::{error, warn};

/// The main error type for the Stratos core library.
#[derive(Debug, Error)]
pub enum StratosError {
    // ========================================================================
    // Configuration Errors (E1001-E1099)
    // ========================================================================
    /// Configuration file parse error
    #[error("[E1001] Failed to parse configuration: {0}")]
    ConfigParseError(String),

    /// Invalid configuration value
    #[error("[E1002] Invalid configuration value for '{key}': {message}")]
    InvalidConfigValue { key: String, message: String },

    /// Configuration file not found
    #[error("[E1003] Configuration file not found: {0}")]
    ConfigFileNotFound(String),

    // ========================================================================
    // Session Errors (E2001-E2099)
    // ========================================================================
    /// A reply is already in flight for this session
    #[error("[E2001] Session is awaiting a response: {0}")]
    SessionBusy(String),

    /// Invalid session state transition
    #[error("[E2002] Invalid session state transition from {from} to {to}")]
    InvalidSessionTransition { from: String, to: String },

    // ========================================================================
    // Catalog Errors (E3001-E3099)
    // ========================================================================
    /// Agent listing not found in the marketplace catalog
    #[error("[E3001] Agent not found: {0}")]
    AgentNotFound(String),

    /// Unknown strategy identifier
    #[error("[E3002] Unknown strategy: {0}")]
    UnknownStrategy(String),

    /// Unknown personality filter
    #[error("[E3003] Unknown personality: {0}")]
    UnknownPersonality(String),

    // ========================================================================
    // General Errors (E9001-E9099)
    // ========================================================================
    /// Internal error (catch-all for unexpected conditions)
    #[error("[E9001] Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("[E9002] IO error: {0}")]
    IoError(String),

    /// Serialization/deserialization error
    #[error("[E9003] Serialization error: {0}")]
    SerializationError(String),
}

/// Result type alias for Stratos operations.
pub type StratosResult<T> = Result<T, StratosError>;

impl From<std::io::Error> for StratosError {
    fn from(err: std::io::Error) -> Self {
        StratosError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for StratosError {
    fn from(err: serde_json::Error) -> Self {
        StratosError::SerializationError(err.to_string())
    }
}

impl From<config::ConfigError> for StratosError {
    fn from(err: config::ConfigError) -> Self {
        match err {
            config::ConfigError::NotFound(key) => StratosError::InvalidConfigValue {
                key,
                message: "Key not found".to_string(),
            },
            config::ConfigError::FileParse { uri, cause } => StratosError::ConfigParseError(
                format!("Failed to parse {}: {}", uri.unwrap_or_default(), cause),
            ),
            _ => StratosError::ConfigParseError(err.to_string()),
        }
    }
}

impl StratosError {
    /// Returns true if this error is related to configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            StratosError::ConfigParseError(_)
                | StratosError::InvalidConfigValue { .. }
                | StratosError::ConfigFileNotFound(_)
        )
    }

    /// Returns true if this error is related to catalog lookups.
    pub fn is_catalog_error(&self) -> bool {
        matches!(
            self,
            StratosError::AgentNotFound(_)
                | StratosError::UnknownStrategy(_)
                | StratosError::UnknownPersonality(_)
        )
    }

    /// Returns an error code suitable for logging or external reporting.
    pub fn error_code(&self) -> &'static str {
        match self {
            StratosError::ConfigParseError(_) => "E1001",
            StratosError::InvalidConfigValue { .. } => "E1002",
            StratosError::ConfigFileNotFound(_) => "E1003",
            StratosError::SessionBusy(_) => "E2001",
            StratosError::InvalidSessionTransition { .. } => "E2002",
            StratosError::AgentNotFound(_) => "E3001",
            StratosError::UnknownStrategy(_) => "E3002",
            StratosError::UnknownPersonality(_) => "E3003",
            StratosError::Internal(_) => "E9001",
            StratosError::IoError(_) => "E9002",
            StratosError::SerializationError(_) => "E9003",
        }
    }

    /// Returns a user-friendly suggestion for how to resolve this error.
    pub fn user_suggestion(&self) -> Option<&'static str> {
        match self {
            StratosError::ConfigFileNotFound(_) => {
                Some("Create stratos.toml in your config directory or unset STRATOS_CONFIG")
            }
            StratosError::AgentNotFound(_) => {
                Some("Run 'stratos agents list' to see available agents")
            }
            StratosError::UnknownStrategy(_) => {
                Some("Run 'stratos strategies' to see valid strategy ids")
            }
            StratosError::UnknownPersonality(_) => {
                Some("Valid personalities are: conservative, moderate, aggressive")
            }
            StratosError::SessionBusy(_) => {
                Some("Wait for the current reply to arrive before sending another message")
            }
            _ => None,
        }
    }

    /// Log this error with appropriate severity level.
    pub fn log(&self) {
        let code = self.error_code();
        let suggestion = self.user_suggestion();

        if self.is_catalog_error() {
            warn!(error_code = %code, suggestion = suggestion, "Lookup failed: {}", self);
        } else {
            error!(error_code = %code, suggestion = suggestion, "Error occurred: {}", self);
        }
    }
}

/// Format an error for CLI display with suggestions attached.
pub struct CliErrorDisplay<'a> {
    error: &'a StratosError,
    show_suggestion: bool,
}

impl<'a> CliErrorDisplay<'a> {
    pub fn new(error: &'a StratosError) -> Self {
        Self {
            error,
            show_suggestion: true,
        }
    }

    pub fn without_suggestion(mut self) -> Self {
        self.show_suggestion = false;
        self
    }
}

impl<'a> fmt::Display for CliErrorDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.error)?;

        if self.show_suggestion {
            if let Some(suggestion) = self.error.user_suggestion() {
                writeln!(f)?;
                writeln!(f, "  Suggestion: {}", suggestion)?;
            }
        }

        Ok(())
    }
}
