//! Error types for ragchat
//!
//! This module defines the application error type and the categorized
//! error produced by a responder exchange, using `thiserror` for
//! ergonomic error handling.

use thiserror::Error;

/// Main error type for ragchat operations
///
/// Covers configuration loading, responder construction, CLI command
/// handling, and the I/O that the interactive loop performs.
#[derive(Error, Debug)]
pub enum RagchatError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Responder construction errors (HTTP client setup, bad endpoint)
    #[error("Responder error: {0}")]
    Responder(String),

    /// Command handling errors
    #[error("Command error: {0}")]
    Command(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP client errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Categorized failure of a single responder exchange
///
/// Every variant renders to a human-readable sentence. The chat loop
/// appends that sentence as the assistant message, so a failed exchange
/// still completes the turn.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResponderError {
    /// The responder could not be reached (refused, DNS, timeout)
    #[error("Connection error: {0}")]
    Transport(String),

    /// The responder answered with a non-success status code
    #[error("Error: {status} - {body}")]
    Application {
        /// HTTP status code returned by the responder
        status: u16,
        /// Raw response body
        body: String,
    },

    /// The responder answered with success but without a usable `output` field
    #[error("Invalid response from responder: {0}")]
    ContractViolation(String),

    /// Any other failure during the exchange
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl ResponderError {
    /// Short, stable name of the failure category, suitable for log fields
    ///
    /// # Examples
    ///
    /// ```
    /// use ragchat::error::ResponderError;
    ///
    /// let err = ResponderError::Transport("connection refused".to_string());
    /// assert_eq!(err.kind(), "transport");
    /// ```
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Application { .. } => "application",
            Self::ContractViolation(_) => "contract_violation",
            Self::Unexpected(_) => "unexpected",
        }
    }

    /// HTTP status code, when the responder answered with one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Application { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for ragchat operations
///
/// Uses `anyhow::Error` so command handlers can attach context while
/// propagating with `?`.
pub type Result<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let error = RagchatError::Config("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_responder_error_display() {
        let error = RagchatError::Responder("bad url".to_string());
        assert_eq!(error.to_string(), "Responder error: bad url");
    }

    #[test]
    fn test_command_error_display() {
        let error = RagchatError::Command("no input".to_string());
        assert_eq!(error.to_string(), "Command error: no input");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: RagchatError = io_error.into();
        assert!(matches!(error, RagchatError::Io(_)));
    }

    #[test]
    fn test_http_error_conversion() {
        let http_error = reqwest::Client::new()
            .get("not a url")
            .build()
            .unwrap_err();
        let error: RagchatError = http_error.into();
        assert!(matches!(error, RagchatError::Http(_)));
        assert!(error.to_string().starts_with("HTTP error:"));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_error = serde_yaml::from_str::<serde_yaml::Value>("invalid: : yaml").unwrap_err();
        let error: RagchatError = yaml_error.into();
        assert!(matches!(error, RagchatError::Yaml(_)));
    }

    #[test]
    fn test_transport_error_display() {
        let error = ResponderError::Transport("operation timed out".to_string());
        assert_eq!(error.to_string(), "Connection error: operation timed out");
    }

    #[test]
    fn test_application_error_embeds_status_and_body() {
        let error = ResponderError::Application {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(error.to_string(), "Error: 500 - boom");
        assert_eq!(error.kind(), "application");
        assert_eq!(error.status(), Some(500));
    }

    #[test]
    fn test_contract_violation_display() {
        let error = ResponderError::ContractViolation("missing `output` field".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid response from responder: missing `output` field"
        );
    }

    #[test]
    fn test_unexpected_error_display() {
        let error = ResponderError::Unexpected("body truncated".to_string());
        assert_eq!(error.to_string(), "Unexpected error: body truncated");
        assert_eq!(error.kind(), "unexpected");
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RagchatError>();
        assert_send_sync::<ResponderError>();
    }
}
