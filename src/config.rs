//! Configuration management for ragchat
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.
//! Precedence, lowest to highest: defaults, YAML file, environment, CLI.

use crate::error::{RagchatError, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Upper bound accepted for `responder.timeout_seconds`
const MAX_TIMEOUT_SECONDS: u64 = 600;

/// Main configuration structure for ragchat
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Responder endpoint settings
    #[serde(default)]
    pub responder: ResponderConfig,
    /// Interactive chat presentation settings
    #[serde(default)]
    pub chat: ChatConfig,
}

/// Responder endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponderConfig {
    /// Webhook URL that receives `{"sessionId", "chatInput"}` POSTs
    #[serde(default = "default_webhook_url")]
    pub webhook_url: String,

    /// Upper bound on the wait for one exchange (seconds)
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_webhook_url() -> String {
    "http://localhost:5678/webhook/chatbot-app".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            webhook_url: default_webhook_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// Chat presentation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Print the `HH:MM:SS` caption under each message
    #[serde(default = "default_show_timestamps")]
    pub show_timestamps: bool,

    /// Label shown in front of user messages
    #[serde(default = "default_user_label")]
    pub user_label: String,

    /// Label shown in front of assistant messages
    #[serde(default = "default_assistant_label")]
    pub assistant_label: String,
}

fn default_show_timestamps() -> bool {
    true
}

fn default_user_label() -> String {
    "You".to_string()
}

fn default_assistant_label() -> String {
    "Assistant".to_string()
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            show_timestamps: default_show_timestamps(),
            user_label: default_user_label(),
            assistant_label: default_assistant_label(),
        }
    }
}

/// Command-line values that take precedence over file and environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Replacement webhook URL
    pub webhook_url: Option<String>,
    /// Replacement timeout in seconds
    pub timeout_seconds: Option<u64>,
}

impl Config {
    /// Load configuration from file with environment and CLI overrides
    ///
    /// # Arguments
    ///
    /// * `path` - Path to configuration file
    /// * `overrides` - Values supplied on the command line
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed
    pub fn load(path: &str, overrides: &ConfigOverrides) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::warn!("Config file not found at {}, using defaults", path);
            Self::default()
        };

        config.apply_env_vars();
        config.apply_overrides(overrides);

        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(RagchatError::Io)
            .with_context(|| format!("Failed to read config file {}", path))?;
        let config: Self = serde_yaml::from_str(&contents)
            .map_err(|e| RagchatError::Config(format!("Failed to parse config: {}", e)))?;
        tracing::debug!("Loaded config from {}", path);
        Ok(config)
    }

    fn apply_env_vars(&mut self) {
        if let Ok(url) = std::env::var("RAGCHAT_WEBHOOK_URL") {
            tracing::debug!(webhook_url = %url, "Env override: RAGCHAT_WEBHOOK_URL");
            self.responder.webhook_url = url;
        }

        if let Ok(timeout) = std::env::var("RAGCHAT_TIMEOUT_SECONDS") {
            match timeout.parse::<u64>() {
                Ok(v) => {
                    self.responder.timeout_seconds = v;
                    tracing::debug!(timeout_seconds = v, "Env override: RAGCHAT_TIMEOUT_SECONDS");
                }
                Err(_) => {
                    tracing::warn!("Invalid RAGCHAT_TIMEOUT_SECONDS: {}", timeout);
                }
            }
        }

        if let Ok(show) = std::env::var("RAGCHAT_SHOW_TIMESTAMPS") {
            match show.parse::<bool>() {
                Ok(v) => {
                    self.chat.show_timestamps = v;
                    tracing::debug!(show_timestamps = v, "Env override: RAGCHAT_SHOW_TIMESTAMPS");
                }
                Err(_) => {
                    tracing::warn!("Invalid value for RAGCHAT_SHOW_TIMESTAMPS: {}", show);
                }
            }
        }
    }

    fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(url) = &overrides.webhook_url {
            self.responder.webhook_url = url.clone();
        }
        if let Some(timeout) = overrides.timeout_seconds {
            self.responder.timeout_seconds = timeout;
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns error if the webhook URL is not an http(s) URL, the timeout
    /// is outside `1..=600` seconds, or a label is empty
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.responder.webhook_url).map_err(|e| {
            RagchatError::Config(format!(
                "Invalid webhook_url '{}': {}",
                self.responder.webhook_url, e
            ))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(RagchatError::Config(format!(
                "webhook_url must use http or https, got: {}",
                url.scheme()
            ))
            .into());
        }

        if self.responder.timeout_seconds == 0 {
            return Err(
                RagchatError::Config("timeout_seconds must be greater than 0".to_string()).into(),
            );
        }

        if self.responder.timeout_seconds > MAX_TIMEOUT_SECONDS {
            return Err(RagchatError::Config(format!(
                "timeout_seconds must be less than or equal to {}",
                MAX_TIMEOUT_SECONDS
            ))
            .into());
        }

        if self.chat.user_label.trim().is_empty() || self.chat.assistant_label.trim().is_empty() {
            return Err(
                RagchatError::Config("chat labels cannot be empty".to_string()).into(),
            );
        }

        Ok(())
    }
}
