//! Command-line interface definition for ragchat
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for interactive chat, one-shot questions, and
//! configuration inspection.

use crate::config::ConfigOverrides;
use clap::{Args, Parser, Subcommand};

/// ragchat - Conversational RAG chatbot client
///
/// Sends each message with a session identifier to a workflow webhook and
/// prints the replies as a timestamped transcript.
#[derive(Parser, Debug, Clone)]
#[command(name = "ragchat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Endpoint overrides shared by the commands that talk to the responder
#[derive(Args, Debug, Clone, Default)]
pub struct EndpointArgs {
    /// Override the webhook URL from config
    #[arg(short = 'u', long)]
    pub webhook_url: Option<String>,

    /// Override the request timeout in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,
}

/// Available commands for ragchat
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start an interactive chat session
    Chat {
        #[command(flatten)]
        endpoint: EndpointArgs,
    },

    /// Send a single message and print the reply
    Ask {
        /// Message to send
        message: String,

        /// Reuse an existing session identifier
        #[arg(short, long)]
        session_id: Option<String>,

        /// Print the session id and both messages as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        endpoint: EndpointArgs,
    },

    /// Print the effective configuration
    Config {
        #[command(flatten)]
        endpoint: EndpointArgs,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Configuration overrides carried by the selected command
    pub fn overrides(&self) -> ConfigOverrides {
        let endpoint = match &self.command {
            Commands::Chat { endpoint }
            | Commands::Ask { endpoint, .. }
            | Commands::Config { endpoint } => endpoint,
        };
        ConfigOverrides {
            webhook_url: endpoint.webhook_url.clone(),
            timeout_seconds: endpoint.timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_chat_command() {
        let cli = Cli::try_parse_from(["ragchat", "chat"]).unwrap();
        assert!(matches!(cli.command, Commands::Chat { .. }));
        assert_eq!(cli.config, Some("config/config.yaml".to_string()));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_parse_chat_with_overrides() {
        let cli = Cli::try_parse_from([
            "ragchat",
            "chat",
            "--webhook-url",
            "http://hook.example/x",
            "--timeout",
            "5",
        ])
        .unwrap();
        let overrides = cli.overrides();
        assert_eq!(
            overrides.webhook_url,
            Some("http://hook.example/x".to_string())
        );
        assert_eq!(overrides.timeout_seconds, Some(5));
    }

    #[test]
    fn test_cli_parse_ask() {
        let cli = Cli::try_parse_from([
            "ragchat",
            "ask",
            "Hello there",
            "--session-id",
            "s1",
            "--json",
        ])
        .unwrap();
        if let Commands::Ask {
            message,
            session_id,
            json,
            ..
        } = cli.command
        {
            assert_eq!(message, "Hello there");
            assert_eq!(session_id, Some("s1".to_string()));
            assert!(json);
        } else {
            panic!("Expected Ask command");
        }
    }

    #[test]
    fn test_cli_ask_requires_message() {
        assert!(Cli::try_parse_from(["ragchat", "ask"]).is_err());
    }

    #[test]
    fn test_cli_global_flags() {
        let cli =
            Cli::try_parse_from(["ragchat", "-v", "--config", "custom.yaml", "config"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some("custom.yaml".to_string()));
        assert!(matches!(cli.command, Commands::Config { .. }));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["ragchat"]).is_err());
    }

    #[test]
    fn test_cli_rejects_bad_timeout() {
        assert!(Cli::try_parse_from(["ragchat", "chat", "--timeout", "soon"]).is_err());
    }
}
