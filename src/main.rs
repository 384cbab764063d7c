//! ragchat - Conversational RAG chatbot client
//!
#![doc = "Main entry point for the ragchat binary."]

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ragchat::cli::{Cli, Commands};
use ragchat::commands;
use ragchat::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Initialize tracing
    init_tracing(cli.verbose);

    // Load configuration
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path, &cli.overrides())?;

    // Validate configuration
    config.validate()?;

    match cli.command {
        Commands::Chat { .. } => {
            commands::chat::run_chat(config).await?;
            Ok(())
        }
        Commands::Ask {
            message,
            session_id,
            json,
            ..
        } => {
            tracing::debug!("Sending single message");
            if let Some(id) = &session_id {
                tracing::debug!("Reusing session: {}", id);
            }
            commands::ask::run_ask(config, message, session_id, json).await?;
            Ok(())
        }
        Commands::Config { .. } => {
            commands::config::show_config(&config)?;
            Ok(())
        }
    }
}

/// Initialize tracing subscriber with environment filter
///
/// Logs go to stderr so they never interleave with the transcript.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "ragchat=debug" } else { "ragchat=info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
