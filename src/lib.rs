//! ragchat - Conversational RAG chatbot client library
//!
//! This library provides the pieces behind the `ragchat` binary: a session
//! holding an ordered transcript, a responder client that forwards each
//! utterance to a workflow webhook, and terminal rendering of the result.
//!
//! # Architecture
//!
//! - `session`: session identifier, messages and transcript
//! - `responder`: responder abstraction and the webhook implementation
//! - `transcript`: terminal rendering of messages
//! - `commands`: chat loop, single-message and config commands
//! - `config`: configuration management and validation
//! - `error`: error types and result aliases
//! - `cli`: command-line interface definition
//!
//! # Example
//!
//! ```no_run
//! use ragchat::commands::submit_turn;
//! use ragchat::config::Config;
//! use ragchat::responder::create_responder;
//! use ragchat::session::Session;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     config.validate()?;
//!
//!     let responder = create_responder(&config.responder)?;
//!     let mut session = Session::new();
//!     let turn = submit_turn(&mut session, responder.as_ref(), "Hello!").await;
//!     println!("{}", turn.assistant.content);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod responder;
pub mod session;
pub mod transcript;

// Re-export commonly used types
pub use config::Config;
pub use error::{RagchatError, ResponderError, Result};
pub use responder::{Responder, WebhookResponder};
pub use session::{Message, Role, Session, SessionId};

#[cfg(test)]
pub mod test_utils;
