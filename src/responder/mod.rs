//! Responder module for ragchat
//!
//! A responder is the remote system that receives a session identifier and
//! the latest user utterance and returns generated reply text. This module
//! defines the [`Responder`] abstraction and the webhook implementation.

pub mod webhook;

pub use webhook::{WebhookRequest, WebhookResponder};

use crate::config::ResponderConfig;
use crate::error::{ResponderError, Result};
use async_trait::async_trait;

/// Exchange interface between the chat loop and a remote responder
///
/// Implementors only provide [`Responder::exchange`], which reports failures
/// as a categorized [`ResponderError`]. The provided [`Responder::send`]
/// collapses that result into text the chat loop can always display.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use ragchat::error::ResponderError;
/// use ragchat::responder::Responder;
///
/// struct Echo;
///
/// #[async_trait]
/// impl Responder for Echo {
///     async fn exchange(
///         &self,
///         _session_id: &str,
///         user_text: &str,
///     ) -> Result<String, ResponderError> {
///         Ok(user_text.to_string())
///     }
///
///     fn endpoint(&self) -> &str {
///         "echo"
///     }
/// }
/// ```
#[async_trait]
pub trait Responder: Send + Sync {
    /// Perform one request/response exchange
    ///
    /// # Errors
    ///
    /// Returns the failure category when the responder cannot be reached,
    /// answers with a non-success status, or breaks the response contract.
    async fn exchange(
        &self,
        session_id: &str,
        user_text: &str,
    ) -> std::result::Result<String, ResponderError>;

    /// Human-readable address of the responder, shown in status output
    fn endpoint(&self) -> &str;

    /// Perform one exchange and always return displayable text
    ///
    /// On success this is the reply itself; on failure it is the error's
    /// display string. The failure is logged at error level with its
    /// category and status only.
    async fn send(&self, session_id: &str, user_text: &str) -> String {
        match self.exchange(session_id, user_text).await {
            Ok(reply) => reply,
            Err(e) => {
                // The display text can carry the response body; keep it at debug
                tracing::error!(
                    kind = e.kind(),
                    status = e.status(),
                    session_id,
                    "Responder exchange failed"
                );
                tracing::debug!(session_id, "Responder failure detail: {}", e);
                e.to_string()
            }
        }
    }
}

/// Create the configured responder
///
/// # Errors
///
/// Returns error if the HTTP client cannot be initialized
pub fn create_responder(config: &ResponderConfig) -> Result<Box<dyn Responder>> {
    Ok(Box::new(WebhookResponder::new(config.clone())?))
}
