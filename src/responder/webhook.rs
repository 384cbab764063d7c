//! Webhook responder implementation for ragchat
//!
//! Posts `{"sessionId", "chatInput"}` to a workflow-automation webhook and
//! reads the reply from the `output` field of the JSON response.

use crate::config::ResponderConfig;
use crate::error::{RagchatError, ResponderError, Result};
use crate::responder::Responder;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

/// Request body sent to the webhook
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest<'a> {
    /// Identifier of the conversation this utterance belongs to
    pub session_id: &'a str,
    /// The user utterance
    pub chat_input: &'a str,
}

/// Responder backed by an HTTP webhook
///
/// Each exchange is a single POST bounded by the configured timeout. There
/// is no retry.
///
/// # Examples
///
/// ```no_run
/// use ragchat::config::ResponderConfig;
/// use ragchat::responder::{Responder, WebhookResponder};
///
/// # async fn example() -> ragchat::error::Result<()> {
/// let responder = WebhookResponder::new(ResponderConfig::default())?;
/// let reply = responder.send("session-1", "Hello!").await;
/// println!("{}", reply);
/// # Ok(())
/// # }
/// ```
pub struct WebhookResponder {
    client: Client,
    config: ResponderConfig,
}

impl WebhookResponder {
    /// Create a new webhook responder
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails
    ///
    /// # Examples
    ///
    /// ```
    /// use ragchat::config::ResponderConfig;
    /// use ragchat::responder::WebhookResponder;
    ///
    /// let responder = WebhookResponder::new(ResponderConfig::default());
    /// assert!(responder.is_ok());
    /// ```
    pub fn new(config: ResponderConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("ragchat/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(RagchatError::Http)?;

        tracing::info!(
            "Initialized webhook responder: url={}, timeout={}s",
            config.webhook_url,
            config.timeout_seconds
        );

        Ok(Self { client, config })
    }

    /// Configured request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.config.timeout_seconds)
    }

    /// Pull the reply text out of a success body
    fn extract_output(body: &str) -> std::result::Result<String, ResponderError> {
        let value: serde_json::Value = serde_json::from_str(body).map_err(|e| {
            ResponderError::ContractViolation(format!("response body is not valid JSON: {}", e))
        })?;

        match value.get("output") {
            Some(serde_json::Value::String(text)) => Ok(text.clone()),
            Some(serde_json::Value::Null) | None => Err(ResponderError::ContractViolation(
                "missing `output` field".to_string(),
            )),
            Some(other) => Ok(other.to_string()),
        }
    }
}

/// Map a client error to its exchange category
fn classify(error: &reqwest::Error) -> ResponderError {
    if error.is_timeout() || error.is_connect() || error.is_request() {
        ResponderError::Transport(error.to_string())
    } else {
        ResponderError::Unexpected(error.to_string())
    }
}

#[async_trait]
impl Responder for WebhookResponder {
    async fn exchange(
        &self,
        session_id: &str,
        user_text: &str,
    ) -> std::result::Result<String, ResponderError> {
        let request = WebhookRequest {
            session_id,
            chat_input: user_text,
        };

        tracing::debug!(
            session_id,
            input_len = user_text.len(),
            "Sending webhook request to {}",
            self.config.webhook_url
        );

        let response = self
            .client
            .post(&self.config.webhook_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| classify(&e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| classify(&e))?;

        tracing::debug!(status = status.as_u16(), body_len = body.len(), "Webhook responded");

        if !status.is_success() {
            return Err(ResponderError::Application {
                status: status.as_u16(),
                body,
            });
        }

        Self::extract_output(&body)
    }

    fn endpoint(&self) -> &str {
        &self.config.webhook_url
    }
}
