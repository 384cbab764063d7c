//! Test utilities for ragchat
//!
//! Provides a scripted in-memory responder, an in-memory log sink and
//! temporary config files shared by the unit tests.

use crate::error::ResponderError;
use crate::responder::Responder;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Responder that replays a fixed list of results and records its calls
///
/// Once the script is exhausted every further exchange fails with
/// `ResponderError::Unexpected`.
pub struct ScriptedResponder {
    replies: Mutex<VecDeque<Result<String, ResponderError>>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedResponder {
    /// Create a responder that returns `replies` in order
    pub fn new(replies: Vec<Result<String, ResponderError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// `(session_id, user_text)` pairs received so far
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }
}

#[async_trait]
impl Responder for ScriptedResponder {
    async fn exchange(&self, session_id: &str, user_text: &str) -> Result<String, ResponderError> {
        self.calls
            .lock()
            .expect("calls lock poisoned")
            .push((session_id.to_string(), user_text.to_string()));
        self.replies
            .lock()
            .expect("replies lock poisoned")
            .pop_front()
            .unwrap_or_else(|| Err(ResponderError::Unexpected("script exhausted".to_string())))
    }

    fn endpoint(&self) -> &str {
        "scripted://test"
    }
}

/// Log sink that keeps formatted `tracing` output in memory
///
/// Install with `tracing::subscriber::set_default(logs.subscriber(level))`
/// inside a current-thread test.
#[derive(Clone, Default)]
pub struct CapturedLogs {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    /// Plain-text fmt subscriber writing into this sink, capped at `max_level`
    pub fn subscriber(&self, max_level: tracing::Level) -> impl tracing::Subscriber + Send + Sync {
        let sink = self.clone();
        tracing_subscriber::fmt()
            .with_max_level(max_level)
            .with_ansi(false)
            .with_writer(move || sink.clone())
            .finish()
    }

    /// Everything written so far
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().expect("log buffer poisoned")).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer
            .lock()
            .expect("log buffer poisoned")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Write `contents` to a `config.yaml` inside a fresh temporary directory
///
/// Keep the returned `TempDir` alive for as long as the path is used.
pub fn temp_config_file(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temporary directory");
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, contents).expect("Failed to write config file");
    (dir, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_responder_replays_in_order() {
        let responder = ScriptedResponder::new(vec![Ok("a".to_string()), Ok("b".to_string())]);
        assert_eq!(responder.send("s", "1").await, "a");
        assert_eq!(responder.send("s", "2").await, "b");
        assert_eq!(responder.send("s", "3").await, "Unexpected error: script exhausted");
        assert_eq!(responder.calls().len(), 3);
    }
}
