//! Session and transcript management
//!
//! A [`Session`] owns an opaque identifier and the ordered transcript of
//! messages exchanged during one interactive conversation. The transcript is
//! append-only; the only other mutation is [`Session::clear`], which swaps in
//! a brand-new session (new identifier, empty transcript) in one assignment.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Display format for message timestamps
pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S";

/// Number of identifier characters shown in compact displays
const SHORT_ID_LEN: usize = 8;

/// Opaque session identifier sent to the responder with every request
///
/// Fresh identifiers are random 128-bit UUIDs rendered as hyphenated text.
/// Identifiers supplied from outside (for example `ask --session-id`) are
/// kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a new random identifier
    ///
    /// # Examples
    ///
    /// ```
    /// use ragchat::session::SessionId;
    ///
    /// let a = SessionId::new();
    /// let b = SessionId::new();
    /// assert_ne!(a, b);
    /// assert_eq!(a.as_str().len(), 36);
    /// ```
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the identifier as text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First eight characters of the identifier, for banners and status lines
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(SHORT_ID_LEN) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for SessionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for SessionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Author of a transcript message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Text typed by the person at the terminal
    User,
    /// Reply text, or the explanation of a failed exchange
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

/// One entry of a transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Who produced the message
    pub role: Role,
    /// Message text; any string is accepted, including the empty string
    pub content: String,
    /// Local wall-clock time at which the message was created
    pub timestamp: DateTime<Local>,
}

impl Message {
    /// Create a message stamped with the current local time
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Local::now(),
        }
    }

    /// Create a user message
    ///
    /// # Examples
    ///
    /// ```
    /// use ragchat::session::{Message, Role};
    ///
    /// let msg = Message::user("Hello!");
    /// assert_eq!(msg.role, Role::User);
    /// ```
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Timestamp rendered as `HH:MM:SS`
    pub fn formatted_time(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Message counts for a transcript
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TranscriptStats {
    /// All messages in the transcript
    pub total: usize,
    /// Messages authored by the user
    pub user: usize,
    /// Assistant replies, including rendered failures
    pub assistant: usize,
}

/// One continuous conversation: an identifier plus its ordered transcript
#[derive(Debug, Clone, Default, Serialize)]
pub struct Session {
    id: SessionId,
    messages: Vec<Message>,
}

impl Session {
    /// Start a session with a freshly generated identifier
    ///
    /// # Examples
    ///
    /// ```
    /// use ragchat::session::Session;
    ///
    /// let session = Session::new();
    /// assert!(session.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_id(SessionId::new())
    }

    /// Start a session that reuses an existing identifier
    pub fn with_id(id: SessionId) -> Self {
        tracing::info!(session_id = %id, "Session started");
        Self {
            id,
            messages: Vec::new(),
        }
    }

    /// The session identifier
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// The transcript in chronological order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of messages in the transcript
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the transcript is empty
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Stamp, append and return a new message
    ///
    /// # Examples
    ///
    /// ```
    /// use ragchat::session::{Role, Session};
    ///
    /// let mut session = Session::new();
    /// let msg = session.append_message(Role::User, "Hi");
    /// assert_eq!(session.messages().last(), Some(&msg));
    /// ```
    pub fn append_message(&mut self, role: Role, content: impl Into<String>) -> Message {
        let message = Message::new(role, content);
        self.messages.push(message.clone());
        message
    }

    /// Discard the transcript and switch to a new identifier
    ///
    /// The replacement happens in a single assignment, so callers never
    /// observe the old identifier with an empty transcript or the new
    /// identifier with old messages.
    ///
    /// # Examples
    ///
    /// ```
    /// use ragchat::session::{Role, Session};
    ///
    /// let mut session = Session::new();
    /// let old_id = session.id().clone();
    /// session.append_message(Role::User, "Hi");
    /// session.clear();
    /// assert_ne!(session.id(), &old_id);
    /// assert!(session.is_empty());
    /// ```
    pub fn clear(&mut self) -> &Session {
        let discarded = std::mem::replace(self, Session::new());
        tracing::info!(
            old_session = %discarded.id,
            new_session = %self.id,
            discarded_messages = discarded.messages.len(),
            "Conversation cleared"
        );
        self
    }

    /// Count messages by role
    pub fn stats(&self) -> TranscriptStats {
        let user = self
            .messages
            .iter()
            .filter(|m| m.role == Role::User)
            .count();
        TranscriptStats {
            total: self.messages.len(),
            user,
            assistant: self.messages.len() - user,
        }
    }
}
