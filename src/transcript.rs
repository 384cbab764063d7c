//! Transcript rendering for the terminal
//!
//! Rendering is a pure function of the session and the style: the same
//! transcript always renders to the same text.

use crate::config::ChatConfig;
use crate::session::{Message, Role, Session};
use colored::Colorize;

/// Hint printed in place of an empty transcript
pub const EMPTY_TRANSCRIPT_HINT: &str =
    "Hi! Start the conversation by typing your message below.";

/// Presentation options for rendering messages
#[derive(Debug, Clone)]
pub struct TranscriptStyle {
    /// Print the time caption under each message
    pub show_timestamps: bool,
    /// Label for user messages
    pub user_label: String,
    /// Label for assistant messages
    pub assistant_label: String,
}

impl Default for TranscriptStyle {
    fn default() -> Self {
        Self::from(&ChatConfig::default())
    }
}

impl From<&ChatConfig> for TranscriptStyle {
    fn from(config: &ChatConfig) -> Self {
        Self {
            show_timestamps: config.show_timestamps,
            user_label: config.user_label.clone(),
            assistant_label: config.assistant_label.clone(),
        }
    }
}

impl TranscriptStyle {
    fn label(&self, role: Role) -> String {
        match role {
            Role::User => format!("{}:", self.user_label).blue().bold().to_string(),
            Role::Assistant => format!("{}:", self.assistant_label)
                .magenta()
                .bold()
                .to_string(),
        }
    }
}

/// Render one message as `<label>: <content>` plus an optional time caption
///
/// # Examples
///
/// ```
/// use ragchat::session::Message;
/// use ragchat::transcript::{render_message, TranscriptStyle};
///
/// let text = render_message(&Message::user("Bonjour"), &TranscriptStyle::default());
/// assert!(text.contains("Bonjour"));
/// ```
pub fn render_message(message: &Message, style: &TranscriptStyle) -> String {
    let mut out = format!("{} {}\n", style.label(message.role), message.content);
    if style.show_timestamps {
        out.push_str(&format!("  {}\n", message.formatted_time().dimmed()));
    }
    out
}

/// Render the whole transcript, or a hint when it is empty
pub fn render_transcript(session: &Session, style: &TranscriptStyle) -> String {
    if session.is_empty() {
        return format!("{}\n", EMPTY_TRANSCRIPT_HINT.cyan());
    }

    session
        .messages()
        .iter()
        .map(|m| render_message(m, style))
        .collect::<Vec<_>>()
        .join("\n")
}
