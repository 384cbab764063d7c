//! Special commands parser for interactive chat mode
//!
//! Special commands act on the session instead of being sent to the
//! responder. They are prefixed with `/` and are case-insensitive; `exit`
//! and `quit` also work without the slash.

use thiserror::Error;

/// Errors that can occur when parsing special commands
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Unknown command was entered
    #[error("Unknown command: {0}\n\nType '/help' to see available commands")]
    UnknownCommand(String),

    /// Command was given an argument it does not take
    #[error("Unsupported argument for {command}: {arg}\n\nType '/help' to see valid usage")]
    UnsupportedArgument { command: String, arg: String },
}

/// Special commands that can be executed during interactive chat
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecialCommand {
    /// Discard the transcript and start a new session
    Clear,

    /// Show session identifier, message counts and endpoint
    ShowStatus,

    /// Re-render the full transcript
    ShowHistory,

    /// Display help information
    Help,

    /// Exit the interactive session
    Exit,

    /// Not a special command; the input goes to the responder
    None,
}

/// Parse a user input string into a special command
///
/// # Errors
///
/// Returns `CommandError::UnknownCommand` if input starts with "/" but is
/// not a known command, and `CommandError::UnsupportedArgument` if a known
/// command is followed by an argument.
///
/// # Examples
///
/// ```
/// use ragchat::commands::special_commands::{parse_special_command, SpecialCommand};
///
/// assert_eq!(parse_special_command("/clear").unwrap(), SpecialCommand::Clear);
/// assert_eq!(parse_special_command("hello").unwrap(), SpecialCommand::None);
/// assert!(parse_special_command("/foo").is_err());
/// ```
pub fn parse_special_command(input: &str) -> Result<SpecialCommand, CommandError> {
    let trimmed = input.trim();
    let lower = trimmed.to_lowercase();

    if !trimmed.starts_with('/') && lower != "exit" && lower != "quit" {
        return Ok(SpecialCommand::None);
    }

    let mut parts = lower.split_whitespace();
    let command = parts.next().unwrap_or_default();
    let rest: Vec<&str> = parts.collect();

    let parsed = match command {
        "/clear" | "/reset" => SpecialCommand::Clear,
        "/status" | "/stats" => SpecialCommand::ShowStatus,
        "/history" | "/transcript" => SpecialCommand::ShowHistory,
        "/help" | "/?" => SpecialCommand::Help,
        "exit" | "quit" | "/exit" | "/quit" => SpecialCommand::Exit,
        other => return Err(CommandError::UnknownCommand(other.to_string())),
    };

    if !rest.is_empty() {
        return Err(CommandError::UnsupportedArgument {
            command: command.to_string(),
            arg: rest.join(" "),
        });
    }

    Ok(parsed)
}

/// Display help text for special commands
pub fn print_help() {
    println!(
        r#"
Special Commands for Interactive Chat
=====================================

CONVERSATION:
  /clear          - Clear the conversation and start a new session
  /reset          - Same as /clear
  /history        - Show the full transcript again
  /transcript     - Same as /history

SESSION INFORMATION:
  /status         - Show session id, message counts and webhook
  /stats          - Same as /status
  /help           - Show this help message
  /?              - Same as /help

SESSION CONTROL:
  exit            - Exit interactive mode
  quit            - Same as exit

NOTES:
  - Commands are case-insensitive
  - Regular text (not starting with /) is sent to the responder
  - Every message gets exactly one reply; failures are shown as the reply
"#
    );
}
