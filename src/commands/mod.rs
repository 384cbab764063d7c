/*!
Command handlers for the CLI

This module provides command handlers invoked by the CLI entrypoint.

It exposes three top-level command modules:

- `chat`   — Interactive chat loop
- `ask`    — Send a single message and print the reply
- `config` — Print the effective configuration

All of them drive turns through [`submit_turn`], which appends the user
message, performs one responder exchange and appends the reply.
*/

use crate::config::Config;
use crate::error::{RagchatError, Result};
use crate::responder::{create_responder, Responder};
use crate::session::{Message, Role, Session, SessionId};
use crate::transcript::{render_transcript, TranscriptStyle};
use serde::Serialize;

// Special commands parser for the interactive loop
pub mod special_commands;

/// One user message and the reply appended for it
#[derive(Debug, Clone, Serialize)]
pub struct Turn {
    /// The user message as appended to the transcript
    pub user: Message,
    /// The assistant message as appended to the transcript
    pub assistant: Message,
}

/// Run one turn against the responder
///
/// The user message is appended before the exchange and the reply after
/// it. Failures come back from [`Responder::send`] as text, so the
/// transcript always grows by exactly two messages.
pub async fn submit_turn(
    session: &mut Session,
    responder: &dyn Responder,
    user_text: &str,
) -> Turn {
    let user = session.append_message(Role::User, user_text);
    let reply = responder.send(session.id().as_str(), user_text).await;
    let assistant = session.append_message(Role::Assistant, reply);
    Turn { user, assistant }
}

/// Build the `/status` report for a session
///
/// # Examples
///
/// ```
/// use ragchat::commands::format_status;
/// use ragchat::session::Session;
///
/// let report = format_status(&Session::new(), "http://localhost:5678/webhook/chatbot-app");
/// assert!(report.contains("Total Messages:     0"));
/// ```
pub fn format_status(session: &Session, endpoint: &str) -> String {
    let stats = session.stats();
    let mut out = String::new();
    out.push_str("\n╔══════════════════════════════════════════════════════════════╗\n");
    out.push_str("║                     ragchat Session Status                   ║\n");
    out.push_str("╚══════════════════════════════════════════════════════════════╝\n\n");
    out.push_str(&format!("Session ID:         {}...\n", session.id().short()));
    out.push_str(&format!("Total Messages:     {}\n", stats.total));
    out.push_str(&format!("Your Messages:      {}\n", stats.user));
    out.push_str(&format!("Assistant Replies:  {}\n", stats.assistant));
    out.push_str(&format!("Webhook:            {}\n", endpoint));
    out
}

// Chat command handler
pub mod chat {
    //! Interactive chat mode handler.
    //!
    //! Creates the responder and a session, then runs a readline-based loop.
    //! Each line goes through [`handle_line`], which either acts on the
    //! session or submits one turn; the loop only prints the outcome.

    use super::*;
    use crate::commands::special_commands::{
        parse_special_command, print_help, CommandError, SpecialCommand,
    };
    use colored::Colorize;
    use rustyline::error::ReadlineError;
    use rustyline::DefaultEditor;

    /// Result of handling one line of interactive input
    #[derive(Debug)]
    pub enum LineOutcome {
        /// Blank input, nothing was done
        Ignored,
        /// The line was sent to the responder
        Turn(Turn),
        /// The conversation was discarded and a new session started
        Cleared,
        /// Status report for the current session
        Status(String),
        /// The transcript should be shown again
        History,
        /// Help was requested
        Help,
        /// A slash command was rejected; nothing was sent
        Rejected(CommandError),
        /// The user asked to leave
        Exit,
    }

    /// Handle one line of input against the session
    ///
    /// Blank lines and special commands never reach the responder. Any other
    /// line is sent exactly as typed.
    pub async fn handle_line(
        session: &mut Session,
        responder: &dyn Responder,
        line: &str,
    ) -> LineOutcome {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return LineOutcome::Ignored;
        }

        match parse_special_command(trimmed) {
            Ok(SpecialCommand::None) => {
                println!("{}", "Generating response...".dimmed());
                LineOutcome::Turn(submit_turn(session, responder, line).await)
            }
            Ok(SpecialCommand::Clear) => {
                session.clear();
                LineOutcome::Cleared
            }
            Ok(SpecialCommand::ShowStatus) => {
                LineOutcome::Status(format_status(session, responder.endpoint()))
            }
            Ok(SpecialCommand::ShowHistory) => LineOutcome::History,
            Ok(SpecialCommand::Help) => LineOutcome::Help,
            Ok(SpecialCommand::Exit) => LineOutcome::Exit,
            Err(e) => LineOutcome::Rejected(e),
        }
    }

    /// Start interactive chat mode
    ///
    /// # Arguments
    ///
    /// * `config` - Global configuration (consumed)
    ///
    /// # Errors
    ///
    /// Returns error if the responder or the line editor cannot be created
    pub async fn run_chat(config: Config) -> Result<()> {
        tracing::info!("Starting interactive chat mode");

        let responder = create_responder(&config.responder)?;
        let style = TranscriptStyle::from(&config.chat);
        let mut session = Session::new();

        let mut rl = DefaultEditor::new()?;

        print_welcome_banner(&session, responder.endpoint());
        print!("{}", render_transcript(&session, &style));

        loop {
            let prompt = format!("{} ", ">>".green().bold());
            match rl.readline(&prompt) {
                Ok(line) => match handle_line(&mut session, responder.as_ref(), &line).await {
                    LineOutcome::Ignored => {}
                    LineOutcome::Turn(_) => {
                        rl.add_history_entry(line.trim())?;
                        println!();
                        print!("{}", render_transcript(&session, &style));
                        println!();
                    }
                    LineOutcome::Cleared => {
                        println!(
                            "{}\n",
                            format!("Conversation cleared. New session {}...", session.id().short())
                                .yellow()
                        );
                        print!("{}", render_transcript(&session, &style));
                    }
                    LineOutcome::Status(report) => println!("{}", report),
                    LineOutcome::History => {
                        println!();
                        print!("{}", render_transcript(&session, &style));
                        println!();
                    }
                    LineOutcome::Help => print_help(),
                    LineOutcome::Rejected(e) => eprintln!("{}\n", e.to_string().red()),
                    LineOutcome::Exit => break,
                },
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {:?}", err);
                    break;
                }
            }
        }

        tracing::info!(
            session_id = %session.id(),
            messages = session.len(),
            "Chat session ended"
        );
        println!("Goodbye!");
        Ok(())
    }

    /// Display welcome banner at the start of interactive chat mode
    fn print_welcome_banner(session: &Session, endpoint: &str) {
        println!("\n╔══════════════════════════════════════════════════════════════╗");
        println!("║         ragchat - Conversational RAG Chatbot                 ║");
        println!("╚══════════════════════════════════════════════════════════════╝\n");
        println!("Session: {}...", session.id().short().cyan());
        println!("Webhook: {}\n", endpoint);
        println!("Type '/help' for available commands, 'exit' to quit\n");
    }
}

// Single-message command handler
pub mod ask {
    //! One-shot handler: a single turn, reply on stdout.

    use super::*;

    /// JSON shape printed by `ask --json`
    #[derive(Debug, Serialize)]
    struct AskOutput<'a> {
        session_id: &'a SessionId,
        user: &'a Message,
        assistant: &'a Message,
    }

    /// Send one message and print the reply
    ///
    /// # Arguments
    ///
    /// * `config` - Global configuration (consumed)
    /// * `message` - Text to send
    /// * `session_id` - Identifier to reuse; a new one is generated when absent
    /// * `json` - Print the turn as JSON instead of the plain reply
    ///
    /// # Errors
    ///
    /// Returns error if the responder cannot be created or the JSON output
    /// cannot be serialized. Responder failures are printed as the reply.
    pub async fn run_ask(
        config: Config,
        message: String,
        session_id: Option<String>,
        json: bool,
    ) -> Result<()> {
        let responder = create_responder(&config.responder)?;
        let mut session = match session_id {
            Some(id) if !id.trim().is_empty() => Session::with_id(SessionId::from(id)),
            Some(_) => {
                return Err(RagchatError::Command("--session-id cannot be empty".to_string()).into())
            }
            None => Session::new(),
        };

        let turn = submit_turn(&mut session, responder.as_ref(), &message).await;

        if json {
            let output = AskOutput {
                session_id: session.id(),
                user: &turn.user,
                assistant: &turn.assistant,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", turn.assistant.content);
        }

        Ok(())
    }
}

// Configuration display handler
pub mod config {
    //! Prints the effective configuration after file, env and CLI merging.

    use super::*;

    /// Print the configuration as YAML
    ///
    /// # Errors
    ///
    /// Returns error if the configuration cannot be serialized
    pub fn show_config(config: &Config) -> Result<()> {
        let yaml = serde_yaml::to_string(config).map_err(RagchatError::from)?;
        print!("{}", yaml);
        Ok(())
    }
}
