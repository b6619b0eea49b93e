//! Special commands parser for the interactive trip planner
//!
//! Anything typed into the planner chat is sent to the backend as a chat
//! message, except the commands below:
//! - `/plan` generates a travel plan from the details gathered so far
//! - `/book` books the generated plan
//! - `/new` starts a new conversation
//! - `/status` shows the extracted trip details
//! - `/help` shows help
//! - `exit` or `quit` leaves the session
//!
//! Commands are prefixed with `/` and are case-insensitive.

use thiserror::Error;

/// Errors that can occur when parsing special commands
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Unknown command was entered
    #[error("Unknown command: {0}\n\nType '/help' to see available commands")]
    UnknownCommand(String),

    /// Command was given an argument it does not take
    #[error("Command {command} takes no arguments, got: {arg}")]
    UnexpectedArgument { command: String, arg: String },
}

/// Special commands that can be executed during the planner chat
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecialCommand {
    /// Generate a travel plan
    GeneratePlan,

    /// Book the generated plan using the configured passenger
    BookPlan,

    /// Clear the conversation, extracted details and plan
    NewConversation,

    /// Show the trip details extracted so far
    ShowStatus,

    /// Display help information
    Help,

    /// Exit the interactive session
    Exit,

    /// Not a special command
    ///
    /// The input is sent to the planner as a chat message.
    None,
}

/// Parse a user input string into a special command
///
/// # Errors
///
/// Returns `CommandError::UnknownCommand` if input starts with "/" but is
/// not a known command, and `CommandError::UnexpectedArgument` if a known
/// command is followed by an argument.
///
/// # Examples
///
/// ```
/// use tripwise::commands::special_commands::{parse_special_command, SpecialCommand};
///
/// assert_eq!(parse_special_command("/plan").unwrap(), SpecialCommand::GeneratePlan);
/// assert_eq!(parse_special_command("Goa in May").unwrap(), SpecialCommand::None);
/// assert!(parse_special_command("/fly").is_err());
/// ```
pub fn parse_special_command(input: &str) -> Result<SpecialCommand, CommandError> {
    let trimmed = input.trim();
    let lower = trimmed.to_lowercase();

    if lower == "exit" || lower == "quit" {
        return Ok(SpecialCommand::Exit);
    }
    if !trimmed.starts_with('/') {
        return Ok(SpecialCommand::None);
    }

    let (name, arg) = match lower.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (lower.as_str(), ""),
    };

    let command = match name {
        "/plan" => SpecialCommand::GeneratePlan,
        "/book" => SpecialCommand::BookPlan,
        "/new" | "/reset" => SpecialCommand::NewConversation,
        "/status" => SpecialCommand::ShowStatus,
        "/help" | "/?" => SpecialCommand::Help,
        "/exit" | "/quit" => SpecialCommand::Exit,
        _ => return Err(CommandError::UnknownCommand(trimmed.to_string())),
    };

    if !arg.is_empty() {
        return Err(CommandError::UnexpectedArgument {
            command: name.to_string(),
            arg: arg.to_string(),
        });
    }

    Ok(command)
}

/// Print help for the planner chat
pub fn print_help() {
    println!(
        r#"
Trip Planner Commands
=====================

  /plan      - Generate a travel plan from the details shared so far
  /book      - Book the generated plan (uses the passenger from your config)
  /new       - Start a new conversation
  /status    - Show the trip details extracted so far
  /help      - Show this help
  exit, quit - Leave the planner

Anything else is sent to the travel assistant. Describe where you want to
go, for how long, your budget and your interests.
"#
    );
}
