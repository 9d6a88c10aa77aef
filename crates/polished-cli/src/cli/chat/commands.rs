//! Slash command parsing for the chat loop.
//!
//! Commands start with `/` and provide in-chat controls for the preview,
//! session teardown, and help.

use std::path::PathBuf;

use console::style;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Clear the terminal screen.
    Clear,
    /// Show the current resume preview.
    Preview,
    /// Write the preview content to a file.
    Save(PathBuf),
    /// Show session status.
    Info,
    /// Discard this session and review a new resume file.
    New(PathBuf),
    /// Exit the review session.
    Exit,
    /// Unknown command or bad arguments.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
    let cmd = parts[0].to_lowercase();
    let arg = parts.get(1).map(|s| s.trim().to_string());

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/clear" | "/cls" => Some(ChatCommand::Clear),
        "/preview" | "/p" => Some(ChatCommand::Preview),
        "/info" => Some(ChatCommand::Info),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        "/save" => match arg.filter(|a| !a.is_empty()) {
            Some(path) => Some(ChatCommand::Save(PathBuf::from(path))),
            None => Some(ChatCommand::Unknown("/save requires a file path".to_string())),
        },
        "/new" => match arg.filter(|a| !a.is_empty()) {
            Some(path) => Some(ChatCommand::New(PathBuf::from(path))),
            None => Some(ChatCommand::Unknown(
                "/new requires a resume file path".to_string(),
            )),
        },
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Print the help text listing all available commands.
pub fn print_help() {
    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    println!("  {}     {}", style("/help").cyan(), "Show this help message");
    println!("  {}    {}", style("/clear").cyan(), "Clear the screen");
    println!(
        "  {}  {}",
        style("/preview").cyan(),
        "Show the rewritten resume"
    );
    println!(
        "  {}     {}",
        style("/save").cyan(),
        "Write the rewritten resume to a file: /save resume.md"
    );
    println!("  {}     {}", style("/info").cyan(), "Show session status");
    println!(
        "  {}      {}",
        style("/new").cyan(),
        "Start over with another resume: /new other.pdf"
    );
    println!("  {}     {}", style("/exit").cyan(), "End the review session");
    println!();
    println!("  {}", style("Ctrl+D to exit").dim());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_help() {
        assert_eq!(parse("/help"), Some(ChatCommand::Help));
        assert_eq!(parse("/h"), Some(ChatCommand::Help));
        assert_eq!(parse("/?"), Some(ChatCommand::Help));
    }

    #[test]
    fn test_parse_exit() {
        assert_eq!(parse("/exit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/quit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/q"), Some(ChatCommand::Exit));
    }

    #[test]
    fn test_parse_preview() {
        assert_eq!(parse("/preview"), Some(ChatCommand::Preview));
        assert_eq!(parse("/p"), Some(ChatCommand::Preview));
    }

    #[test]
    fn test_parse_save_with_path() {
        assert_eq!(
            parse("/save out/resume.md"),
            Some(ChatCommand::Save(PathBuf::from("out/resume.md")))
        );
    }

    #[test]
    fn test_parse_save_without_path() {
        assert_eq!(
            parse("/save"),
            Some(ChatCommand::Unknown("/save requires a file path".to_string()))
        );
        assert_eq!(
            parse("/save   "),
            Some(ChatCommand::Unknown("/save requires a file path".to_string()))
        );
    }

    #[test]
    fn test_parse_new_with_file() {
        assert_eq!(
            parse("/new other.pdf"),
            Some(ChatCommand::New(PathBuf::from("other.pdf")))
        );
    }

    #[test]
    fn test_parse_new_without_file() {
        assert_eq!(
            parse("/new"),
            Some(ChatCommand::Unknown(
                "/new requires a resume file path".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_not_command() {
        assert_eq!(parse("hello world"), None);
        assert_eq!(parse("  is my resume ok?"), None);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(parse("/foo"), Some(ChatCommand::Unknown("/foo".to_string())));
    }
}
