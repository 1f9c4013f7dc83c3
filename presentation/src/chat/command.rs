//! Slash commands understood by the debate REPL

/// A parsed slash command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    /// End the round and start over
    Reset,
    /// Re-print the feedback panel
    Feedback,
    /// Re-print the transcript
    Transcript,
    /// Show topic, stance and models
    Status,
    Quit,
    Unknown(String),
}

impl ReplCommand {
    /// Parse a line as a command. Returns `None` for ordinary input.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if !line.starts_with('/') {
            return None;
        }

        let name = line.split_whitespace().next().unwrap_or(line);
        let command = match name.to_ascii_lowercase().as_str() {
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/reset" | "/new" => ReplCommand::Reset,
            "/feedback" | "/fb" => ReplCommand::Feedback,
            "/transcript" | "/history" => ReplCommand::Transcript,
            "/status" => ReplCommand::Status,
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            _ => ReplCommand::Unknown(name.to_string()),
        };
        Some(command)
    }

    pub fn help_text() -> &'static str {
        "Commands:
  /help, /h, /?          - Show this help
  /feedback, /fb         - Show the latest feedback
  /transcript, /history  - Show the debate so far
  /status                - Show topic, stance and models
  /reset, /new           - End this round and pick a new topic
  /quit, /exit, /q       - Leave the arena"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_not_a_command() {
        assert_eq!(ReplCommand::parse("AI will create more jobs"), None);
        assert_eq!(ReplCommand::parse(""), None);
    }

    #[test]
    fn test_aliases() {
        assert_eq!(ReplCommand::parse("/q"), Some(ReplCommand::Quit));
        assert_eq!(ReplCommand::parse("/exit"), Some(ReplCommand::Quit));
        assert_eq!(ReplCommand::parse("/?"), Some(ReplCommand::Help));
        assert_eq!(ReplCommand::parse(" /RESET "), Some(ReplCommand::Reset));
        assert_eq!(ReplCommand::parse("/fb"), Some(ReplCommand::Feedback));
    }

    #[test]
    fn test_unknown_keeps_name_only() {
        assert_eq!(
            ReplCommand::parse("/models all"),
            Some(ReplCommand::Unknown("/models".to_string()))
        );
    }
}
