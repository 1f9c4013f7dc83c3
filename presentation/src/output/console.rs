//! Console rendering of the debate session
//!
//! Every function here is a pure read of [`DebateSession`]; nothing mutates
//! the session.

use arena_domain::{DebateSession, Feedback, Message, Role};
use colored::Colorize;

/// Caption shown in the feedback panel before the first scored argument
pub const FEEDBACK_PLACEHOLDER: &str = "Make your first argument to receive feedback.";

/// Formats the debate session for console display
pub struct ArenaFormatter;

impl ArenaFormatter {
    /// Title block shown once at startup
    pub fn welcome() -> String {
        let mut output = String::new();
        output.push_str(&Self::header("AI Debate Arena"));
        output.push('\n');
        output.push_str(&format!(
            "{}\n",
            "Face off with 'The Contender' and receive live feedback. Let's begin!".dimmed()
        ));
        output
    }

    /// Topic and stance banners; `None` until a round is set up
    pub fn format_banner(session: &DebateSession) -> Option<String> {
        let topic = session.topic()?;
        let stance = session.stance()?;

        Some(format!(
            "{} {}\n{} {} (The Contender will argue {})\n",
            "Debate Topic:".green().bold(),
            topic,
            "Your Position:".cyan().bold(),
            stance.as_str().bold(),
            stance.opposite()
        ))
    }

    /// One transcript entry tagged with its role
    pub fn format_message(message: &Message) -> String {
        let tag = match message.role {
            Role::User => "[You]".blue().bold(),
            Role::Assistant => "[Contender]".red().bold(),
        };
        format!("{} {}", tag, message.content)
    }

    /// The whole transcript in insertion order
    pub fn format_transcript(session: &DebateSession) -> String {
        let mut output = Self::section_header("Debate Arena");
        if session.transcript().is_empty() {
            output.push_str(&format!("{}\n", "(no arguments yet)".dimmed()));
            return output;
        }
        for message in session.transcript() {
            output.push_str(&Self::format_message(message));
            output.push_str("\n\n");
        }
        output
    }

    /// The live feedback panel, or its placeholder caption
    pub fn format_feedback(session: &DebateSession) -> String {
        let mut output = Self::section_header("Live Feedback");
        match session.last_feedback() {
            Some(feedback) => output.push_str(&Self::feedback_body(feedback)),
            None => output.push_str(&format!("{}\n", FEEDBACK_PLACEHOLDER.dimmed())),
        }
        output
    }

    fn feedback_body(feedback: &Feedback) -> String {
        let metric = match feedback.rating {
            Some(_) => format!("{}/10", feedback.rating_label()),
            None => feedback.rating_label(),
        };
        format!(
            "{} {}\n{} {}\n{} {}\n",
            "Persuasiveness:".bold(),
            metric,
            "Strength:".green().bold(),
            feedback.strength,
            "Suggestion:".yellow().bold(),
            feedback.suggestion
        )
    }

    pub fn format_warning(message: &str) -> String {
        format!("{} {}", "Warning:".yellow().bold(), message)
    }

    pub fn format_error(message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }
}
