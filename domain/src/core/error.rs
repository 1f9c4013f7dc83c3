//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("No debate round is in progress")]
    NotInRound,

    #[error("Argument cannot be empty")]
    EmptyArgument,
}

/// Reasons a round setup submission is rejected
///
/// None of these change the session; the caller re-shows the setup form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("Please enter a debate topic")]
    EmptyTopic,

    #[error("Please choose a stance (for or against)")]
    MissingStance,

    #[error("Unknown stance '{0}': expected 'for' or 'against'")]
    UnknownStance(String),

    #[error("A round is already in progress; reset it first")]
    RoundInProgress,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_error_display() {
        assert_eq!(
            SetupError::UnknownStance("maybe".to_string()).to_string(),
            "Unknown stance 'maybe': expected 'for' or 'against'"
        );
        assert_eq!(
            DomainError::NotInRound.to_string(),
            "No debate round is in progress"
        );
    }
}
