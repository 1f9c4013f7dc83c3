//! Session domain entities

use crate::core::error::{DomainError, SetupError};
use crate::feedback::Feedback;
use crate::session::stance::Stance;
use crate::session::topic::Topic;
use serde::{Deserialize, Serialize};

/// Role of a message in the transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A transcript entry (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Topic and stance fixed for one round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub topic: Topic,
    pub stance: Stance,
}

impl Round {
    pub fn new(topic: Topic, stance: Stance) -> Self {
        Self { topic, stance }
    }

    /// Validate a setup submission.
    ///
    /// `stance` is `None` when the user left the placeholder selected.
    pub fn from_submission(topic: &str, stance: Option<Stance>) -> Result<Self, SetupError> {
        let topic = Topic::try_new(topic)?;
        let stance = stance.ok_or(SetupError::MissingStance)?;
        Ok(Self::new(topic, stance))
    }
}

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No topic or stance yet; only setup is accepted
    AwaitingSetup,
    /// Topic and stance are fixed; arguments are accepted
    InRound,
}

/// The state of one user's debate session
///
/// The transcript is only ever non-empty while a round is active, and
/// [`reset`](DebateSession::reset) clears everything in one assignment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DebateSession {
    round: Option<Round>,
    transcript: Vec<Message>,
    last_feedback: Option<Feedback>,
}

impl DebateSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        if self.round.is_some() {
            SessionState::InRound
        } else {
            SessionState::AwaitingSetup
        }
    }

    pub fn is_in_round(&self) -> bool {
        self.state() == SessionState::InRound
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn topic(&self) -> Option<&Topic> {
        self.round.as_ref().map(|r| &r.topic)
    }

    pub fn stance(&self) -> Option<Stance> {
        self.round.as_ref().map(|r| r.stance)
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn last_feedback(&self) -> Option<&Feedback> {
        self.last_feedback.as_ref()
    }

    /// Start a round. Only valid while awaiting setup.
    pub fn begin_round(&mut self, round: Round) -> Result<&Round, SetupError> {
        if self.round.is_some() {
            return Err(SetupError::RoundInProgress);
        }
        Ok(self.round.insert(round))
    }

    /// Append the user's argument to the transcript
    pub fn record_argument(&mut self, content: impl Into<String>) -> Result<(), DomainError> {
        self.push(Message::user(content))
    }

    /// Append the Contender's reply to the transcript
    pub fn record_rebuttal(&mut self, content: impl Into<String>) -> Result<(), DomainError> {
        self.push(Message::assistant(content))
    }

    /// Replace the latest feedback
    pub fn update_feedback(&mut self, feedback: Feedback) -> Result<(), DomainError> {
        if self.round.is_none() {
            return Err(DomainError::NotInRound);
        }
        self.last_feedback = Some(feedback);
        Ok(())
    }

    /// Clear topic, stance, transcript and feedback together
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn push(&mut self, message: Message) -> Result<(), DomainError> {
        if self.round.is_none() {
            return Err(DomainError::NotInRound);
        }
        self.transcript.push(message);
        Ok(())
    }
}
