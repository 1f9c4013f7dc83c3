//! Round setup use case
//!
//! Validates a setup submission and starts a round, or ends one on reset.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use arena_domain::{DebateSession, Round, SetupError, Stance};
use std::sync::Arc;
use tracing::{info, warn};

/// A setup form submission
#[derive(Debug, Clone)]
pub struct StartRoundInput {
    /// Raw topic text as typed
    pub topic: String,
    /// `None` when the stance placeholder is still selected
    pub stance: Option<Stance>,
}

impl StartRoundInput {
    pub fn new(topic: impl Into<String>, stance: Option<Stance>) -> Self {
        Self {
            topic: topic.into(),
            stance,
        }
    }
}

/// Use case for moving a session in and out of a round
pub struct RoundSetupUseCase {
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl RoundSetupUseCase {
    pub fn new() -> Self {
        Self {
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Start a round from a setup submission.
    ///
    /// On error the session is left exactly as it was.
    pub fn start(
        &self,
        session: &mut DebateSession,
        input: StartRoundInput,
    ) -> Result<Round, SetupError> {
        if session.is_in_round() {
            warn!("Setup submitted while a round is in progress");
            return Err(SetupError::RoundInProgress);
        }

        let round = Round::from_submission(&input.topic, input.stance).inspect_err(|e| {
            info!("Setup rejected: {}", e);
        })?;

        let round = session.begin_round(round)?.clone();
        info!(topic = %round.topic, stance = %round.stance, "Round started");
        self.conversation_logger.log(ConversationEvent::new(
            "round_started",
            serde_json::json!({
                "topic": round.topic.as_str(),
                "stance": round.stance.as_str(),
            }),
        ));

        Ok(round)
    }

    /// Clear topic, stance, transcript and feedback
    pub fn reset(&self, session: &mut DebateSession) {
        let turns = session.transcript().len();
        session.reset();
        info!(messages = turns, "Round reset");
        self.conversation_logger.log(ConversationEvent::new(
            "round_reset",
            serde_json::json!({ "messages": turns }),
        ));
    }
}

impl Default for RoundSetupUseCase {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::RecordingLogger;
    use arena_domain::{Feedback, SessionState};

    #[test]
    fn test_valid_setup_starts_round() {
        let use_case = RoundSetupUseCase::new();
        let mut session = DebateSession::new();

        let round = use_case
            .start(
                &mut session,
                StartRoundInput::new("  Should AI replace human jobs?  ", Some(Stance::For)),
            )
            .unwrap();

        assert_eq!(round.topic.as_str(), "Should AI replace human jobs?");
        assert_eq!(session.state(), SessionState::InRound);
        assert_eq!(session.stance(), Some(Stance::For));
    }

    #[test]
    fn test_invalid_setup_keeps_awaiting() {
        let use_case = RoundSetupUseCase::new();
        let mut session = DebateSession::new();

        assert_eq!(
            use_case.start(&mut session, StartRoundInput::new("   ", Some(Stance::For))),
            Err(SetupError::EmptyTopic)
        );
        assert_eq!(
            use_case.start(&mut session, StartRoundInput::new("Remote work", None)),
            Err(SetupError::MissingStance)
        );
        assert_eq!(session.state(), SessionState::AwaitingSetup);
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn test_second_setup_rejected_until_reset() {
        let use_case = RoundSetupUseCase::new();
        let mut session = DebateSession::new();
        use_case
            .start(&mut session, StartRoundInput::new("Topic A", Some(Stance::For)))
            .unwrap();

        assert_eq!(
            use_case.start(&mut session, StartRoundInput::new("Topic B", Some(Stance::Against))),
            Err(SetupError::RoundInProgress)
        );
        assert_eq!(session.topic().map(|t| t.as_str()), Some("Topic A"));

        use_case.reset(&mut session);
        assert!(
            use_case
                .start(&mut session, StartRoundInput::new("Topic B", Some(Stance::Against)))
                .is_ok()
        );
    }

    #[test]
    fn test_reset_clears_all_fields() {
        let use_case = RoundSetupUseCase::new();
        let mut session = DebateSession::new();
        use_case
            .start(&mut session, StartRoundInput::new("Topic", Some(Stance::Against)))
            .unwrap();
        session.record_argument("arg").unwrap();
        session.record_rebuttal("reply").unwrap();
        session
            .update_feedback(Feedback::new(Some(5.0), "a", "b"))
            .unwrap();

        use_case.reset(&mut session);

        assert_eq!(session, DebateSession::new());
    }

    #[test]
    fn test_logs_round_events() {
        let logger = Arc::new(RecordingLogger::default());
        let use_case = RoundSetupUseCase::new().with_conversation_logger(logger.clone());
        let mut session = DebateSession::new();

        let _ = use_case.start(&mut session, StartRoundInput::new("", Some(Stance::For)));
        use_case
            .start(&mut session, StartRoundInput::new("Topic", Some(Stance::For)))
            .unwrap();
        use_case.reset(&mut session);

        assert_eq!(logger.event_types(), vec!["round_started", "round_reset"]);
    }
}
