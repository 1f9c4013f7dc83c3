//! Run Turn use case
//!
//! Drives one debate turn: record the argument, get the Contender's
//! rebuttal, then have the coach score the argument.

use crate::config::PersonaModels;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::{NoProgress, TurnProgressNotifier, TurnStep};
use arena_domain::{DebateSession, DomainError, Feedback, FeedbackError, PromptTemplate};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can end a turn early
///
/// Whatever was appended to the transcript before the failure stays there.
#[derive(Error, Debug)]
pub enum RunTurnError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("The Contender could not reply: {0}")]
    Debate(#[source] GatewayError),

    #[error("Feedback request failed: {0}")]
    Analysis(#[source] GatewayError),

    #[error("Could not read feedback: {0}")]
    FeedbackDecode(#[source] FeedbackError),
}

impl RunTurnError {
    /// Whether the rebuttal made it into the transcript before the failure
    pub fn rebuttal_recorded(&self) -> bool {
        matches!(self, RunTurnError::Analysis(_) | RunTurnError::FeedbackDecode(_))
    }
}

/// Result of a fully successful turn
#[derive(Debug, Clone, PartialEq)]
pub struct TurnOutput {
    pub rebuttal: String,
    pub feedback: Feedback,
}

/// Use case for running a debate turn
pub struct RunTurnUseCase<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    models: PersonaModels,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl<G: LlmGateway + 'static> RunTurnUseCase<G> {
    pub fn new(gateway: Arc<G>, models: PersonaModels) -> Self {
        Self {
            gateway,
            models,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn models(&self) -> &PersonaModels {
        &self.models
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        session: &mut DebateSession,
        argument: &str,
    ) -> Result<TurnOutput, RunTurnError> {
        self.execute_with_progress(session, argument, &NoProgress)
            .await
    }

    /// Execute the use case with progress callbacks
    ///
    /// The rebuttal call always finishes before the analysis call starts.
    pub async fn execute_with_progress(
        &self,
        session: &mut DebateSession,
        argument: &str,
        progress: &dyn TurnProgressNotifier,
    ) -> Result<TurnOutput, RunTurnError> {
        let round = session.round().cloned().ok_or(DomainError::NotInRound)?;
        if argument.trim().is_empty() {
            return Err(DomainError::EmptyArgument.into());
        }

        info!(turn = session.transcript().len() / 2 + 1, "Starting turn");
        session.record_argument(argument)?;
        self.conversation_logger.log(ConversationEvent::new(
            "user_argument",
            serde_json::json!({ "content": argument }),
        ));

        // Step 1: rebuttal
        let debate_system = PromptTemplate::debate_system(&round.topic, round.stance);
        progress.on_step_start(TurnStep::Rebuttal);
        let reply = self
            .gateway
            .generate(&self.models.debater, &debate_system, argument)
            .await;
        progress.on_step_complete(TurnStep::Rebuttal, reply.is_ok());

        let rebuttal = match reply {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                warn!("Rebuttal from {} failed: {}", self.models.debater, e);
                self.log_failure(TurnStep::Rebuttal, &e.to_string());
                return Err(RunTurnError::Debate(e));
            }
        };
        session.record_rebuttal(rebuttal.clone())?;
        debug!(chars = rebuttal.len(), "Rebuttal recorded");
        self.conversation_logger.log(ConversationEvent::new(
            "rebuttal",
            serde_json::json!({
                "model": self.models.debater.to_string(),
                "content": rebuttal,
            }),
        ));

        // Step 2: analysis of the user's argument only
        progress.on_step_start(TurnStep::Analysis);
        let analysis = self
            .gateway
            .generate(
                &self.models.analyzer,
                PromptTemplate::analyzer_system(),
                argument,
            )
            .await;
        progress.on_step_complete(TurnStep::Analysis, analysis.is_ok());

        let raw = match analysis {
            Ok(text) => text,
            Err(e) => {
                warn!("Analysis from {} failed: {}", self.models.analyzer, e);
                self.log_failure(TurnStep::Analysis, &e.to_string());
                return Err(RunTurnError::Analysis(e));
            }
        };

        let feedback = match Feedback::parse_analysis(raw.trim()) {
            Ok(feedback) => feedback,
            Err(e) => {
                warn!("Analyzer output rejected: {}", e);
                self.log_failure(TurnStep::Analysis, &e.to_string());
                return Err(RunTurnError::FeedbackDecode(e));
            }
        };

        session.update_feedback(feedback.clone())?;
        info!(rating = %feedback.rating_label(), "Feedback updated");
        self.conversation_logger.log(ConversationEvent::new(
            "feedback",
            serde_json::to_value(&feedback).unwrap_or_default(),
        ));

        Ok(TurnOutput { rebuttal, feedback })
    }

    fn log_failure(&self, step: TurnStep, error: &str) {
        self.conversation_logger.log(ConversationEvent::new(
            "turn_failed",
            serde_json::json!({
                "step": step.as_str(),
                "error": error,
            }),
        ));
    }
}
