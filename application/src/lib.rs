//! Application layer for debate-arena
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::PersonaModels;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{GatewayError, LlmGateway, LlmSession},
    progress::{NoProgress, TurnProgressNotifier, TurnStep},
};
pub use use_cases::run_turn::{RunTurnError, RunTurnUseCase, TurnOutput};
pub use use_cases::round_setup::{RoundSetupUseCase, StartRoundInput};
