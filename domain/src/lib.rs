//! Domain layer for debate-arena
//!
//! This crate contains the session state, prompt templates and feedback
//! decoding. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Round
//!
//! A round starts when the user picks a topic and a stance and lasts until
//! reset. The topic and stance are fixed for the whole round.
//!
//! ## Turn
//!
//! One user argument, the Contender's rebuttal to it, and an attempt to score
//! the argument with structured [`Feedback`].

pub mod core;
pub mod feedback;
pub mod prompt;
pub mod session;

// Re-export commonly used types
pub use core::{
    error::{DomainError, SetupError},
    model::Model,
};
pub use feedback::{Feedback, FeedbackError, strip_code_fences};
pub use prompt::PromptTemplate;
pub use session::{
    entities::{DebateSession, Message, Role, Round, SessionState},
    stance::Stance,
    topic::Topic,
};
