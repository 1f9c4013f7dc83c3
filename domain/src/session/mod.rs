//! Debate session domain.
//!
//! - [`entities::DebateSession`] - the state of one user's session
//! - [`entities::Round`] - topic and stance fixed for one round
//! - [`entities::Message`] - a single transcript entry
//! - [`stance::Stance`] / [`topic::Topic`] - validated setup values

pub mod entities;
pub mod stance;
pub mod topic;
