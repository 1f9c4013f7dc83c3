//! Analyzer feedback domain.
//!
//! - [`entities::Feedback`] - the coach's verdict on the user's last argument
//! - [`parsing`] - decoding the analyzer's raw text into [`Feedback`]

pub mod entities;
pub mod parsing;

pub use entities::Feedback;
pub use parsing::{FeedbackError, strip_code_fences};
