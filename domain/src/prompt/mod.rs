//! Prompt domain
//!
//! System instructions for the two personas: the Contender and the coach.

mod template;

pub use template::PromptTemplate;
