//! Google Gemini adapter for the [`LlmGateway`](arena_application::LlmGateway) port.
//!
//! Talks to the `generateContent` REST endpoint. One call, one request;
//! nothing is retried here.

mod client;
mod gateway;
mod protocol;
mod session;

pub use client::{API_KEY_ENV, DEFAULT_BASE_URL, GeminiClient, GeminiSettings};
pub use gateway::GeminiLlmGateway;
pub use session::GeminiSession;
