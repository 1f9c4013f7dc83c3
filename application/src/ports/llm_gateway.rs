//! LLM Gateway port
//!
//! Defines the interface for communicating with the model provider.

use arena_domain::Model;
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Quota exceeded or rate limited{}", retry_suffix(.retry_after))]
    RateLimited { retry_after: Option<u64> },

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed (status {status}): {message}")]
    RequestFailed { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Model returned no text: {0}")]
    EmptyResponse(String),

    #[error("Timeout")]
    Timeout,
}

fn retry_suffix(retry_after: &Option<u64>) -> String {
    retry_after
        .map(|secs| format!(" (retry after {secs}s)"))
        .unwrap_or_default()
}

/// Gateway for LLM communication
///
/// This port defines how the application layer talks to the model provider.
/// Implementations (adapters) live in the infrastructure layer. Adapters do
/// not retry: every failure is returned to the caller as-is.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Create a session whose every request carries `system_prompt`
    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError>;

    /// Generate text for one system instruction and one user message.
    ///
    /// Exactly one network round trip.
    async fn generate(
        &self,
        model: &Model,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<String, GatewayError> {
        let session = self
            .create_session_with_system_prompt(model, system_prompt)
            .await?;
        session.send(user_message).await
    }
}

/// A model bound to a system instruction
///
/// Sessions keep no conversation history: each `send` is answered from the
/// system instruction and that single message.
#[async_trait]
pub trait LlmSession: Send + Sync {
    /// Get the model used by this session
    fn model(&self) -> &Model;

    /// Send a message and get a response
    async fn send(&self, content: &str) -> Result<String, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limited_display() {
        let err = GatewayError::RateLimited {
            retry_after: Some(30),
        };
        assert_eq!(err.to_string(), "Quota exceeded or rate limited (retry after 30s)");

        let err = GatewayError::RateLimited { retry_after: None };
        assert_eq!(err.to_string(), "Quota exceeded or rate limited");
    }

    #[test]
    fn test_request_failed_display() {
        let err = GatewayError::RequestFailed {
            status: 500,
            message: "internal".to_string(),
        };
        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("internal"));
    }
}
