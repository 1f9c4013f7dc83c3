//! Gemini LLM Gateway implementation

use super::client::{GeminiClient, GeminiSettings};
use super::session::GeminiSession;
use arena_application::{GatewayError, LlmGateway, LlmSession};
use arena_domain::Model;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

/// LLM Gateway implementation for the Gemini API
pub struct GeminiLlmGateway {
    client: Arc<GeminiClient>,
}

impl GeminiLlmGateway {
    pub fn new(settings: GeminiSettings) -> Result<Self, GatewayError> {
        let client = GeminiClient::new(settings)?;
        if client.has_api_key() {
            info!("GeminiLlmGateway initialized");
        } else {
            warn!("GeminiLlmGateway initialized without an API key; requests will fail");
        }
        Ok(Self {
            client: Arc::new(client),
        })
    }
}

#[async_trait]
impl LlmGateway for GeminiLlmGateway {
    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(GeminiSession::new(
            Arc::clone(&self.client),
            model.clone(),
            system_prompt,
        )))
    }
}
