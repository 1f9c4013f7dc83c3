//! Gemini session: a model bound to a system instruction

use super::client::GeminiClient;
use arena_application::{GatewayError, LlmSession};
use arena_domain::Model;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

pub struct GeminiSession {
    client: Arc<GeminiClient>,
    model: Model,
    system_prompt: String,
}

impl GeminiSession {
    pub fn new(client: Arc<GeminiClient>, model: Model, system_prompt: impl Into<String>) -> Self {
        Self {
            client,
            model,
            system_prompt: system_prompt.into(),
        }
    }
}

#[async_trait]
impl LlmSession for GeminiSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        let text = self
            .client
            .generate_content(&self.model, &self.system_prompt, content)
            .await?;
        info!(model = %self.model, chars = text.len(), "Gemini responded");
        Ok(text)
    }
}
