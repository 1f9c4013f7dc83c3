//! Raw HTTP client for the Gemini `generateContent` endpoint.

use super::protocol::{ApiErrorEnvelope, GenerateContentRequest, GenerateContentResponse};
use arena_application::GatewayError;
use arena_domain::Model;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "GENAI_API_KEY";

/// Public Gemini API endpoint
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Connection settings for [`GeminiClient`]
#[derive(Debug, Clone)]
pub struct GeminiSettings {
    /// `None` when the key was not provided; requests then fail with
    /// [`GatewayError::Authentication`]
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl GeminiSettings {
    /// Read the API key from [`API_KEY_ENV`].
    ///
    /// A missing key is not an error here; it surfaces on the first request.
    pub fn from_env(base_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty());
        Self {
            api_key,
            base_url: base_url.into(),
            timeout,
        }
    }
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

/// HTTP client for Gemini
#[derive(Debug)]
pub struct GeminiClient {
    http: Client,
    api_key: Option<String>,
    base_url: String,
}

impl GeminiClient {
    pub fn new(settings: GeminiSettings) -> Result<Self, GatewayError> {
        let mut builder = Client::builder();
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        Ok(Self {
            http,
            api_key: settings.api_key,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self, model: &Model) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url,
            model.as_str()
        )
    }

    /// Generate text for one system instruction and one user message
    pub async fn generate_content(
        &self,
        model: &Model,
        system_instruction: &str,
        user_message: &str,
    ) -> Result<String, GatewayError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            GatewayError::Authentication(format!("{API_KEY_ENV} is not set"))
        })?;

        let request = GenerateContentRequest::single_turn(system_instruction, user_message);
        let url = self.endpoint(model);
        debug!(%url, "Sending generateContent request");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status().as_u16();

        if status == 429 {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok());
            return Err(GatewayError::RateLimited { retry_after });
        }

        if status >= 400 {
            let body = response.text().await.unwrap_or_else(|_| "(no body)".into());
            return Err(classify_error(status, &body, model));
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            GatewayError::InvalidResponse(format!("failed to parse response: {e}"))
        })?;

        body.text()
            .ok_or_else(|| GatewayError::EmptyResponse(body.missing_text_reason()))
    }
}

fn map_transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::ConnectionError(e.to_string())
    }
}

/// Map an HTTP error status and body to a tagged gateway error
pub(crate) fn classify_error(status: u16, body: &str, model: &Model) -> GatewayError {
    let api_error = serde_json::from_str::<ApiErrorEnvelope>(body).ok();
    let message = api_error
        .as_ref()
        .map(|e| e.error.message.clone())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| body.to_string());
    let api_status = api_error.and_then(|e| e.error.status);

    match status {
        401 | 403 => GatewayError::Authentication(message),
        // Gemini reports a bad key as 400 INVALID_ARGUMENT
        400 if message.contains("API key") => GatewayError::Authentication(message),
        404 => GatewayError::ModelNotAvailable(format!("{model}: {message}")),
        _ if api_status.as_deref() == Some("RESOURCE_EXHAUSTED") => {
            GatewayError::RateLimited { retry_after: None }
        }
        _ => GatewayError::RequestFailed { status, message },
    }
}
