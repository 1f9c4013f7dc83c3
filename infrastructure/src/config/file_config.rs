//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use crate::gemini::DEFAULT_BASE_URL;
use arena_application::PersonaModels;
use arena_domain::Model;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("model name cannot be empty")]
    EmptyModelName,

    #[error("base_url cannot be empty")]
    EmptyBaseUrl,
}

/// Raw provider configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Model that plays the Contender
    pub debater_model: Model,
    /// Model that scores arguments
    pub analyzer_model: Model,
    /// API endpoint root
    pub base_url: String,
    /// Timeout in seconds for each model call
    pub timeout_seconds: Option<u64>,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            debater_model: Model::default(),
            analyzer_model: Model::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: None,
        }
    }
}

impl FileProviderConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    pub fn persona_models(&self) -> PersonaModels {
        PersonaModels::new(self.debater_model.clone(), self.analyzer_model.clone())
    }
}

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show a spinner while waiting on the model
    pub show_progress: bool,
    /// Path to history file
    pub history_file: Option<PathBuf>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Append debate events as JSON lines to this file
    pub conversation_log: Option<PathBuf>,
}

/// Complete configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub provider: FileProviderConfig,
    pub repl: FileReplConfig,
    pub output: FileOutputConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.provider.timeout_seconds == Some(0) {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if self.provider.debater_model.as_str().trim().is_empty()
            || self.provider.analyzer_model.as_str().trim().is_empty()
        {
            return Err(ConfigValidationError::EmptyModelName);
        }
        if self.provider.base_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.provider.debater_model, Model::Gemini15Flash);
        assert_eq!(config.provider.analyzer_model, Model::Gemini15Flash);
        assert_eq!(config.provider.base_url, DEFAULT_BASE_URL);
        assert!(config.repl.show_progress);
        assert!(config.output.color);
        assert!(config.logging.conversation_log.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml() {
        let toml_str = r#"
[provider]
debater_model = "gemini-2.5-pro"
timeout_seconds = 30

[output]
color = false
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.provider.debater_model, Model::Gemini25Pro);
        assert_eq!(config.provider.analyzer_model, Model::Gemini15Flash);
        assert_eq!(config.provider.timeout(), Some(Duration::from_secs(30)));
        assert!(!config.output.color);
        assert!(config.repl.show_progress);
    }

    #[test]
    fn test_persona_models() {
        let config: FileConfig = toml::from_str(
            r#"
[provider]
debater_model = "gemini-2.0-flash"
analyzer_model = "my-tuned-coach"
"#,
        )
        .unwrap();
        let models = config.provider.persona_models();
        assert_eq!(models.debater, Model::Gemini20Flash);
        assert_eq!(models.analyzer, Model::Custom("my-tuned-coach".to_string()));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = FileConfig::default();
        config.provider.timeout_seconds = Some(0);
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout));
    }

    #[test]
    fn test_validate_rejects_empty_model() {
        let config: FileConfig = toml::from_str("[provider]\nanalyzer_model = \"\"\n").unwrap();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyModelName));
    }

    #[test]
    fn test_validate_rejects_empty_base_url() {
        let mut config = FileConfig::default();
        config.provider.base_url = " ".to_string();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyBaseUrl));
    }
}
