//! Infrastructure layer for debate-arena
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileProviderConfig, FileReplConfig,
};
pub use gemini::{
    API_KEY_ENV, DEFAULT_BASE_URL, GeminiClient, GeminiLlmGateway, GeminiSession, GeminiSettings,
};
pub use logging::JsonlConversationLogger;
