//! Configuration file loading for debate-arena
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./arena.toml` or `./.arena.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/debate-arena/config.toml`
//! 4. Default values
//!
//! The API key is never read from these files; see
//! [`API_KEY_ENV`](crate::gemini::API_KEY_ENV).

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileLoggingConfig, FileOutputConfig, FileProviderConfig,
    FileReplConfig,
};
pub use loader::ConfigLoader;
