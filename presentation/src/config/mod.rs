//! Presentation-side settings for the REPL

use std::path::PathBuf;

/// REPL behaviour chosen at startup
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Show a spinner while waiting on the model
    pub show_progress: bool,
    /// Where line history is persisted; `None` disables persistence
    pub history_file: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}
