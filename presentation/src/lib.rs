//! Presentation layer for debate-arena
//!
//! This crate contains CLI definitions, the console renderer,
//! progress reporters, and the interactive debate REPL.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{DebateRepl, ReplCommand};
pub use cli::commands::{Cli, StanceArg};
pub use config::ReplConfig;
pub use output::console::ArenaFormatter;
pub use progress::reporter::{SimpleProgress, TurnSpinner};
