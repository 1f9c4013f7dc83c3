//! Interactive debate module
//!
//! Provides a readline-based debate loop around the round and turn use cases.

mod command;
mod repl;

pub use command::ReplCommand;
pub use repl::DebateRepl;
