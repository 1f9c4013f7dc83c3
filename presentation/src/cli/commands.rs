//! CLI command definitions

use arena_domain::Stance;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Stance accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StanceArg {
    For,
    Against,
}

impl From<StanceArg> for Stance {
    fn from(arg: StanceArg) -> Self {
        match arg {
            StanceArg::For => Stance::For,
            StanceArg::Against => Stance::Against,
        }
    }
}

/// CLI arguments for debate-arena
#[derive(Parser, Debug)]
#[command(name = "debate-arena")]
#[command(author, version, about = "Face off with The Contender and receive live feedback")]
#[command(long_about = r#"
Debate Arena pits you against 'The Contender', an AI debater that always
argues the opposite side. After every argument a debate coach scores it and
suggests how to make it stronger.

The API key is read from the GENAI_API_KEY environment variable.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./arena.toml        Project-level config
3. ~/.config/debate-arena/config.toml   Global config

Example:
  debate-arena
  debate-arena --topic "Should AI replace human jobs?" --stance for
  debate-arena -m gemini-2.0-flash
"#)]
pub struct Cli {
    /// Debate topic (skips the topic prompt)
    #[arg(short, long)]
    pub topic: Option<String>,

    /// Your stance on the topic (skips the stance prompt)
    #[arg(short, long, value_enum, requires = "topic")]
    pub stance: Option<StanceArg>,

    /// Model for both the Contender and the coach
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and the effective configuration, then exit
    #[arg(long)]
    pub show_config: bool,
}
