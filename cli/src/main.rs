//! CLI entrypoint for Debate Arena
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use arena_application::{
    ConversationLogger, NoConversationLogger, PersonaModels, RoundSetupUseCase, RunTurnUseCase,
    StartRoundInput,
};
use arena_domain::Model;
use arena_infrastructure::{
    ConfigLoader, FileConfig, GeminiLlmGateway, GeminiSettings, JsonlConversationLogger,
};
use arena_presentation::{Cli, DebateRepl, ReplConfig};
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // GENAI_API_KEY may live in a .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        let config = load_config(&cli)?;
        println!("{}", ConfigLoader::render(&config));
        return Ok(());
    }

    let config = load_config(&cli)?;
    config.validate().context("Invalid configuration")?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    info!("Starting Debate Arena");

    let models = match &cli.model {
        Some(name) => PersonaModels::single(name.parse::<Model>()?),
        None => config.provider.persona_models(),
    };
    info!(debater = %models.debater, analyzer = %models.analyzer, "Models selected");

    // === Dependency Injection ===
    let settings =
        GeminiSettings::from_env(config.provider.base_url.clone(), config.provider.timeout());
    let gateway = Arc::new(GeminiLlmGateway::new(settings)?);

    let conversation_logger: Arc<dyn ConversationLogger> = match &config.logging.conversation_log {
        Some(path) => match JsonlConversationLogger::open(path) {
            Some(logger) => {
                info!("Conversation log: {}", logger.path().display());
                Arc::new(logger)
            }
            None => Arc::new(NoConversationLogger),
        },
        None => Arc::new(NoConversationLogger),
    };

    let setup = RoundSetupUseCase::new().with_conversation_logger(conversation_logger.clone());
    let turns =
        RunTurnUseCase::new(gateway, models).with_conversation_logger(conversation_logger);

    let repl_config = ReplConfig {
        show_progress: config.repl.show_progress && !cli.quiet,
        history_file: config
            .repl
            .history_file
            .clone()
            .or_else(ConfigLoader::default_history_path),
    };

    let preset = cli
        .topic
        .clone()
        .map(|topic| StartRoundInput::new(topic, cli.stance.map(Into::into)));

    let mut repl = DebateRepl::new(setup, turns)
        .with_config(repl_config)
        .with_preset(preset);
    repl.run().await?;

    Ok(())
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    if cli.no_config {
        return Ok(ConfigLoader::load_defaults());
    }
    ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")
}
