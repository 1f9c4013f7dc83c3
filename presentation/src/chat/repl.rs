//! REPL (Read-Eval-Print Loop) for the debate arena

use crate::ReplConfig;
use crate::chat::command::ReplCommand;
use crate::output::console::ArenaFormatter;
use crate::progress::reporter::{SimpleProgress, TurnSpinner};
use arena_application::{
    LlmGateway, NoProgress, RoundSetupUseCase, RunTurnUseCase, StartRoundInput,
    TurnProgressNotifier,
};
use arena_domain::{DebateSession, Message, Role, SetupError, Stance};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::io::IsTerminal;
use tracing::debug;

/// What the loop should do after handling one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// What a line typed at the `You>` prompt asks for
#[derive(Debug, PartialEq)]
enum DebateLine<'a> {
    Blank,
    Command(ReplCommand),
    /// Sent to the models exactly as typed
    Argument(&'a str),
}

impl<'a> DebateLine<'a> {
    fn classify(line: &'a str) -> Self {
        if line.trim().is_empty() {
            return DebateLine::Blank;
        }
        match ReplCommand::parse(line) {
            Some(command) => DebateLine::Command(command),
            None => DebateLine::Argument(line),
        }
    }
}

/// One read from the editor
enum Input {
    Line(String),
    Interrupted,
    Closed,
}

/// Interactive debate REPL
pub struct DebateRepl<G: LlmGateway + 'static> {
    setup: RoundSetupUseCase,
    turns: RunTurnUseCase<G>,
    session: DebateSession,
    config: ReplConfig,
    preset: Option<StartRoundInput>,
}

impl<G: LlmGateway + 'static> DebateRepl<G> {
    pub fn new(setup: RoundSetupUseCase, turns: RunTurnUseCase<G>) -> Self {
        Self {
            setup,
            turns,
            session: DebateSession::new(),
            config: ReplConfig::default(),
            preset: None,
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Submit this setup before the first prompt instead of asking for it
    pub fn with_preset(mut self, preset: Option<StartRoundInput>) -> Self {
        self.preset = preset;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(path) = &self.config.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        println!("{}", ArenaFormatter::welcome());
        println!("{}", ReplCommand::help_text());
        println!();

        loop {
            let flow = if self.session.is_in_round() {
                self.debate_step(&mut rl).await
            } else {
                self.setup_step(&mut rl)
            };
            if flow == Flow::Exit {
                break;
            }
        }

        if let Some(path) = &self.config.history_file
            && let Err(e) = rl.save_history(path)
        {
            debug!("Could not save history to {}: {}", path.display(), e);
        }

        Ok(())
    }

    fn read(rl: &mut DefaultEditor, prompt: &str) -> Input {
        match rl.readline(prompt) {
            Ok(line) => Input::Line(line),
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                Input::Interrupted
            }
            Err(ReadlineError::Eof) => Input::Closed,
            Err(err) => {
                eprintln!("{}", ArenaFormatter::format_error(&err.to_string()));
                Input::Closed
            }
        }
    }

    /// Collect a topic and stance, then try to start the round
    fn setup_step(&mut self, rl: &mut DefaultEditor) -> Flow {
        if let Some(preset) = self.preset.take() {
            self.start_round(preset);
            return Flow::Continue;
        }

        let topic = match Self::read(rl, "Topic> ") {
            Input::Line(line) => line,
            Input::Interrupted => return Flow::Continue,
            Input::Closed => return self.quit(),
        };
        if let Some(command) = ReplCommand::parse(&topic) {
            return self.handle_command(command);
        }

        let stance = loop {
            match Self::read(rl, "Stance [for/against]> ") {
                Input::Line(line) => match Stance::parse_choice(&line) {
                    Ok(stance) => break stance,
                    Err(e) => println!("{}", ArenaFormatter::format_warning(&e.to_string())),
                },
                Input::Interrupted => return Flow::Continue,
                Input::Closed => return self.quit(),
            }
        };

        self.start_round(StartRoundInput::new(topic, stance));
        Flow::Continue
    }

    fn start_round(&mut self, input: StartRoundInput) {
        match self.setup.start(&mut self.session, input) {
            Ok(_) => {
                if let Some(banner) = ArenaFormatter::format_banner(&self.session) {
                    println!();
                    println!("{}", banner);
                }
                println!("{}", ArenaFormatter::format_feedback(&self.session));
            }
            Err(e) => println!("{}", ArenaFormatter::format_warning(&Self::setup_hint(&e))),
        }
    }

    fn setup_hint(error: &SetupError) -> String {
        match error {
            SetupError::EmptyTopic | SetupError::MissingStance => {
                "Please enter a topic and select your stance!".to_string()
            }
            other => other.to_string(),
        }
    }

    /// Read one argument and run a turn with it
    async fn debate_step(&mut self, rl: &mut DefaultEditor) -> Flow {
        let line = match Self::read(rl, "You> ") {
            Input::Line(line) => line,
            Input::Interrupted => return Flow::Continue,
            Input::Closed => return self.quit(),
        };

        match DebateLine::classify(&line) {
            DebateLine::Blank => {}
            DebateLine::Command(command) => return self.handle_command(command),
            DebateLine::Argument(argument) => {
                let _ = rl.add_history_entry(argument);
                self.process_argument(argument).await;
            }
        }
        Flow::Continue
    }

    async fn process_argument(&mut self, argument: &str) {
        println!();

        let spinner;
        let simple;
        let silent;
        let progress: &dyn TurnProgressNotifier = if !self.config.show_progress {
            silent = NoProgress;
            &silent
        } else if std::io::stdout().is_terminal() {
            spinner = TurnSpinner::new();
            &spinner
        } else {
            simple = SimpleProgress;
            &simple
        };

        let result = self
            .turns
            .execute_with_progress(&mut self.session, argument, progress)
            .await;

        match result {
            Ok(output) => {
                println!(
                    "{}",
                    ArenaFormatter::format_message(&Message::assistant(output.rebuttal))
                );
                println!("{}", ArenaFormatter::format_feedback(&self.session));
            }
            Err(e) => {
                if e.rebuttal_recorded()
                    && let Some(reply) = self
                        .session
                        .transcript()
                        .last()
                        .filter(|m| m.role == Role::Assistant)
                {
                    println!("{}", ArenaFormatter::format_message(reply));
                }
                eprintln!("{}", ArenaFormatter::format_error(&e.to_string()));
            }
        }
        println!();
    }

    /// Handle a slash command
    fn handle_command(&mut self, command: ReplCommand) -> Flow {
        match command {
            ReplCommand::Quit => return self.quit(),
            ReplCommand::Help => {
                println!();
                println!("{}", ReplCommand::help_text());
                println!();
            }
            ReplCommand::Reset => {
                self.setup.reset(&mut self.session);
                println!("Round cleared. Pick a new topic.");
            }
            ReplCommand::Feedback => {
                println!("{}", ArenaFormatter::format_feedback(&self.session));
            }
            ReplCommand::Transcript => {
                println!("{}", ArenaFormatter::format_transcript(&self.session));
            }
            ReplCommand::Status => {
                match ArenaFormatter::format_banner(&self.session) {
                    Some(banner) => println!("{}", banner),
                    None => println!("No round in progress."),
                }
                let models = self.turns.models();
                println!("Debater model:  {}", models.debater);
                println!("Analyzer model: {}", models.analyzer);
            }
            ReplCommand::Unknown(name) => {
                println!("Unknown command: {}", name);
                println!("Type /help for available commands");
            }
        }
        Flow::Continue
    }

    fn quit(&self) -> Flow {
        println!("Bye!");
        Flow::Exit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_are_skipped() {
        assert_eq!(DebateLine::classify(""), DebateLine::Blank);
        assert_eq!(DebateLine::classify("  \t "), DebateLine::Blank);
    }

    #[test]
    fn test_argument_is_kept_as_typed() {
        let line = "  AI increases productivity  ";
        assert_eq!(DebateLine::classify(line), DebateLine::Argument(line));
    }

    #[test]
    fn test_commands_are_recognised() {
        assert_eq!(DebateLine::classify(" /reset"), DebateLine::Command(ReplCommand::Reset));
    }
}
