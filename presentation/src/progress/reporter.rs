//! Progress reporting for debate turns

use arena_application::{TurnProgressNotifier, TurnStep};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

fn step_message(step: TurnStep) -> &'static str {
    match step {
        TurnStep::Rebuttal => "The Contender is preparing a rebuttal...",
        TurnStep::Analysis => "The coach is scoring your argument...",
    }
}

/// Shows a spinner for the model call in flight
pub struct TurnSpinner {
    bar: Mutex<Option<ProgressBar>>,
}

impl TurnSpinner {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for TurnSpinner {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnProgressNotifier for TurnSpinner {
    fn on_step_start(&self, step: TurnStep) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(step_message(step));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.bar.lock()
            && let Some(previous) = slot.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn on_step_complete(&self, _step: TurnStep, _success: bool) {
        if let Ok(mut slot) = self.bar.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_and_clear();
        }
    }
}

/// Simple text-based progress (no spinner)
pub struct SimpleProgress;

impl TurnProgressNotifier for SimpleProgress {
    fn on_step_start(&self, step: TurnStep) {
        println!("{} {}", "->".cyan(), step_message(step).dimmed());
    }

    fn on_step_complete(&self, step: TurnStep, success: bool) {
        if !success {
            println!("  {} {} failed", "x".red(), step.as_str());
        }
    }
}
