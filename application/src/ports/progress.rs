//! Progress notification port
//!
//! Defines the interface for reporting progress while a turn waits on the
//! model provider.

/// The two model calls of a turn, in the order they run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStep {
    Rebuttal,
    Analysis,
}

impl TurnStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnStep::Rebuttal => "rebuttal",
            TurnStep::Analysis => "analysis",
        }
    }
}

/// Callback for progress updates during a turn
///
/// Implementations live in the presentation layer.
pub trait TurnProgressNotifier: Send + Sync {
    /// Called right before the model call for `step` is issued
    fn on_step_start(&self, step: TurnStep);

    /// Called when the model call for `step` returns
    fn on_step_complete(&self, step: TurnStep, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl TurnProgressNotifier for NoProgress {
    fn on_step_start(&self, _step: TurnStep) {}
    fn on_step_complete(&self, _step: TurnStep, _success: bool) {}
}
