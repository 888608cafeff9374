//! Test run events and notifiers.
//!
//! Events are emitted while a test run progresses so a caller can stream
//! per-step status without waiting for the final report.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// Events emitted during a test run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RunEvent {
  /// The run has started.
  RunStarted { run_id: String, steps: usize },

  /// A step has been dispatched.
  StepStarted { run_id: String, step_id: String },

  /// A step completed successfully.
  StepSucceeded {
    run_id: String,
    step_id: String,
    duration_ms: u64,
  },

  /// A step failed. No further steps run.
  StepFailed {
    run_id: String,
    step_id: String,
    error: String,
  },

  /// The run has finished, successfully or not.
  RunCompleted {
    run_id: String,
    success: bool,
    execution_time_ms: u64,
  },
}

/// Receives test run events.
pub trait RunNotifier: Send + Sync {
  fn notify(&self, event: RunEvent);
}

/// A notifier that discards all events.
#[derive(Debug, Clone, Default)]
pub struct NoopNotifier;

impl RunNotifier for NoopNotifier {
  fn notify(&self, _event: RunEvent) {}
}

/// A notifier that forwards events to an unbounded channel.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
  sender: mpsc::UnboundedSender<RunEvent>,
}

impl ChannelNotifier {
  pub fn new(sender: mpsc::UnboundedSender<RunEvent>) -> Self {
    Self { sender }
  }
}

impl RunNotifier for ChannelNotifier {
  fn notify(&self, event: RunEvent) {
    // Receiver may have been dropped
    let _ = self.sender.send(event);
  }
}
