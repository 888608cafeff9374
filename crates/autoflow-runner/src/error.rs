//! Error types for test runs.

use thiserror::Error;

/// Failure reported by a [`crate::StepExecutor`].
#[derive(Debug, Error)]
pub enum ExecutorError {
  /// The step ran and failed.
  #[error("{message}")]
  Failed { message: String },

  /// The executor has no handler for the integration.
  #[error("no executor for integration '{integration_id}'")]
  Unsupported { integration_id: String },
}

/// Errors that can occur during a test run.
#[derive(Debug, Error)]
pub enum RunnerError {
  /// There is nothing to run without a trigger.
  #[error("cannot test a flow without a trigger")]
  NoTrigger,

  /// A step's executor failed.
  #[error("step '{step_id}' failed: {source}")]
  Step {
    step_id: String,
    #[source]
    source: ExecutorError,
  },

  /// A step did not finish within the step timeout.
  #[error("step '{step_id}' timed out")]
  Timeout { step_id: String },

  /// The run was cancelled.
  #[error("test run cancelled")]
  Cancelled,
}
