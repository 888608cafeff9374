//! Error types for the flow controller.

use autoflow_editor::EditorError;
use autoflow_flow::FlowError;
use autoflow_runner::RunnerError;
use autoflow_store::StoreError;
use thiserror::Error;

/// How an error should be surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  /// Step configuration is incomplete. Editing can continue.
  Validation,
  /// The flow cannot be built, e.g. it has no trigger.
  Structural,
  /// The store rejected or did not answer a request. Retrying is safe.
  Persistence,
  /// The flow or integration does not exist.
  NotFound,
  /// A test run could not complete.
  Execution,
}

/// Errors that can occur in a flow editing session.
#[derive(Debug, Error)]
pub enum ControllerError {
  /// The steps could not be built into a chain.
  #[error(transparent)]
  Structural(#[from] FlowError),

  /// An edit was rejected.
  #[error(transparent)]
  Edit(#[from] EditorError),

  /// The store failed.
  #[error("persistence failed: {0}")]
  Persistence(#[from] StoreError),

  /// No flow with the given id exists.
  #[error("flow not found: {flow_id}")]
  NotFound { flow_id: String },

  /// The catalog has no integration with the given id.
  #[error("unknown integration: {integration_id}")]
  UnknownIntegration { integration_id: String },

  /// A persistence call did not answer in time.
  #[error("{operation} timed out")]
  Timeout { operation: &'static str },

  /// Another save or publish is still running.
  #[error("a save is already in progress")]
  SaveInProgress,

  /// There are no steps to publish.
  #[error("cannot publish a flow without steps")]
  EmptyFlow,

  /// Some steps are not fully configured.
  #[error("{count} step(s) are not fully configured: {}", step_ids.join(", "))]
  InvalidSteps { count: usize, step_ids: Vec<String> },

  /// The operation needs a saved flow.
  #[error("flow has not been saved yet")]
  NotSaved,

  /// A test run could not complete.
  #[error(transparent)]
  Test(#[from] RunnerError),
}

impl ControllerError {
  pub fn kind(&self) -> ErrorKind {
    match self {
      ControllerError::Structural(_) | ControllerError::EmptyFlow => ErrorKind::Structural,
      ControllerError::Edit(EditorError::StepNotFound { .. }) => ErrorKind::NotFound,
      ControllerError::Edit(_) => ErrorKind::Structural,
      ControllerError::InvalidSteps { .. } => ErrorKind::Validation,
      ControllerError::Persistence(StoreError::NotFound(_))
      | ControllerError::NotFound { .. }
      | ControllerError::UnknownIntegration { .. } => ErrorKind::NotFound,
      ControllerError::Persistence(_)
      | ControllerError::Timeout { .. }
      | ControllerError::SaveInProgress
      | ControllerError::NotSaved => ErrorKind::Persistence,
      ControllerError::Test(RunnerError::NoTrigger) => ErrorKind::Structural,
      ControllerError::Test(_) => ErrorKind::Execution,
    }
  }
}
