use thiserror::Error;

/// Errors from step list edits.
#[derive(Debug, Error)]
pub enum EditorError {
  /// No step has the given id.
  #[error("step not found: {step_id}")]
  StepNotFound { step_id: String },

  /// Actions can only be added once a trigger is chosen.
  #[error("choose a trigger before adding actions")]
  NoTrigger,

  /// The trigger cannot be removed while actions still follow it.
  #[error("trigger cannot be deleted while {actions} action(s) follow it")]
  TriggerHasActions { actions: usize },

  /// A step sequence was not a trigger followed only by actions.
  #[error("invalid step order at position {index}: {message}")]
  InvalidOrder { index: usize, message: String },
}
