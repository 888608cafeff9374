use thiserror::Error;

/// Structural errors raised while building or decoding a trigger/action chain.
#[derive(Debug, Error)]
pub enum FlowError {
  /// The chain has no trigger at its head (empty, or led by an action).
  #[error("flow must have a trigger")]
  MissingTrigger,

  /// A trigger node appeared somewhere other than the chain head.
  #[error("trigger found at position {index}, triggers may only lead the chain")]
  TriggerNotAtHead { index: usize },

  /// The flow document could not be decoded.
  #[error("invalid flow document: {0}")]
  Parse(#[from] serde_json::Error),
}
