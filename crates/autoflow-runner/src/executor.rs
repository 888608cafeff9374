use async_trait::async_trait;
use autoflow_editor::WorkflowStep;
use autoflow_validator::{Config, Validator};
use serde_json::{Value, json};

use crate::error::ExecutorError;

/// What a step hands to its executor.
#[derive(Debug, Clone, PartialEq)]
pub struct StepDispatch {
  pub step_id: String,
  pub integration_id: String,
  pub config: Config,
  pub credential_id: Option<String>,
}

impl From<&WorkflowStep> for StepDispatch {
  fn from(step: &WorkflowStep) -> Self {
    Self {
      step_id: step.id.clone(),
      integration_id: step.integration_id.clone(),
      config: step.config.clone(),
      credential_id: step.credential_id.clone(),
    }
  }
}

/// Runs a single step against its integration.
#[async_trait]
pub trait StepExecutor: Send + Sync {
  /// Execute the step, returning its output.
  async fn execute(&self, dispatch: &StepDispatch) -> Result<Value, ExecutorError>;
}

/// Dry-run executor: a step succeeds iff its configuration validates.
#[derive(Debug, Default)]
pub struct ValidatingExecutor {
  validator: Validator,
}

impl ValidatingExecutor {
  pub fn new(validator: Validator) -> Self {
    Self { validator }
  }
}

#[async_trait]
impl StepExecutor for ValidatingExecutor {
  async fn execute(&self, dispatch: &StepDispatch) -> Result<Value, ExecutorError> {
    if self
      .validator
      .validate(&dispatch.integration_id, &dispatch.config)
    {
      Ok(json!({ "dryRun": true, "integrationId": dispatch.integration_id }))
    } else {
      Err(ExecutorError::Failed {
        message: format!(
          "configuration for '{}' is incomplete",
          dispatch.integration_id
        ),
      })
    }
  }
}
