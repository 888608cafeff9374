use serde::{Deserialize, Serialize};

/// Outcome of one step in a test run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
  Success,
  Failure,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepReport {
  pub step_id: String,
  pub display_name: String,
  pub status: StepStatus,
  pub duration_ms: u64,
}

/// The step that stopped a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedStep {
  pub step_id: String,
  pub display_name: String,
  pub error: String,
}

/// Result of a test run.
///
/// `steps` holds only the steps that actually ran, and `execution_time_ms`
/// is the sum of their durations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestReport {
  pub run_id: String,
  pub success: bool,
  pub execution_time_ms: u64,
  pub steps: Vec<StepReport>,
  pub failed_step: Option<FailedStep>,
}
