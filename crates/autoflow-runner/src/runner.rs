//! Sequential, fail-fast test runs over a step list.

use std::sync::Arc;
use std::time::Duration;

use autoflow_editor::WorkflowStep;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::error::RunnerError;
use crate::events::{NoopNotifier, RunEvent, RunNotifier};
use crate::executor::{StepDispatch, StepExecutor};
use crate::report::{FailedStep, StepReport, StepStatus, TestReport};

/// Test runner settings.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
  /// Upper bound on a single step dispatch.
  pub step_timeout: Duration,
}

impl Default for RunnerConfig {
  fn default() -> Self {
    Self {
      step_timeout: Duration::from_secs(30),
    }
  }
}

/// Runs the actions of a step list one at a time, in list order.
///
/// The trigger is not run. The first failing step stops the run; the
/// report then holds the steps run so far plus the failing one.
pub struct TestRunner {
  executor: Arc<dyn StepExecutor>,
  notifier: Arc<dyn RunNotifier>,
  config: RunnerConfig,
}

impl TestRunner {
  pub fn new(executor: Arc<dyn StepExecutor>) -> Self {
    Self {
      executor,
      notifier: Arc::new(NoopNotifier),
      config: RunnerConfig::default(),
    }
  }

  pub fn with_notifier(mut self, notifier: Arc<dyn RunNotifier>) -> Self {
    self.notifier = notifier;
    self
  }

  pub fn with_config(mut self, config: RunnerConfig) -> Self {
    self.config = config;
    self
  }

  /// Run `steps` to completion.
  pub async fn run(&self, steps: &[WorkflowStep]) -> Result<TestReport, RunnerError> {
    self.run_with_cancel(steps, CancellationToken::new()).await
  }

  /// Run `steps`, stopping with [`RunnerError::Cancelled`] if `cancel` fires.
  pub async fn run_with_cancel(
    &self,
    steps: &[WorkflowStep],
    cancel: CancellationToken,
  ) -> Result<TestReport, RunnerError> {
    match steps.first() {
      Some(first) if first.is_trigger() => {}
      _ => return Err(RunnerError::NoTrigger),
    }

    let run_id = format!("run-{}", uuid::Uuid::new_v4());
    let actions = &steps[1..];
    info!(run_id = %run_id, steps = actions.len(), "test_run_started");
    self.notifier.notify(RunEvent::RunStarted {
      run_id: run_id.clone(),
      steps: actions.len(),
    });

    let mut reports = Vec::with_capacity(actions.len());
    let mut failed_step = None;

    for step in actions {
      self.notifier.notify(RunEvent::StepStarted {
        run_id: run_id.clone(),
        step_id: step.id.clone(),
      });

      let started = Instant::now();
      let outcome = tokio::select! {
        _ = cancel.cancelled() => {
          info!(run_id = %run_id, step_id = %step.id, "test_run_cancelled");
          return Err(RunnerError::Cancelled);
        }
        outcome = self.dispatch(step) => outcome,
      };
      let duration_ms = started.elapsed().as_millis() as u64;

      match outcome {
        Ok(()) => {
          info!(run_id = %run_id, step_id = %step.id, duration_ms, "test_step_succeeded");
          self.notifier.notify(RunEvent::StepSucceeded {
            run_id: run_id.clone(),
            step_id: step.id.clone(),
            duration_ms,
          });
          reports.push(step_report(step, StepStatus::Success, duration_ms));
        }
        Err(e) => {
          error!(run_id = %run_id, step_id = %step.id, error = %e, "test_step_failed");
          self.notifier.notify(RunEvent::StepFailed {
            run_id: run_id.clone(),
            step_id: step.id.clone(),
            error: e.to_string(),
          });
          reports.push(step_report(step, StepStatus::Failure, duration_ms));
          failed_step = Some(FailedStep {
            step_id: step.id.clone(),
            display_name: step.display_name.clone(),
            error: e.to_string(),
          });
          break;
        }
      }
    }

    let success = failed_step.is_none();
    let execution_time_ms: u64 = reports.iter().map(|r| r.duration_ms).sum();
    info!(run_id = %run_id, success, execution_time_ms, "test_run_completed");
    self.notifier.notify(RunEvent::RunCompleted {
      run_id: run_id.clone(),
      success,
      execution_time_ms,
    });

    Ok(TestReport {
      run_id,
      success,
      execution_time_ms,
      steps: reports,
      failed_step,
    })
  }

  async fn dispatch(&self, step: &WorkflowStep) -> Result<(), RunnerError> {
    let dispatch = StepDispatch::from(step);
    match tokio::time::timeout(self.config.step_timeout, self.executor.execute(&dispatch)).await {
      Ok(Ok(_output)) => Ok(()),
      Ok(Err(source)) => Err(RunnerError::Step {
        step_id: step.id.clone(),
        source,
      }),
      Err(_) => Err(RunnerError::Timeout {
        step_id: step.id.clone(),
      }),
    }
  }
}

fn step_report(step: &WorkflowStep, status: StepStatus, duration_ms: u64) -> StepReport {
  StepReport {
    step_id: step.id.clone(),
    display_name: step.display_name.clone(),
    status,
    duration_ms,
  }
}
