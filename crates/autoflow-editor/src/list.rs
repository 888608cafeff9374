use std::ops::Deref;

use autoflow_catalog::Integration;
use autoflow_validator::Validator;
use serde::{Deserialize, Serialize};

use crate::error::EditorError;
use crate::ids::IdProvider;
use crate::step::{StepKind, StepUpdate, WorkflowStep};

const STEP_PREFIX: &str = "step";

/// Ordered steps of an automation being edited.
///
/// Either empty, or a trigger followed only by actions. Every edit returns a
/// new list and leaves `self` untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<WorkflowStep>", into = "Vec<WorkflowStep>")]
pub struct StepList {
  steps: Vec<WorkflowStep>,
}

impl StepList {
  /// Wrap `steps`, checking the trigger-first ordering.
  pub fn new(steps: Vec<WorkflowStep>) -> Result<Self, EditorError> {
    for (index, step) in steps.iter().enumerate() {
      match (index, step.kind) {
        (0, StepKind::Action) => {
          return Err(EditorError::InvalidOrder {
            index,
            message: "first step must be a trigger".to_string(),
          });
        }
        (i, StepKind::Trigger) if i > 0 => {
          return Err(EditorError::InvalidOrder {
            index,
            message: "only the first step may be a trigger".to_string(),
          });
        }
        _ => {}
      }
    }
    Ok(Self { steps })
  }

  /// Wrap steps already known to be ordered.
  pub(crate) fn from_ordered(steps: Vec<WorkflowStep>) -> Self {
    debug_assert!(Self::new(steps.clone()).is_ok());
    Self { steps }
  }

  pub fn trigger(&self) -> Option<&WorkflowStep> {
    self.steps.first()
  }

  pub fn actions(&self) -> &[WorkflowStep] {
    self.steps.get(1..).unwrap_or(&[])
  }

  pub fn get(&self, step_id: &str) -> Option<&WorkflowStep> {
    self.steps.iter().find(|s| s.id == step_id)
  }

  pub fn position(&self, step_id: &str) -> Option<usize> {
    self.steps.iter().position(|s| s.id == step_id)
  }

  /// Whether every step passed its last validation.
  pub fn all_valid(&self) -> bool {
    self.steps.iter().all(|s| s.is_valid)
  }

  /// Steps whose last validation failed.
  pub fn invalid_steps(&self) -> impl Iterator<Item = &WorkflowStep> {
    self.steps.iter().filter(|s| !s.is_valid)
  }

  pub fn into_vec(self) -> Vec<WorkflowStep> {
    self.steps
  }

  /// Replace the whole list with a single, unconfigured trigger step.
  ///
  /// Choosing a trigger when one exists discards the old trigger and every
  /// action after it.
  pub fn set_trigger(&self, trigger: &Integration, ids: &dyn IdProvider) -> StepList {
    let step = WorkflowStep::new(ids.next_id(STEP_PREFIX), StepKind::Trigger, trigger);
    StepList { steps: vec![step] }
  }

  /// Insert a new action right after `after`, or append it when `after` is
  /// `None` or names no step.
  pub fn add_action(
    &self,
    action: &Integration,
    after: Option<&str>,
    ids: &dyn IdProvider,
  ) -> Result<StepList, EditorError> {
    if self.steps.is_empty() {
      return Err(EditorError::NoTrigger);
    }

    let step = WorkflowStep::new(ids.next_id(STEP_PREFIX), StepKind::Action, action);
    let index = after
      .and_then(|id| self.position(id))
      .map(|i| i + 1)
      .unwrap_or(self.steps.len());

    let mut steps = self.steps.clone();
    steps.insert(index, step);
    Ok(StepList { steps })
  }

  /// Merge `update` into the step with id `step_id`.
  ///
  /// Validity is not recomputed here; callers changing `config` pass the new
  /// `is_valid` in the same update.
  pub fn update_step(&self, step_id: &str, update: StepUpdate) -> Result<StepList, EditorError> {
    let index = self.require(step_id)?;
    let mut steps = self.steps.clone();
    steps[index].apply(update);
    Ok(StepList { steps })
  }

  /// Remove the step with id `step_id`. Later steps are not revalidated.
  pub fn delete_step(&self, step_id: &str) -> Result<StepList, EditorError> {
    let index = self.require(step_id)?;
    if index == 0 && self.steps.len() > 1 {
      return Err(EditorError::TriggerHasActions {
        actions: self.steps.len() - 1,
      });
    }

    let mut steps = self.steps.clone();
    steps.remove(index);
    Ok(StepList { steps })
  }

  /// Explicit validation pass: recompute `is_valid` for every step.
  pub fn revalidate(&self, validator: &Validator) -> StepList {
    let steps = self
      .steps
      .iter()
      .cloned()
      .map(|mut step| {
        step.is_valid = validator.validate(&step.integration_id, &step.config);
        step
      })
      .collect();
    StepList { steps }
  }

  fn require(&self, step_id: &str) -> Result<usize, EditorError> {
    self
      .position(step_id)
      .ok_or_else(|| EditorError::StepNotFound {
        step_id: step_id.to_string(),
      })
  }
}

impl Deref for StepList {
  type Target = [WorkflowStep];

  fn deref(&self) -> &Self::Target {
    &self.steps
  }
}

impl TryFrom<Vec<WorkflowStep>> for StepList {
  type Error = EditorError;

  fn try_from(steps: Vec<WorkflowStep>) -> Result<Self, Self::Error> {
    StepList::new(steps)
  }
}

impl From<StepList> for Vec<WorkflowStep> {
  fn from(list: StepList) -> Self {
    list.steps
  }
}
