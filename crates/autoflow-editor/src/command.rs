use autoflow_catalog::Integration;

use crate::error::EditorError;
use crate::ids::IdProvider;
use crate::list::StepList;
use crate::step::StepUpdate;

/// One edit to a [`StepList`].
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
  SetTrigger {
    trigger: Integration,
  },
  AddAction {
    action: Integration,
    after: Option<String>,
  },
  UpdateStep {
    step_id: String,
    update: StepUpdate,
  },
  DeleteStep {
    step_id: String,
  },
}

impl Command {
  pub fn name(&self) -> &'static str {
    match self {
      Command::SetTrigger { .. } => "set_trigger",
      Command::AddAction { .. } => "add_action",
      Command::UpdateStep { .. } => "update_step",
      Command::DeleteStep { .. } => "delete_step",
    }
  }
}

/// Apply `command` to `state`, producing the next state.
pub fn reduce(
  state: &StepList,
  command: Command,
  ids: &dyn IdProvider,
) -> Result<StepList, EditorError> {
  match command {
    Command::SetTrigger { trigger } => Ok(state.set_trigger(&trigger, ids)),
    Command::AddAction { action, after } => state.add_action(&action, after.as_deref(), ids),
    Command::UpdateStep { step_id, update } => state.update_step(&step_id, update),
    Command::DeleteStep { step_id } => state.delete_step(&step_id),
  }
}
