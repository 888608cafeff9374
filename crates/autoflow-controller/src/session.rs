use autoflow_editor::StepList;
use autoflow_flow::FlowStatus;
use serde::Serialize;

/// Where an editing session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
  /// Nothing chosen yet.
  Empty,
  /// A trigger was chosen on an unsaved flow and nothing else edited.
  TriggerChosen,
  /// Edited since the last load or save.
  Editing,
  /// Persisted as a draft.
  Saved,
  /// Persisted and activated.
  Published,
}

/// Mutable state of one editing session.
#[derive(Debug, Clone)]
pub(crate) struct Session {
  pub flow_id: Option<String>,
  pub status: FlowStatus,
  pub display_name: String,
  pub description: Option<String>,
  pub steps: StepList,
  pub state: SessionState,
  pub dirty: bool,
  /// Bumped on every content edit; lets a save tell whether it is stale.
  pub revision: u64,
  pub last_error: Option<String>,
}

impl Session {
  pub fn new(display_name: String) -> Self {
    Self {
      flow_id: None,
      status: FlowStatus::Disabled,
      display_name,
      description: None,
      steps: StepList::default(),
      state: SessionState::Empty,
      dirty: false,
      revision: 0,
      last_error: None,
    }
  }

  /// Record a content edit.
  pub fn touch(&mut self) {
    self.dirty = true;
    self.revision += 1;
    if self.state != SessionState::Empty || !self.steps.is_empty() {
      self.state = SessionState::Editing;
    }
  }

  /// State after a successful save or status change, given whether edits
  /// are still pending.
  pub fn settle(&mut self) {
    self.state = if self.dirty {
      SessionState::Editing
    } else if self.status == FlowStatus::Enabled {
      SessionState::Published
    } else {
      SessionState::Saved
    };
  }
}

/// Read-only copy of a session, for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
  pub flow_id: Option<String>,
  pub status: FlowStatus,
  pub display_name: String,
  pub description: Option<String>,
  pub steps: StepList,
  pub state: SessionState,
  pub is_dirty: bool,
  pub last_error: Option<String>,
}

impl From<&Session> for SessionSnapshot {
  fn from(session: &Session) -> Self {
    Self {
      flow_id: session.flow_id.clone(),
      status: session.status,
      display_name: session.display_name.clone(),
      description: session.description.clone(),
      steps: session.steps.clone(),
      state: session.state,
      is_dirty: session.dirty,
      last_error: session.last_error.clone(),
    }
  }
}
