//! The flow controller: one editing session over one flow.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use autoflow_catalog::{Integration, IntegrationCatalog, IntegrationKind};
use autoflow_editor::{
  Command, EditorError, IdProvider, StepList, StepUpdate, UuidIds, reduce, to_chain, to_steps,
};
use autoflow_flow::{Flow, FlowDraft, FlowMetadata, FlowStatus};
use autoflow_runner::{StepExecutor, TestReport, TestRunner, ValidatingExecutor};
use autoflow_store::{Credential, CredentialStore, FlowStore, StoreError};
use autoflow_validator::{Config, Validator};
use tracing::{error, info, instrument, warn};

use crate::config::ControllerConfig;
use crate::error::ControllerError;
use crate::session::{Session, SessionSnapshot, SessionState};

/// Drives one editing session: step edits, load, save, publish and test.
///
/// Edits are applied synchronously to in-memory state and mark the session
/// dirty. Store round trips are bounded by
/// [`ControllerConfig::persistence_timeout`]. At most one load, save,
/// publish, unpublish or delete runs at a time; another one is rejected
/// with [`ControllerError::SaveInProgress`].
pub struct FlowController {
  store: Arc<dyn FlowStore>,
  credentials: Arc<dyn CredentialStore>,
  catalog: Arc<dyn IntegrationCatalog>,
  validator: Validator,
  ids: Arc<dyn IdProvider>,
  runner: TestRunner,
  config: ControllerConfig,
  session: Mutex<Session>,
  save_gate: tokio::sync::Mutex<()>,
}

/// What a save works from, captured before the store call.
struct SaveInput {
  flow_id: Option<String>,
  draft: FlowDraft,
  revision: u64,
}

impl FlowController {
  pub fn new(
    store: Arc<dyn FlowStore>,
    credentials: Arc<dyn CredentialStore>,
    catalog: Arc<dyn IntegrationCatalog>,
  ) -> Self {
    let config = ControllerConfig::default();
    Self {
      store,
      credentials,
      catalog,
      validator: Validator::new(),
      ids: Arc::new(UuidIds),
      runner: TestRunner::new(Arc::new(ValidatingExecutor::default())),
      session: Mutex::new(Session::new(config.default_display_name.clone())),
      config,
      save_gate: tokio::sync::Mutex::new(()),
    }
  }

  pub fn with_config(mut self, config: ControllerConfig) -> Self {
    {
      let session = self.session.get_mut().unwrap_or_else(PoisonError::into_inner);
      if session.flow_id.is_none() && !session.dirty {
        session.display_name = config.default_display_name.clone();
      }
    }
    self.config = config;
    self
  }

  pub fn with_ids(mut self, ids: Arc<dyn IdProvider>) -> Self {
    self.ids = ids;
    self
  }

  pub fn with_validator(mut self, validator: Validator) -> Self {
    self.validator = validator;
    self
  }

  pub fn with_executor(self, executor: Arc<dyn StepExecutor>) -> Self {
    self.with_runner(TestRunner::new(executor))
  }

  pub fn with_runner(mut self, runner: TestRunner) -> Self {
    self.runner = runner;
    self
  }

  pub fn state(&self) -> SessionState {
    self.session().state
  }

  pub fn is_dirty(&self) -> bool {
    self.session().dirty
  }

  /// Whether a load, save or publish is running.
  pub fn is_saving(&self) -> bool {
    self.save_gate.try_lock().is_err()
  }

  pub fn flow_id(&self) -> Option<String> {
    self.session().flow_id.clone()
  }

  pub fn status(&self) -> FlowStatus {
    self.session().status
  }

  pub fn display_name(&self) -> String {
    self.session().display_name.clone()
  }

  pub fn description(&self) -> Option<String> {
    self.session().description.clone()
  }

  pub fn steps(&self) -> StepList {
    self.session().steps.clone()
  }

  /// Message of the last failed load, save, publish, delete or test.
  pub fn last_error(&self) -> Option<String> {
    self.session().last_error.clone()
  }

  pub fn snapshot(&self) -> SessionSnapshot {
    SessionSnapshot::from(&*self.session())
  }

  /// Choose the trigger, replacing any existing steps. Returns the new
  /// step's id.
  pub fn set_trigger(&self, integration_id: &str) -> Result<String, ControllerError> {
    let trigger = self.integration(IntegrationKind::Trigger, integration_id)?;
    let mut session = self.session();
    let steps = reduce(&session.steps, Command::SetTrigger { trigger }, self.ids.as_ref())?;
    let step_id = first_new_step(&session.steps, &steps);

    let was_fresh = matches!(
      session.state,
      SessionState::Empty | SessionState::TriggerChosen
    ) && session.flow_id.is_none();
    session.steps = steps;
    session.touch();
    if was_fresh {
      session.state = SessionState::TriggerChosen;
    }

    info!(integration_id, step_id = %step_id, "trigger_set");
    Ok(step_id)
  }

  /// Add an action after `after`, or at the end. Returns the new step's id.
  pub fn add_action(
    &self,
    integration_id: &str,
    after: Option<&str>,
  ) -> Result<String, ControllerError> {
    let action = self.integration(IntegrationKind::Action, integration_id)?;
    let command = Command::AddAction {
      action,
      after: after.map(str::to_string),
    };
    let mut session = self.session();
    let steps = reduce(&session.steps, command, self.ids.as_ref())?;
    let step_id = first_new_step(&session.steps, &steps);

    session.steps = steps;
    session.touch();
    info!(integration_id, step_id = %step_id, "action_added");
    Ok(step_id)
  }

  /// Merge `update` into a step. The caller supplies `is_valid` along with
  /// any config change; see [`FlowController::configure_step`].
  pub fn update_step(&self, step_id: &str, update: StepUpdate) -> Result<(), ControllerError> {
    self.edit(Command::UpdateStep {
      step_id: step_id.to_string(),
      update,
    })
  }

  /// Replace a step's config and record whether it now validates.
  pub fn configure_step(&self, step_id: &str, config: Config) -> Result<bool, ControllerError> {
    let integration_id = self
      .session()
      .steps
      .get(step_id)
      .map(|s| s.integration_id.clone())
      .ok_or_else(|| EditorError::StepNotFound {
        step_id: step_id.to_string(),
      })?;

    let is_valid = self.validator.validate(&integration_id, &config);
    self.update_step(step_id, StepUpdate::config(config, is_valid))?;
    Ok(is_valid)
  }

  /// Set or clear the credential a step uses.
  pub fn attach_credential(
    &self,
    step_id: &str,
    credential_id: Option<String>,
  ) -> Result<(), ControllerError> {
    self.update_step(step_id, StepUpdate::credential(credential_id))
  }

  /// Flip a step's expanded flag. This is view state and leaves the
  /// session clean.
  pub fn toggle_expanded(&self, step_id: &str) -> Result<bool, ControllerError> {
    let mut session = self.session();
    let expanded = session
      .steps
      .get(step_id)
      .map(|s| !s.is_expanded)
      .ok_or_else(|| EditorError::StepNotFound {
        step_id: step_id.to_string(),
      })?;

    session.steps = session
      .steps
      .update_step(step_id, StepUpdate::expanded(expanded))?;
    Ok(expanded)
  }

  pub fn delete_step(&self, step_id: &str) -> Result<(), ControllerError> {
    self.edit(Command::DeleteStep {
      step_id: step_id.to_string(),
    })
  }

  pub fn rename(&self, display_name: impl Into<String>) {
    let mut session = self.session();
    session.display_name = display_name.into();
    session.touch();
  }

  pub fn set_description(&self, description: Option<String>) {
    let mut session = self.session();
    session.description = description.filter(|d| !d.trim().is_empty());
    session.touch();
  }

  /// Recompute `is_valid` for every step. Marks the session dirty only if
  /// a flag changed. Returns the ids of steps that are still invalid.
  pub fn revalidate_all(&self) -> Vec<String> {
    let mut session = self.session();
    let steps = session.steps.revalidate(&self.validator);
    let invalid = steps.invalid_steps().map(|s| s.id.clone()).collect();

    if steps != session.steps {
      session.steps = steps;
      session.touch();
    }
    invalid
  }

  /// Replace the session with the stored flow `flow_id`.
  ///
  /// A missing flow resets the session to empty. Any other failure leaves
  /// the session as it was. Rejected while a save or publish is running.
  #[instrument(name = "flow_load", skip(self), fields(flow_id = %flow_id))]
  pub async fn load(&self, flow_id: &str) -> Result<(), ControllerError> {
    let _gate = self
      .save_gate
      .try_lock()
      .map_err(|_| ControllerError::SaveInProgress)?;

    let result = self
      .persist("load", self.store.get_flow(flow_id))
      .await
      .map_err(|e| match e {
        ControllerError::Persistence(StoreError::NotFound(_)) => ControllerError::NotFound {
          flow_id: flow_id.to_string(),
        },
        other => other,
      });

    let flow = match result {
      Ok(flow) => flow,
      Err(e) => {
        if matches!(e, ControllerError::NotFound { .. }) {
          let mut session = self.session();
          *session = Session::new(self.config.default_display_name.clone());
        }
        return Err(self.fail(e));
      }
    };

    let steps = to_steps(&flow, self.catalog.as_ref(), self.ids.as_ref());
    info!(steps = steps.len(), status = flow.status.as_str(), "flow_loaded");

    let mut session = self.session();
    let revision = session.revision + 1;
    *session = Session {
      flow_id: Some(flow.id.clone()),
      status: flow.status,
      display_name: flow.version.display_name,
      description: flow.metadata.description,
      steps,
      state: SessionState::Editing,
      dirty: false,
      revision,
      last_error: None,
    };
    Ok(())
  }

  /// Persist the current steps, creating the flow on first save.
  ///
  /// A session without a trigger fails before the store is called. On
  /// failure the session stays dirty.
  #[instrument(name = "flow_save", skip(self))]
  pub async fn save(&self) -> Result<Flow, ControllerError> {
    let _gate = self
      .save_gate
      .try_lock()
      .map_err(|_| ControllerError::SaveInProgress)?;
    self.save_locked().await
  }

  /// Save, then activate the flow.
  ///
  /// Refuses an empty session or one with unconfigured steps. Activation is
  /// not attempted if the save fails.
  #[instrument(name = "flow_publish", skip(self))]
  pub async fn publish(&self) -> Result<Flow, ControllerError> {
    let _gate = self
      .save_gate
      .try_lock()
      .map_err(|_| ControllerError::SaveInProgress)?;

    {
      let session = self.session();
      if session.steps.is_empty() {
        drop(session);
        return Err(self.fail(ControllerError::EmptyFlow));
      }
      let step_ids: Vec<String> = session.steps.invalid_steps().map(|s| s.id.clone()).collect();
      if !step_ids.is_empty() {
        drop(session);
        warn!(invalid = step_ids.len(), "publish_blocked_by_validation");
        return Err(self.fail(ControllerError::InvalidSteps {
          count: step_ids.len(),
          step_ids,
        }));
      }
    }

    let saved = self.save_locked().await?;
    let flow = self
      .persist("publish", self.store.activate_flow(&saved.id))
      .await
      .map_err(|e| self.fail(e))?;

    let mut session = self.session();
    session.status = flow.status;
    session.last_error = None;
    session.settle();
    info!(flow_id = %flow.id, "flow_published");
    Ok(flow)
  }

  /// Deactivate the stored flow.
  #[instrument(name = "flow_unpublish", skip(self))]
  pub async fn unpublish(&self) -> Result<Flow, ControllerError> {
    let _gate = self
      .save_gate
      .try_lock()
      .map_err(|_| ControllerError::SaveInProgress)?;
    let Some(flow_id) = self.flow_id() else {
      return Err(self.fail(ControllerError::NotSaved));
    };

    let flow = self
      .persist("unpublish", self.store.deactivate_flow(&flow_id))
      .await
      .map_err(|e| self.fail(e))?;

    let mut session = self.session();
    session.status = flow.status;
    session.last_error = None;
    session.settle();
    info!(flow_id = %flow.id, "flow_unpublished");
    Ok(flow)
  }

  /// Delete the stored flow, if any, and reset the session.
  #[instrument(name = "flow_delete", skip(self))]
  pub async fn delete(&self) -> Result<(), ControllerError> {
    let _gate = self
      .save_gate
      .try_lock()
      .map_err(|_| ControllerError::SaveInProgress)?;

    if let Some(flow_id) = self.flow_id() {
      self
        .persist("delete", self.store.delete_flow(&flow_id))
        .await
        .map_err(|e| self.fail(e))?;
      info!(flow_id = %flow_id, "flow_deleted");
    }

    let mut session = self.session();
    let revision = session.revision + 1;
    *session = Session::new(self.config.default_display_name.clone());
    session.revision = revision;
    Ok(())
  }

  /// Credentials usable with a step's integration.
  pub async fn credentials_for(&self, step_id: &str) -> Result<Vec<Credential>, ControllerError> {
    let integration_id = self
      .session()
      .steps
      .get(step_id)
      .map(|s| s.integration_id.clone())
      .ok_or_else(|| EditorError::StepNotFound {
        step_id: step_id.to_string(),
      })?;

    self
      .persist(
        "get_credentials",
        self.credentials.get_credentials(&integration_id),
      )
      .await
  }

  /// Run the current steps through the test runner.
  #[instrument(name = "flow_test", skip(self))]
  pub async fn test(&self) -> Result<TestReport, ControllerError> {
    let steps = self.steps();
    match self.runner.run(&steps).await {
      Ok(report) => {
        info!(success = report.success, "flow_tested");
        Ok(report)
      }
      Err(e) => Err(self.fail(e.into())),
    }
  }

  fn session(&self) -> MutexGuard<'_, Session> {
    self.session.lock().unwrap_or_else(PoisonError::into_inner)
  }

  fn integration(
    &self,
    kind: IntegrationKind,
    integration_id: &str,
  ) -> Result<Integration, ControllerError> {
    self
      .catalog
      .find(kind, integration_id)
      .ok_or_else(|| ControllerError::UnknownIntegration {
        integration_id: integration_id.to_string(),
      })
  }

  fn edit(&self, command: Command) -> Result<(), ControllerError> {
    let name = command.name();
    let mut session = self.session();
    let steps = reduce(&session.steps, command, self.ids.as_ref())?;
    session.steps = steps;
    session.touch();
    info!(command = name, "step_edited");
    Ok(())
  }

  /// Record `err` as the session's last error and hand it back.
  fn fail(&self, err: ControllerError) -> ControllerError {
    error!(error = %err, "controller_operation_failed");
    self.session().last_error = Some(err.to_string());
    err
  }

  /// Await a store call, bounded by the persistence timeout.
  async fn persist<T>(
    &self,
    operation: &'static str,
    call: impl Future<Output = Result<T, StoreError>>,
  ) -> Result<T, ControllerError> {
    match tokio::time::timeout(self.config.persistence_timeout, call).await {
      Ok(result) => result.map_err(ControllerError::from),
      Err(_) => Err(ControllerError::Timeout { operation }),
    }
  }

  fn save_input(&self) -> Result<SaveInput, ControllerError> {
    let session = self.session();
    let trigger = to_chain(&session.steps)?;
    Ok(SaveInput {
      flow_id: session.flow_id.clone(),
      draft: FlowDraft {
        display_name: session.display_name.clone(),
        metadata: FlowMetadata {
          description: session.description.clone(),
        },
        trigger,
      },
      revision: session.revision,
    })
  }

  /// Body of `save`; the caller holds the save gate.
  async fn save_locked(&self) -> Result<Flow, ControllerError> {
    let input = self.save_input().map_err(|e| self.fail(e))?;

    let result = match &input.flow_id {
      Some(id) => {
        self
          .persist("save", self.store.update_flow(id, &input.draft))
          .await
      }
      None => self.persist("save", self.store.create_flow(&input.draft)).await,
    };
    let flow = result.map_err(|e| self.fail(e))?;

    let mut session = self.session();
    if session.flow_id != input.flow_id {
      warn!(flow_id = %flow.id, "save_result_discarded");
      return Ok(flow);
    }
    session.flow_id = Some(flow.id.clone());
    session.status = flow.status;
    session.dirty = session.revision != input.revision;
    session.last_error = None;
    session.settle();

    info!(
      flow_id = %flow.id,
      steps = flow.version.trigger.len(),
      still_dirty = session.dirty,
      "flow_saved"
    );
    Ok(flow)
  }
}

/// Id of the first step in `after` that `before` lacks.
fn first_new_step(before: &StepList, after: &StepList) -> String {
  after
    .iter()
    .find(|s| before.get(&s.id).is_none())
    .map(|s| s.id.clone())
    .unwrap_or_default()
}
