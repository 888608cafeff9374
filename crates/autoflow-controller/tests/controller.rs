use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use autoflow_catalog::StaticCatalog;
use autoflow_controller::{ControllerConfig, ControllerError, ErrorKind, FlowController, SessionState};
use autoflow_editor::{SequentialIds, StepUpdate};
use autoflow_flow::{Flow, FlowDraft, FlowStatus};
use autoflow_store::{Credential, CredentialStore, FlowStore, MemoryStore, StoreError};
use serde_json::json;

/// Wraps a [`MemoryStore`], counting writes and optionally failing or
/// stalling them.
#[derive(Default)]
struct ScriptedStore {
  inner: MemoryStore,
  fail_writes: AtomicBool,
  delay: Option<Duration>,
  writes: AtomicUsize,
  activations: AtomicUsize,
}

impl ScriptedStore {
  fn slow(delay: Duration) -> Self {
    Self {
      delay: Some(delay),
      ..Default::default()
    }
  }

  async fn before_write(&self) -> Result<(), StoreError> {
    self.writes.fetch_add(1, Ordering::SeqCst);
    if let Some(delay) = self.delay {
      tokio::time::sleep(delay).await;
    }
    if self.fail_writes.load(Ordering::SeqCst) {
      return Err(StoreError::Unavailable("connection refused".to_string()));
    }
    Ok(())
  }
}

#[async_trait]
impl FlowStore for ScriptedStore {
  async fn list_flows(&self) -> Result<Vec<Flow>, StoreError> {
    self.inner.list_flows().await
  }

  async fn get_flow(&self, flow_id: &str) -> Result<Flow, StoreError> {
    self.inner.get_flow(flow_id).await
  }

  async fn create_flow(&self, draft: &FlowDraft) -> Result<Flow, StoreError> {
    self.before_write().await?;
    self.inner.create_flow(draft).await
  }

  async fn update_flow(&self, flow_id: &str, draft: &FlowDraft) -> Result<Flow, StoreError> {
    self.before_write().await?;
    self.inner.update_flow(flow_id, draft).await
  }

  async fn delete_flow(&self, flow_id: &str) -> Result<(), StoreError> {
    self.before_write().await?;
    self.inner.delete_flow(flow_id).await
  }

  async fn activate_flow(&self, flow_id: &str) -> Result<Flow, StoreError> {
    self.activations.fetch_add(1, Ordering::SeqCst);
    self.inner.activate_flow(flow_id).await
  }

  async fn deactivate_flow(&self, flow_id: &str) -> Result<Flow, StoreError> {
    self.inner.deactivate_flow(flow_id).await
  }
}

#[async_trait]
impl CredentialStore for ScriptedStore {
  async fn get_credentials(&self, integration_id: &str) -> Result<Vec<Credential>, StoreError> {
    self.inner.get_credentials(integration_id).await
  }

  async fn add_credential(&self, credential: &Credential) -> Result<(), StoreError> {
    self.inner.add_credential(credential).await
  }
}

fn controller(store: Arc<ScriptedStore>) -> FlowController {
  FlowController::new(
    store.clone(),
    store,
    Arc::new(StaticCatalog::builtin()),
  )
  .with_ids(Arc::new(SequentialIds::new()))
}

fn config(value: serde_json::Value) -> autoflow_validator::Config {
  value.as_object().cloned().unwrap()
}

/// Schedule trigger plus a configured email action, both valid.
fn build_valid_flow(controller: &FlowController) -> (String, String) {
  let trigger = controller.set_trigger("schedule").unwrap();
  controller
    .configure_step(&trigger, config(json!({"scheduleType": "daily"})))
    .unwrap();
  let email = controller.add_action("email", None).unwrap();
  controller
    .configure_step(
      &email,
      config(json!({"to": "ops@example.com", "subject": "Daily", "body": "Report"})),
    )
    .unwrap();
  (trigger, email)
}

#[tokio::test]
async fn test_lifecycle_states() {
  let store = Arc::new(ScriptedStore::default());
  let controller = controller(store.clone());
  assert_eq!(controller.state(), SessionState::Empty);
  assert!(!controller.is_dirty());

  let trigger = controller.set_trigger("schedule").unwrap();
  assert_eq!(controller.state(), SessionState::TriggerChosen);

  controller
    .configure_step(&trigger, config(json!({"scheduleType": "daily"})))
    .unwrap();
  assert_eq!(controller.state(), SessionState::Editing);

  let flow = controller.save().await.unwrap();
  assert_eq!(controller.state(), SessionState::Saved);
  assert_eq!(controller.flow_id().as_deref(), Some(flow.id.as_str()));
  assert_eq!(flow.display_name(), "Untitled Automation");

  controller.publish().await.unwrap();
  assert_eq!(controller.state(), SessionState::Published);
  assert_eq!(controller.status(), FlowStatus::Enabled);

  controller.unpublish().await.unwrap();
  assert_eq!(controller.state(), SessionState::Saved);
  assert_eq!(controller.status(), FlowStatus::Disabled);
}

#[tokio::test]
async fn test_every_edit_marks_dirty() {
  let store = Arc::new(ScriptedStore::default());
  let controller = controller(store);

  controller.set_trigger("webhook").unwrap();
  assert!(controller.is_dirty());
  controller.save().await.unwrap();
  assert!(!controller.is_dirty());

  let action = controller.add_action("email", None).unwrap();
  assert!(controller.is_dirty());
  controller.save().await.unwrap();

  controller
    .update_step(&action, StepUpdate::expanded(false))
    .unwrap();
  assert!(controller.is_dirty());
  controller.save().await.unwrap();

  controller.delete_step(&action).unwrap();
  assert!(controller.is_dirty());
  controller.save().await.unwrap();
  assert!(!controller.is_dirty());

  controller.rename("Inbound hook");
  assert!(controller.is_dirty());
}

#[tokio::test]
async fn test_toggle_expanded_keeps_session_clean() {
  let store = Arc::new(ScriptedStore::default());
  let controller = controller(store);
  let trigger = controller.set_trigger("webhook").unwrap();
  controller.save().await.unwrap();

  assert!(!controller.toggle_expanded(&trigger).unwrap());
  assert!(!controller.is_dirty());
  assert!(!controller.steps()[0].is_expanded);
}

#[tokio::test]
async fn test_save_without_trigger_fails_before_store() {
  let store = Arc::new(ScriptedStore::default());
  let controller = controller(store.clone());
  controller.rename("Nothing yet");

  let err = controller.save().await.unwrap_err();
  assert_eq!(err.kind(), ErrorKind::Structural);
  assert_eq!(store.writes.load(Ordering::SeqCst), 0);
  assert!(controller.is_dirty());
  assert!(controller.last_error().is_some());
}

#[tokio::test]
async fn test_publish_saves_first() {
  let store = Arc::new(ScriptedStore::default());
  let controller = controller(store.clone());
  build_valid_flow(&controller);
  assert!(controller.flow_id().is_none());

  let flow = controller.publish().await.unwrap();
  assert!(flow.is_published());
  assert_eq!(store.writes.load(Ordering::SeqCst), 1);
  assert_eq!(store.activations.load(Ordering::SeqCst), 1);

  let stored = store.get_flow(&flow.id).await.unwrap();
  assert_eq!(stored.version.trigger.len(), 2);
  assert!(stored.is_published());
}

#[tokio::test]
async fn test_publish_empty_flow_rejected() {
  let store = Arc::new(ScriptedStore::default());
  let controller = controller(store.clone());

  let err = controller.publish().await.unwrap_err();
  assert!(matches!(err, ControllerError::EmptyFlow));
  assert_eq!(store.writes.load(Ordering::SeqCst), 0);
  assert_eq!(store.activations.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_publish_with_invalid_step_rejected() {
  let store = Arc::new(ScriptedStore::default());
  let controller = controller(store.clone());
  build_valid_flow(&controller);
  let slack = controller.add_action("slack_action", None).unwrap();

  let err = controller.publish().await.unwrap_err();
  assert_eq!(err.kind(), ErrorKind::Validation);
  match err {
    ControllerError::InvalidSteps { count, step_ids } => {
      assert_eq!(count, 1);
      assert_eq!(step_ids, vec![slack]);
    }
    other => panic!("unexpected error: {other}"),
  }
  assert_eq!(store.activations.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_publish_does_not_activate_when_save_fails() {
  let store = Arc::new(ScriptedStore::default());
  let controller = controller(store.clone());
  build_valid_flow(&controller);
  store.fail_writes.store(true, Ordering::SeqCst);

  let err = controller.publish().await.unwrap_err();
  assert_eq!(err.kind(), ErrorKind::Persistence);
  assert_eq!(store.activations.load(Ordering::SeqCst), 0);
  assert!(controller.is_dirty());
}

#[tokio::test]
async fn test_failed_save_keeps_steps_and_dirty_flag() {
  let store = Arc::new(ScriptedStore::default());
  let controller = controller(store.clone());
  build_valid_flow(&controller);
  let before = controller.steps();

  store.fail_writes.store(true, Ordering::SeqCst);
  let err = controller.save().await.unwrap_err();
  assert!(matches!(
    err,
    ControllerError::Persistence(StoreError::Unavailable(_))
  ));
  assert!(controller.is_dirty());
  assert_eq!(controller.steps(), before);
  assert!(controller.last_error().unwrap().contains("connection refused"));

  // Retrying is just saving again.
  store.fail_writes.store(false, Ordering::SeqCst);
  controller.save().await.unwrap();
  assert!(!controller.is_dirty());
  assert!(controller.last_error().is_none());
}

#[tokio::test]
async fn test_load_round_trip() {
  let store = Arc::new(ScriptedStore::default());
  let author = controller(store.clone());
  build_valid_flow(&author);
  author.rename("Daily report");
  author.set_description(Some("Mails the ops team".to_string()));
  let slack = author.add_action("slack_action", None).unwrap();
  author.attach_credential(&slack, Some("cred-slack".to_string())).unwrap();
  let flow = author.save().await.unwrap();

  let reader = controller(store);
  reader.load(&flow.id).await.unwrap();
  assert_eq!(reader.state(), SessionState::Editing);
  assert!(!reader.is_dirty());
  assert_eq!(reader.display_name(), "Daily report");
  assert_eq!(reader.description().as_deref(), Some("Mails the ops team"));

  let original = author.steps();
  let loaded = reader.steps();
  assert_eq!(loaded.len(), original.len());
  for (a, b) in original.iter().zip(loaded.iter()) {
    assert_eq!(a.integration_id, b.integration_id);
    assert_eq!(a.config, b.config);
    assert_eq!(a.credential_id, b.credential_id);
    assert_eq!(a.is_valid, b.is_valid);
    assert!(!b.is_expanded);
  }
}

#[tokio::test]
async fn test_load_missing_flow_resets_to_empty() {
  let store = Arc::new(ScriptedStore::default());
  let controller = controller(store);
  controller.set_trigger("webhook").unwrap();

  let err = controller.load("flow-missing").await.unwrap_err();
  assert!(matches!(err, ControllerError::NotFound { .. }));
  assert_eq!(err.kind(), ErrorKind::NotFound);
  assert_eq!(controller.state(), SessionState::Empty);
  assert!(controller.steps().is_empty());
  assert!(controller.last_error().is_some());
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_save_rejected() {
  let store = Arc::new(ScriptedStore::slow(Duration::from_millis(200)));
  let controller = controller(store.clone());
  controller.set_trigger("webhook").unwrap();

  let (first, second) = tokio::join!(controller.save(), controller.save());
  assert!(first.is_ok());
  assert!(matches!(second, Err(ControllerError::SaveInProgress)));
  assert_eq!(store.writes.load(Ordering::SeqCst), 1);
  assert!(!controller.is_saving());
}

#[tokio::test(start_paused = true)]
async fn test_edit_during_save_stays_dirty() {
  let store = Arc::new(ScriptedStore::slow(Duration::from_millis(200)));
  let controller = controller(store);
  controller.set_trigger("webhook").unwrap();

  let (saved, _) = tokio::join!(controller.save(), async {
    controller.rename("Renamed mid-save");
  });
  let saved = saved.unwrap();

  assert_eq!(saved.display_name(), "Untitled Automation");
  assert!(controller.is_dirty());
  assert_eq!(controller.state(), SessionState::Editing);
}

#[tokio::test(start_paused = true)]
async fn test_load_during_save_rejected() {
  let store = Arc::new(ScriptedStore::slow(Duration::from_millis(200)));
  let author = controller(store.clone());
  author.set_trigger("webhook").unwrap();
  author.rename("Other");
  let other = author.save().await.unwrap();

  let controller = controller(store.clone());
  controller.set_trigger("schedule").unwrap();
  controller.rename("Mine");

  let (saved, loaded) = tokio::join!(controller.save(), controller.load(&other.id));
  let saved = saved.unwrap();
  assert!(matches!(loaded, Err(ControllerError::SaveInProgress)));
  assert_eq!(controller.flow_id().as_deref(), Some(saved.id.as_str()));
  assert_eq!(controller.display_name(), "Mine");
  assert!(!controller.is_dirty());

  controller.save().await.unwrap();
  let untouched = store.get_flow(&other.id).await.unwrap();
  assert_eq!(untouched.display_name(), "Other");
  assert_eq!(store.get_flow(&saved.id).await.unwrap().display_name(), "Mine");
}

#[tokio::test(start_paused = true)]
async fn test_save_timeout() {
  let store = Arc::new(ScriptedStore::slow(Duration::from_secs(120)));
  let controller = controller(store).with_config(ControllerConfig {
    persistence_timeout: Duration::from_secs(5),
    ..Default::default()
  });
  controller.set_trigger("webhook").unwrap();

  let err = controller.save().await.unwrap_err();
  assert!(matches!(err, ControllerError::Timeout { operation: "save" }));
  assert!(controller.is_dirty());
  assert!(!controller.is_saving());
}

#[tokio::test]
async fn test_configure_step_validates() {
  let store = Arc::new(ScriptedStore::default());
  let controller = controller(store);
  controller.set_trigger("webhook").unwrap();
  let slack = controller.add_action("slack_action", None).unwrap();

  assert!(!controller
    .configure_step(&slack, config(json!({"action": "send_message"})))
    .unwrap());
  assert!(controller
    .configure_step(&slack, config(json!({"action": "send_message", "userId": "U1"})))
    .unwrap());
  assert!(controller.steps()[1].is_valid);

  let err = controller.configure_step("nope", config(json!({}))).unwrap_err();
  assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_revalidate_all_reports_invalid_steps() {
  let store = Arc::new(ScriptedStore::default());
  let controller = controller(store);
  let trigger = controller.set_trigger("schedule").unwrap();
  let email = controller.add_action("email", None).unwrap();
  controller
    .update_step(
      &trigger,
      StepUpdate {
        config: Some(config(json!({"scheduleType": "hourly"}))),
        ..Default::default()
      },
    )
    .unwrap();

  assert!(!controller.steps()[0].is_valid);
  let invalid = controller.revalidate_all();
  assert_eq!(invalid, vec![email]);
  assert!(controller.steps()[0].is_valid);
}

#[tokio::test]
async fn test_unknown_integration() {
  let store = Arc::new(ScriptedStore::default());
  let controller = controller(store);
  let err = controller.set_trigger("carrier_pigeon").unwrap_err();
  assert_eq!(err.kind(), ErrorKind::NotFound);
  assert_eq!(controller.state(), SessionState::Empty);

  // Triggers are not offered as actions.
  controller.set_trigger("webhook").unwrap();
  assert!(matches!(
    controller.add_action("schedule", None),
    Err(ControllerError::UnknownIntegration { .. })
  ));
}

#[tokio::test]
async fn test_credentials_for_step() {
  let store = Arc::new(ScriptedStore::default());
  store
    .add_credential(&Credential::new("cred-1", "slack_action", "Sales"))
    .await
    .unwrap();
  let controller = controller(store);
  controller.set_trigger("webhook").unwrap();
  let slack = controller.add_action("slack_action", None).unwrap();

  let credentials = controller.credentials_for(&slack).await.unwrap();
  assert_eq!(credentials.len(), 1);
  controller
    .attach_credential(&slack, Some(credentials[0].id.clone()))
    .unwrap();
  assert_eq!(controller.steps()[1].credential_id.as_deref(), Some("cred-1"));
}

#[tokio::test]
async fn test_delete_resets_session() {
  let store = Arc::new(ScriptedStore::default());
  let controller = controller(store.clone());
  build_valid_flow(&controller);
  let flow = controller.save().await.unwrap();

  controller.delete().await.unwrap();
  assert_eq!(controller.state(), SessionState::Empty);
  assert!(controller.flow_id().is_none());
  assert!(!controller.is_dirty());
  assert!(matches!(
    store.get_flow(&flow.id).await,
    Err(StoreError::NotFound(_))
  ));
}

#[tokio::test]
async fn test_unpublish_requires_saved_flow() {
  let store = Arc::new(ScriptedStore::default());
  let controller = controller(store);
  controller.set_trigger("webhook").unwrap();
  assert!(matches!(
    controller.unpublish().await,
    Err(ControllerError::NotSaved)
  ));
  assert!(controller.last_error().is_some());
}

#[tokio::test]
async fn test_dry_run() {
  let store = Arc::new(ScriptedStore::default());
  let controller = controller(store);
  build_valid_flow(&controller);
  controller.add_action("sms", None).unwrap();

  let report = controller.test().await.unwrap();
  assert!(!report.success);
  assert_eq!(report.steps.len(), 2);
  assert_eq!(report.failed_step.unwrap().display_name, "Send SMS");

  let empty = controller_empty_test().await;
  assert_eq!(empty.kind(), ErrorKind::Structural);
}

async fn controller_empty_test() -> ControllerError {
  let controller = controller(Arc::new(ScriptedStore::default()));
  controller.test().await.unwrap_err()
}
