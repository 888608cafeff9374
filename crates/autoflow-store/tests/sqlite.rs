use autoflow_flow::{Chain, ChainNode, Flow, FlowDraft, FlowMetadata, FlowStatus, NodeSettings, NodeType};
use autoflow_store::{Credential, CredentialStore, FlowStore, SqliteStore, StoreError};
use serde_json::json;
use sqlx::sqlite::SqlitePoolOptions;

async fn store() -> SqliteStore {
  // One connection, so every query sees the same in-memory database.
  let pool = SqlitePoolOptions::new()
    .max_connections(1)
    .connect("sqlite::memory:")
    .await
    .unwrap();
  let store = SqliteStore::new(pool);
  store.migrate().await.unwrap();
  store
}

fn draft(display_name: &str) -> FlowDraft {
  serde_json::from_value(json!({
    "displayName": display_name,
    "metadata": { "description": "Notify sales" },
    "trigger": {
      "name": "salesforce_trigger",
      "displayName": "Salesforce",
      "valid": true,
      "type": "PIECE_TRIGGER",
      "settings": {
        "pieceName": "salesforce",
        "triggerName": "salesforce_trigger",
        "input": { "object": "Lead", "event": "new_lead" }
      },
      "nextAction": {
        "name": "slack_action",
        "displayName": "Slack",
        "valid": true,
        "type": "PIECE_ACTION",
        "settings": {
          "pieceName": "slack",
          "actionName": "slack_action",
          "input": { "action": "send_message", "channel": "#sales" },
          "credentialId": "cred-slack"
        },
        "nextAction": null
      }
    }
  }))
  .unwrap()
}

#[tokio::test]
async fn test_create_and_get_flow() {
  let store = store().await;
  let created = store.create_flow(&draft("Lead alert")).await.unwrap();
  assert_eq!(created.status, FlowStatus::Disabled);

  let fetched: Flow = store.get_flow(&created.id).await.unwrap();
  assert_eq!(fetched, created);
  assert_eq!(fetched.description(), Some("Notify sales"));
  assert_eq!(fetched.version.trigger.len(), 2);
}

#[tokio::test]
async fn test_update_flow() {
  let store = store().await;
  let created = store.create_flow(&draft("Lead alert")).await.unwrap();

  let updated = store
    .update_flow(&created.id, &draft("Lead alert v2"))
    .await
    .unwrap();
  assert_eq!(updated.id, created.id);
  assert_eq!(updated.display_name(), "Lead alert v2");

  let missing = store.update_flow("flow-missing", &draft("x")).await;
  assert!(matches!(missing, Err(StoreError::NotFound(_))));
}

#[tokio::test]
async fn test_activate_and_deactivate() {
  let store = store().await;
  let created = store.create_flow(&draft("Lead alert")).await.unwrap();

  let active = store.activate_flow(&created.id).await.unwrap();
  assert!(active.is_published());

  // Updating content does not unpublish.
  let updated = store.update_flow(&created.id, &draft("Renamed")).await.unwrap();
  assert!(updated.is_published());

  let inactive = store.deactivate_flow(&created.id).await.unwrap();
  assert_eq!(inactive.status, FlowStatus::Disabled);
}

#[tokio::test]
async fn test_list_and_delete() {
  let store = store().await;
  let first = store.create_flow(&draft("first")).await.unwrap();
  let second = store.create_flow(&draft("second")).await.unwrap();

  let ids: Vec<_> = store
    .list_flows()
    .await
    .unwrap()
    .into_iter()
    .map(|f| f.id)
    .collect();
  assert_eq!(ids, vec![first.id.clone(), second.id.clone()]);

  store.delete_flow(&first.id).await.unwrap();
  assert!(matches!(
    store.get_flow(&first.id).await,
    Err(StoreError::NotFound(_))
  ));
  assert!(matches!(
    store.delete_flow(&first.id).await,
    Err(StoreError::NotFound(_))
  ));
  assert_eq!(store.list_flows().await.unwrap().len(), 1);
}

fn long_draft(actions: usize) -> FlowDraft {
  let node = |i: usize, node_type: NodeType| ChainNode {
    name: format!("step_{i}"),
    display_name: format!("Step {i}"),
    valid: true,
    node_type,
    settings: NodeSettings {
      piece_name: "delay".to_string(),
      step_name: "delay".to_string(),
      input: json!({ "duration": i }).as_object().cloned().unwrap(),
      credential_id: None,
    },
  };
  let mut nodes = vec![node(0, NodeType::PieceTrigger)];
  nodes.extend((1..=actions).map(|i| node(i, NodeType::PieceAction)));

  FlowDraft {
    display_name: "Long".to_string(),
    metadata: FlowMetadata::default(),
    trigger: Chain::new(nodes).unwrap(),
  }
}

#[tokio::test]
async fn test_long_chain_reads_back() {
  let store = store().await;
  let short = store.create_flow(&draft("Lead alert")).await.unwrap();
  let long = store.create_flow(&long_draft(300)).await.unwrap();

  let fetched = store.get_flow(&long.id).await.unwrap();
  assert_eq!(fetched.version.trigger.len(), 301);
  assert_eq!(fetched, long);
  let last = fetched.version.trigger.actions().last().unwrap();
  assert_eq!(last.name, "step_300");

  let updated = store.update_flow(&short.id, &long_draft(200)).await.unwrap();
  assert_eq!(updated.version.trigger.len(), 201);
  assert_eq!(store.list_flows().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_credentials() {
  let store = store().await;
  store
    .add_credential(&Credential::new("cred-slack", "slack_action", "Sales workspace"))
    .await
    .unwrap();
  store
    .add_credential(&Credential::new("cred-sf", "salesforce_trigger", "Prod org"))
    .await
    .unwrap();

  let slack = store.get_credentials("slack_action").await.unwrap();
  assert_eq!(slack.len(), 1);
  assert_eq!(slack[0].name, "Sales workspace");
  assert!(store.get_credentials("email").await.unwrap().is_empty());
}
