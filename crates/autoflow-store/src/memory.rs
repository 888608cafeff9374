use async_trait::async_trait;
use autoflow_flow::{Flow, FlowDraft, FlowStatus};
use tokio::sync::RwLock;

use crate::{Credential, CredentialStore, FlowStore, StoreError, new_flow_id};

/// In-process store backed by vectors, keeping insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
  flows: RwLock<Vec<Flow>>,
  credentials: RwLock<Vec<Credential>>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  async fn set_status(&self, flow_id: &str, status: FlowStatus) -> Result<Flow, StoreError> {
    let mut flows = self.flows.write().await;
    let flow = flows
      .iter_mut()
      .find(|f| f.id == flow_id)
      .ok_or_else(|| StoreError::NotFound(flow_id.to_string()))?;
    flow.status = status;
    Ok(flow.clone())
  }
}

#[async_trait]
impl FlowStore for MemoryStore {
  async fn list_flows(&self) -> Result<Vec<Flow>, StoreError> {
    Ok(self.flows.read().await.clone())
  }

  async fn get_flow(&self, flow_id: &str) -> Result<Flow, StoreError> {
    self
      .flows
      .read()
      .await
      .iter()
      .find(|f| f.id == flow_id)
      .cloned()
      .ok_or_else(|| StoreError::NotFound(flow_id.to_string()))
  }

  async fn create_flow(&self, draft: &FlowDraft) -> Result<Flow, StoreError> {
    let flow = draft.clone().into_flow(new_flow_id(), FlowStatus::Disabled);
    self.flows.write().await.push(flow.clone());
    Ok(flow)
  }

  async fn update_flow(&self, flow_id: &str, draft: &FlowDraft) -> Result<Flow, StoreError> {
    let mut flows = self.flows.write().await;
    let existing = flows
      .iter_mut()
      .find(|f| f.id == flow_id)
      .ok_or_else(|| StoreError::NotFound(flow_id.to_string()))?;
    *existing = draft.clone().into_flow(flow_id, existing.status);
    Ok(existing.clone())
  }

  async fn delete_flow(&self, flow_id: &str) -> Result<(), StoreError> {
    let mut flows = self.flows.write().await;
    let before = flows.len();
    flows.retain(|f| f.id != flow_id);
    if flows.len() == before {
      return Err(StoreError::NotFound(flow_id.to_string()));
    }
    Ok(())
  }

  async fn activate_flow(&self, flow_id: &str) -> Result<Flow, StoreError> {
    self.set_status(flow_id, FlowStatus::Enabled).await
  }

  async fn deactivate_flow(&self, flow_id: &str) -> Result<Flow, StoreError> {
    self.set_status(flow_id, FlowStatus::Disabled).await
  }
}

#[async_trait]
impl CredentialStore for MemoryStore {
  async fn get_credentials(&self, integration_id: &str) -> Result<Vec<Credential>, StoreError> {
    Ok(
      self
        .credentials
        .read()
        .await
        .iter()
        .filter(|c| c.integration_id == integration_id)
        .cloned()
        .collect(),
    )
  }

  async fn add_credential(&self, credential: &Credential) -> Result<(), StoreError> {
    self.credentials.write().await.push(credential.clone());
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use autoflow_flow::{Chain, ChainNode, FlowMetadata, NodeSettings, NodeType};

  fn draft(name: &str) -> FlowDraft {
    let trigger = ChainNode {
      name: "webhook".to_string(),
      display_name: "Webhook".to_string(),
      valid: true,
      node_type: NodeType::PieceTrigger,
      settings: NodeSettings {
        piece_name: "webhook".to_string(),
        step_name: "webhook".to_string(),
        input: Default::default(),
        credential_id: None,
      },
    };
    FlowDraft {
      display_name: name.to_string(),
      metadata: FlowMetadata::default(),
      trigger: Chain::new(vec![trigger]).unwrap(),
    }
  }

  #[tokio::test]
  async fn test_create_update_keeps_status() {
    let store = MemoryStore::new();
    let flow = store.create_flow(&draft("one")).await.unwrap();
    assert_eq!(flow.status, FlowStatus::Disabled);

    store.activate_flow(&flow.id).await.unwrap();
    let updated = store.update_flow(&flow.id, &draft("renamed")).await.unwrap();
    assert_eq!(updated.display_name(), "renamed");
    assert_eq!(updated.status, FlowStatus::Enabled);
  }

  #[tokio::test]
  async fn test_missing_flow() {
    let store = MemoryStore::new();
    assert!(matches!(
      store.get_flow("nope").await,
      Err(StoreError::NotFound(_))
    ));
    assert!(matches!(
      store.delete_flow("nope").await,
      Err(StoreError::NotFound(_))
    ));
  }

  #[tokio::test]
  async fn test_credentials_by_integration() {
    let store = MemoryStore::new();
    store
      .add_credential(&Credential::new("c1", "slack_action", "Team Slack"))
      .await
      .unwrap();
    store
      .add_credential(&Credential::new("c2", "email", "SMTP"))
      .await
      .unwrap();

    let found = store.get_credentials("slack_action").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "c1");
  }
}
