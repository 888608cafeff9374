use serde::{Deserialize, Serialize};

use crate::chain::Chain;
use crate::error::FlowError;

/// Persistence state of a flow: draft (`DISABLED`) or published (`ENABLED`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FlowStatus {
  Enabled,
  #[default]
  Disabled,
}

impl FlowStatus {
  pub fn as_str(&self) -> &'static str {
    match self {
      FlowStatus::Enabled => "ENABLED",
      FlowStatus::Disabled => "DISABLED",
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowMetadata {
  #[serde(default)]
  pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowVersion {
  pub display_name: String,
  pub trigger: Chain,
}

/// A persisted automation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flow {
  pub id: String,
  #[serde(default)]
  pub status: FlowStatus,
  pub version: FlowVersion,
  #[serde(default)]
  pub metadata: FlowMetadata,
}

impl Flow {
  /// Decode a flow from its JSON document.
  pub fn from_json(content: &str) -> Result<Self, FlowError> {
    Ok(serde_json::from_str(content)?)
  }

  pub fn display_name(&self) -> &str {
    &self.version.display_name
  }

  pub fn description(&self) -> Option<&str> {
    self.metadata.description.as_deref()
  }

  pub fn is_published(&self) -> bool {
    self.status == FlowStatus::Enabled
  }
}

/// Body of a create or update request: everything but the id and status,
/// which the store owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowDraft {
  pub display_name: String,
  #[serde(default)]
  pub metadata: FlowMetadata,
  pub trigger: Chain,
}

impl FlowDraft {
  /// Materialize a stored flow from this draft.
  pub fn into_flow(self, id: impl Into<String>, status: FlowStatus) -> Flow {
    Flow {
      id: id.into(),
      status,
      version: FlowVersion {
        display_name: self.display_name,
        trigger: self.trigger,
      },
      metadata: self.metadata,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn document() -> serde_json::Value {
    json!({
      "id": "flow-1",
      "status": "ENABLED",
      "version": {
        "displayName": "New lead alert",
        "trigger": {
          "name": "salesforce_trigger",
          "displayName": "Salesforce",
          "valid": true,
          "type": "PIECE_TRIGGER",
          "settings": {
            "pieceName": "salesforce",
            "triggerName": "salesforce_trigger",
            "input": { "object": "Lead", "event": "new_lead" },
            "credentialId": "cred-sf"
          },
          "nextAction": {
            "name": "email",
            "displayName": "Send Email",
            "valid": true,
            "type": "PIECE_ACTION",
            "settings": {
              "pieceName": "email",
              "actionName": "email",
              "input": { "to": "a@b.com", "subject": "x", "body": "y" },
              "credentialId": null
            },
            "nextAction": null
          }
        }
      },
      "metadata": { "description": "ping sales" }
    })
  }

  #[test]
  fn test_parse_document() {
    let flow: Flow = serde_json::from_value(document()).unwrap();
    assert_eq!(flow.id, "flow-1");
    assert!(flow.is_published());
    assert_eq!(flow.display_name(), "New lead alert");
    assert_eq!(flow.description(), Some("ping sales"));
    assert_eq!(flow.version.trigger.len(), 2);
  }

  #[test]
  fn test_document_survives_reserialization() {
    let flow: Flow = serde_json::from_value(document()).unwrap();
    assert_eq!(serde_json::to_value(&flow).unwrap(), document());
  }

  #[test]
  fn test_missing_status_defaults_to_draft() {
    let mut value = document();
    value.as_object_mut().unwrap().remove("status");
    let flow: Flow = serde_json::from_value(value).unwrap();
    assert_eq!(flow.status, FlowStatus::Disabled);
  }

  #[test]
  fn test_from_json_reports_parse_error() {
    assert!(matches!(Flow::from_json("{"), Err(FlowError::Parse(_))));
  }
}
