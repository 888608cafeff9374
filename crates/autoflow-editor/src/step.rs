use autoflow_catalog::{AuthType, Integration, IntegrationKind};
use autoflow_validator::Config;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
  Trigger,
  Action,
}

impl From<StepKind> for IntegrationKind {
  fn from(kind: StepKind) -> Self {
    match kind {
      StepKind::Trigger => IntegrationKind::Trigger,
      StepKind::Action => IntegrationKind::Action,
    }
  }
}

/// Editable projection of one trigger or action node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStep {
  pub id: String,
  #[serde(rename = "type")]
  pub kind: StepKind,
  pub integration_id: String,
  pub name: String,
  pub display_name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default)]
  pub config: Config,
  /// Last output of the validator for `(integration_id, config)`.
  pub is_valid: bool,
  pub is_expanded: bool,
  #[serde(default)]
  pub requires_auth: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub auth_type: Option<AuthType>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub credential_id: Option<String>,
}

impl WorkflowStep {
  /// A fresh, unconfigured step for `integration`. New steps start invalid
  /// and expanded.
  pub fn new(id: String, kind: StepKind, integration: &Integration) -> Self {
    Self {
      id,
      kind,
      integration_id: integration.id.clone(),
      name: integration.id.clone(),
      display_name: integration.name.clone(),
      description: non_empty(&integration.description),
      config: Config::new(),
      is_valid: false,
      is_expanded: true,
      requires_auth: integration.requires_auth,
      auth_type: integration.auth_type,
      credential_id: None,
    }
  }

  pub fn is_trigger(&self) -> bool {
    self.kind == StepKind::Trigger
  }

  /// Merge a partial update into this step.
  pub fn apply(&mut self, update: StepUpdate) {
    if let Some(display_name) = update.display_name {
      self.display_name = display_name;
    }
    if let Some(description) = update.description {
      self.description = description;
    }
    if let Some(config) = update.config {
      self.config = config;
    }
    if let Some(is_valid) = update.is_valid {
      self.is_valid = is_valid;
    }
    if let Some(is_expanded) = update.is_expanded {
      self.is_expanded = is_expanded;
    }
    if let Some(credential_id) = update.credential_id {
      self.credential_id = credential_id;
    }
  }
}

pub(crate) fn non_empty(s: &str) -> Option<String> {
  if s.is_empty() {
    None
  } else {
    Some(s.to_string())
  }
}

/// Partial update for [`WorkflowStep`]. `None` leaves a field unchanged.
///
/// Identity fields (id, kind, integration) are not updatable; replace the
/// step instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepUpdate {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub display_name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<Option<String>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub config: Option<Config>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub is_valid: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub is_expanded: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub credential_id: Option<Option<String>>,
}

impl StepUpdate {
  /// New configuration together with its freshly computed validity.
  pub fn config(config: Config, is_valid: bool) -> Self {
    Self {
      config: Some(config),
      is_valid: Some(is_valid),
      ..Default::default()
    }
  }

  pub fn expanded(is_expanded: bool) -> Self {
    Self {
      is_expanded: Some(is_expanded),
      ..Default::default()
    }
  }

  pub fn credential(credential_id: Option<String>) -> Self {
    Self {
      credential_id: Some(credential_id),
      ..Default::default()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use autoflow_catalog::{IntegrationCatalog, StaticCatalog};
  use serde_json::json;

  #[test]
  fn test_new_step_defaults() {
    let catalog = StaticCatalog::builtin();
    let slack = catalog.find(IntegrationKind::Action, "slack_action").unwrap();
    let step = WorkflowStep::new("step-1".to_string(), StepKind::Action, &slack);

    assert_eq!(step.integration_id, "slack_action");
    assert_eq!(step.display_name, "Slack");
    assert!(!step.is_valid);
    assert!(step.is_expanded);
    assert!(step.requires_auth);
    assert_eq!(step.auth_type, Some(AuthType::OAuth2));
    assert!(step.config.is_empty());
  }

  #[test]
  fn test_apply_merges_only_given_fields() {
    let catalog = StaticCatalog::builtin();
    let email = catalog.find(IntegrationKind::Action, "email").unwrap();
    let mut step = WorkflowStep::new("step-1".to_string(), StepKind::Action, &email);

    let config = json!({"to": "a@b.com"}).as_object().cloned().unwrap();
    step.apply(StepUpdate::config(config.clone(), false));
    step.apply(StepUpdate::credential(Some("cred-1".to_string())));

    assert_eq!(step.config, config);
    assert_eq!(step.display_name, "Send Email");
    assert_eq!(step.credential_id.as_deref(), Some("cred-1"));
    assert!(step.is_expanded);
  }

  #[test]
  fn test_step_serializes_camel_case() {
    let catalog = StaticCatalog::builtin();
    let webhook = catalog.find(IntegrationKind::Trigger, "webhook").unwrap();
    let step = WorkflowStep::new("step-1".to_string(), StepKind::Trigger, &webhook);
    let value = serde_json::to_value(&step).unwrap();

    assert_eq!(value["type"], "trigger");
    assert_eq!(value["integrationId"], "webhook");
    assert_eq!(value["isExpanded"], true);
    assert!(value.get("credentialId").is_none());
  }
}
