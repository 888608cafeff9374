//! Wire representation of the trigger/action chain.
//!
//! These types mirror the persisted JSON document field for field. The
//! recursive `nextAction` link only exists at the serialization boundary;
//! in memory the chain is held by [`crate::Chain`].

use serde::{Deserialize, Serialize};

/// Free-form step input, keyed by field name.
pub type Input = serde_json::Map<String, serde_json::Value>;

/// Discriminator of a chain node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
  PieceTrigger,
  PieceAction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerSettings {
  #[serde(default)]
  pub piece_name: String,
  #[serde(default)]
  pub trigger_name: String,
  #[serde(default)]
  pub input: Input,
  #[serde(default)]
  pub credential_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionSettings {
  #[serde(default)]
  pub piece_name: String,
  #[serde(default)]
  pub action_name: String,
  #[serde(default)]
  pub input: Input,
  #[serde(default)]
  pub credential_id: Option<String>,
}

/// Head of a persisted chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerNode {
  pub name: String,
  pub display_name: String,
  #[serde(default)]
  pub valid: bool,
  #[serde(rename = "type")]
  pub node_type: NodeType,
  pub settings: TriggerSettings,
  #[serde(default)]
  pub next_action: Option<Box<ActionNode>>,
}

/// A persisted action, linked to its successor through `next_action`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionNode {
  pub name: String,
  pub display_name: String,
  #[serde(default)]
  pub valid: bool,
  #[serde(rename = "type")]
  pub node_type: NodeType,
  pub settings: ActionSettings,
  #[serde(default)]
  pub next_action: Option<Box<ActionNode>>,
}
