use serde::{Deserialize, Serialize};

use crate::error::FlowError;
use crate::node::{ActionNode, ActionSettings, Input, NodeType, TriggerNode, TriggerSettings};

/// Settings shared by trigger and action nodes.
///
/// `step_name` holds `triggerName` for the head and `actionName` for every
/// other node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeSettings {
  #[serde(default)]
  pub piece_name: String,
  #[serde(default)]
  pub step_name: String,
  #[serde(default)]
  pub input: Input,
  #[serde(default)]
  pub credential_id: Option<String>,
}

/// One node of a [`Chain`].
///
/// Serializes flat, without a successor link, so a node list can be stored
/// at any length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainNode {
  pub name: String,
  #[serde(default)]
  pub display_name: String,
  #[serde(default)]
  pub valid: bool,
  #[serde(rename = "type")]
  pub node_type: NodeType,
  pub settings: NodeSettings,
}

impl ChainNode {
  pub fn is_trigger(&self) -> bool {
    self.node_type == NodeType::PieceTrigger
  }
}

/// A trigger followed by a singly linked run of actions.
///
/// Nodes live in an arena and link to their successor by index. The only way
/// to build a chain is [`Chain::new`], which rejects any sequence that does
/// not start with exactly one trigger, so the head is always the trigger and
/// the links can never form a cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TriggerNode", into = "TriggerNode")]
pub struct Chain {
  nodes: Vec<ChainNode>,
  /// `next[i]` is the arena index of the node after `nodes[i]`.
  next: Vec<Option<usize>>,
}

impl Chain {
  /// Build a chain from nodes in execution order.
  pub fn new(nodes: Vec<ChainNode>) -> Result<Self, FlowError> {
    match nodes.first() {
      Some(head) if head.is_trigger() => {}
      _ => return Err(FlowError::MissingTrigger),
    }

    if let Some(index) = nodes.iter().skip(1).position(ChainNode::is_trigger) {
      return Err(FlowError::TriggerNotAtHead { index: index + 1 });
    }

    let len = nodes.len();
    let next = (0..len)
      .map(|i| if i + 1 < len { Some(i + 1) } else { None })
      .collect();

    Ok(Self { nodes, next })
  }

  /// The trigger at the head of the chain.
  pub fn trigger(&self) -> &ChainNode {
    &self.nodes[0]
  }

  /// Number of nodes, trigger included.
  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  /// A chain always holds its trigger, so it is never empty.
  pub fn is_empty(&self) -> bool {
    false
  }

  /// Successor of the node at `index`, if any.
  pub fn next_of(&self, index: usize) -> Option<&ChainNode> {
    self
      .next
      .get(index)
      .copied()
      .flatten()
      .map(|i| &self.nodes[i])
  }

  /// Nodes in link order.
  pub fn nodes(&self) -> &[ChainNode] {
    // Links are always `i -> i + 1`.
    &self.nodes
  }

  /// Walk the chain from the trigger along its links.
  pub fn iter(&self) -> ChainIter<'_> {
    ChainIter {
      chain: self,
      cursor: Some(0),
    }
  }

  /// The actions following the trigger, in order.
  pub fn actions(&self) -> impl Iterator<Item = &ChainNode> {
    self.iter().skip(1)
  }

  /// Consume the chain, returning nodes in link order.
  pub fn into_nodes(self) -> Vec<ChainNode> {
    // Links are always `i -> i + 1`, so arena order is link order.
    self.nodes
  }
}

/// Iterator following `next` links from the head.
pub struct ChainIter<'a> {
  chain: &'a Chain,
  cursor: Option<usize>,
}

impl<'a> Iterator for ChainIter<'a> {
  type Item = &'a ChainNode;

  fn next(&mut self) -> Option<Self::Item> {
    let index = self.cursor?;
    self.cursor = self.chain.next.get(index).copied().flatten();
    self.chain.nodes.get(index)
  }
}

impl TryFrom<TriggerNode> for Chain {
  type Error = FlowError;

  fn try_from(trigger: TriggerNode) -> Result<Self, Self::Error> {
    if trigger.node_type != NodeType::PieceTrigger {
      return Err(FlowError::MissingTrigger);
    }

    let TriggerNode {
      name,
      display_name,
      valid,
      node_type,
      settings,
      mut next_action,
    } = trigger;

    let mut nodes = vec![ChainNode {
      name,
      display_name,
      valid,
      node_type,
      settings: NodeSettings {
        piece_name: settings.piece_name,
        step_name: settings.trigger_name,
        input: settings.input,
        credential_id: settings.credential_id,
      },
    }];

    while let Some(action) = next_action.take() {
      let ActionNode {
        name,
        display_name,
        valid,
        node_type,
        settings,
        next_action: following,
      } = *action;

      nodes.push(ChainNode {
        name,
        display_name,
        valid,
        node_type,
        settings: NodeSettings {
          piece_name: settings.piece_name,
          step_name: settings.action_name,
          input: settings.input,
          credential_id: settings.credential_id,
        },
      });
      next_action = following;
    }

    Chain::new(nodes)
  }
}

impl From<Chain> for TriggerNode {
  fn from(chain: Chain) -> Self {
    let mut nodes = chain.into_nodes();
    let actions = nodes.split_off(1);
    let head = nodes.remove(0);

    // Fold right to left so each action already owns its successor.
    let next_action = actions.into_iter().rev().fold(None, |next, node| {
      Some(Box::new(ActionNode {
        name: node.name,
        display_name: node.display_name,
        valid: node.valid,
        node_type: NodeType::PieceAction,
        settings: ActionSettings {
          piece_name: node.settings.piece_name,
          action_name: node.settings.step_name,
          input: node.settings.input,
          credential_id: node.settings.credential_id,
        },
        next_action: next,
      }))
    });

    TriggerNode {
      name: head.name,
      display_name: head.display_name,
      valid: head.valid,
      node_type: NodeType::PieceTrigger,
      settings: TriggerSettings {
        piece_name: head.settings.piece_name,
        trigger_name: head.settings.step_name,
        input: head.settings.input,
        credential_id: head.settings.credential_id,
      },
      next_action,
    }
  }
}
