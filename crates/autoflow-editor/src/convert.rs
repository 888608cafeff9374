//! Conversion between the persisted chain and the editable step list.

use autoflow_catalog::{Integration, IntegrationCatalog, IntegrationKind};
use autoflow_flow::{Chain, ChainNode, Flow, FlowError, NodeSettings, NodeType, TriggerNode};

use crate::ids::IdProvider;
use crate::list::StepList;
use crate::step::{StepKind, WorkflowStep, non_empty};

/// Project a persisted flow onto an editable step list.
pub fn to_steps(flow: &Flow, catalog: &dyn IntegrationCatalog, ids: &dyn IdProvider) -> StepList {
  chain_to_steps(&flow.version.trigger, catalog, ids)
}

/// Project a chain onto an editable step list, one step per node in link
/// order. Loaded steps start collapsed.
pub fn chain_to_steps(
  chain: &Chain,
  catalog: &dyn IntegrationCatalog,
  ids: &dyn IdProvider,
) -> StepList {
  let steps = chain
    .iter()
    .map(|node| {
      let kind = if node.is_trigger() {
        StepKind::Trigger
      } else {
        StepKind::Action
      };
      let integration = resolve_integration(catalog, kind.into(), &node.settings);
      node_to_step(ids.next_id("step"), kind, node, &integration)
    })
    .collect();

  StepList::from_ordered(steps)
}

/// Build the persisted chain for `steps`.
///
/// Fails with [`FlowError::MissingTrigger`] unless the first step is a
/// trigger. The piece name of each node is its integration id without the
/// `_trigger`/`_action` suffix; input and validity are copied verbatim.
pub fn to_chain(steps: &[WorkflowStep]) -> Result<Chain, FlowError> {
  match steps.first() {
    Some(first) if first.is_trigger() => {}
    _ => return Err(FlowError::MissingTrigger),
  }

  let nodes = steps.iter().map(step_to_node).collect();
  Chain::new(nodes)
}

/// Build the nested wire form of the chain for `steps`.
pub fn to_trigger_node(steps: &[WorkflowStep]) -> Result<TriggerNode, FlowError> {
  to_chain(steps).map(TriggerNode::from)
}

/// Look up catalog metadata for a node by its trigger/action name, then by
/// `{pieceName}_trigger`/`{pieceName}_action`. Unknown nodes get a
/// placeholder named after the raw settings.
fn resolve_integration(
  catalog: &dyn IntegrationCatalog,
  kind: IntegrationKind,
  settings: &NodeSettings,
) -> Integration {
  if let Some(found) = catalog.find(kind, &settings.step_name) {
    return found;
  }

  if !settings.piece_name.is_empty() {
    let suffixed = format!("{}{}", settings.piece_name, kind.suffix());
    if let Some(found) = catalog.find(kind, &suffixed) {
      return found;
    }
  }

  let raw = if settings.step_name.is_empty() {
    &settings.piece_name
  } else {
    &settings.step_name
  };
  Integration::placeholder(raw.clone(), kind)
}

fn node_to_step(id: String, kind: StepKind, node: &ChainNode, integration: &Integration) -> WorkflowStep {
  let name = if node.name.is_empty() {
    integration.id.clone()
  } else {
    node.name.clone()
  };

  WorkflowStep {
    id,
    kind,
    integration_id: integration.id.clone(),
    name,
    display_name: node.display_name.clone(),
    description: non_empty(&integration.description),
    config: node.settings.input.clone(),
    is_valid: node.valid,
    is_expanded: false,
    requires_auth: integration.requires_auth,
    auth_type: integration.auth_type,
    credential_id: node.settings.credential_id.clone(),
  }
}

fn step_to_node(step: &WorkflowStep) -> ChainNode {
  let (node_type, suffix) = match step.kind {
    StepKind::Trigger => (NodeType::PieceTrigger, "_trigger"),
    StepKind::Action => (NodeType::PieceAction, "_action"),
  };

  let piece_name = step
    .integration_id
    .strip_suffix(suffix)
    .unwrap_or(&step.integration_id)
    .to_string();

  ChainNode {
    name: step.name.clone(),
    display_name: step.display_name.clone(),
    valid: step.is_valid,
    node_type,
    settings: NodeSettings {
      piece_name,
      step_name: step.integration_id.clone(),
      input: step.config.clone(),
      credential_id: step.credential_id.clone(),
    },
  }
}
