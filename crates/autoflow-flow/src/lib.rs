//! Autoflow Flow
//!
//! This crate holds the persisted representation of an automation: a single
//! trigger followed by an ordered chain of actions, plus the flow envelope
//! (id, status, display name, description).
//!
//! On the wire the chain is a nested `nextAction` linked list. In memory it is
//! a [`Chain`]: an arena whose nodes link by index and whose constructor only
//! accepts sequences headed by a trigger.

mod chain;
mod document;
mod error;
mod node;

pub use chain::{Chain, ChainIter, ChainNode, NodeSettings};
pub use document::{Flow, FlowDraft, FlowMetadata, FlowStatus, FlowVersion};
pub use error::FlowError;
pub use node::{ActionNode, ActionSettings, Input, NodeType, TriggerNode, TriggerSettings};
