//! Autoflow Editor
//!
//! The editable form of an automation. A [`StepList`] holds the trigger and
//! its actions as flat, ordered [`WorkflowStep`]s; every edit returns a new
//! list. [`reduce`] applies a [`Command`] to a list, and the `convert`
//! functions move between a step list and the persisted [`autoflow_flow::Chain`].

mod command;
mod convert;
mod error;
mod ids;
mod list;
mod step;

pub use command::{Command, reduce};
pub use convert::{chain_to_steps, to_chain, to_steps, to_trigger_node};
pub use error::EditorError;
pub use ids::{IdProvider, SequentialIds, UuidIds};
pub use list::StepList;
pub use step::{StepKind, StepUpdate, WorkflowStep};
