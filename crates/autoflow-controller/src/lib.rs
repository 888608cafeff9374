//! Autoflow Controller
//!
//! This crate owns the editing session for one automation. A
//! [`FlowController`] applies step edits, tracks whether the session has
//! unsaved changes, and moves the flow through its lifecycle:
//!
//! ```text
//! Empty -> TriggerChosen -> Editing -> Saved -> Published
//! ```
//!
//! Persistence goes through an [`autoflow_store::FlowStore`]; every round
//! trip is bounded by a timeout and failures are reported as
//! [`ControllerError`]s without touching the edited steps.

mod config;
mod controller;
mod error;
mod session;

pub use config::ControllerConfig;
pub use controller::FlowController;
pub use error::{ControllerError, ErrorKind};
pub use session::{SessionSnapshot, SessionState};
