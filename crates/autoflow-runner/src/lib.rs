//! Autoflow Runner
//!
//! Test runs for a flow under edit. A [`TestRunner`] dispatches each action
//! of a step list to a [`StepExecutor`] in order, stops at the first failure,
//! and returns a [`TestReport`]. Progress is published as [`RunEvent`]s.
//!
//! Real integrations are not executed here; [`ValidatingExecutor`] offers a
//! dry run that only checks each step's configuration.

mod error;
mod events;
mod executor;
mod report;
mod runner;

pub use error::{ExecutorError, RunnerError};
pub use events::{ChannelNotifier, NoopNotifier, RunEvent, RunNotifier};
pub use executor::{StepDispatch, StepExecutor, ValidatingExecutor};
pub use report::{FailedStep, StepReport, StepStatus, TestReport};
pub use runner::{RunnerConfig, TestRunner};
