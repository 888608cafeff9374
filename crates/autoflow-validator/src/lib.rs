//! Autoflow Validator
//!
//! Decides whether a step's configuration is complete enough for its
//! integration. Rules are declared as data in a table keyed by integration
//! id, so supporting a new integration means adding a row, not a branch.
//!
//! Validation is pure and never fails: an incomplete configuration is simply
//! reported as `false`.

mod requirement;
mod validator;

pub use requirement::{Config, Requirement, is_truthy};
pub use validator::{Validator, validate};
