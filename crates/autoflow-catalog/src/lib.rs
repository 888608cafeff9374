//! Autoflow Catalog
//!
//! Integration metadata for the triggers and actions a flow can bind to.
//! The [`IntegrationCatalog`] trait is the lookup seam used by the editor;
//! [`StaticCatalog`] ships the built-in list and can be extended from a JSON
//! file.

mod builtin;
mod catalog;
mod error;
mod integration;

pub use builtin::StaticCatalog;
pub use catalog::IntegrationCatalog;
pub use error::CatalogError;
pub use integration::{AuthType, Integration, IntegrationCategory, IntegrationKind};
