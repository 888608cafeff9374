//! Autoflow Store
//!
//! Storage traits and implementations for persisted flows and the
//! credentials steps refer to.
//!
//! The [`FlowStore`] trait is the persistence collaborator of the flow
//! controller:
//! - Listing, fetching and deleting flows
//! - Creating and updating flows from a [`FlowDraft`]
//! - Activating and deactivating (publishing) flows
//!
//! [`CredentialStore`] looks up stored credentials by integration id.

mod memory;
mod sqlite;
mod types;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use types::Credential;

use async_trait::async_trait;
use autoflow_flow::{Flow, FlowDraft, FlowError};

/// Error type for storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
  /// The requested record was not found.
  #[error("not found: {0}")]
  NotFound(String),

  /// A database error occurred.
  #[error("database error: {0}")]
  Database(#[from] sqlx::Error),

  /// Applying migrations failed.
  #[error("migration failed: {0}")]
  Migrate(#[from] sqlx::migrate::MigrateError),

  /// A stored document could not be encoded or decoded.
  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),

  /// A stored node list is not a valid chain.
  #[error("invalid stored flow: {0}")]
  Invalid(#[from] FlowError),

  /// The backend could not be reached.
  #[error("store unavailable: {0}")]
  Unavailable(String),
}

/// Storage trait for flows.
#[async_trait]
pub trait FlowStore: Send + Sync {
  /// List all flows, oldest first.
  async fn list_flows(&self) -> Result<Vec<Flow>, StoreError>;

  /// Get a flow by ID.
  async fn get_flow(&self, flow_id: &str) -> Result<Flow, StoreError>;

  /// Create a new, disabled flow. The store assigns the id.
  async fn create_flow(&self, draft: &FlowDraft) -> Result<Flow, StoreError>;

  /// Replace the content of an existing flow. The status is kept.
  async fn update_flow(&self, flow_id: &str, draft: &FlowDraft) -> Result<Flow, StoreError>;

  /// Delete a flow.
  async fn delete_flow(&self, flow_id: &str) -> Result<(), StoreError>;

  /// Set a flow's status to `ENABLED`.
  async fn activate_flow(&self, flow_id: &str) -> Result<Flow, StoreError>;

  /// Set a flow's status back to `DISABLED`.
  async fn deactivate_flow(&self, flow_id: &str) -> Result<Flow, StoreError>;
}

/// Storage trait for credentials.
#[async_trait]
pub trait CredentialStore: Send + Sync {
  /// Credentials usable with the given integration.
  async fn get_credentials(&self, integration_id: &str) -> Result<Vec<Credential>, StoreError>;

  /// Store a credential.
  async fn add_credential(&self, credential: &Credential) -> Result<(), StoreError>;
}

pub(crate) fn new_flow_id() -> String {
  format!("flow-{}", uuid::Uuid::new_v4())
}
