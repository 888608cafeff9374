use std::str::FromStr;

use async_trait::async_trait;
use autoflow_flow::{Chain, ChainNode, Flow, FlowDraft, FlowMetadata, FlowStatus, FlowVersion};
use chrono::Utc;
use sqlx::FromRow;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::types::Json;
use tracing::debug;

use crate::{Credential, CredentialStore, FlowStore, StoreError, new_flow_id};

/// SQLite-based store implementation.
pub struct SqliteStore {
  pool: SqlitePool,
}

/// A row of the `flows` table. The chain is stored as its flat node list.
#[derive(FromRow)]
struct FlowRow {
  id: String,
  display_name: String,
  status: String,
  description: Option<String>,
  nodes: Json<Vec<ChainNode>>,
}

impl TryFrom<FlowRow> for Flow {
  type Error = StoreError;

  fn try_from(row: FlowRow) -> Result<Self, Self::Error> {
    let status: FlowStatus = serde_json::from_value(serde_json::Value::String(row.status))?;
    Ok(Flow {
      id: row.id,
      status,
      version: FlowVersion {
        display_name: row.display_name,
        trigger: Chain::new(row.nodes.0)?,
      },
      metadata: FlowMetadata {
        description: row.description,
      },
    })
  }
}

impl SqliteStore {
  /// Create a new SQLite store with the given connection pool.
  pub fn new(pool: SqlitePool) -> Self {
    Self { pool }
  }

  /// Open (creating if needed) the database at `url` and run migrations.
  pub async fn connect(url: &str) -> Result<Self, StoreError> {
    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
      .max_connections(4)
      .connect_with(options)
      .await?;
    let store = Self::new(pool);
    store.migrate().await?;
    Ok(store)
  }

  /// Run database migrations.
  pub async fn migrate(&self) -> Result<(), StoreError> {
    sqlx::migrate!("../../migrations").run(&self.pool).await?;
    Ok(())
  }

  async fn set_status(&self, flow_id: &str, status: FlowStatus) -> Result<Flow, StoreError> {
    let result = sqlx::query(
      r#"
            UPDATE flows
            SET status = ?, updated_at = ?
            WHERE id = ?
            "#,
    )
    .bind(status.as_str())
    .bind(Utc::now())
    .bind(flow_id)
    .execute(&self.pool)
    .await?;

    if result.rows_affected() == 0 {
      return Err(StoreError::NotFound(flow_id.to_string()));
    }

    debug!(flow_id = %flow_id, status = status.as_str(), "flow_status_changed");
    self.get_flow(flow_id).await
  }
}

#[async_trait]
impl FlowStore for SqliteStore {
  async fn list_flows(&self) -> Result<Vec<Flow>, StoreError> {
    let rows: Vec<FlowRow> = sqlx::query_as(
      r#"
            SELECT id, display_name, status, description, nodes
            FROM flows
            ORDER BY created_at ASC, rowid ASC
            "#,
    )
    .fetch_all(&self.pool)
    .await?;

    rows.into_iter().map(Flow::try_from).collect()
  }

  async fn get_flow(&self, flow_id: &str) -> Result<Flow, StoreError> {
    let row: Option<FlowRow> = sqlx::query_as(
      r#"
            SELECT id, display_name, status, description, nodes
            FROM flows
            WHERE id = ?
            "#,
    )
    .bind(flow_id)
    .fetch_optional(&self.pool)
    .await?;

    row
      .ok_or_else(|| StoreError::NotFound(flow_id.to_string()))
      .and_then(Flow::try_from)
  }

  async fn create_flow(&self, draft: &FlowDraft) -> Result<Flow, StoreError> {
    let id = new_flow_id();
    let now = Utc::now();

    sqlx::query(
      r#"
            INSERT INTO flows (id, display_name, status, description, nodes, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
    )
    .bind(&id)
    .bind(&draft.display_name)
    .bind(FlowStatus::Disabled.as_str())
    .bind(&draft.metadata.description)
    .bind(Json(draft.trigger.nodes()))
    .bind(now)
    .bind(now)
    .execute(&self.pool)
    .await?;

    debug!(flow_id = %id, "flow_created");
    Ok(draft.clone().into_flow(id, FlowStatus::Disabled))
  }

  async fn update_flow(&self, flow_id: &str, draft: &FlowDraft) -> Result<Flow, StoreError> {
    let result = sqlx::query(
      r#"
            UPDATE flows
            SET display_name = ?, description = ?, nodes = ?, updated_at = ?
            WHERE id = ?
            "#,
    )
    .bind(&draft.display_name)
    .bind(&draft.metadata.description)
    .bind(Json(draft.trigger.nodes()))
    .bind(Utc::now())
    .bind(flow_id)
    .execute(&self.pool)
    .await?;

    if result.rows_affected() == 0 {
      return Err(StoreError::NotFound(flow_id.to_string()));
    }

    debug!(flow_id = %flow_id, "flow_updated");
    self.get_flow(flow_id).await
  }

  async fn delete_flow(&self, flow_id: &str) -> Result<(), StoreError> {
    let result = sqlx::query("DELETE FROM flows WHERE id = ?")
      .bind(flow_id)
      .execute(&self.pool)
      .await?;

    if result.rows_affected() == 0 {
      return Err(StoreError::NotFound(flow_id.to_string()));
    }
    Ok(())
  }

  async fn activate_flow(&self, flow_id: &str) -> Result<Flow, StoreError> {
    self.set_status(flow_id, FlowStatus::Enabled).await
  }

  async fn deactivate_flow(&self, flow_id: &str) -> Result<Flow, StoreError> {
    self.set_status(flow_id, FlowStatus::Disabled).await
  }
}

#[async_trait]
impl CredentialStore for SqliteStore {
  async fn get_credentials(&self, integration_id: &str) -> Result<Vec<Credential>, StoreError> {
    let credentials = sqlx::query_as(
      r#"
            SELECT id, integration_id, name, created_at
            FROM credentials
            WHERE integration_id = ?
            ORDER BY created_at ASC
            "#,
    )
    .bind(integration_id)
    .fetch_all(&self.pool)
    .await?;

    Ok(credentials)
  }

  async fn add_credential(&self, credential: &Credential) -> Result<(), StoreError> {
    sqlx::query(
      r#"
            INSERT INTO credentials (id, integration_id, name, created_at)
            VALUES (?, ?, ?, ?)
            "#,
    )
    .bind(&credential.id)
    .bind(&credential.integration_id)
    .bind(&credential.name)
    .bind(credential.created_at)
    .execute(&self.pool)
    .await?;

    Ok(())
  }
}
