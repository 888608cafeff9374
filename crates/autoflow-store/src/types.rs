use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Stored authorization material for an integration.
///
/// Only the reference is kept here; secrets stay with the credential
/// provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
  pub id: String,
  pub integration_id: String,
  pub name: String,
  pub created_at: DateTime<Utc>,
}

impl Credential {
  pub fn new(id: impl Into<String>, integration_id: impl Into<String>, name: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      integration_id: integration_id.into(),
      name: name.into(),
      created_at: Utc::now(),
    }
  }
}
