use thiserror::Error;

/// Errors that can occur while loading catalog extensions.
#[derive(Debug, Error)]
pub enum CatalogError {
  /// IO error reading the extension file.
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  /// JSON parse error.
  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),
}
