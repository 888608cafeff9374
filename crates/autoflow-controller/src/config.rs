use std::time::Duration;

/// Controller settings.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
  /// Upper bound on each store round trip.
  pub persistence_timeout: Duration,
  /// Name given to a flow the user has not named.
  pub default_display_name: String,
}

impl Default for ControllerConfig {
  fn default() -> Self {
    Self {
      persistence_timeout: Duration::from_secs(30),
      default_display_name: "Untitled Automation".to_string(),
    }
  }
}
