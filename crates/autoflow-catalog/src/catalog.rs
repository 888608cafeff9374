use crate::integration::{Integration, IntegrationCategory, IntegrationKind};

/// Read-only lookup of the triggers and actions a flow may bind to.
pub trait IntegrationCatalog: Send + Sync {
  /// All trigger integrations, in catalog order.
  fn list_triggers(&self) -> Vec<Integration>;

  /// All action integrations, in catalog order.
  fn list_actions(&self) -> Vec<Integration>;

  fn list(&self, kind: IntegrationKind) -> Vec<Integration> {
    match kind {
      IntegrationKind::Trigger => self.list_triggers(),
      IntegrationKind::Action => self.list_actions(),
    }
  }

  /// Look up an integration by id.
  fn find(&self, kind: IntegrationKind, id: &str) -> Option<Integration> {
    self.list(kind).into_iter().find(|i| i.id == id)
  }

  /// Integrations whose name, description or category contains `query`,
  /// ignoring case. An empty query returns everything.
  fn search(&self, kind: IntegrationKind, query: &str) -> Vec<Integration> {
    let needle = query.trim().to_lowercase();
    self
      .list(kind)
      .into_iter()
      .filter(|i| needle.is_empty() || i.matches(&needle))
      .collect()
  }

  /// Integrations grouped by category. Groups appear in the order their
  /// first member appears in the catalog.
  fn group_by_category(&self, kind: IntegrationKind) -> Vec<(IntegrationCategory, Vec<Integration>)> {
    let mut groups: Vec<(IntegrationCategory, Vec<Integration>)> = Vec::new();
    for integration in self.list(kind) {
      match groups.iter_mut().find(|(c, _)| *c == integration.category) {
        Some((_, members)) => members.push(integration),
        None => groups.push((integration.category, vec![integration])),
      }
    }
    groups
  }
}
