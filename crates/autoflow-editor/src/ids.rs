use std::sync::atomic::{AtomicU64, Ordering};

/// Source of step identifiers.
pub trait IdProvider: Send + Sync {
  /// A fresh id starting with `prefix`, e.g. `step-…`.
  fn next_id(&self, prefix: &str) -> String;
}

/// Random v4 UUID ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdProvider for UuidIds {
  fn next_id(&self, prefix: &str) -> String {
    format!("{}-{}", prefix, uuid::Uuid::new_v4())
  }
}

/// Monotonic counter ids (`step-1`, `step-2`, ...), deterministic for tests.
#[derive(Debug, Default)]
pub struct SequentialIds {
  counter: AtomicU64,
}

impl SequentialIds {
  pub fn new() -> Self {
    Self::default()
  }
}

impl IdProvider for SequentialIds {
  fn next_id(&self, prefix: &str) -> String {
    let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
    format!("{}-{}", prefix, n)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_sequential_ids() {
    let ids = SequentialIds::new();
    assert_eq!(ids.next_id("step"), "step-1");
    assert_eq!(ids.next_id("step"), "step-2");
  }

  #[test]
  fn test_uuid_ids_are_unique() {
    let ids = UuidIds;
    let a = ids.next_id("step");
    assert!(a.starts_with("step-"));
    assert_ne!(a, ids.next_id("step"));
  }
}
