use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// Step configuration as edited by the user.
pub type Config = serde_json::Map<String, Value>;

/// A condition a step configuration must meet.
///
/// Requirements are plain data so an integration's rule can be declared in a
/// table. [`Requirement::Custom`] covers the rare rule that does not fit.
#[derive(Clone)]
pub enum Requirement {
  /// Always satisfied.
  Always,
  /// At least one key is present.
  AnyKey,
  /// The field is present and truthy.
  Field(String),
  /// The field is a non-empty array or string.
  NonEmptyList(String),
  /// Every inner requirement holds.
  All(Vec<Requirement>),
  /// At least one inner requirement holds.
  Any(Vec<Requirement>),
  /// Arbitrary predicate.
  Custom(Arc<dyn Fn(&Config) -> bool + Send + Sync>),
}

impl Requirement {
  pub fn field(name: impl Into<String>) -> Self {
    Requirement::Field(name.into())
  }

  /// All of the named fields must be truthy.
  pub fn fields(names: &[&str]) -> Self {
    Requirement::All(names.iter().map(|n| Requirement::field(*n)).collect())
  }

  pub fn non_empty_list(name: impl Into<String>) -> Self {
    Requirement::NonEmptyList(name.into())
  }

  pub fn custom(predicate: impl Fn(&Config) -> bool + Send + Sync + 'static) -> Self {
    Requirement::Custom(Arc::new(predicate))
  }

  pub fn is_satisfied(&self, config: &Config) -> bool {
    match self {
      Requirement::Always => true,
      Requirement::AnyKey => !config.is_empty(),
      Requirement::Field(name) => config.get(name).is_some_and(is_truthy),
      Requirement::NonEmptyList(name) => config.get(name).is_some_and(has_length),
      Requirement::All(inner) => inner.iter().all(|r| r.is_satisfied(config)),
      Requirement::Any(inner) => inner.iter().any(|r| r.is_satisfied(config)),
      Requirement::Custom(predicate) => predicate(config),
    }
  }

  /// Names of the fields this requirement mentions, in declaration order.
  pub fn fields_named(&self) -> Vec<&str> {
    let mut names = Vec::new();
    self.collect_fields(&mut names);
    names
  }

  fn collect_fields<'a>(&'a self, names: &mut Vec<&'a str>) {
    match self {
      Requirement::Field(name) | Requirement::NonEmptyList(name) => names.push(name),
      Requirement::All(inner) | Requirement::Any(inner) => {
        for r in inner {
          r.collect_fields(names);
        }
      }
      Requirement::Always | Requirement::AnyKey | Requirement::Custom(_) => {}
    }
  }
}

impl fmt::Debug for Requirement {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Requirement::Always => write!(f, "Always"),
      Requirement::AnyKey => write!(f, "AnyKey"),
      Requirement::Field(name) => f.debug_tuple("Field").field(name).finish(),
      Requirement::NonEmptyList(name) => f.debug_tuple("NonEmptyList").field(name).finish(),
      Requirement::All(inner) => f.debug_tuple("All").field(inner).finish(),
      Requirement::Any(inner) => f.debug_tuple("Any").field(inner).finish(),
      Requirement::Custom(_) => write!(f, "Custom(..)"),
    }
  }
}

/// A non-empty array or string. Anything without a length counts as empty.
fn has_length(value: &Value) -> bool {
  match value {
    Value::Array(items) => !items.is_empty(),
    Value::String(s) => !s.is_empty(),
    _ => false,
  }
}

/// Loose truthiness: null, `false`, `0` and `""` count as absent.
pub fn is_truthy(value: &Value) -> bool {
  match value {
    Value::Null => false,
    Value::Bool(b) => *b,
    Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
    Value::String(s) => !s.is_empty(),
    Value::Array(_) | Value::Object(_) => true,
  }
}
