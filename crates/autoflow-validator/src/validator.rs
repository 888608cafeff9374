use std::collections::HashMap;
use std::sync::LazyLock;

use crate::requirement::{Config, Requirement};

/// Rule table mapping integration ids to the configuration they require.
///
/// Ids without a rule fall back to [`Requirement::AnyKey`]. Each call looks
/// at one step in isolation; nothing here inspects other steps.
#[derive(Debug, Clone)]
pub struct Validator {
  rules: HashMap<String, Requirement>,
  fallback: Requirement,
}

impl Default for Validator {
  fn default() -> Self {
    Self::new()
  }
}

impl Validator {
  /// Validator with the built-in rule table.
  pub fn new() -> Self {
    let mut validator = Self::empty();
    for (id, requirement) in builtin_rules() {
      validator.rules.insert(id.to_string(), requirement);
    }
    validator
  }

  /// Validator with no rules; every id uses the fallback.
  pub fn empty() -> Self {
    Self {
      rules: HashMap::new(),
      fallback: Requirement::AnyKey,
    }
  }

  /// Add or replace the rule for an integration id.
  pub fn with_rule(mut self, integration_id: impl Into<String>, requirement: Requirement) -> Self {
    self.rules.insert(integration_id.into(), requirement);
    self
  }

  /// The rule applied to `integration_id`.
  pub fn requirement(&self, integration_id: &str) -> &Requirement {
    self.rules.get(integration_id).unwrap_or(&self.fallback)
  }

  /// Whether `config` satisfies the rule for `integration_id`.
  pub fn validate(&self, integration_id: &str, config: &Config) -> bool {
    self.requirement(integration_id).is_satisfied(config)
  }

  /// Fields the rule for `integration_id` mentions, e.g. to label a form.
  pub fn required_fields(&self, integration_id: &str) -> Vec<&str> {
    self.requirement(integration_id).fields_named()
  }
}

static DEFAULT: LazyLock<Validator> = LazyLock::new(Validator::new);

/// Validate against the built-in rule table.
pub fn validate(integration_id: &str, config: &Config) -> bool {
  DEFAULT.validate(integration_id, config)
}

fn builtin_rules() -> Vec<(&'static str, Requirement)> {
  use Requirement as R;

  vec![
    // CRM
    ("salesforce_trigger", R::fields(&["object", "event"])),
    ("salesforce_action", R::field("object")),
    ("hubspot_trigger", R::fields(&["object", "event"])),
    ("hubspot_action", R::fields(&["resource", "action"])),
    // Communication
    ("slack_trigger", R::field("event")),
    (
      "slack_action",
      R::All(vec![
        R::field("action"),
        R::Any(vec![R::field("channel"), R::field("userId")]),
      ]),
    ),
    // Calendar
    ("google_calendar_trigger", R::non_empty_list("events")),
    (
      "google_calendar_action",
      R::fields(&["action", "title", "startTime", "endTime"]),
    ),
    // Payments and commerce
    ("stripe_trigger", R::non_empty_list("events")),
    ("stripe_action", R::fields(&["resource", "action"])),
    ("shopify_trigger", R::field("event")),
    ("shopify_action", R::fields(&["resource", "action"])),
    // Data
    ("airtable_trigger", R::fields(&["baseId", "tableId"])),
    ("airtable_action", R::fields(&["baseId", "tableId"])),
    ("mailchimp_trigger", R::field("listId")),
    ("mailchimp_action", R::field("listId")),
    // Basic steps. The webhook URL is generated by the system.
    ("webhook", R::Always),
    ("schedule", R::field("scheduleType")),
    ("email", R::fields(&["to", "subject", "body"])),
    ("sms", R::fields(&["to", "message"])),
  ]
}
