use serde::{Deserialize, Serialize};

/// Whether an integration starts a flow or runs inside one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationKind {
  Trigger,
  Action,
}

impl IntegrationKind {
  /// Suffix the catalog appends to piece names for this kind, e.g. `slack_trigger`.
  pub fn suffix(&self) -> &'static str {
    match self {
      IntegrationKind::Trigger => "_trigger",
      IntegrationKind::Action => "_action",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntegrationCategory {
  #[serde(rename = "CRM")]
  Crm,
  Marketing,
  Communication,
  Productivity,
  Analytics,
  #[serde(rename = "Social Media")]
  SocialMedia,
  #[serde(rename = "E-commerce")]
  ECommerce,
  Payment,
  Database,
  #[serde(rename = "AI & Machine Learning")]
  Ai,
  Automation,
  #[serde(rename = "Calendar & Scheduling")]
  Calendar,
  #[serde(rename = "Forms & Surveys")]
  Forms,
  #[serde(rename = "Email Marketing")]
  EmailMarketing,
  #[serde(rename = "Customer Support")]
  CustomerSupport,
}

impl IntegrationCategory {
  /// Human-readable label, identical to the serialized form.
  pub fn label(&self) -> &'static str {
    match self {
      IntegrationCategory::Crm => "CRM",
      IntegrationCategory::Marketing => "Marketing",
      IntegrationCategory::Communication => "Communication",
      IntegrationCategory::Productivity => "Productivity",
      IntegrationCategory::Analytics => "Analytics",
      IntegrationCategory::SocialMedia => "Social Media",
      IntegrationCategory::ECommerce => "E-commerce",
      IntegrationCategory::Payment => "Payment",
      IntegrationCategory::Database => "Database",
      IntegrationCategory::Ai => "AI & Machine Learning",
      IntegrationCategory::Automation => "Automation",
      IntegrationCategory::Calendar => "Calendar & Scheduling",
      IntegrationCategory::Forms => "Forms & Surveys",
      IntegrationCategory::EmailMarketing => "Email Marketing",
      IntegrationCategory::CustomerSupport => "Customer Support",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthType {
  #[serde(rename = "oauth2")]
  OAuth2,
  ApiKey,
  Jwt,
  Basic,
}

/// Metadata describing an external service a step can bind to.
///
/// The editor only consumes ids and these descriptive fields; nothing here
/// is tied to a particular presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Integration {
  /// Stable id, e.g. "salesforce_trigger" or "email"
  pub id: String,

  /// Display name, e.g. "Salesforce"
  pub name: String,

  pub description: String,

  pub category: IntegrationCategory,

  /// Brand color as a hex string
  #[serde(default)]
  pub color: String,

  #[serde(rename = "type")]
  pub kind: IntegrationKind,

  #[serde(default)]
  pub requires_auth: bool,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub auth_type: Option<AuthType>,

  /// Events a trigger can fire on, or operations an action can perform.
  #[serde(default)]
  pub events: Vec<String>,
}

impl Integration {
  /// Minimal record for an id the catalog does not know.
  pub fn placeholder(id: impl Into<String>, kind: IntegrationKind) -> Self {
    let id = id.into();
    Self {
      name: id.clone(),
      id,
      description: String::new(),
      category: IntegrationCategory::Automation,
      color: String::new(),
      kind,
      requires_auth: false,
      auth_type: None,
      events: Vec::new(),
    }
  }

  /// Case-insensitive match against name, description or category label.
  /// `needle` must already be lowercase.
  pub(crate) fn matches(&self, needle: &str) -> bool {
    self.name.to_lowercase().contains(needle)
      || self.description.to_lowercase().contains(needle)
      || self.category.label().to_lowercase().contains(needle)
  }
}
