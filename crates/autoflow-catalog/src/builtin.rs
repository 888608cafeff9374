use std::path::Path;

use tokio::fs;

use crate::catalog::IntegrationCatalog;
use crate::error::CatalogError;
use crate::integration::{AuthType, Integration, IntegrationCategory, IntegrationKind};

/// In-memory catalog seeded with the built-in integrations.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
  triggers: Vec<Integration>,
  actions: Vec<Integration>,
}

impl StaticCatalog {
  /// Create a catalog from explicit lists.
  pub fn new(triggers: Vec<Integration>, actions: Vec<Integration>) -> Self {
    Self { triggers, actions }
  }

  /// The integrations shipped with autoflow.
  pub fn builtin() -> Self {
    Self {
      triggers: TRIGGERS
        .iter()
        .map(|e| e.to_integration(IntegrationKind::Trigger))
        .collect(),
      actions: ACTIONS
        .iter()
        .map(|e| e.to_integration(IntegrationKind::Action))
        .collect(),
    }
  }

  fn entries(&self, kind: IntegrationKind) -> &[Integration] {
    match kind {
      IntegrationKind::Trigger => &self.triggers,
      IntegrationKind::Action => &self.actions,
    }
  }

  /// Merge extra integrations in. An entry with the same kind and id as an
  /// existing one replaces it in place; anything else is appended.
  pub fn extend(&mut self, extra: impl IntoIterator<Item = Integration>) {
    for integration in extra {
      let list = match integration.kind {
        IntegrationKind::Trigger => &mut self.triggers,
        IntegrationKind::Action => &mut self.actions,
      };
      match list.iter_mut().find(|i| i.id == integration.id) {
        Some(existing) => *existing = integration,
        None => list.push(integration),
      }
    }
  }

  /// Merge integrations from a JSON file holding an array of records.
  /// A missing file leaves the catalog untouched.
  pub async fn load_extensions(&mut self, path: &Path) -> Result<usize, CatalogError> {
    if !fs::try_exists(path).await? {
      return Ok(0);
    }

    let content = fs::read_to_string(path).await?;
    let extra: Vec<Integration> = serde_json::from_str(&content)?;
    let count = extra.len();
    self.extend(extra);
    Ok(count)
  }
}

impl IntegrationCatalog for StaticCatalog {
  fn list_triggers(&self) -> Vec<Integration> {
    self.triggers.clone()
  }

  fn list_actions(&self) -> Vec<Integration> {
    self.actions.clone()
  }

  fn find(&self, kind: IntegrationKind, id: &str) -> Option<Integration> {
    self.entries(kind).iter().find(|i| i.id == id).cloned()
  }
}

/// Compile-time catalog row.
struct Entry {
  id: &'static str,
  name: &'static str,
  description: &'static str,
  category: IntegrationCategory,
  color: &'static str,
  requires_auth: bool,
  auth_type: Option<AuthType>,
  events: &'static [&'static str],
}

impl Entry {
  fn to_integration(&self, kind: IntegrationKind) -> Integration {
    Integration {
      id: self.id.to_string(),
      name: self.name.to_string(),
      description: self.description.to_string(),
      category: self.category,
      color: self.color.to_string(),
      kind,
      requires_auth: self.requires_auth,
      auth_type: self.auth_type,
      events: self.events.iter().map(|e| e.to_string()).collect(),
    }
  }
}

const TRIGGERS: &[Entry] = &[
  Entry {
    id: "salesforce_trigger",
    name: "Salesforce",
    description: "Trigger on Salesforce events like new leads, opportunities, or contacts",
    category: IntegrationCategory::Crm,
    color: "#00A1E0",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &[
      "new_lead",
      "lead_updated",
      "new_contact",
      "contact_updated",
      "new_opportunity",
      "opportunity_stage_changed",
      "new_account",
      "account_updated",
      "new_case",
      "case_updated",
    ],
  },
  Entry {
    id: "hubspot_trigger",
    name: "HubSpot",
    description: "Trigger on HubSpot CRM events and marketing activities",
    category: IntegrationCategory::Crm,
    color: "#FF7A59",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &[
      "new_contact",
      "contact_property_change",
      "new_company",
      "new_deal",
      "deal_stage_change",
      "form_submission",
      "email_opened",
      "email_clicked",
    ],
  },
  Entry {
    id: "pipedrive_trigger",
    name: "Pipedrive",
    description: "Monitor deals, contacts, and activities in Pipedrive",
    category: IntegrationCategory::Crm,
    color: "#172733",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &[
      "new_deal",
      "deal_updated",
      "deal_stage_changed",
      "new_person",
      "new_organization",
      "activity_completed",
    ],
  },
  Entry {
    id: "slack_trigger",
    name: "Slack",
    description: "Trigger on Slack messages, reactions, and channel events",
    category: IntegrationCategory::Communication,
    color: "#4A154B",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &[
      "new_message",
      "message_posted_to_channel",
      "new_channel_created",
      "user_joined_channel",
      "reaction_added",
      "file_shared",
      "app_mentioned",
    ],
  },
  Entry {
    id: "teams_trigger",
    name: "Microsoft Teams",
    description: "React to Teams messages, meetings, and channel activities",
    category: IntegrationCategory::Communication,
    color: "#5059C9",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &[
      "new_message",
      "new_channel_message",
      "meeting_started",
      "meeting_ended",
      "user_joined_team",
    ],
  },
  Entry {
    id: "twilio_trigger",
    name: "Twilio",
    description: "Trigger on SMS, voice calls, and WhatsApp messages",
    category: IntegrationCategory::Communication,
    color: "#F22F46",
    requires_auth: true,
    auth_type: Some(AuthType::ApiKey),
    events: &[
      "sms_received",
      "sms_sent",
      "call_received",
      "call_completed",
      "whatsapp_message_received",
    ],
  },
  Entry {
    id: "google_calendar_trigger",
    name: "Google Calendar",
    description: "Trigger on calendar events, updates, and RSVPs",
    category: IntegrationCategory::Calendar,
    color: "#4285F4",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &[
      "event_created",
      "event_updated",
      "event_cancelled",
      "event_started",
      "event_ended",
      "attendee_responded",
    ],
  },
  Entry {
    id: "outlook_calendar_trigger",
    name: "Outlook Calendar",
    description: "Monitor Microsoft Outlook calendar events",
    category: IntegrationCategory::Calendar,
    color: "#0078D4",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &["event_created", "event_updated", "event_deleted", "meeting_request_received"],
  },
  Entry {
    id: "calendly_trigger",
    name: "Calendly",
    description: "Trigger when meetings are scheduled or cancelled",
    category: IntegrationCategory::Calendar,
    color: "#006BFF",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &["invitee_created", "invitee_canceled", "event_type_created"],
  },
  Entry {
    id: "mailchimp_trigger",
    name: "Mailchimp",
    description: "Trigger on email campaigns, subscriber changes, and list updates",
    category: IntegrationCategory::EmailMarketing,
    color: "#FFE01B",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &[
      "subscriber_added",
      "subscriber_updated",
      "subscriber_unsubscribed",
      "campaign_sent",
      "email_opened",
      "link_clicked",
    ],
  },
  Entry {
    id: "sendgrid_trigger",
    name: "SendGrid",
    description: "Monitor email delivery, opens, and clicks",
    category: IntegrationCategory::EmailMarketing,
    color: "#1A82E2",
    requires_auth: true,
    auth_type: Some(AuthType::ApiKey),
    events: &["email_delivered", "email_opened", "email_clicked", "email_bounced", "unsubscribe"],
  },
  Entry {
    id: "activecampaign_trigger",
    name: "ActiveCampaign",
    description: "React to marketing automation and CRM events",
    category: IntegrationCategory::Marketing,
    color: "#356AE6",
    requires_auth: true,
    auth_type: Some(AuthType::ApiKey),
    events: &[
      "contact_added",
      "contact_tag_added",
      "deal_stage_changed",
      "campaign_opened",
      "automation_started",
    ],
  },
  Entry {
    id: "facebook_trigger",
    name: "Facebook",
    description: "Monitor Facebook page posts, comments, and messages",
    category: IntegrationCategory::SocialMedia,
    color: "#1877F2",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &["page_post_created", "post_comment", "page_message_received", "ad_lead_generated"],
  },
  Entry {
    id: "instagram_trigger",
    name: "Instagram",
    description: "React to Instagram posts, stories, and messages",
    category: IntegrationCategory::SocialMedia,
    color: "#E4405F",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &["new_post", "new_comment", "new_story", "direct_message", "mention"],
  },
  Entry {
    id: "linkedin_trigger",
    name: "LinkedIn",
    description: "Monitor LinkedIn posts, connections, and messages",
    category: IntegrationCategory::SocialMedia,
    color: "#0A66C2",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &["new_connection", "post_liked", "post_commented", "message_received"],
  },
  Entry {
    id: "twitter_trigger",
    name: "X (Twitter)",
    description: "React to tweets, mentions, and direct messages",
    category: IntegrationCategory::SocialMedia,
    color: "#000000",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &["new_tweet", "mention", "direct_message", "follower_added", "retweet"],
  },
  Entry {
    id: "shopify_trigger",
    name: "Shopify",
    description: "Monitor store orders, customers, and inventory",
    category: IntegrationCategory::ECommerce,
    color: "#7AB55C",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &[
      "order_created",
      "order_fulfilled",
      "order_cancelled",
      "customer_created",
      "product_created",
      "inventory_level_changed",
    ],
  },
  Entry {
    id: "woocommerce_trigger",
    name: "WooCommerce",
    description: "React to WooCommerce store events",
    category: IntegrationCategory::ECommerce,
    color: "#96588A",
    requires_auth: true,
    auth_type: Some(AuthType::ApiKey),
    events: &["order_created", "order_updated", "customer_created", "product_created"],
  },
  Entry {
    id: "stripe_trigger",
    name: "Stripe",
    description: "Monitor payments, subscriptions, and customer events",
    category: IntegrationCategory::Payment,
    color: "#635BFF",
    requires_auth: true,
    auth_type: Some(AuthType::ApiKey),
    events: &[
      "payment_succeeded",
      "payment_failed",
      "subscription_created",
      "subscription_cancelled",
      "invoice_paid",
      "customer_created",
    ],
  },
  Entry {
    id: "paypal_trigger",
    name: "PayPal",
    description: "React to PayPal payments and disputes",
    category: IntegrationCategory::Payment,
    color: "#003087",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &["payment_completed", "payment_refunded", "dispute_created", "subscription_activated"],
  },
  Entry {
    id: "square_trigger",
    name: "Square",
    description: "Monitor Square payments and inventory",
    category: IntegrationCategory::Payment,
    color: "#3E4348",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &["payment_created", "order_created", "customer_created", "inventory_count_updated"],
  },
  Entry {
    id: "airtable_trigger",
    name: "Airtable",
    description: "Trigger when records are created or updated in Airtable",
    category: IntegrationCategory::Database,
    color: "#FCB400",
    requires_auth: true,
    auth_type: Some(AuthType::ApiKey),
    events: &["record_created", "record_updated", "record_deleted", "view_updated"],
  },
  Entry {
    id: "google_sheets_trigger",
    name: "Google Sheets",
    description: "Monitor changes to Google Sheets",
    category: IntegrationCategory::Productivity,
    color: "#0F9D58",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &["row_added", "row_updated", "row_deleted", "cell_updated", "sheet_created"],
  },
  Entry {
    id: "notion_trigger",
    name: "Notion",
    description: "React to Notion database and page changes",
    category: IntegrationCategory::Productivity,
    color: "#000000",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &["page_created", "page_updated", "database_item_created", "database_item_updated"],
  },
  Entry {
    id: "typeform_trigger",
    name: "Typeform",
    description: "Trigger when forms are submitted",
    category: IntegrationCategory::Forms,
    color: "#262627",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &["form_response", "quiz_completed"],
  },
  Entry {
    id: "google_forms_trigger",
    name: "Google Forms",
    description: "React to Google Forms submissions",
    category: IntegrationCategory::Forms,
    color: "#673AB7",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &["form_response"],
  },
  Entry {
    id: "jotform_trigger",
    name: "JotForm",
    description: "Monitor JotForm submissions",
    category: IntegrationCategory::Forms,
    color: "#0A1D3F",
    requires_auth: true,
    auth_type: Some(AuthType::ApiKey),
    events: &["form_submission"],
  },
  Entry {
    id: "zendesk_trigger",
    name: "Zendesk",
    description: "React to support tickets and customer interactions",
    category: IntegrationCategory::CustomerSupport,
    color: "#03363D",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &["ticket_created", "ticket_updated", "ticket_solved", "customer_replied"],
  },
  Entry {
    id: "intercom_trigger",
    name: "Intercom",
    description: "Monitor conversations and user events",
    category: IntegrationCategory::CustomerSupport,
    color: "#1F8FFF",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &["conversation_started", "conversation_replied", "user_created", "lead_converted"],
  },
  Entry {
    id: "freshdesk_trigger",
    name: "Freshdesk",
    description: "React to support ticket events",
    category: IntegrationCategory::CustomerSupport,
    color: "#12344D",
    requires_auth: true,
    auth_type: Some(AuthType::ApiKey),
    events: &["ticket_created", "ticket_updated", "contact_created", "agent_replied"],
  },
  Entry {
    id: "google_analytics_trigger",
    name: "Google Analytics",
    description: "Monitor website analytics events and goals",
    category: IntegrationCategory::Analytics,
    color: "#E37400",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &["goal_completed", "traffic_spike", "conversion_event"],
  },
  Entry {
    id: "mixpanel_trigger",
    name: "Mixpanel",
    description: "React to user analytics events",
    category: IntegrationCategory::Analytics,
    color: "#7856FF",
    requires_auth: true,
    auth_type: Some(AuthType::ApiKey),
    events: &["event_tracked", "user_profile_updated", "funnel_completed"],
  },
  Entry {
    id: "webhook",
    name: "Webhook",
    description: "Trigger when data is received via HTTP webhook",
    category: IntegrationCategory::Automation,
    color: "#EAB308",
    requires_auth: false,
    auth_type: None,
    events: &[],
  },
  Entry {
    id: "schedule",
    name: "Schedule",
    description: "Run on a regular schedule (hourly, daily, weekly)",
    category: IntegrationCategory::Automation,
    color: "#A855F7",
    requires_auth: false,
    auth_type: None,
    events: &[],
  },
  Entry {
    id: "form",
    name: "Form Submission",
    description: "Trigger when a form is submitted on your website",
    category: IntegrationCategory::Automation,
    color: "#6366F1",
    requires_auth: false,
    auth_type: None,
    events: &[],
  },
  Entry {
    id: "email",
    name: "Email Received",
    description: "Trigger when an email is received in a mailbox",
    category: IntegrationCategory::Communication,
    color: "#EF4444",
    requires_auth: true,
    auth_type: Some(AuthType::ApiKey),
    events: &[],
  },
  Entry {
    id: "sms",
    name: "SMS Received",
    description: "Trigger when an SMS is received on your number",
    category: IntegrationCategory::Communication,
    color: "#65A30D",
    requires_auth: true,
    auth_type: Some(AuthType::ApiKey),
    events: &[],
  },
];

const ACTIONS: &[Entry] = &[
  Entry {
    id: "salesforce_action",
    name: "Salesforce",
    description: "Create, update, or delete Salesforce records",
    category: IntegrationCategory::Crm,
    color: "#00A1E0",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &[
      "create_lead",
      "update_lead",
      "convert_lead",
      "create_contact",
      "update_contact",
      "create_opportunity",
      "update_opportunity_stage",
      "create_account",
      "update_account",
      "create_case",
      "add_note",
      "create_task",
    ],
  },
  Entry {
    id: "hubspot_action",
    name: "HubSpot",
    description: "Manage HubSpot contacts, deals, and marketing activities",
    category: IntegrationCategory::Crm,
    color: "#FF7A59",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &[
      "create_contact",
      "update_contact",
      "create_company",
      "create_deal",
      "update_deal_stage",
      "send_email",
      "add_to_list",
      "remove_from_list",
      "create_task",
      "log_activity",
    ],
  },
  Entry {
    id: "pipedrive_action",
    name: "Pipedrive",
    description: "Manage deals, contacts, and activities in Pipedrive",
    category: IntegrationCategory::Crm,
    color: "#172733",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &[
      "create_deal",
      "update_deal",
      "move_deal_stage",
      "create_person",
      "create_organization",
      "create_activity",
      "mark_activity_done",
    ],
  },
  Entry {
    id: "slack_action",
    name: "Slack",
    description: "Send messages, create channels, and manage Slack workspace",
    category: IntegrationCategory::Communication,
    color: "#4A154B",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &[
      "send_message",
      "send_direct_message",
      "create_channel",
      "invite_to_channel",
      "set_topic",
      "upload_file",
      "add_reaction",
    ],
  },
  Entry {
    id: "teams_action",
    name: "Microsoft Teams",
    description: "Send messages and manage Teams channels",
    category: IntegrationCategory::Communication,
    color: "#5059C9",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &["send_message", "create_channel", "schedule_meeting", "create_team", "add_member"],
  },
  Entry {
    id: "twilio_action",
    name: "Twilio",
    description: "Send SMS, make calls, and send WhatsApp messages",
    category: IntegrationCategory::Communication,
    color: "#F22F46",
    requires_auth: true,
    auth_type: Some(AuthType::ApiKey),
    events: &["send_sms", "send_mms", "make_call", "send_whatsapp", "send_verification_code"],
  },
  Entry {
    id: "zoom_action",
    name: "Zoom",
    description: "Create and manage Zoom meetings",
    category: IntegrationCategory::Communication,
    color: "#2D8CFF",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &[
      "create_meeting",
      "update_meeting",
      "delete_meeting",
      "add_registrant",
      "create_webinar",
    ],
  },
  Entry {
    id: "google_calendar_action",
    name: "Google Calendar",
    description: "Create and manage calendar events",
    category: IntegrationCategory::Calendar,
    color: "#4285F4",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &[
      "create_event",
      "update_event",
      "delete_event",
      "invite_attendees",
      "create_recurring_event",
      "check_availability",
    ],
  },
  Entry {
    id: "outlook_calendar_action",
    name: "Outlook Calendar",
    description: "Manage Microsoft Outlook calendar events",
    category: IntegrationCategory::Calendar,
    color: "#0078D4",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &[
      "create_event",
      "update_event",
      "send_meeting_invite",
      "check_availability",
      "book_room",
    ],
  },
  Entry {
    id: "calendly_action",
    name: "Calendly",
    description: "Manage Calendly scheduling links and events",
    category: IntegrationCategory::Calendar,
    color: "#006BFF",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &["create_event_type", "update_availability", "cancel_event", "reschedule_event"],
  },
  Entry {
    id: "mailchimp_action",
    name: "Mailchimp",
    description: "Manage email lists, campaigns, and subscribers",
    category: IntegrationCategory::EmailMarketing,
    color: "#FFE01B",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &[
      "add_subscriber",
      "update_subscriber",
      "remove_subscriber",
      "add_tag",
      "create_campaign",
      "send_campaign",
      "create_segment",
    ],
  },
  Entry {
    id: "sendgrid_action",
    name: "SendGrid",
    description: "Send transactional and marketing emails",
    category: IntegrationCategory::EmailMarketing,
    color: "#1A82E2",
    requires_auth: true,
    auth_type: Some(AuthType::ApiKey),
    events: &[
      "send_email",
      "send_template_email",
      "add_contact",
      "update_contact",
      "add_to_list",
      "create_list",
    ],
  },
  Entry {
    id: "activecampaign_action",
    name: "ActiveCampaign",
    description: "Automate marketing and CRM actions",
    category: IntegrationCategory::Marketing,
    color: "#356AE6",
    requires_auth: true,
    auth_type: Some(AuthType::ApiKey),
    events: &[
      "create_contact",
      "update_contact",
      "add_tag",
      "start_automation",
      "create_deal",
      "send_campaign",
    ],
  },
  Entry {
    id: "facebook_action",
    name: "Facebook",
    description: "Post to Facebook pages and manage ads",
    category: IntegrationCategory::SocialMedia,
    color: "#1877F2",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &[
      "create_post",
      "schedule_post",
      "reply_to_comment",
      "send_message",
      "create_ad",
      "update_ad_budget",
    ],
  },
  Entry {
    id: "instagram_action",
    name: "Instagram",
    description: "Post content and manage Instagram business accounts",
    category: IntegrationCategory::SocialMedia,
    color: "#E4405F",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &["create_post", "create_story", "reply_to_comment", "send_direct_message"],
  },
  Entry {
    id: "linkedin_action",
    name: "LinkedIn",
    description: "Share posts and manage LinkedIn presence",
    category: IntegrationCategory::SocialMedia,
    color: "#0A66C2",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &["share_post", "send_message", "send_connection_request", "update_profile"],
  },
  Entry {
    id: "twitter_action",
    name: "X (Twitter)",
    description: "Post tweets and manage Twitter account",
    category: IntegrationCategory::SocialMedia,
    color: "#000000",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &["post_tweet", "reply_to_tweet", "send_direct_message", "follow_user", "like_tweet"],
  },
  Entry {
    id: "shopify_action",
    name: "Shopify",
    description: "Manage products, orders, and customers in Shopify",
    category: IntegrationCategory::ECommerce,
    color: "#7AB55C",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &[
      "create_product",
      "update_inventory",
      "fulfill_order",
      "cancel_order",
      "create_discount",
      "add_customer",
      "send_invoice",
    ],
  },
  Entry {
    id: "woocommerce_action",
    name: "WooCommerce",
    description: "Manage WooCommerce store operations",
    category: IntegrationCategory::ECommerce,
    color: "#96588A",
    requires_auth: true,
    auth_type: Some(AuthType::ApiKey),
    events: &[
      "create_product",
      "update_product",
      "create_order",
      "update_order_status",
      "create_coupon",
    ],
  },
  Entry {
    id: "stripe_action",
    name: "Stripe",
    description: "Process payments and manage subscriptions",
    category: IntegrationCategory::Payment,
    color: "#635BFF",
    requires_auth: true,
    auth_type: Some(AuthType::ApiKey),
    events: &[
      "create_payment",
      "create_subscription",
      "cancel_subscription",
      "issue_refund",
      "create_invoice",
      "create_customer",
    ],
  },
  Entry {
    id: "paypal_action",
    name: "PayPal",
    description: "Process PayPal payments and manage transactions",
    category: IntegrationCategory::Payment,
    color: "#003087",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &["create_payment", "issue_refund", "create_subscription", "send_invoice"],
  },
  Entry {
    id: "square_action",
    name: "Square",
    description: "Process Square payments and manage inventory",
    category: IntegrationCategory::Payment,
    color: "#3E4348",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &["create_payment", "create_invoice", "update_inventory", "create_customer"],
  },
  Entry {
    id: "airtable_action",
    name: "Airtable",
    description: "Create and update records in Airtable bases",
    category: IntegrationCategory::Database,
    color: "#FCB400",
    requires_auth: true,
    auth_type: Some(AuthType::ApiKey),
    events: &["create_record", "update_record", "delete_record", "find_records", "create_table"],
  },
  Entry {
    id: "google_sheets_action",
    name: "Google Sheets",
    description: "Read and write data to Google Sheets",
    category: IntegrationCategory::Productivity,
    color: "#0F9D58",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &["add_row", "update_row", "delete_row", "find_row", "create_sheet", "format_cells"],
  },
  Entry {
    id: "notion_action",
    name: "Notion",
    description: "Create and update Notion pages and databases",
    category: IntegrationCategory::Productivity,
    color: "#000000",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &[
      "create_page",
      "update_page",
      "create_database_item",
      "update_database_item",
      "add_comment",
    ],
  },
  Entry {
    id: "google_drive_action",
    name: "Google Drive",
    description: "Manage files and folders in Google Drive",
    category: IntegrationCategory::Productivity,
    color: "#4285F4",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &["upload_file", "create_folder", "move_file", "share_file", "create_document"],
  },
  Entry {
    id: "dropbox_action",
    name: "Dropbox",
    description: "Upload and manage files in Dropbox",
    category: IntegrationCategory::Productivity,
    color: "#0061FF",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &["upload_file", "create_folder", "move_file", "share_link", "delete_file"],
  },
  Entry {
    id: "zendesk_action",
    name: "Zendesk",
    description: "Create and manage support tickets",
    category: IntegrationCategory::CustomerSupport,
    color: "#03363D",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &["create_ticket", "update_ticket", "add_comment", "assign_ticket", "change_status"],
  },
  Entry {
    id: "intercom_action",
    name: "Intercom",
    description: "Manage conversations and user data",
    category: IntegrationCategory::CustomerSupport,
    color: "#1F8FFF",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &["send_message", "create_user", "update_user", "add_tag", "create_note"],
  },
  Entry {
    id: "freshdesk_action",
    name: "Freshdesk",
    description: "Manage support tickets and contacts",
    category: IntegrationCategory::CustomerSupport,
    color: "#12344D",
    requires_auth: true,
    auth_type: Some(AuthType::ApiKey),
    events: &["create_ticket", "update_ticket", "add_note", "create_contact"],
  },
  Entry {
    id: "google_analytics_action",
    name: "Google Analytics",
    description: "Send events and e-commerce data to Google Analytics",
    category: IntegrationCategory::Analytics,
    color: "#E37400",
    requires_auth: true,
    auth_type: Some(AuthType::OAuth2),
    events: &["send_event", "send_page_view", "send_transaction", "set_user_property"],
  },
  Entry {
    id: "mixpanel_action",
    name: "Mixpanel",
    description: "Track events and update user profiles",
    category: IntegrationCategory::Analytics,
    color: "#7856FF",
    requires_auth: true,
    auth_type: Some(AuthType::ApiKey),
    events: &["track_event", "set_user_profile", "increment_property", "create_funnel"],
  },
  Entry {
    id: "segment_action",
    name: "Segment",
    description: "Send tracking data to Segment",
    category: IntegrationCategory::Analytics,
    color: "#63E19C",
    requires_auth: true,
    auth_type: Some(AuthType::ApiKey),
    events: &["track_event", "identify_user", "group_user", "send_page_view"],
  },
  Entry {
    id: "openai_action",
    name: "OpenAI",
    description: "Generate text, analyze content, and create embeddings",
    category: IntegrationCategory::Ai,
    color: "#10A37F",
    requires_auth: true,
    auth_type: Some(AuthType::ApiKey),
    events: &[
      "generate_text",
      "analyze_sentiment",
      "create_embedding",
      "moderate_content",
      "generate_image",
    ],
  },
  Entry {
    id: "anthropic_action",
    name: "Anthropic (Claude)",
    description: "Generate and analyze text with Claude AI",
    category: IntegrationCategory::Ai,
    color: "#D4AA00",
    requires_auth: true,
    auth_type: Some(AuthType::ApiKey),
    events: &["generate_text", "analyze_text", "summarize_content", "answer_question"],
  },
  Entry {
    id: "webhook",
    name: "Send Webhook",
    description: "Send data to another service via HTTP",
    category: IntegrationCategory::Automation,
    color: "#3B82F6",
    requires_auth: false,
    auth_type: None,
    events: &["send_request"],
  },
  Entry {
    id: "email",
    name: "Send Email",
    description: "Send an email to specified recipients",
    category: IntegrationCategory::Communication,
    color: "#EF4444",
    requires_auth: true,
    auth_type: Some(AuthType::ApiKey),
    events: &["send_email", "send_template"],
  },
  Entry {
    id: "sms",
    name: "Send SMS",
    description: "Send an SMS message",
    category: IntegrationCategory::Communication,
    color: "#10B981",
    requires_auth: true,
    auth_type: Some(AuthType::ApiKey),
    events: &["send_sms"],
  },
  Entry {
    id: "delay",
    name: "Delay",
    description: "Wait for a specified amount of time",
    category: IntegrationCategory::Automation,
    color: "#F97316",
    requires_auth: false,
    auth_type: None,
    events: &["wait"],
  },
  Entry {
    id: "branch",
    name: "Conditional Branch",
    description: "Split the workflow based on conditions",
    category: IntegrationCategory::Automation,
    color: "#A855F7",
    requires_auth: false,
    auth_type: None,
    events: &["evaluate_condition"],
  },
  Entry {
    id: "code",
    name: "Run Code",
    description: "Execute custom JavaScript code",
    category: IntegrationCategory::Automation,
    color: "#4B5563",
    requires_auth: false,
    auth_type: None,
    events: &["execute_code"],
  },
];
