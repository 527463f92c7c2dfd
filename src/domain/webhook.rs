use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{DisplayName, TenantId, WebhookId, WebhookUrl};

/// Event names the backend can deliver to webhooks.
pub const WEBHOOK_EVENTS: &[&str] = &[
    "login.success",
    "login.failed",
    "user.created",
    "user.updated",
    "user.deleted",
    "password.changed",
    "mfa.enabled",
    "mfa.disabled",
    "session.revoked",
    "security.alert",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Webhook {
    pub id: WebhookId,
    pub tenant_id: TenantId,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub secret: Option<String>,
    #[serde(default)]
    pub events: Vec<String>,
    pub enabled: bool,
    #[serde(default)]
    pub last_triggered_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub failure_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewWebhook {
    pub name: DisplayName,
    pub url: WebhookUrl,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    pub events: Vec<String>,
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct UpdateWebhook {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<DisplayName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<WebhookUrl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Outcome of a test delivery triggered from the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WebhookTestResult {
    pub success: bool,
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub response_body: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub response_time_ms: Option<u64>,
}
