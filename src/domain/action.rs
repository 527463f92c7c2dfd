//! Service action scripts executed by the backend on authentication triggers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{ActionId, DisplayName, ServiceId, TenantId, TriggerName};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Action {
    pub id: ActionId,
    #[serde(default)]
    pub tenant_id: Option<TenantId>,
    pub service_id: ServiceId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub trigger_id: String,
    pub script: String,
    pub enabled: bool,
    #[serde(default)]
    pub strict_mode: bool,
    #[serde(default)]
    pub execution_order: i32,
    #[serde(default)]
    pub timeout_ms: i32,
    #[serde(default)]
    pub last_executed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub execution_count: i64,
    #[serde(default)]
    pub error_count: i64,
    #[serde(default)]
    pub last_error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Default script timeout used when the form leaves it blank.
pub const DEFAULT_ACTION_TIMEOUT_MS: i32 = 3000;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewAction {
    pub name: DisplayName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub trigger_id: TriggerName,
    pub script: String,
    pub enabled: bool,
    pub strict_mode: bool,
    pub execution_order: i32,
    pub timeout_ms: i32,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct UpdateAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<DisplayName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<i32>,
}

/// Trigger descriptor from `/api/v1/actions/triggers`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ActionTrigger {
    Named(String),
    Described {
        id: String,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        description: Option<String>,
    },
}

/// Synthetic execution context sent when test-running a script.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionTestContext {
    pub user: ActionTestUser,
    pub tenant: ActionTestTenant,
    pub request: ActionTestRequest,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionTestUser {
    pub id: String,
    pub email: String,
    pub display_name: Option<String>,
    pub mfa_enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionTestTenant {
    pub id: String,
    pub slug: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionTestRequest {
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionTestResult {
    pub success: bool,
    #[serde(default)]
    pub duration_ms: i32,
    #[serde(default)]
    pub modified_context: Option<serde_json::Value>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub console_logs: Vec<String>,
}
