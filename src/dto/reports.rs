//! Read-only reporting pages: analytics, audit trail and security alerts.

use serde::{Deserialize, Serialize};

use crate::domain::analytics::{DailyTrendPoint, LoginEvent, LoginStats};
use crate::domain::audit::AuditLog;
use crate::domain::security_alert::SecurityAlert;
use crate::dto::page_data;
use crate::pagination::{PageQuery, PaginationMeta};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyticsQuery {
    #[serde(flatten)]
    pub paging: PageQuery,
    #[serde(default)]
    pub days: Option<String>,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

#[derive(Debug, Default, Serialize)]
pub struct AnalyticsPageData {
    pub stats: Option<LoginStats>,
    pub daily_trend: Vec<DailyTrendPoint>,
    pub events: Vec<LoginEvent>,
    pub pagination: PaginationMeta,
    pub days: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditLogsQuery {
    #[serde(flatten)]
    pub paging: PageQuery,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub resource_type: Option<String>,
}

#[derive(Debug, Default, Serialize)]
pub struct AuditLogsPageData {
    pub audit_logs: Vec<AuditLog>,
    pub pagination: PaginationMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SecurityAlertsQuery {
    #[serde(flatten)]
    pub paging: PageQuery,
    #[serde(default)]
    pub unresolved: Option<String>,
}

#[derive(Debug, Default, Serialize)]
pub struct SecurityAlertsPageData {
    pub alerts: Vec<SecurityAlert>,
    pub pagination: PaginationMeta,
    pub unresolved_only: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

page_data!(AnalyticsPageData, AuditLogsPageData, SecurityAlertsPageData);
