use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregated login statistics for a period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LoginStats {
    #[serde(default)]
    pub total_logins: i64,
    #[serde(default)]
    pub successful_logins: i64,
    #[serde(default)]
    pub failed_logins: i64,
    #[serde(default)]
    pub unique_users: i64,
    #[serde(default)]
    pub by_event_type: BTreeMap<String, i64>,
    #[serde(default)]
    pub by_device_type: BTreeMap<String, i64>,
    #[serde(default)]
    pub period_start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub period_end: Option<DateTime<Utc>>,
}

/// One day of the login trend chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DailyTrendPoint {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub successful: i64,
    #[serde(default)]
    pub failed: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginEvent {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub tenant_id: Option<String>,
    pub event_type: String,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub device_type: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub failure_reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Reporting window sent to the analytics endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsRange {
    /// Trailing number of days ending now.
    Days(u32),
    /// Explicit inclusive range.
    Between {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

impl AnalyticsRange {
    /// Query pairs understood by `/api/v1/analytics/*`.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        match self {
            AnalyticsRange::Days(days) => vec![("days", days.to_string())],
            AnalyticsRange::Between { start, end } => vec![
                ("start", start.to_rfc3339()),
                ("end", end.to_rfc3339()),
            ],
        }
    }
}
