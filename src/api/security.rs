//! Audit trail and security alert endpoints.

use async_trait::async_trait;
use reqwest::Method;

use crate::api::client::{HttpApi, page_pairs};
use crate::api::errors::ApiResult;
use crate::api::{
    AuditLogQuery, AuditLogReader, Paged, SecurityAlertQuery, SecurityAlertReader,
    SecurityAlertWriter,
};
use crate::domain::audit::AuditLog;
use crate::domain::security_alert::SecurityAlert;
use crate::domain::types::{AccessToken, SecurityAlertId};

#[async_trait]
impl AuditLogReader for HttpApi {
    async fn list_audit_logs(
        &self,
        token: &AccessToken,
        query: AuditLogQuery,
    ) -> ApiResult<Paged<AuditLog>> {
        // Audit logs are paged with offset/limit rather than page numbers.
        let mut pairs = vec![
            ("offset", query.pagination.offset().to_string()),
            ("limit", query.pagination.per_page.to_string()),
        ];
        if let Some(action) = query.action {
            pairs.push(("action", action));
        }
        if let Some(resource_type) = query.resource_type {
            pairs.push(("resource_type", resource_type));
        }
        self.get_page(token, "/api/v1/audit-logs", &pairs).await
    }
}

#[async_trait]
impl SecurityAlertReader for HttpApi {
    async fn list_security_alerts(
        &self,
        token: &AccessToken,
        query: SecurityAlertQuery,
    ) -> ApiResult<Paged<SecurityAlert>> {
        let mut pairs = page_pairs(query.pagination);
        if query.unresolved_only {
            pairs.push(("unresolved_only", "true".to_string()));
        }
        self.get_page(token, "/api/v1/security/alerts", &pairs).await
    }
}

#[async_trait]
impl SecurityAlertWriter for HttpApi {
    async fn resolve_security_alert(
        &self,
        token: &AccessToken,
        alert_id: SecurityAlertId,
    ) -> ApiResult<SecurityAlert> {
        let path = format!("/api/v1/security/alerts/{alert_id}/resolve");
        self.call_data(Method::POST, token, &path).await
    }
}
