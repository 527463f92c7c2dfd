use crate::api::{AuditLogQuery, AuditLogReader, Paged};
use crate::domain::types::AccessToken;
use crate::dto::PageData;
use crate::dto::reports::{AuditLogsPageData, AuditLogsQuery};
use crate::forms::optional;
use crate::pagination::PaginationMeta;
use crate::services::{ServiceResult, loader_error};

/// Loads one page of the audit trail; the backend pages it by offset.
pub async fn load_audit_logs_page<A>(
    api: &A,
    token: &AccessToken,
    query: AuditLogsQuery,
) -> ServiceResult<AuditLogsPageData>
where
    A: AuditLogReader + ?Sized,
{
    let pagination = query.paging.pagination();
    let action = optional(query.action.as_deref());
    let resource_type = optional(query.resource_type.as_deref());

    let mut list_query = AuditLogQuery::new(pagination);
    if let Some(action) = &action {
        list_query = list_query.action(action.clone());
    }
    if let Some(resource_type) = &resource_type {
        list_query = list_query.resource_type(resource_type.clone());
    }

    match api.list_audit_logs(token, list_query).await {
        Ok(Paged { items, pagination }) => Ok(AuditLogsPageData {
            audit_logs: items,
            pagination,
            action,
            resource_type,
            error: None,
        }),
        Err(err) => {
            loader_error("Failed to list audit logs", err)?;
            Ok(AuditLogsPageData {
                pagination: PaginationMeta::zeroed(pagination),
                action,
                resource_type,
                ..AuditLogsPageData::failed("Failed to load audit logs")
            })
        }
    }
}
