use serde::{Deserialize, Serialize};

use crate::domain::abac::{AbacPolicySetSummary, AbacPolicyVersionSummary};
use crate::domain::tenant::{Tenant, TenantServiceStatus};
use crate::domain::types::TenantId;
use crate::domain::webhook::Webhook;
use crate::dto::page_data;
use crate::pagination::{PageQuery, PaginationMeta};

/// Query string of the tenants list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TenantsQuery {
    #[serde(flatten)]
    pub paging: PageQuery,
    #[serde(default)]
    pub search: Option<String>,
}

#[derive(Debug, Default, Serialize)]
pub struct TenantsPageData {
    pub tenants: Vec<Tenant>,
    pub pagination: PaginationMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Services of one tenant together with their enabled flag.
#[derive(Debug, Default, Serialize)]
pub struct TenantServicesPageData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<TenantId>,
    pub services: Vec<TenantServiceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Default, Serialize)]
pub struct WebhooksPageData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<TenantId>,
    pub webhooks: Vec<Webhook>,
    /// Event names a webhook may subscribe to.
    pub events: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Default, Serialize)]
pub struct AbacPageData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<TenantId>,
    pub policy_set: Option<AbacPolicySetSummary>,
    pub versions: Vec<AbacPolicyVersionSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

page_data!(
    TenantsPageData,
    TenantServicesPageData,
    WebhooksPageData,
    AbacPageData,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::PageData;

    #[test]
    fn failed_page_is_empty_and_zeroed() {
        let page = TenantsPageData::failed("Failed to load tenants");
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["error"], "Failed to load tenants");
        assert_eq!(json["tenants"], serde_json::json!([]));
        assert_eq!(json["pagination"]["total"], 0);
        assert!(json.get("search").is_none());
    }

    #[test]
    fn query_accepts_camel_case_page_size() {
        let query: TenantsQuery =
            serde_html_form::from_str("page=2&perPage=10&search=acme").unwrap();
        let pagination = query.paging.pagination();
        assert_eq!((pagination.page, pagination.per_page), (2, 10));
        assert_eq!(query.search.as_deref(), Some("acme"));
    }
}
