use async_trait::async_trait;
use reqwest::Method;
use serde_json::json;

use crate::api::client::{HttpApi, page_pairs};
use crate::api::errors::ApiResult;
use crate::api::{Paged, TenantListQuery, TenantReader, TenantWriter};
use crate::domain::tenant::{NewTenant, Tenant, TenantServiceStatus, UpdateTenant};
use crate::domain::types::{AccessToken, ServiceId, TenantId};

#[async_trait]
impl TenantReader for HttpApi {
    async fn list_tenants(
        &self,
        token: &AccessToken,
        query: TenantListQuery,
    ) -> ApiResult<Paged<Tenant>> {
        let mut pairs = page_pairs(query.pagination);
        if let Some(search) = query.search {
            pairs.push(("search", search));
        }
        self.get_page(token, "/api/v1/tenants", &pairs).await
    }

    async fn list_tenant_services(
        &self,
        token: &AccessToken,
        tenant_id: TenantId,
    ) -> ApiResult<Vec<TenantServiceStatus>> {
        self.get_data(token, &format!("/api/v1/tenants/{tenant_id}/services"), &[])
            .await
    }
}

#[async_trait]
impl TenantWriter for HttpApi {
    async fn create_tenant(&self, token: &AccessToken, tenant: &NewTenant) -> ApiResult<Tenant> {
        self.send_data(Method::POST, token, "/api/v1/tenants", tenant)
            .await
    }

    async fn update_tenant(
        &self,
        token: &AccessToken,
        tenant_id: TenantId,
        updates: &UpdateTenant,
    ) -> ApiResult<Tenant> {
        self.send_data(
            Method::PUT,
            token,
            &format!("/api/v1/tenants/{tenant_id}"),
            updates,
        )
        .await
    }

    async fn delete_tenant(&self, token: &AccessToken, tenant_id: TenantId) -> ApiResult<()> {
        self.send_empty(Method::DELETE, token, &format!("/api/v1/tenants/{tenant_id}"))
            .await
    }

    async fn toggle_tenant_service(
        &self,
        token: &AccessToken,
        tenant_id: TenantId,
        service_id: ServiceId,
        enabled: bool,
    ) -> ApiResult<Vec<TenantServiceStatus>> {
        let body = json!({ "service_id": service_id, "enabled": enabled });
        self.send_data(
            Method::POST,
            token,
            &format!("/api/v1/tenants/{tenant_id}/services"),
            &body,
        )
        .await
    }
}
