use async_trait::async_trait;
use reqwest::Method;
use serde_json::json;

use crate::api::client::HttpApi;
use crate::api::errors::ApiResult;
use crate::api::{AbacReader, AbacWriter};
use crate::domain::abac::{
    AbacDraft, AbacDraftInput, AbacMode, AbacPolicies, AbacSimulationRequest, AbacSimulationResult,
};
use crate::domain::types::{AccessToken, PolicyVersionId, TenantId};

fn policies_path(tenant_id: TenantId) -> String {
    format!("/api/v1/tenants/{tenant_id}/abac/policies")
}

#[async_trait]
impl AbacReader for HttpApi {
    async fn list_abac_policies(
        &self,
        token: &AccessToken,
        tenant_id: TenantId,
    ) -> ApiResult<AbacPolicies> {
        self.get_data(token, &policies_path(tenant_id), &[]).await
    }
}

#[async_trait]
impl AbacWriter for HttpApi {
    async fn create_abac_draft(
        &self,
        token: &AccessToken,
        tenant_id: TenantId,
        input: &AbacDraftInput,
    ) -> ApiResult<AbacDraft> {
        self.send_data(Method::POST, token, &policies_path(tenant_id), input)
            .await
    }

    async fn update_abac_draft(
        &self,
        token: &AccessToken,
        tenant_id: TenantId,
        version_id: PolicyVersionId,
        input: &AbacDraftInput,
    ) -> ApiResult<()> {
        let path = format!("{}/{version_id}", policies_path(tenant_id));
        self.send_json(Method::PUT, token, &path, input).await
    }

    async fn publish_abac_policy(
        &self,
        token: &AccessToken,
        tenant_id: TenantId,
        version_id: PolicyVersionId,
        mode: Option<AbacMode>,
    ) -> ApiResult<()> {
        let path = format!("{}/{version_id}/publish", policies_path(tenant_id));
        self.send_json(Method::POST, token, &path, &json!({ "mode": mode }))
            .await
    }

    async fn rollback_abac_policy(
        &self,
        token: &AccessToken,
        tenant_id: TenantId,
        version_id: PolicyVersionId,
        mode: Option<AbacMode>,
    ) -> ApiResult<()> {
        let path = format!("{}/{version_id}/rollback", policies_path(tenant_id));
        self.send_json(Method::POST, token, &path, &json!({ "mode": mode }))
            .await
    }

    async fn simulate_abac(
        &self,
        token: &AccessToken,
        tenant_id: TenantId,
        request: &AbacSimulationRequest,
    ) -> ApiResult<AbacSimulationResult> {
        let path = format!("/api/v1/tenants/{tenant_id}/abac/simulate");
        self.send_data(Method::POST, token, &path, request).await
    }
}
