use async_trait::async_trait;
use reqwest::Method;

use crate::api::client::HttpApi;
use crate::api::errors::ApiResult;
use crate::api::{WebhookReader, WebhookWriter};
use crate::domain::types::{AccessToken, TenantId, WebhookId};
use crate::domain::webhook::{NewWebhook, UpdateWebhook, Webhook, WebhookTestResult};

fn webhooks_path(tenant_id: TenantId) -> String {
    format!("/api/v1/tenants/{tenant_id}/webhooks")
}

#[async_trait]
impl WebhookReader for HttpApi {
    async fn list_webhooks(
        &self,
        token: &AccessToken,
        tenant_id: TenantId,
    ) -> ApiResult<Vec<Webhook>> {
        self.get_data(token, &webhooks_path(tenant_id), &[]).await
    }
}

#[async_trait]
impl WebhookWriter for HttpApi {
    async fn create_webhook(
        &self,
        token: &AccessToken,
        tenant_id: TenantId,
        webhook: &NewWebhook,
    ) -> ApiResult<Webhook> {
        self.send_data(Method::POST, token, &webhooks_path(tenant_id), webhook)
            .await
    }

    async fn update_webhook(
        &self,
        token: &AccessToken,
        tenant_id: TenantId,
        webhook_id: WebhookId,
        updates: &UpdateWebhook,
    ) -> ApiResult<Webhook> {
        let path = format!("{}/{webhook_id}", webhooks_path(tenant_id));
        self.send_data(Method::PUT, token, &path, updates).await
    }

    async fn delete_webhook(
        &self,
        token: &AccessToken,
        tenant_id: TenantId,
        webhook_id: WebhookId,
    ) -> ApiResult<()> {
        let path = format!("{}/{webhook_id}", webhooks_path(tenant_id));
        self.send_empty(Method::DELETE, token, &path).await
    }

    async fn test_webhook(
        &self,
        token: &AccessToken,
        tenant_id: TenantId,
        webhook_id: WebhookId,
    ) -> ApiResult<WebhookTestResult> {
        let path = format!("{}/{webhook_id}/test", webhooks_path(tenant_id));
        self.call_data(Method::POST, token, &path).await
    }

    async fn regenerate_webhook_secret(
        &self,
        token: &AccessToken,
        tenant_id: TenantId,
        webhook_id: WebhookId,
    ) -> ApiResult<Webhook> {
        let path = format!("{}/{webhook_id}/regenerate-secret", webhooks_path(tenant_id));
        self.call_data(Method::POST, token, &path).await
    }
}
