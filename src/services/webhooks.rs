use crate::api::{WebhookReader, WebhookWriter};
use crate::domain::types::{AccessToken, TenantId};
use crate::domain::webhook::{UpdateWebhook, WEBHOOK_EVENTS};
use crate::dto::PageData;
use crate::dto::tenants::WebhooksPageData;
use crate::forms::webhooks::{WebhookForm, WebhookIntent};
use crate::services::{
    ActionReply, ServiceResult, action_error, loader_error, parse_intent, route_id,
};

pub async fn load_webhooks_page<A>(
    api: &A,
    token: &AccessToken,
    tenant_id: &str,
) -> ServiceResult<WebhooksPageData>
where
    A: WebhookReader + ?Sized,
{
    let tenant_id: TenantId = route_id(tenant_id, "tenant ID")?;

    match api.list_webhooks(token, tenant_id).await {
        Ok(webhooks) => Ok(WebhooksPageData {
            tenant_id: Some(tenant_id),
            webhooks,
            events: WEBHOOK_EVENTS.to_vec(),
            error: None,
        }),
        Err(err) => {
            loader_error("Failed to list webhooks", err)?;
            Ok(WebhooksPageData {
                tenant_id: Some(tenant_id),
                events: WEBHOOK_EVENTS.to_vec(),
                ..WebhooksPageData::failed("Failed to load webhooks")
            })
        }
    }
}

pub async fn webhooks_action<A>(
    api: &A,
    token: &AccessToken,
    tenant_id: &str,
    body: &[u8],
) -> ServiceResult<ActionReply>
where
    A: WebhookWriter + ?Sized,
{
    let tenant_id: TenantId = route_id(tenant_id, "tenant ID")?;

    match parse_intent::<WebhookForm, WebhookIntent>(body)? {
        WebhookIntent::Create(webhook) => {
            api.create_webhook(token, tenant_id, &webhook)
                .await
                .map_err(|err| action_error("Failed to create webhook", err))?;
            Ok(ActionReply::success("Webhook created successfully"))
        }
        WebhookIntent::Update { id, updates } => {
            api.update_webhook(token, tenant_id, id, &updates)
                .await
                .map_err(|err| action_error("Failed to update webhook", err))?;
            Ok(ActionReply::success("Webhook updated successfully"))
        }
        WebhookIntent::Delete(id) => {
            api.delete_webhook(token, tenant_id, id)
                .await
                .map_err(|err| action_error("Failed to delete webhook", err))?;
            Ok(ActionReply::success("Webhook deleted successfully"))
        }
        WebhookIntent::Toggle { id, enabled } => {
            let updates = UpdateWebhook {
                enabled: Some(enabled),
                ..Default::default()
            };
            api.update_webhook(token, tenant_id, id, &updates)
                .await
                .map_err(|err| action_error("Failed to toggle webhook", err))?;
            let message = if enabled {
                "Webhook enabled"
            } else {
                "Webhook disabled"
            };
            Ok(ActionReply::success(message))
        }
        WebhookIntent::Test(id) => {
            let result = api
                .test_webhook(token, tenant_id, id)
                .await
                .map_err(|err| action_error("Failed to test webhook", err))?;
            let message = if result.success {
                "Test delivery succeeded"
            } else {
                "Test delivery failed"
            };
            Ok(ActionReply::success(message).with("result", &result))
        }
        WebhookIntent::Regenerate(id) => {
            let webhook = api
                .regenerate_webhook_secret(token, tenant_id, id)
                .await
                .map_err(|err| action_error("Failed to regenerate webhook secret", err))?;
            Ok(ActionReply::success("Webhook secret regenerated").with("secret", &webhook.secret))
        }
    }
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::api::errors::ApiError;
    use crate::api::mock::MockApi;
    use crate::domain::webhook::WebhookTestResult;
    use crate::services::ServiceError;
    use crate::services::fixtures::{TENANT_ID, tenant_id, token};

    const WEBHOOK_ID: &str = "7c9e6679-7425-40de-944b-e07fc1f90ae7";

    #[actix_web::test]
    async fn failed_page_still_lists_known_events() {
        let mut api = MockApi::new();
        api.expect_list_webhooks()
            .withf(|_, tid| *tid == tenant_id())
            .returning(|_, _| Err(ApiError::Transport("refused".to_string())));

        let page = load_webhooks_page(&api, &token(), TENANT_ID).await.unwrap();

        assert_eq!(page.error.as_deref(), Some("Failed to load webhooks"));
        assert!(page.webhooks.is_empty());
        assert_eq!(page.events.len(), WEBHOOK_EVENTS.len());
    }

    #[actix_web::test]
    async fn failed_delivery_is_reported_in_message() {
        let mut api = MockApi::new();
        api.expect_test_webhook().times(1).returning(|_, _, _| {
            Ok(WebhookTestResult {
                success: false,
                status_code: Some(500),
                response_body: None,
                error: Some("Internal Server Error".to_string()),
                response_time_ms: Some(80),
            })
        });

        let body = format!("intent=test&id={WEBHOOK_ID}");
        let reply = webhooks_action(&api, &token(), TENANT_ID, body.as_bytes())
            .await
            .unwrap();

        match reply {
            ActionReply::Success { message, data } => {
                assert_eq!(message.as_deref(), Some("Test delivery failed"));
                assert_eq!(data["result"]["status_code"], Value::from(500));
            }
            other => panic!("unexpected reply {other:?}"),
        }
    }

    #[actix_web::test]
    async fn invalid_events_are_rejected_without_calling_backend() {
        let mut api = MockApi::new();
        api.expect_create_webhook().times(0);

        let result = webhooks_action(
            &api,
            &token(),
            TENANT_ID,
            b"intent=create&name=Hook&url=https%3A%2F%2Fh.example.com&events=nope",
        )
        .await;

        assert_eq!(result, Err(ServiceError::Form("Invalid event".to_string())));
    }
}
