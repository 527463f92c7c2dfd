use chrono::Utc;
use uuid::Uuid;

use crate::api::{ActionReader, ActionWriter};
use crate::domain::action::{
    ActionTestContext, ActionTestRequest, ActionTestTenant, ActionTestUser, UpdateAction,
};
use crate::domain::types::{AccessToken, EmailAddress, ServiceId};
use crate::dto::PageData;
use crate::dto::services::ActionsPageData;
use crate::forms::actions::{ActionForm, ActionIntent};
use crate::services::{
    ActionReply, ServiceResult, action_error, loader_error, parse_intent, route_id,
};

const TEST_USER_EMAIL: &str = "test@example.com";

/// Loads the service's actions and the available triggers.
pub async fn load_actions_page<A>(
    api: &A,
    token: &AccessToken,
    service_id: &str,
) -> ServiceResult<ActionsPageData>
where
    A: ActionReader + ?Sized,
{
    let service_id: ServiceId = route_id(service_id, "service ID")?;

    let loaded = match api.list_actions(token, service_id).await {
        Ok(actions) => api
            .list_action_triggers(token)
            .await
            .map(|triggers| (actions, triggers)),
        Err(err) => Err(err),
    };

    match loaded {
        Ok((actions, triggers)) => Ok(ActionsPageData {
            service_id: Some(service_id),
            actions,
            triggers,
            error: None,
        }),
        Err(err) => {
            loader_error("Failed to list actions", err)?;
            Ok(ActionsPageData {
                service_id: Some(service_id),
                ..ActionsPageData::failed("Failed to load actions")
            })
        }
    }
}

/// Synthetic context used when test-running a script from the dashboard.
fn test_context(user_email: Option<EmailAddress>) -> ActionTestContext {
    let email = user_email
        .map(|email| email.as_str().to_string())
        .unwrap_or_else(|| TEST_USER_EMAIL.to_string());
    ActionTestContext {
        user: ActionTestUser {
            id: Uuid::new_v4().to_string(),
            email,
            display_name: Some("Test User".to_string()),
            mfa_enabled: false,
        },
        tenant: ActionTestTenant {
            id: Uuid::nil().to_string(),
            slug: "test-tenant".to_string(),
            name: "Test Tenant".to_string(),
        },
        request: ActionTestRequest {
            ip: Some("127.0.0.1".to_string()),
            user_agent: Some("auth9-portal".to_string()),
            timestamp: Utc::now(),
        },
    }
}

pub async fn actions_action<A>(
    api: &A,
    token: &AccessToken,
    service_id: &str,
    body: &[u8],
) -> ServiceResult<ActionReply>
where
    A: ActionWriter + ?Sized,
{
    let service_id: ServiceId = route_id(service_id, "service ID")?;

    match parse_intent::<ActionForm, ActionIntent>(body)? {
        ActionIntent::Create(action) => {
            api.create_action(token, service_id, &action)
                .await
                .map_err(|err| action_error("Failed to create action", err))?;
            Ok(ActionReply::redirect(
                format!("/dashboard/services/{service_id}/actions"),
                "Action created successfully",
            ))
        }
        ActionIntent::Update { id, updates } => {
            api.update_action(token, service_id, id, &updates)
                .await
                .map_err(|err| action_error("Failed to update action", err))?;
            Ok(ActionReply::success("Action updated successfully"))
        }
        ActionIntent::Toggle { id, enabled } => {
            let updates = UpdateAction {
                enabled: Some(enabled),
                ..Default::default()
            };
            api.update_action(token, service_id, id, &updates)
                .await
                .map_err(|err| action_error("Failed to toggle action", err))?;
            let message = if enabled {
                "Action enabled"
            } else {
                "Action disabled"
            };
            Ok(ActionReply::success(message))
        }
        ActionIntent::Delete(id) => {
            api.delete_action(token, service_id, id)
                .await
                .map_err(|err| action_error("Failed to delete action", err))?;
            Ok(ActionReply::success("Action deleted successfully"))
        }
        ActionIntent::Test { id, user_email } => {
            let context = test_context(user_email);
            let result = api
                .test_action(token, service_id, id, &context)
                .await
                .map_err(|err| action_error("Failed to test action", err))?;
            Ok(ActionReply::silent().with("result", &result))
        }
    }
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::api::errors::ApiError;
    use crate::api::mock::MockApi;
    use crate::domain::action::{Action, ActionTestResult, ActionTrigger};
    use crate::domain::types::ActionId;
    use crate::services::fixtures::{SERVICE_ID, service_id, token};

    const ACTION_ID: &str = "0d9f1c2b-6e4a-4b7f-8c3d-2a1b0c9d8e7f";

    #[actix_web::test]
    async fn trigger_failure_fails_the_whole_page() {
        let mut api = MockApi::new();
        api.expect_list_actions()
            .withf(|_, sid| *sid == service_id())
            .returning(|_, _| Ok(Vec::new()));
        api.expect_list_action_triggers()
            .returning(|_| Err(ApiError::Transport("reset".to_string())));

        let page = load_actions_page(&api, &token(), SERVICE_ID).await.unwrap();

        assert_eq!(page.error.as_deref(), Some("Failed to load actions"));
        assert!(page.triggers.is_empty());
        assert_eq!(page.service_id, Some(service_id()));
    }

    #[actix_web::test]
    async fn loads_actions_and_triggers() {
        let mut api = MockApi::new();
        api.expect_list_actions().returning(|_, _| Ok(Vec::new()));
        api.expect_list_action_triggers().returning(|_| {
            Ok(vec![ActionTrigger::Named("post-login".to_string())])
        });

        let page = load_actions_page(&api, &token(), SERVICE_ID).await.unwrap();

        assert!(page.error.is_none());
        assert_eq!(page.triggers.len(), 1);
    }

    #[actix_web::test]
    async fn undecodable_create_response_uses_generic_message() {
        let mut api = MockApi::new();
        api.expect_create_action()
            .times(1)
            .returning(|_, _, _| Err(ApiError::Decode("eof".to_string())));

        let result = actions_action(
            &api,
            &token(),
            SERVICE_ID,
            b"intent=create&name=A&trigger_id=post-login&script=x",
        )
        .await;
        assert_eq!(result.unwrap_err().to_string(), "Operation failed");
    }

    #[actix_web::test]
    async fn create_redirects_to_list() {
        let mut api = MockApi::new();
        api.expect_create_action()
            .withf(|_, sid, action| *sid == service_id() && action.timeout_ms == 3000)
            .times(1)
            .returning(|_, sid, action| {
                let at = Utc::now();
                Ok(Action {
                    id: ActionId::new(ACTION_ID).unwrap(),
                    tenant_id: None,
                    service_id: sid,
                    name: action.name.as_str().to_string(),
                    description: None,
                    trigger_id: action.trigger_id.as_str().to_string(),
                    script: action.script.clone(),
                    enabled: action.enabled,
                    strict_mode: false,
                    execution_order: 0,
                    timeout_ms: action.timeout_ms,
                    last_executed_at: None,
                    execution_count: 0,
                    error_count: 0,
                    last_error: None,
                    created_at: at,
                    updated_at: at,
                })
            });

        let reply = actions_action(
            &api,
            &token(),
            SERVICE_ID,
            b"intent=create&name=A&trigger_id=post-login&script=x",
        )
        .await
        .unwrap();

        assert_eq!(
            reply,
            ActionReply::redirect(
                format!("/dashboard/services/{SERVICE_ID}/actions"),
                "Action created successfully",
            )
        );
    }

    #[actix_web::test]
    async fn toggle_sends_only_enabled_flag() {
        let mut api = MockApi::new();
        api.expect_update_action()
            .withf(|_, _, _, updates| {
                updates.enabled == Some(true) && updates.name.is_none() && updates.script.is_none()
            })
            .times(1)
            .returning(|_, _, _, _| Err(ApiError::NotFound("Action not found".to_string())));

        let body = format!("intent=toggle&id={ACTION_ID}&enabled=true");
        let result = actions_action(&api, &token(), SERVICE_ID, body.as_bytes()).await;

        assert_eq!(
            result.unwrap_err().to_string(),
            "Action not found".to_string()
        );
    }

    #[actix_web::test]
    async fn test_run_returns_result() {
        let mut api = MockApi::new();
        api.expect_test_action()
            .withf(|_, _, _, ctx| ctx.user.email == "dev@example.com")
            .times(1)
            .returning(|_, _, _, _| {
                Ok(ActionTestResult {
                    success: true,
                    duration_ms: 12,
                    modified_context: None,
                    error_message: None,
                    console_logs: vec!["hello".to_string()],
                })
            });

        let body = format!("intent=test&id={ACTION_ID}&user_email=Dev%40example.com");
        let reply = actions_action(&api, &token(), SERVICE_ID, body.as_bytes())
            .await
            .unwrap();

        match reply {
            ActionReply::Success { data, .. } => {
                assert_eq!(data["result"]["success"], true);
                assert_eq!(data["result"]["console_logs"][0], "hello");
            }
            other => panic!("unexpected reply {other:?}"),
        }
    }
}
