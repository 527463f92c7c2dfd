use async_trait::async_trait;
use reqwest::Method;
use serde_json::json;

use crate::api::client::HttpApi;
use crate::api::errors::ApiResult;
use crate::api::{ActionReader, ActionWriter};
use crate::domain::action::{
    Action, ActionTestContext, ActionTestResult, ActionTrigger, NewAction, UpdateAction,
};
use crate::domain::types::{AccessToken, ActionId, ServiceId};

fn actions_path(service_id: ServiceId) -> String {
    format!("/api/v1/services/{service_id}/actions")
}

#[async_trait]
impl ActionReader for HttpApi {
    async fn list_actions(
        &self,
        token: &AccessToken,
        service_id: ServiceId,
    ) -> ApiResult<Vec<Action>> {
        self.get_data(token, &actions_path(service_id), &[]).await
    }

    async fn list_action_triggers(&self, token: &AccessToken) -> ApiResult<Vec<ActionTrigger>> {
        self.get_data(token, "/api/v1/actions/triggers", &[]).await
    }
}

#[async_trait]
impl ActionWriter for HttpApi {
    async fn create_action(
        &self,
        token: &AccessToken,
        service_id: ServiceId,
        action: &NewAction,
    ) -> ApiResult<Action> {
        self.send_data(Method::POST, token, &actions_path(service_id), action)
            .await
    }

    async fn update_action(
        &self,
        token: &AccessToken,
        service_id: ServiceId,
        action_id: ActionId,
        updates: &UpdateAction,
    ) -> ApiResult<Action> {
        let path = format!("{}/{action_id}", actions_path(service_id));
        self.send_data(Method::PUT, token, &path, updates).await
    }

    async fn delete_action(
        &self,
        token: &AccessToken,
        service_id: ServiceId,
        action_id: ActionId,
    ) -> ApiResult<()> {
        let path = format!("{}/{action_id}", actions_path(service_id));
        self.send_empty(Method::DELETE, token, &path).await
    }

    async fn test_action(
        &self,
        token: &AccessToken,
        service_id: ServiceId,
        action_id: ActionId,
        context: &ActionTestContext,
    ) -> ApiResult<ActionTestResult> {
        let path = format!("{}/{action_id}/test", actions_path(service_id));
        self.send_data(Method::POST, token, &path, &json!({ "context": context }))
            .await
    }
}
