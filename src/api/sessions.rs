use async_trait::async_trait;
use reqwest::Method;

use crate::api::client::HttpApi;
use crate::api::errors::ApiResult;
use crate::api::{SessionReader, SessionWriter};
use crate::domain::session::SessionInfo;
use crate::domain::types::{AccessToken, SessionId, UserId};

#[async_trait]
impl SessionReader for HttpApi {
    async fn list_sessions(&self, token: &AccessToken) -> ApiResult<Vec<SessionInfo>> {
        self.get_data(token, "/api/v1/users/me/sessions", &[]).await
    }
}

#[async_trait]
impl SessionWriter for HttpApi {
    async fn revoke_session(&self, token: &AccessToken, session_id: SessionId) -> ApiResult<()> {
        let path = format!("/api/v1/users/me/sessions/{session_id}");
        self.send_empty(Method::DELETE, token, &path).await
    }

    async fn revoke_other_sessions(&self, token: &AccessToken) -> ApiResult<()> {
        self.send_empty(Method::DELETE, token, "/api/v1/users/me/sessions")
            .await
    }

    async fn force_logout_user(&self, token: &AccessToken, user_id: UserId) -> ApiResult<()> {
        let path = format!("/api/v1/admin/users/{user_id}/logout");
        self.send_empty(Method::POST, token, &path).await
    }
}
