use async_trait::async_trait;

use crate::api::TokenExchanger;
use crate::api::client::HttpApi;
use crate::api::errors::ApiResult;
use crate::domain::auth::{CodeExchange, TokenResponse};

impl HttpApi {
    /// Absolute URL of the backend's OAuth authorize endpoint.
    pub fn authorize_url(&self) -> String {
        self.url("/api/v1/auth/authorize")
    }
}

#[async_trait]
impl TokenExchanger for HttpApi {
    async fn exchange_code(&self, request: &CodeExchange) -> ApiResult<TokenResponse> {
        self.post_public("/api/v1/auth/token", request).await
    }
}
